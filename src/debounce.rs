/*!
    debounced digital input

    mechanical contacts bounce for a few milliseconds when switching. [Debounce] polls an [InputPin] and only reports a new level once the raw reading stayed unchanged for the configured delay. It does not use interrupts, so poll it from a registry task or the main loop.
*/

use embedded_hal::digital::InputPin;
use log::*;

use crate::Ticks;


/// input pin with a debounced level
pub struct Debounce<P, T> {
    pin: P,
    /// time the raw reading must stay unchanged before being accepted
    delay: T,
    /// time of the last raw reading change
    last_change: T,
    /// last raw reading
    reading: bool,
    /// accepted level
    stable: bool,
}

impl<P: InputPin, T: Ticks> Debounce<P, T> {
    /// read the pin once to start from its current level
    pub fn new(mut pin: P, delay: T, now: T) -> Result<Self, P::Error> {
        let reading = pin.is_high()?;
        Ok(Self {
            pin,
            delay,
            last_change: now,
            reading,
            stable: reading,
        })
    }

    /**
        sample the pin

        returns the new level when the debounced level changes, `None` otherwise
    */
    pub fn update(&mut self, now: T) -> Result<Option<bool>, P::Error> {
        let reading = self.pin.is_high()?;
        if reading != self.reading {
            self.reading = reading;
            self.last_change = now;
        }
        if now.elapsed_since(self.last_change) >= self.delay && self.stable != self.reading {
            self.stable = self.reading;
            debug!("debounced input is now {}", if self.stable {"high"} else {"low"});
            return Ok(Some(self.stable));
        }
        Ok(None)
    }

    /// debounced level
    pub fn is_high(&self) -> bool {self.stable}
    pub fn is_low(&self) -> bool {!self.stable}

    pub fn set_delay(&mut self, delay: T) {
        self.delay = delay;
    }
    pub fn into_inner(self) -> P {self.pin}
}
