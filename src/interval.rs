/*!
    non blocking repeating delay

    unlike registry tasks, whose next execution is counted from the last one, an [Interval] keeps its phase: each expiry is scheduled exactly one interval after the previous expiry, so lateness does not accumulate.
*/

use crate::Ticks;


/**
    repeating deadline to poll from a loop

    ```
    use jtask::Interval;

    let mut refresh = Interval::new(0u32, 100);
    assert!(!refresh.is_expired(99));
    assert!(refresh.is_expired(130));
    // next deadline is still aligned on 200
    assert!(!refresh.is_expired(199));
    assert!(refresh.is_expired(200));
    ```
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval<T> {
    expires: T,
    interval: T,
}

impl<T: Ticks> Interval<T> {
    /// first expiry one interval after `now`
    pub fn new(now: T, interval: T) -> Self {
        Self {
            expires: now.wrapping_add(interval),
            interval,
        }
    }
    /// restart counting from `now` with a new interval
    pub fn restart(&mut self, now: T, interval: T) {
        *self = Self::new(now, interval);
    }
    /**
        check whether the deadline is reached

        on expiry the next deadline is scheduled one interval later, so the next calls return false until it is reached as well
    */
    pub fn is_expired(&mut self, now: T) -> bool {
        let expired = now.reached(self.expires);
        if expired {
            self.repeat();
        }
        expired
    }
    /// move the deadline one interval forward
    pub fn repeat(&mut self) {
        self.expires = self.expires.wrapping_add(self.interval);
    }
    /// ticks left before the deadline, zero if already reached
    pub fn remaining(&self, now: T) -> T {
        if now.reached(self.expires)
            {T::ZERO}
        else
            {self.expires.wrapping_sub(now)}
    }
    pub fn interval(&self) -> T {self.interval}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_once_per_interval() {
        let mut delay = Interval::new(1_000u32, 250);
        assert!(!delay.is_expired(1_000));
        assert!(!delay.is_expired(1_249));
        assert!(delay.is_expired(1_250));
        assert!(!delay.is_expired(1_250));
        assert!(!delay.is_expired(1_499));
        assert!(delay.is_expired(1_500));
    }

    #[test]
    fn keeps_phase_when_late() {
        let mut delay = Interval::new(0u32, 100);
        // polled very late, the missed deadlines are reported one per call
        assert!(delay.is_expired(320));
        assert!(delay.is_expired(320));
        assert!(delay.is_expired(320));
        assert!(!delay.is_expired(320));
        assert_eq!(delay.remaining(320), 80);
    }

    #[test]
    fn restart_and_remaining() {
        let mut delay = Interval::new(0u32, 100);
        assert_eq!(delay.remaining(40), 60);
        delay.restart(40, 500);
        assert_eq!(delay.interval(), 500);
        assert_eq!(delay.remaining(40), 500);
        assert!(!delay.is_expired(539));
        assert!(delay.is_expired(540));
    }

    #[test]
    fn across_wraparound() {
        let mut delay = Interval::new(250u8, 10);
        assert!(!delay.is_expired(255));
        assert!(!delay.is_expired(3));
        assert_eq!(delay.remaining(3), 1);
        assert!(delay.is_expired(4));
        assert!(!delay.is_expired(10));
        assert!(delay.is_expired(14));
    }
}
