/*!
    time sources

    the registry never owns time, it only queries a [Clock]. Firmwares typically wrap their hardware timer read in a [FnClock], tests use a [MockClock].
*/

use core::{
    cell::Cell,
    fmt,
    };
use crate::Ticks;


/// monotonic counter, allowed to wrap around
pub trait Clock {
    /// word returned by the counter, its width decides the wraparound period
    type Ticks: Ticks;

    /// current counter value
    fn now(&self) -> Self::Ticks;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Ticks = C::Ticks;
    fn now(&self) -> Self::Ticks {
        (**self).now()
    }
}


/**
    clock reading whatever function it is given

    ```
    use jtask::{Clock, FnClock};

    let clock = FnClock(|| 42u32);
    assert_eq!(clock.now(), 42);
    ```
*/
#[derive(Copy, Clone, Debug)]
pub struct FnClock<F>(pub F);

impl<T: Ticks, F: Fn() -> T> Clock for FnClock<F> {
    type Ticks = T;
    fn now(&self) -> T {
        (self.0)()
    }
}


/**
    manually advanced clock, for deterministic tests

    time only moves when told to, and wraps around like a hardware counter of the same width
*/
#[derive(Default)]
pub struct MockClock<T> {
    current: Cell<T>,
}
impl<T: Ticks> MockClock<T> {
    /// start counting at zero
    pub fn new() -> Self {
        Self::with_initial(T::ZERO)
    }
    /// start counting at the given value
    pub fn with_initial(initial: T) -> Self {
        Self {current: Cell::new(initial)}
    }
    /// jump to an absolute value
    pub fn set(&self, now: T) {
        self.current.set(now);
    }
    /// move forward, wrapping on overflow
    pub fn advance(&self, ticks: T) {
        self.current.set(self.current.get().wrapping_add(ticks));
    }
}
// Cell only clones and prints Copy values, which every clock word is
impl<T: Ticks> Clone for MockClock<T> {
    fn clone(&self) -> Self {
        Self::with_initial(self.current.get())
    }
}
impl<T: Ticks> fmt::Debug for MockClock<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("MockClock").field("current", &self.current.get()).finish()
    }
}
impl<T: Ticks> Clock for MockClock<T> {
    type Ticks = T;
    fn now(&self) -> T {
        self.current.get()
    }
}


/// microseconds elapsed since the clock creation, using the OS monotonic clock
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug)]
pub struct StdClock {
    start: std::time::Instant,
}
#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {start: std::time::Instant::now()}
    }
}
#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}
#[cfg(feature = "std")]
impl Clock for StdClock {
    type Ticks = u64;
    fn now(&self) -> u64 {
        // truncation only happens after half a million years of uptime
        self.start.elapsed().as_micros() as u64
    }
}
