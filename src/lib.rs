/*!
    cooperative periodic task registry for superloop firmwares

    A [Registry] holds a fixed size table of periodic callbacks. The firmware main loop calls [Registry::service] as often as it can, and every task whose period elapsed since its last execution is run, in registration order.

    ```
    use core::cell::Cell;
    use jtask::{Registry, MockClock};

    let clock = MockClock::<u32>::new();
    let blinks = Cell::new(0);
    let mut blink = || blinks.set(blinks.get() + 1);

    let mut registry: Registry<_, &mut dyn FnMut(), 2> = Registry::new(&clock);
    let led = registry.register(&mut blink, 500).unwrap();
    assert_eq!(led.index(), 0);

    clock.set(499);
    registry.service();
    assert_eq!(blinks.get(), 0);
    clock.set(500);
    registry.service();
    assert_eq!(blinks.get(), 1);
    ```

    helpers commonly found around such a loop are provided as well: a repeating [Interval] and a [Debounce]d digital input.
*/

#![no_std]
#[cfg(any(test, feature = "std"))]
extern crate std;

mod mutex;
mod task;

pub mod ticks;
pub mod clock;
pub mod registry;
pub mod shared;
pub mod interval;
pub mod debounce;
#[cfg(feature = "tokio")]
pub mod superloop;

pub use ticks::Ticks;
pub use clock::{Clock, MockClock, FnClock};
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use task::{Action, TaskId};
pub use registry::{Registry, Error, DEFAULT_CAPACITY};
pub use shared::SharedRegistry;
pub use interval::Interval;
pub use debounce::Debounce;
