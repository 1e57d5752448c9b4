use std::{
    cell::Cell,
    time::Duration,
    };
use futures_concurrency::future::Race;

use jtask::{Registry, superloop::{self, TokioClock}};
use jtask_suite::init_logging;


#[tokio::test(start_paused = true)]
async fn services_on_tick() {
    init_logging();
    let fast = Cell::new(0);
    let slow = Cell::new(0);
    let mut count_fast = || fast.set(fast.get() + 1);
    let mut count_slow = || slow.set(slow.get() + 1);
    let mut registry: Registry<_, &mut dyn FnMut(), 2> = Registry::new(TokioClock::new());
    registry.register(&mut count_fast, 2_000).unwrap();
    registry.register(&mut count_slow, 5_000).unwrap();

    (
        superloop::run(&mut registry, Duration::from_millis(1)),
        tokio::time::sleep(Duration::from_micros(10_500)),
    ).race().await;

    assert!((4 ..= 5).contains(&fast.get()), "fast task ran {} times", fast.get());
    assert!((1 ..= 2).contains(&slow.get()), "slow task ran {} times", slow.get());
}

#[tokio::test(start_paused = true)]
async fn clock_follows_paused_time() {
    use jtask::Clock;
    let clock = TokioClock::new();
    assert_eq!(clock.now(), 0);
    tokio::time::advance(Duration::from_millis(3)).await;
    assert_eq!(clock.now(), 3_000);
}
