/*!
    superloop driver for tokio based hosts

    simulators and host side tools can run firmware logic written against a [Registry] without a busy loop: [run] services the registry on a fixed tick, yielding to the runtime in between.
*/

use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use log::*;

use crate::{
    clock::Clock,
    registry::Registry,
    task::Action,
    };


/// microseconds elapsed since the clock creation, following tokio's time (so also paused time in tests)
#[derive(Copy, Clone, Debug)]
pub struct TokioClock {
    start: Instant,
}
impl TokioClock {
    pub fn new() -> Self {
        Self {start: Instant::now()}
    }
}
impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}
impl Clock for TokioClock {
    type Ticks = u64;
    fn now(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/**
    service the registry every `tick`, forever

    the tick bounds the timing resolution of the tasks: a task is executed on the first tick at or after its due time. Late ticks are not replayed.
*/
pub async fn run<C: Clock, A: Action, const N: usize>(registry: &mut Registry<C, A, N>, tick: Duration) {
    debug!("superloop started with {} tasks, tick {:?}", registry.len(), tick);
    let mut ticks = time::interval(tick);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticks.tick().await;
        registry.service();
    }
}
