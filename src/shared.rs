/*!
    registry shared between threads

    a [Registry] is meant to be owned by the superloop. When a host environment needs to register or reschedule tasks from other threads, [SharedRegistry] guards every operation with one exclusive lock, since they all read-modify-write the task table.
*/

use crate::{
    clock::Clock,
    mutex::BusyMutex,
    registry::{Registry, Error, DEFAULT_CAPACITY},
    task::{Action, TaskId},
    };


/**
    [Registry] behind a spinning lock

    it is `Sync` as soon as the clock and the callbacks are `Send`, for instance with `&mut (dyn FnMut() + Send)` callbacks. Callbacks run while the lock is held, so they must not call back into the same registry.
*/
pub struct SharedRegistry<C: Clock, A, const N: usize = { DEFAULT_CAPACITY }> {
    registry: BusyMutex<Registry<C, A, N>>,
}

impl<C: Clock, A: Action, const N: usize> SharedRegistry<C, A, N> {
    pub fn new(clock: C) -> Self {
        Self::from(Registry::new(clock))
    }
    /// see [Registry::register]
    pub fn register(&self, action: A, period: C::Ticks) -> Result<TaskId, Error> {
        self.registry.blocking_lock().register(action, period)
    }
    /// see [Registry::reschedule]
    pub fn reschedule(&self, id: TaskId, period: C::Ticks) -> Result<TaskId, Error> {
        self.registry.blocking_lock().reschedule(id, period)
    }
    /// see [Registry::service]
    pub fn service(&self) {
        self.registry.blocking_lock().service()
    }
    /// service unless another thread is already holding the registry, returns whether it serviced
    pub fn try_service(&self) -> bool {
        match self.registry.try_lock() {
            Some(mut registry) => {registry.service(); true},
            None => false,
        }
    }
    /// run several operations under the same lock
    pub fn with<R>(&self, operation: impl FnOnce(&mut Registry<C, A, N>) -> R) -> R {
        operation(&mut self.registry.blocking_lock())
    }
    pub fn into_inner(self) -> Registry<C, A, N> {
        self.registry.into_inner()
    }
}
impl<C: Clock, A: Action, const N: usize> From<Registry<C, A, N>> for SharedRegistry<C, A, N> {
    fn from(registry: Registry<C, A, N>) -> Self {
        Self {registry: BusyMutex::new(registry)}
    }
}


#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU32, Ordering::*};
    use std::thread;
    use crate::clock::FnClock;
    use super::*;

    #[test]
    fn threads_register_and_service() {
        let now = AtomicU32::new(0);
        let clock = FnClock(|| now.load(Relaxed));
        let fired = AtomicU32::new(0);
        let mut a = || {fired.fetch_add(1, Relaxed);};
        let mut b = || {fired.fetch_add(100, Relaxed);};
        let registry: SharedRegistry<_, &mut (dyn FnMut() + Send), 4> = SharedRegistry::new(&clock);
        let shared = &registry;

        let a: &mut (dyn FnMut() + Send) = &mut a;
        let b: &mut (dyn FnMut() + Send) = &mut b;
        thread::scope(|scope| {
            scope.spawn(move || shared.register(a, 10).unwrap());
            scope.spawn(move || shared.register(b, 10).unwrap());
        });
        assert_eq!(shared.with(|registry| registry.len()), 2);

        now.store(10, Relaxed);
        thread::scope(|scope| {
            for _ in 0 .. 4 {
                scope.spawn(|| shared.service());
            }
        });
        // due once for all servicing threads
        assert_eq!(fired.load(Relaxed), 101);

        // skipped while another operation holds the lock
        now.store(20, Relaxed);
        shared.with(|_| assert!(!shared.try_service()));
        assert_eq!(fired.load(Relaxed), 101);
        assert!(shared.try_service());
        assert_eq!(fired.load(Relaxed), 202);

        let id = TaskId::from(0);
        assert_eq!(shared.reschedule(id, 1), Ok(id));
        let registry = registry.into_inner();
        assert_eq!(registry.period(id), Ok(1));
    }
}
