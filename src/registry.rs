/*!
    the cooperative periodic task registry

    A [Registry] multiplexes several logical loops onto the single firmware superloop: each task is a callback with a period, and [Registry::service] runs those whose period has elapsed. Nothing preempts anything, a task runs to completion before the next one is considered, so callbacks are expected to be short and never block.

    ```text
    initialize -> register/reschedule ... -> service, service, service ...
    ```
*/

use log::*;
use thiserror::Error;

use crate::{
    Ticks,
    clock::Clock,
    task::{Action, Task, TaskId},
    };


/// number of task slots when the capacity is not specified
pub const DEFAULT_CAPACITY: usize = 2;

/// error raised synchronously by the registry, which always leaves its state untouched
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no free task slot, all {capacity} are registered")]
    CapacityExceeded {capacity: usize},
    #[error("task {0} has never been registered")]
    InvalidHandle(TaskId),
}


/**
    fixed capacity table of periodic tasks

    - `C` is the time source, its word width decides the wraparound period
    - `A` is the type of callbacks, use `&mut dyn FnMut()` to register various closures or `fn()` for plain functions
    - `N` is the maximum number of tasks, there is no deregistration so it bounds the number of registrations as well

    handles are dense: the k-th registered task always gets handle `k`
*/
pub struct Registry<C: Clock, A, const N: usize = { DEFAULT_CAPACITY }> {
    clock: C,
    tasks: heapless::Vec<Task<C::Ticks, A>, N>,
}

impl<C: Clock, A: Action, const N: usize> Registry<C, A, N> {
    /// empty registry reading time from the given clock, ready for registrations
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tasks: heapless::Vec::new(),
        }
    }
    /// forget all registered tasks, handles previously returned become invalid
    pub fn initialize(&mut self) {
        if !self.tasks.is_empty() {
            debug!("dropping {} registered tasks", self.tasks.len());
        }
        self.tasks.clear();
    }

    /**
        register a callback to run every `period` ticks

        the first execution happens one period after this call. A zero period runs the task on every [service](Self::service).

        fails with [Error::CapacityExceeded] when all `N` slots are taken, in which case the callback is dropped and will never run
    */
    pub fn register(&mut self, action: A, period: C::Ticks) -> Result<TaskId, Error> {
        let id = TaskId::new(self.tasks.len());
        let task = Task {
            last_exec: self.clock.now(),
            period,
            action,
        };
        if self.tasks.push(task).is_err() {
            warn!("cannot register task, all {} slots are taken", N);
            return Err(Error::CapacityExceeded {capacity: N});
        }
        debug!("registered task {} with period {}", id, period);
        Ok(id)
    }

    /**
        change the period of a registered task

        the task is considered as just executed: its next execution happens one new period after this call, never on the same tick
    */
    pub fn reschedule(&mut self, id: TaskId, period: C::Ticks) -> Result<TaskId, Error> {
        let now = self.clock.now();
        let Some(task) = self.tasks.get_mut(id.index())
            else {
                warn!("cannot reschedule task {}, only {} registered", id, self.tasks.len());
                return Err(Error::InvalidHandle(id));
            };
        task.period = period;
        task.last_exec = now;
        debug!("rescheduled task {} with period {}", id, period);
        Ok(id)
    }

    /**
        run all due tasks, in registration order

        call it from the main loop as often as possible. The clock is read once, so every task of this round is checked against the same instant, and a task is marked executed before its callback runs so a slow callback cannot make it fire again immediately.
    */
    pub fn service(&mut self) {
        let now = self.clock.now();
        for (index, task) in self.tasks.iter_mut().enumerate() {
            if now.elapsed_since(task.last_exec) >= task.period {
                task.last_exec = now;
                trace!("running task {} at {}", TaskId::new(index), now);
                task.action.invoke();
            }
        }
    }

    /// number of registered tasks
    pub fn len(&self) -> usize {self.tasks.len()}
    /// true when no task is registered
    pub fn is_empty(&self) -> bool {self.tasks.is_empty()}
    /// true when the next registration would be rejected
    pub fn is_full(&self) -> bool {self.tasks.is_full()}
    /// maximum number of tasks
    pub const fn capacity(&self) -> usize {N}

    /// current period of a task
    pub fn period(&self, id: TaskId) -> Result<C::Ticks, Error> {
        self.task(id).map(|task| task.period)
    }
    /// time of the last execution of a task, or of its registration if never run
    pub fn last_exec(&self, id: TaskId) -> Result<C::Ticks, Error> {
        self.task(id).map(|task| task.last_exec)
    }
    /// time source of this registry
    pub fn clock(&self) -> &C {&self.clock}

    fn task(&self, id: TaskId) -> Result<&Task<C::Ticks, A>, Error> {
        self.tasks.get(id.index()).ok_or(Error::InvalidHandle(id))
    }
}
