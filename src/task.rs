use core::fmt;


/**
    zero argument action run by the registry when its task is due

    any `FnMut()` is an action: plain `fn()` pointers, closures, or `&mut dyn FnMut()` to mix closures of different types in one registry. Implement it on your own types to schedule stateful objects directly.
*/
pub trait Action {
    fn invoke(&mut self);
}
impl<F: FnMut() + ?Sized> Action for F {
    fn invoke(&mut self) {
        (*self)()
    }
}


/// handle of a registered task, its index in the registry table
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(usize);

impl TaskId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }
    /// position of the task in the registry, which is also its registration rank
    pub const fn index(self) -> usize {
        self.0
    }
}
impl From<TaskId> for usize {
    fn from(id: TaskId) -> usize {
        id.0
    }
}
/// handles only mean something to the registry they come from, this allows addressing tasks by rank anyway
impl From<usize> for TaskId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
impl fmt::Display for TaskId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "T{:03}", self.0)
    }
}


/// descriptor of a registered periodic task
pub(crate) struct Task<T, A> {
    /// time of the last execution, or of the registration if never run
    pub last_exec: T,
    /// minimum spacing between executions
    pub period: T,
    pub action: A,
}
