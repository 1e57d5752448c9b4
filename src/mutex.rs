use core::{
    cell::UnsafeCell,
    sync::atomic::AtomicBool,
    sync::atomic::Ordering::*,
    ops::{Deref, DerefMut},
    };

/// minimal spinning mutex, usable without any OS
pub struct BusyMutex<T> {
    value: UnsafeCell<T>,
    locked: AtomicBool,
}
unsafe impl<T: Send> Send for BusyMutex<T> {}
unsafe impl<T: Send> Sync for BusyMutex<T> {}

impl<T> BusyMutex<T> {
    pub const fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
            locked: AtomicBool::new(false),
        }
    }
    pub fn try_lock(&self) -> Option<BusyMutexGuard<'_, T>> {
        BusyMutexGuard::try_new(self)
    }
    /// busy wait until lock is acquired
    pub fn blocking_lock(&self) -> BusyMutexGuard<'_, T> {
        loop {
            if let Some(guard) = BusyMutexGuard::try_new(self)
                {break guard}
            // nothing else to do, leave resources to the kernel if any
            #[cfg(feature = "std")]
            std::thread::yield_now();
            #[cfg(not(feature = "std"))]
            core::hint::spin_loop();
        }
    }
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}
impl<T> From<T> for BusyMutex<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

pub struct BusyMutexGuard<'m, T> {
    mutex: &'m BusyMutex<T>,
}
impl<'m, T> BusyMutexGuard<'m, T> {
    fn try_new(mutex: &'m BusyMutex<T>) -> Option<Self> {
        // the previous value tells whether someone else already holds it
        if mutex.locked.swap(true, Acquire)
            {None}
        else
            {Some(Self {mutex})}
    }
}
impl<T> Deref for BusyMutexGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        unsafe {& *self.mutex.value.get()}
    }
}
impl<T> DerefMut for BusyMutexGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe {&mut *self.mutex.value.get()}
    }
}
impl<T> Drop for BusyMutexGuard<'_, T> {
    fn drop(&mut self) {
        self.mutex.locked.store(false, Release);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive() {
        let mutex = BusyMutex::new(1);
        {
            let mut guard = mutex.try_lock().unwrap();
            assert!(mutex.try_lock().is_none());
            *guard += 1;
        }
        assert_eq!(*mutex.blocking_lock(), 2);
        assert_eq!(mutex.into_inner(), 2);
    }
}
