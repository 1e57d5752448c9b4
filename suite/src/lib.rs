//! shared helpers for the integration tests of `jtask`

use std::{
    cell::RefCell,
    rc::Rc,
    };

/// install the logger once, printing through the test harness
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// record of task executions, cloned into each callback
#[derive(Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<&'static str>>>,
}
impl Journal {
    pub fn new() -> Self {
        Self::default()
    }
    /// callback appending `name` to the journal each time it runs
    pub fn recorder(&self, name: &'static str) -> impl FnMut() + 'static {
        let entries = self.entries.clone();
        move || entries.borrow_mut().push(name)
    }
    /// executions since the last call
    pub fn take(&self) -> Vec<&'static str> {
        self.entries.borrow_mut().drain(..).collect()
    }
    /// number of executions of `name` since the last take
    pub fn count(&self, name: &str) -> usize {
        self.entries.borrow().iter().filter(|&&entry| entry == name).count()
    }
}
