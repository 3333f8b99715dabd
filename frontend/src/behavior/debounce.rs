use std::cell::RefCell;
use std::rc::Rc;

use super::{Scheduler, TimerGuard};

/// Coalesces bursts of `notify` calls into one `action` run with the latest
/// value, `window_ms` after the burst goes quiet.
pub struct Debouncer<T> {
    scheduler: Rc<dyn Scheduler>,
    window_ms: u32,
    action: Rc<dyn Fn(T)>,
    pending: RefCell<Option<TimerGuard>>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new(scheduler: Rc<dyn Scheduler>, window_ms: u32, action: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            window_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn notify(&self, value: T) {
        let action = Rc::clone(&self.action);
        let guard = self
            .scheduler
            .after(self.window_ms, Box::new(move || action(value)));
        // the superseded guard drops here and cancels its evaluation
        let _superseded = self.pending.replace(Some(guard));
    }
}
