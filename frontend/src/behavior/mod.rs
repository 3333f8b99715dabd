//! View-state behavior for the landing page.
//!
//! Nothing in here touches `web_sys` directly. The page is reached through the
//! [`Document`], [`Element`] and [`Scheduler`] traits so the same code runs
//! against the browser (see `crate::dom`) and against in-memory fakes in tests.

pub mod class_sync;
pub mod contact;
pub mod counter;
pub mod debounce;
pub mod filter;
pub mod navigation;
pub mod orchestrator;
pub mod portfolio;
pub mod reveal;
pub mod viewport;

#[cfg(test)]
pub(crate) mod fake;

use std::any::Any;
use std::rc::Rc;

pub type ElementRef = Rc<dyn Element>;
pub type Task = Box<dyn FnOnce()>;

/// A single node of the page markup.
pub trait Element {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// An empty `value` clears the inline property.
    fn set_style(&self, property: &str, value: &str);
    fn style(&self, property: &str) -> String;
    fn offset_top(&self) -> f64;
    fn click(&self);
    fn as_any(&self) -> &dyn Any;
}

pub trait Document {
    fn query(&self, selector: &str) -> Option<ElementRef>;
    fn query_all(&self, selector: &str) -> Vec<ElementRef>;
    fn by_id(&self, id: &str) -> Option<ElementRef>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

/// Deferred work on the single UI thread.
pub trait Scheduler {
    /// Runs `task` on the next animation frame.
    fn next_frame(&self, task: Task);
    /// Runs `task` after `delay_ms` unless the returned guard is dropped first.
    fn after(&self, delay_ms: u32, task: Task) -> TimerGuard;
    /// Fire-and-forget variant of [`Scheduler::after`].
    fn defer(&self, delay_ms: u32, task: Task);
}

/// Keeps a pending timer alive. Dropping it cancels the timer.
#[must_use = "dropping the guard cancels the timer"]
pub struct TimerGuard {
    _inner: Box<dyn Any>,
}

impl TimerGuard {
    pub fn new<T: 'static>(inner: T) -> Self {
        Self {
            _inner: Box::new(inner),
        }
    }
}

/// User-visible blocking notice (an alert in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}
