//! In-memory stand-ins for the browser used by the behavior tests.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use super::contact::{ContactSubmission, FormFields, Submitter};
use super::viewport::{ObserveOptions, TargetId, ViewportObserver};
use super::{Document, Element, ElementRef, Notifier, Scheduler, Task, TimerGuard};
use crate::error::SiteError;

#[derive(Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    styles: RefCell<BTreeMap<String, String>>,
    text_history: RefCell<Vec<String>>,
    offset_top: Cell<f64>,
    clicks: Cell<u32>,
}

impl FakeElement {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_attr(name: &str, value: &str) -> Rc<Self> {
        let element = Self::new();
        element.set_attribute(name, value);
        element
    }

    pub fn at_offset(top: f64) -> Rc<Self> {
        let element = Self::new();
        element.offset_top.set(top);
        element
    }

    pub fn texts(&self) -> Vec<String> {
        self.text_history.borrow().clone()
    }

    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.text_history.borrow().last().cloned().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.text_history.borrow_mut().push(text.to_string());
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut styles = self.styles.borrow_mut();
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn style(&self, property: &str) -> String {
        self.styles.borrow().get(property).cloned().unwrap_or_default()
    }

    fn offset_top(&self) -> f64 {
        self.offset_top.get()
    }

    fn click(&self) {
        self.clicks.set(self.clicks.get() + 1);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Default)]
pub struct FakeDocument {
    selectors: RefCell<BTreeMap<String, Vec<ElementRef>>>,
    ids: RefCell<BTreeMap<String, ElementRef>>,
    scroll_y: Cell<f64>,
    scrolled_to: RefCell<Vec<f64>>,
}

impl FakeDocument {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn insert(&self, selector: &str, element: &Rc<FakeElement>) {
        let element: ElementRef = element.clone();
        self.selectors
            .borrow_mut()
            .entry(selector.to_string())
            .or_default()
            .push(element);
    }

    pub fn insert_id(&self, id: &str, element: &Rc<FakeElement>) {
        let element: ElementRef = element.clone();
        self.ids.borrow_mut().insert(id.to_string(), element);
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        self.scrolled_to.borrow().clone()
    }
}

impl Document for FakeDocument {
    fn query(&self, selector: &str) -> Option<ElementRef> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<ElementRef> {
        self.selectors
            .borrow()
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn by_id(&self, id: &str) -> Option<ElementRef> {
        self.ids.borrow().get(id).cloned()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }
}

struct PendingTimer {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Option<Task>,
}

struct CancelOnDrop(Rc<Cell<bool>>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// Virtual-time scheduler: frames and timers only run when the test says so.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    frames: RefCell<VecDeque<Task>>,
    timers: RefCell<Vec<PendingTimer>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Runs queued frames, including frames queued by those frames, up to `limit`.
    pub fn run_frames(&self, limit: usize) -> usize {
        let mut ran = 0;
        while ran < limit {
            let next = self.frames.borrow_mut().pop_front();
            match next {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }

    pub fn queued_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn live_timers(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get() && t.task.is_some())
            .count()
    }

    pub fn advance(&self, ms: u64) {
        let deadline = self.now.get() + ms;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                timers.retain(|t| !t.cancelled.get() && t.task.is_some());
                let index = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= deadline)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let timer = &mut timers[i];
                    (timer.due, timer.task.take())
                })
            };
            match next {
                Some((due, Some(task))) => {
                    self.now.set(due);
                    task();
                }
                _ => break,
            }
        }
        self.now.set(deadline);
    }

    fn push_timer(&self, delay_ms: u32, task: Task) -> Rc<Cell<bool>> {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.timers.borrow_mut().push(PendingTimer {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            cancelled: Rc::clone(&cancelled),
            task: Some(task),
        });
        cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn next_frame(&self, task: Task) {
        self.frames.borrow_mut().push_back(task);
    }

    fn after(&self, delay_ms: u32, task: Task) -> TimerGuard {
        TimerGuard::new(CancelOnDrop(self.push_timer(delay_ms, task)))
    }

    fn defer(&self, delay_ms: u32, task: Task) {
        self.push_timer(delay_ms, task);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingSubmitter {
    submissions: RefCell<Vec<ContactSubmission>>,
    fail: Cell<bool>,
}

impl RecordingSubmitter {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn failing() -> Rc<Self> {
        let submitter = Self::new();
        submitter.fail.set(true);
        submitter
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.borrow().clone()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SiteError> {
        self.submissions.borrow_mut().push(submission.clone());
        if self.fail.get() {
            Err(SiteError::Platform("endpoint unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct FakeForm {
    values: RefCell<BTreeMap<String, String>>,
    resets: Cell<u32>,
}

impl FakeForm {
    pub fn filled(name: &str, email: &str, message: &str) -> Rc<Self> {
        let form = Rc::new(Self::default());
        form.set("name", name);
        form.set("email", email);
        form.set("message", message);
        form
    }

    pub fn set(&self, field: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(field.to_string(), value.to_string());
    }

    pub fn resets(&self) -> u32 {
        self.resets.get()
    }
}

impl FormFields for FakeForm {
    fn value(&self, field: &str) -> Option<String> {
        self.values.borrow().get(field).cloned()
    }

    fn reset(&self) {
        self.values.borrow_mut().clear();
        self.resets.set(self.resets.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    observed: RefCell<Vec<(TargetId, ElementRef, ObserveOptions)>>,
    unobserved: RefCell<Vec<TargetId>>,
}

impl RecordingObserver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// The id registered for `element`, matched by identity.
    pub fn id_of(&self, element: &Rc<FakeElement>) -> Option<TargetId> {
        let wanted = Rc::as_ptr(element) as *const ();
        self.observed
            .borrow()
            .iter()
            .find(|(_, observed, _)| Rc::as_ptr(observed) as *const () == wanted)
            .map(|(id, _, _)| *id)
    }

    pub fn options_of(&self, id: TargetId) -> Option<ObserveOptions> {
        self.observed
            .borrow()
            .iter()
            .find(|(observed, _, _)| *observed == id)
            .map(|(_, _, options)| options.clone())
    }

    pub fn unobserved(&self) -> Vec<TargetId> {
        self.unobserved.borrow().clone()
    }
}

impl ViewportObserver for RecordingObserver {
    fn observe(
        &self,
        target: &ElementRef,
        id: TargetId,
        options: &ObserveOptions,
    ) -> Result<(), SiteError> {
        self.observed
            .borrow_mut()
            .push((id, Rc::clone(target), options.clone()));
        Ok(())
    }

    fn unobserve(&self, id: TargetId) {
        self.unobserved.borrow_mut().push(id);
    }
}
