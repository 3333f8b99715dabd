use std::cell::Cell;

use super::{Element, ElementRef};

/// Sets membership of `class` to exactly the predicate's result.
pub fn sync_class(element: &dyn Element, class: &str, predicate: impl FnOnce() -> bool) {
    if predicate() {
        element.add_class(class);
    } else {
        element.remove_class(class);
    }
}

/// One element, one class, kept in step with a boolean.
pub struct ClassSync {
    element: ElementRef,
    class: &'static str,
}

impl ClassSync {
    pub fn new(element: ElementRef, class: &'static str) -> Self {
        Self { element, class }
    }

    pub fn sync(&self, active: bool) {
        sync_class(self.element.as_ref(), self.class, || active);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholdState {
    threshold_px: f64,
    active: bool,
}

impl ScrollThresholdState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            active: false,
        }
    }

    pub fn update(&mut self, offset: f64) -> bool {
        self.active = offset > self.threshold_px;
        self.active
    }

    pub fn active(&self) -> bool {
        self.active
    }
}

/// Scroll offset → class binding (the navbar's `navbar-scrolled`).
pub struct ScrollClass {
    state: Cell<ScrollThresholdState>,
    sync: ClassSync,
}

impl ScrollClass {
    pub fn new(element: ElementRef, class: &'static str, threshold_px: f64) -> Self {
        Self {
            state: Cell::new(ScrollThresholdState::new(threshold_px)),
            sync: ClassSync::new(element, class),
        }
    }

    pub fn evaluate(&self, offset: f64) {
        let mut state = self.state.get();
        let active = state.update(offset);
        self.state.set(state);
        self.sync.sync(active);
    }
}
