use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::ElementRef;
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Pending,
    Fired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    threshold: f64,
    root_margin: String,
}

impl ObserveOptions {
    pub fn new(threshold: f64) -> Result<Self, SiteError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(SiteError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            root_margin: "0px".to_string(),
        })
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }
}

/// Platform visibility detection (an `IntersectionObserver` in the browser).
pub trait ViewportObserver {
    fn observe(
        &self,
        target: &ElementRef,
        id: TargetId,
        options: &ObserveOptions,
    ) -> Result<(), SiteError>;
    fn unobserve(&self, id: TargetId);
}

/// Receives raw intersection signals from the platform observer.
pub trait VisibilitySink {
    fn on_visibility(&self, id: TargetId, intersecting: bool);
}

struct ObservedTarget {
    element: ElementRef,
    state: TriggerState,
}

pub struct BecameVisible {
    pub id: TargetId,
    pub element: ElementRef,
}

/// Turns repeated intersection signals into one `BecameVisible` per target.
pub struct ViewportSignalSource {
    observer: Rc<dyn ViewportObserver>,
    targets: RefCell<BTreeMap<TargetId, ObservedTarget>>,
    next_id: Cell<u32>,
}

impl ViewportSignalSource {
    pub fn new(observer: Rc<dyn ViewportObserver>) -> Self {
        Self {
            observer,
            targets: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// Starts watching `target`. A missing target registers nothing.
    pub fn observe(
        &self,
        target: Option<ElementRef>,
        options: &ObserveOptions,
    ) -> Result<Option<TargetId>, SiteError> {
        let Some(element) = target else {
            return Ok(None);
        };
        let id = TargetId(self.next_id.get());
        self.observer.observe(&element, id, options)?;
        self.next_id.set(id.0 + 1);
        self.targets.borrow_mut().insert(
            id,
            ObservedTarget {
                element,
                state: TriggerState::Pending,
            },
        );
        Ok(Some(id))
    }

    /// Feeds one platform signal. Returns the event only on the first
    /// intersecting signal for `id`, and unobserves the target at that point.
    pub fn signal(&self, id: TargetId, intersecting: bool) -> Option<BecameVisible> {
        if !intersecting {
            return None;
        }
        let element = {
            let mut targets = self.targets.borrow_mut();
            let target = targets.get_mut(&id)?;
            if target.state == TriggerState::Fired {
                return None;
            }
            target.state = TriggerState::Fired;
            Rc::clone(&target.element)
        };
        self.observer.unobserve(id);
        Some(BecameVisible { id, element })
    }

    pub fn state(&self, id: TargetId) -> Option<TriggerState> {
        self.targets.borrow().get(&id).map(|t| t.state)
    }
}
