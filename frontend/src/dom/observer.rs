use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::element::WebElement;
use crate::behavior::viewport::{ObserveOptions, TargetId, ViewportObserver, VisibilitySink};
use crate::behavior::ElementRef;
use crate::error::SiteError;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Watched {
    id: TargetId,
    element: web_sys::Element,
    observer: IntersectionObserver,
}

/// One `IntersectionObserver` per distinct option set, shared by every
/// target registered with those options.
struct SharedObserver {
    options: ObserveOptions,
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

type Registry = Rc<RefCell<Vec<Watched>>>;

pub struct WebViewportObserver {
    sink: Weak<dyn VisibilitySink>,
    observers: RefCell<Vec<SharedObserver>>,
    watched: Registry,
}

impl WebViewportObserver {
    pub fn new(sink: Weak<dyn VisibilitySink>) -> Self {
        Self {
            sink,
            observers: RefCell::new(Vec::new()),
            watched: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn observer_for(&self, options: &ObserveOptions) -> Result<IntersectionObserver, SiteError> {
        if let Some(shared) = self
            .observers
            .borrow()
            .iter()
            .find(|shared| &shared.options == options)
        {
            return Ok(shared.observer.clone());
        }

        let sink = self.sink.clone();
        let watched = Rc::clone(&self.watched);
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(sink) = sink.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                // release the registry before the sink runs; it may unobserve
                let id = watched
                    .borrow()
                    .iter()
                    .find(|w| w.element.is_same_node(Some(target.as_ref())))
                    .map(|w| w.id);
                if let Some(id) = id {
                    sink.on_visibility(id, entry.is_intersecting());
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(options.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        self.observers.borrow_mut().push(SharedObserver {
            options: options.clone(),
            observer: observer.clone(),
            _callback: callback,
        });
        Ok(observer)
    }
}

impl ViewportObserver for WebViewportObserver {
    fn observe(
        &self,
        target: &ElementRef,
        id: TargetId,
        options: &ObserveOptions,
    ) -> Result<(), SiteError> {
        let element = target
            .as_any()
            .downcast_ref::<WebElement>()
            .map(|web| web.raw().clone().unchecked_into::<web_sys::Element>())
            .ok_or_else(|| SiteError::Platform("observed element is not a DOM element".to_string()))?;
        let observer = self.observer_for(options)?;
        observer.observe(&element);
        self.watched.borrow_mut().push(Watched {
            id,
            element,
            observer,
        });
        Ok(())
    }

    fn unobserve(&self, id: TargetId) {
        let mut watched = self.watched.borrow_mut();
        if let Some(index) = watched.iter().position(|w| w.id == id) {
            let entry = watched.remove(index);
            entry.observer.unobserve(&entry.element);
        }
    }
}

impl Drop for WebViewportObserver {
    fn drop(&mut self) {
        for shared in self.observers.borrow().iter() {
            shared.observer.disconnect();
        }
    }
}
