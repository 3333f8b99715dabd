//! Browser implementations of the behavior traits, and the mount entry point.

pub mod element;
pub mod events;
pub mod host;
pub mod observer;
pub mod scheduler;

use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::behavior::contact::FormFields;
use crate::behavior::orchestrator::{Orchestrator, Platform};
use crate::behavior::viewport::VisibilitySink;
use crate::config::SiteConfig;
use crate::error::SiteError;
use element::WebDocument;
use events::Listener;
use host::{AlertNotifier, ConsoleSubmitter, WebFormFields};
use observer::WebViewportObserver;
use scheduler::BrowserScheduler;

/// Live page behavior. Dropping it removes every listener and observer.
pub struct Mounted {
    _listeners: Vec<Listener>,
    _orchestrator: Rc<Orchestrator>,
}

pub fn mount(config: SiteConfig) -> Result<Mounted, SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::Platform("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| SiteError::Platform("no document".to_string()))?;

    let form = document
        .query_selector("form")
        .ok()
        .flatten()
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
        .map(|form| Rc::new(WebFormFields::new(document.clone(), form)) as Rc<dyn FormFields>);

    let orchestrator = Rc::new_cyclic(|weak: &Weak<Orchestrator>| {
        let sink: Weak<dyn VisibilitySink> = weak.clone();
        let platform = Platform {
            document: Rc::new(WebDocument::new(window.clone(), document.clone())),
            scheduler: Rc::new(BrowserScheduler::new(window.clone(), config.frame_interval_ms)),
            observer: Rc::new(WebViewportObserver::new(sink)),
            notifier: Rc::new(AlertNotifier::new(window.clone())),
            submitter: Rc::new(ConsoleSubmitter),
            form,
        };
        Orchestrator::wire(config, platform)
    });

    let listeners = events::bind(&window, &document, &orchestrator)?;
    log::info!("App initialized");
    Ok(Mounted {
        _listeners: listeners,
        _orchestrator: orchestrator,
    })
}
