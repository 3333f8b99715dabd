use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Window};

use super::element::query_all;
use crate::behavior::orchestrator::Orchestrator;
use crate::error::SiteError;

/// A DOM listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

fn modal_id_of(element: &web_sys::Element) -> Option<String> {
    element
        .closest(".modal")
        .ok()
        .flatten()
        .map(|modal| modal.id())
        .filter(|id| !id.is_empty())
}

/// Routes page events into the orchestrator.
pub fn bind(
    window: &Window,
    document: &web_sys::Document,
    orchestrator: &Rc<Orchestrator>,
) -> Result<Vec<Listener>, SiteError> {
    let mut listeners = Vec::new();

    {
        let orchestrator = Rc::clone(orchestrator);
        let win = window.clone();
        listeners.push(Listener::new(window.as_ref(), "scroll", move |_| {
            orchestrator.on_scroll(win.scroll_y().unwrap_or(0.0));
        })?);
    }

    for link in query_all(document, "a[href^=\"#\"]") {
        let orchestrator = Rc::clone(orchestrator);
        let href = link.get_attribute("href").unwrap_or_default();
        listeners.push(Listener::new(link.as_ref(), "click", move |e: Event| {
            e.prevent_default();
            orchestrator.on_anchor_click(&href);
        })?);
    }

    for link in query_all(document, "#navbarNav .nav-link") {
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(link.as_ref(), "click", move |_| {
            orchestrator.on_nav_link_click();
        })?);
    }

    if let Some(toggler) = document.query_selector(".navbar-toggler").ok().flatten() {
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(toggler.as_ref(), "click", move |_| {
            orchestrator.on_toggler_click();
        })?);
    }

    for (index, button) in query_all(document, ".filter-btn").into_iter().enumerate() {
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(button.as_ref(), "click", move |_| {
            orchestrator.on_filter_click(index);
        })?);
    }

    for (index, item) in query_all(document, ".portfolio-item").into_iter().enumerate() {
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(item.as_ref(), "click", move |_| {
            orchestrator.on_item_click(index);
        })?);
    }

    for close in query_all(document, ".modal .btn-close") {
        let Some(modal_id) = modal_id_of(&close) else {
            continue;
        };
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(close.as_ref(), "click", move |_| {
            orchestrator.on_modal_close(&modal_id);
        })?);
    }

    for button in query_all(document, ".modal-footer .btn-primary") {
        let Some(modal_id) = modal_id_of(&button) else {
            continue;
        };
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(button.as_ref(), "click", move |_| {
            orchestrator.on_live_site_click(&modal_id);
        })?);
    }

    if let Some(form) = document.query_selector("form").ok().flatten() {
        let orchestrator = Rc::clone(orchestrator);
        listeners.push(Listener::new(form.as_ref(), "submit", move |e: Event| {
            e.prevent_default();
            if let Some(outcome) = orchestrator.on_submit() {
                log::debug!("Contact form outcome: {:?}", outcome);
            }
        })?);
    }

    log::debug!("{} page listeners bound", listeners.len());
    Ok(listeners)
}
