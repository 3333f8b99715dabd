use std::rc::Rc;

use super::{Document, ElementRef, Notifier, Scheduler};
use crate::error::SiteError;

const MODAL_OPEN: &str = "show";

pub fn live_site_message(title: &str) -> String {
    format!(
        "Opening live site for {}. In a real application, this would navigate to the actual project URL.",
        title
    )
}

/// Opens and closes `.modal` dialogs by id.
pub struct ModalController {
    document: Rc<dyn Document>,
    notifier: Rc<dyn Notifier>,
}

impl ModalController {
    pub fn new(document: Rc<dyn Document>, notifier: Rc<dyn Notifier>) -> Self {
        Self { document, notifier }
    }

    fn modal(&self, id: &str) -> Result<ElementRef, SiteError> {
        self.document
            .by_id(id)
            .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))
    }

    pub fn open(&self, id: &str) -> Result<(), SiteError> {
        let modal = self.modal(id)?;
        modal.add_class(MODAL_OPEN);
        modal.set_style("display", "block");
        modal.set_attribute("aria-hidden", "false");
        Ok(())
    }

    pub fn close(&self, id: &str) -> Result<(), SiteError> {
        let modal = self.modal(id)?;
        modal.remove_class(MODAL_OPEN);
        modal.set_style("display", "none");
        modal.set_attribute("aria-hidden", "true");
        Ok(())
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.document
            .by_id(id)
            .map(|modal| modal.has_class(MODAL_OPEN))
            .unwrap_or(false)
    }

    /// "View Live Site" inside modal `id`.
    pub fn view_live_site(&self, id: &str) -> Result<String, SiteError> {
        let selector = format!("#{} .modal-title", id);
        let title = self
            .document
            .query(&selector)
            .ok_or(SiteError::MissingElement(selector))?
            .text();
        let message = live_site_message(title.trim());
        self.notifier.notify(&message);
        Ok(message)
    }
}

/// Brief pressed-in look for a clicked grid item.
pub struct PressFeedback {
    scheduler: Rc<dyn Scheduler>,
    duration_ms: u32,
}

impl PressFeedback {
    pub fn new(scheduler: Rc<dyn Scheduler>, duration_ms: u32) -> Self {
        Self {
            scheduler,
            duration_ms,
        }
    }

    pub fn press(&self, element: ElementRef) {
        element.set_style("transform", "scale(0.98)");
        self.scheduler
            .defer(self.duration_ms, Box::new(move || element.set_style("transform", "")));
    }
}
