use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::behavior::contact::{ContactSubmission, FormFields, Submitter};
use crate::behavior::Notifier;
use crate::error::SiteError;

pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("Failed to show notice {:?}: {:?}", message, e);
        }
    }
}

/// Stand-in for a real endpoint: dumps the record to the console and succeeds.
pub struct ConsoleSubmitter;

impl Submitter for ConsoleSubmitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SiteError> {
        let json = serde_json::to_string(submission)
            .map_err(|e| SiteError::Platform(format!("could not encode submission: {}", e)))?;
        gloo_console::log!("Form submitted:", json);
        Ok(())
    }
}

pub struct WebFormFields {
    document: web_sys::Document,
    form: HtmlFormElement,
}

impl WebFormFields {
    pub fn new(document: web_sys::Document, form: HtmlFormElement) -> Self {
        Self { document, form }
    }
}

impl FormFields for WebFormFields {
    fn value(&self, field: &str) -> Option<String> {
        let element = self.document.get_element_by_id(field)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(input.value()),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(|area| area.value()),
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}
