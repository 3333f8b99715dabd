use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

use super::Notifier;
use crate::error::SiteError;

pub const FIELDS: [&str; 3] = ["name", "email", "message"];
pub const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";
pub const SEND_FAILED: &str = "Sorry, your message could not be sent. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn read(fields: &dyn FormFields) -> Self {
        let value = |field: &str| fields.value(field).unwrap_or_default();
        Self {
            name: value("name"),
            email: value("email"),
            message: value("message"),
        }
    }

    /// Every field must hold something other than whitespace.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let missing: Vec<&'static str> = FIELDS
            .iter()
            .zip([&self.name, &self.email, &self.message])
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if missing.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// The contact form's inputs, by field name.
pub trait FormFields {
    fn value(&self, field: &str) -> Option<String>;
    fn reset(&self);
}

/// Where a validated submission goes.
pub trait Submitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SiteError>;
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    Sent(ContactSubmission),
    Rejected(ValidationError),
    Failed(SiteError),
}

pub struct ContactForm {
    fields: Rc<dyn FormFields>,
    submitter: Rc<dyn Submitter>,
    notifier: Rc<dyn Notifier>,
}

impl ContactForm {
    pub fn new(
        fields: Rc<dyn FormFields>,
        submitter: Rc<dyn Submitter>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            fields,
            submitter,
            notifier,
        }
    }

    pub fn handle_submit(&self) -> SubmitOutcome {
        let submission = match ContactSubmission::read(self.fields.as_ref()).validate() {
            Ok(submission) => submission,
            Err(e) => {
                self.notifier.notify(&e.to_string());
                return SubmitOutcome::Rejected(e);
            }
        };
        match self.submitter.submit(&submission) {
            Ok(()) => {
                self.notifier.notify(THANK_YOU);
                self.fields.reset();
                SubmitOutcome::Sent(submission)
            }
            Err(e) => {
                log::error!("Failed to submit contact form: {}", e);
                self.notifier.notify(SEND_FAILED);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
