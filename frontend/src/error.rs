use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::behavior::contact::ValidationError;

#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("attribute `{0}` is missing")]
    MissingAttribute(&'static str),
    #[error("attribute `{name}` has malformed value `{value}`")]
    MalformedAttribute { name: &'static str, value: String },
    #[error("visibility threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),
    #[error("animation duration must be positive")]
    InvalidDuration,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("browser call failed: {0}")]
    Platform(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Platform(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
