use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the page controller.
///
/// The page never shows these to the user; they are logged to the console
/// and the affected handler does nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("no element with id `{id}` on the page")]
    MissingElement { id: String },

    #[error("burger #{index} has no usable `{attribute}` attribute")]
    MissingTarget { index: usize, attribute: String },

    #[error("burger #{index} does not exist")]
    UnknownBurger { index: usize },

    #[error("browser API call failed: {0}")]
    Js(String),
}

impl From<JsValue> for ControllerError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        ControllerError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, ControllerError>;
