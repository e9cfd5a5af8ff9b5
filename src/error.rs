//! Error types for API calls and form validation.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a request to the todo API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Wrap a rejected JS promise or thrown value
    pub fn from_js(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        Self::Network(message)
    }

    /// Text shown in the error toast
    pub fn user_message(&self) -> String {
        format!("ERROR: {}", self)
    }
}

/// Form input rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("EL TÍTULO ES REQUERIDO!")]
    EmptyTitle,

    #[error("NINGUNA TAREA SELECCIONADA!")]
    NoTaskSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.user_message(), "ERROR: HTTP error! status: 404");
    }

    #[test]
    fn test_network_message_passes_through() {
        let err = ApiError::Network("Failed to fetch".into());
        assert_eq!(err.user_message(), "ERROR: Failed to fetch");
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "EL TÍTULO ES REQUERIDO!");
    }
}
