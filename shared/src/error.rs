use thiserror::Error;
use validator::ValidationErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("{0}")]
    Validation(String),

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: String,
        reason: String,
    },
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// Failures of the event fetch pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// Non-2xx response. `message` is the server's message when it sent one.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    /// The body decoded to something other than a JSON array.
    #[error("Invalid data format received from API")]
    MalformedShape,

    /// The body was an array but no element passed admission.
    #[error("No valid events found in API response")]
    NoValidEvents,

    #[error("Failed to fetch events: {0}")]
    Network(String),

    #[error("Failed to parse events response: {0}")]
    InvalidJson(String),
}

impl FetchError {
    pub fn http_status(status: u16, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        Self::HttpStatus { status, message }
    }

    /// Text shown to the user. The technical detail only goes to the log.
    pub fn user_message(&self) -> &'static str {
        if self.to_string().contains("API key") {
            "API configuration error. Contact support."
        } else {
            "Could not load events. Please try again or contact support."
        }
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_http_status_prefers_server_message() {
        let err = FetchError::http_status(503, Some("Upstream feed offline".to_string()));
        assert_eq!(err.to_string(), "Upstream feed offline");
    }

    #[test]
    fn test_http_status_falls_back_to_status_code() {
        assert_eq!(FetchError::http_status(500, None).to_string(), "HTTP error! status: 500");
        assert_eq!(
            FetchError::http_status(404, Some("  ".to_string())).to_string(),
            "HTTP error! status: 404"
        );
    }

    #[test]
    fn test_user_message_flags_api_key_problems() {
        let err = FetchError::http_status(401, Some("Missing API key for ticket feed".to_string()));
        assert_eq!(err.user_message(), "API configuration error. Contact support.");
        assert_eq!(
            FetchError::MalformedShape.user_message(),
            "Could not load events. Please try again or contact support."
        );
    }
}
