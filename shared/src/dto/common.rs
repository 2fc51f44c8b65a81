use serde::{Deserialize, Serialize};

/// Error body returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[serde(default)]
    pub error: String,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// The most descriptive text the server sent, if any.
    pub fn server_message(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| Some(self.error.clone()).filter(|e| !e.trim().is_empty()))
    }
}
