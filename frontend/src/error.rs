use thiserror::Error;

/// UI-side failures. These are logged and the operation becomes a no-op;
/// they never reach the user as a crash.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    #[error("Element not found: #{0}")]
    ElementMissing(String),

    #[error("Browser API unavailable: {0}")]
    BrowserUnavailable(&'static str),
}
