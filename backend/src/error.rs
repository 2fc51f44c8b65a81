use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::events::CatalogError;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn new(error: &str, message: &str, status_code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status_code,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("INTERNAL_ERROR", message, 500)
    }

    pub fn service_unavailable(message: &str) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message, 503)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let status = match actix_web::http::StatusCode::from_u16(self.status_code) {
            Ok(status) => status,
            Err(_) => {
                log::warn!("Invalid status code {}, defaulting to 500", self.status_code);
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        HttpResponse::build(status).json(self)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable(_) => Self::service_unavailable(&err.to_string()),
            CatalogError::Io { .. } | CatalogError::Parse { .. } => {
                Self::internal_error(&err.to_string())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shared::ErrorResponse;

    #[rstest]
    #[case(ApiError::internal_error("Server error"), "INTERNAL_ERROR", 500)]
    #[case(ApiError::service_unavailable("Catalog offline"), "SERVICE_UNAVAILABLE", 503)]
    fn test_constructors(#[case] error: ApiError, #[case] code: &str, #[case] status: u16) {
        assert_eq!(error.error, code);
        assert_eq!(error.status_code, status);
        assert_eq!(error.error_response().status().as_u16(), status);
    }

    #[test]
    fn test_display_format() {
        let error = ApiError::internal_error("Test message");
        assert_eq!(format!("{}", error), "INTERNAL_ERROR: Test message");
    }

    #[test]
    fn test_invalid_status_falls_back_to_500() {
        let error = ApiError::new("ODD", "Odd status", 42);
        assert_eq!(error.error_response().status().as_u16(), 500);
    }

    #[test]
    fn test_body_matches_client_error_shape() {
        let error = ApiError::service_unavailable("Event catalog is not loaded");
        let body = serde_json::to_string(&error).unwrap();
        let parsed: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.server_message().as_deref(), Some("Event catalog is not loaded"));
    }

    #[test]
    fn test_from_catalog_error() {
        let api_error: ApiError = CatalogError::Unavailable("seed missing".to_string()).into();
        assert_eq!(api_error.status_code, 503);
        assert!(api_error.message.contains("seed missing"));
    }
}
