use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Login form contents. Only presence and email shape are checked here;
/// credentials are never verified in the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    pub password: String,
}

impl LoginRequest {
    pub fn check(&self) -> Result<()> {
        require_filled(&[&self.email, &self.password])?;
        self.validate()
            .map_err(|e| SharedError::Validation(first_message(&e, &["email"])))
    }
}

/// Sign-up form contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct RegisterRequest {
    pub first_name: String,

    pub last_name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,

    pub confirm_password: String,
}

impl RegisterRequest {
    /// Checks run in a fixed order and report the first failure only:
    /// presence, confirmation, then field rules.
    pub fn check(&self) -> Result<()> {
        require_filled(&[
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ])?;
        if self.password != self.confirm_password {
            return Err(SharedError::Validation(PASSWORDS_DO_NOT_MATCH.to_string()));
        }
        self.validate()
            .map_err(|e| SharedError::Validation(first_message(&e, &["password", "email"])))
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Newsletter sign-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct NewsletterRequest {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
}

impl NewsletterRequest {
    pub fn check(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(SharedError::Validation(INVALID_EMAIL.to_string()));
        }
        self.validate()
            .map_err(|e| SharedError::Validation(first_message(&e, &["email"])))
    }
}

fn require_filled(fields: &[&String]) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(SharedError::Validation(FILL_ALL_FIELDS.to_string()));
    }
    Ok(())
}

/// First message of the first failing field in `order`.
fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();
    order
        .iter()
        .filter_map(|name| fields.get(*name))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn register() -> RegisterRequest {
        RegisterRequest {
            first_name: "Jordan".to_string(),
            last_name: "Reyes".to_string(),
            email: "jordan.reyes@example.com".to_string(),
            password: "season-pass".to_string(),
            confirm_password: "season-pass".to_string(),
        }
    }

    fn message(result: Result<()>) -> String {
        match result {
            Err(SharedError::Validation(msg)) => msg,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(register().check().is_ok());
        assert_eq!(register().display_name(), "Jordan Reyes");
    }

    #[rstest]
    #[case::missing_first_name(RegisterRequest { first_name: String::new(), ..register() }, FILL_ALL_FIELDS)]
    #[case::blank_confirm(RegisterRequest { confirm_password: "  ".to_string(), ..register() }, FILL_ALL_FIELDS)]
    #[case::mismatch(RegisterRequest { confirm_password: "season-pas".to_string(), ..register() }, PASSWORDS_DO_NOT_MATCH)]
    #[case::short(RegisterRequest { password: "abc12".to_string(), confirm_password: "abc12".to_string(), ..register() }, PASSWORD_TOO_SHORT)]
    #[case::bad_email(RegisterRequest { email: "jordan".to_string(), ..register() }, INVALID_EMAIL)]
    fn test_registration_failures(#[case] request: RegisterRequest, #[case] expected: &str) {
        assert_eq!(message(request.check()), expected);
    }

    #[test]
    fn test_short_password_reported_before_bad_email() {
        let request = RegisterRequest {
            email: "nope".to_string(),
            password: "123".to_string(),
            confirm_password: "123".to_string(),
            ..register()
        };
        assert_eq!(message(request.check()), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_six_character_password_is_enough() {
        let request = RegisterRequest {
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            ..register()
        };
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest { email: "fan@example.com".to_string(), password: String::new() };
        assert_eq!(message(request.check()), FILL_ALL_FIELDS);
        let request = LoginRequest { email: "fan@example.com".to_string(), password: "x".to_string() };
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_newsletter_email() {
        assert_eq!(message(NewsletterRequest::default().check()), INVALID_EMAIL);
        assert_eq!(message(NewsletterRequest { email: "fan@".to_string() }.check()), INVALID_EMAIL);
        assert!(NewsletterRequest { email: "fan@example.com".to_string() }.check().is_ok());
    }
}
