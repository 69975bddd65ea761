pub mod extractors;
pub mod identity;
pub mod password;

use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

// Re-export necessary items
pub use extractors::RequesterId;
pub use identity::{IdentityResolver, UsernameResolver};
pub use password::hash_password;

/// Payload for a new user registration request.
///
/// Both fields are optional at the serde level so that a missing field and
/// an empty one fail with the same validation message instead of a
/// deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub username: Option<String>,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
}

/// Payload for a login request.
///
/// Login only requires both fields to be present; the minimum-length rule
/// applies at registration time.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

impl RegisterRequest {
    pub fn credentials(&self) -> Result<(&str, &str), AppError> {
        match (non_empty(&self.username), non_empty(&self.password)) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(AppError::Validation(
                "username and password are required".into(),
            )),
        }
    }
}

impl LoginRequest {
    pub fn credentials(&self) -> Result<(&str, &str), AppError> {
        match (non_empty(&self.username), non_empty(&self.password)) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(AppError::Validation(
                "username and password are required".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_both_fields() {
        let missing_password = RegisterRequest {
            username: Some("alice".to_string()),
            password: None,
        };
        assert!(missing_password.credentials().is_err());

        let empty_username = RegisterRequest {
            username: Some("".to_string()),
            password: Some("secret1".to_string()),
        };
        assert!(empty_username.credentials().is_err());

        let complete = RegisterRequest {
            username: Some("alice".to_string()),
            password: Some("secret1".to_string()),
        };
        assert_eq!(complete.credentials().unwrap(), ("alice", "secret1"));
    }

    #[test]
    fn test_register_password_minimum_length() {
        let too_short = RegisterRequest {
            username: Some("alice".to_string()),
            password: Some("12345".to_string()),
        };
        assert!(too_short.validate().is_err());

        let just_long_enough = RegisterRequest {
            username: Some("alice".to_string()),
            password: Some("123456".to_string()),
        };
        assert!(just_long_enough.validate().is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let missing_username = LoginRequest {
            username: None,
            password: Some("secret1".to_string()),
        };
        assert!(missing_username.credentials().is_err());

        // No minimum length on login; a short password is still looked up.
        let short_password = LoginRequest {
            username: Some("alice".to_string()),
            password: Some("abc".to_string()),
        };
        assert_eq!(short_password.credentials().unwrap(), ("alice", "abc"));
    }
}
