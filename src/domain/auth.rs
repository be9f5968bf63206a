//! Mock authentication for the demo build. A gate for the UI flow, not a
//! security boundary.

use thiserror::Error;

use super::entities::{User, UserRole};

pub const DEMO_EMAIL: &str = "farmer@agri.com";
pub const DEMO_PASSWORD: &str = "demo";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Checks the supplied credentials against the baked-in demo account.
/// Email comparison is trimmed and case-insensitive; the password is exact.
pub fn authenticate(email: &str, password: &str) -> Result<User, AuthError> {
    if email.trim().eq_ignore_ascii_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
        Ok(demo_user())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

pub fn demo_user() -> User {
    User {
        id: "demo-user-001".to_string(),
        email: DEMO_EMAIL.to_string(),
        full_name: Some("Agri Farmer".to_string()),
        role: UserRole::Farmer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_log_in() {
        let user = authenticate(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(user.email, DEMO_EMAIL);
        assert_eq!(user.role, UserRole::Farmer);
    }

    #[test]
    fn email_is_trimmed_and_case_insensitive() {
        assert!(authenticate("  Farmer@Agri.Com ", DEMO_PASSWORD).is_ok());
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        assert_eq!(
            authenticate(DEMO_EMAIL, "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("trader@agri.com", DEMO_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
        // Password stays case-sensitive.
        assert!(authenticate(DEMO_EMAIL, "DEMO").is_err());
    }
}
