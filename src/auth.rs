//! Auth Gate
//!
//! Placeholder login: any non-empty email/password pair is accepted and an
//! identity is fabricated from the email. Nothing here verifies a credential,
//! so it must not be treated as a security boundary.

use std::time::Duration;

use thiserror::Error;

use crate::config::AuthConfig;
use crate::notify::Notification;
use crate::session::UserIdentity;

/// Id given to every fabricated identity
pub const DEMO_USER_ID: u32 = 1;

/// Login form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter both email and password")]
    MissingCredentials,
}

/// Display label for an identifier: everything before the first `@`
pub fn derive_label(identifier: &str) -> &str {
    identifier.split('@').next().unwrap_or(identifier)
}

/// Fabricates identities from submitted credentials
#[derive(Debug, Clone)]
pub struct AuthGate {
    company: String,
    latency: Duration,
}

impl AuthGate {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            company: config.company.clone(),
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// Artificial delay callers wait before reporting the outcome
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Accept any pair where both fields are non-empty
    pub fn authenticate(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            tracing::warn!(
                email_present = !credentials.email.is_empty(),
                password_present = !credentials.password.is_empty(),
                "Login rejected"
            );
            return Err(AuthError::MissingCredentials);
        }

        Ok(UserIdentity {
            id: DEMO_USER_ID,
            email: credentials.email.clone(),
            name: derive_label(&credentials.email).to_string(),
            company: self.company.clone(),
        })
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

/// The toast shown once a login attempt settles
pub fn outcome_notification<T>(outcome: &Result<T, AuthError>) -> Notification {
    match outcome {
        Ok(_) => Notification::new("Login successful", "Welcome to your subscription dashboard"),
        Err(e) => Notification::destructive("Login failed", e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_text_before_at() {
        assert_eq!(derive_label("a@b.com"), "a");
        assert_eq!(derive_label("first.last@x@y"), "first.last");
        assert_eq!(derive_label("no-separator"), "no-separator");
        assert_eq!(derive_label("@b.com"), "");
    }

    #[test]
    fn test_populated_fields_succeed() {
        let gate = AuthGate::default();
        let identity = gate.authenticate(&Credentials::new("a@b.com", "x")).unwrap();

        assert_eq!(identity.name, "a");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.id, DEMO_USER_ID);
        assert_eq!(identity.company, "Demo Company");
    }

    #[test]
    fn test_empty_field_fails() {
        let gate = AuthGate::default();

        for (email, password) in [("", "x"), ("a@b.com", ""), ("", "")] {
            assert_eq!(
                gate.authenticate(&Credentials::new(email, password)),
                Err(AuthError::MissingCredentials)
            );
        }
    }

    #[test]
    fn test_outcome_notifications() {
        let gate = AuthGate::default();

        let ok = outcome_notification(&gate.authenticate(&Credentials::new("a@b.com", "x")));
        assert_eq!(ok.title, "Login successful");
        assert!(!ok.is_destructive());

        let err = outcome_notification(&gate.authenticate(&Credentials::default()));
        assert_eq!(err.title, "Login failed");
        assert_eq!(err.description, "Please enter both email and password");
        assert!(err.is_destructive());
    }

    #[test]
    fn test_latency_from_config() {
        let config = AuthConfig {
            simulated_latency_ms: 250,
            ..AuthConfig::default()
        };
        assert_eq!(AuthGate::new(&config).latency(), Duration::from_millis(250));
    }
}
