//! Add-subscription form
//!
//! Submitting a valid form only yields a confirmation; the directory is
//! read-only.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::FormError;
use super::types::{PaymentMode, Plan};
use crate::notify::Notification;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Payment modes a new subscription may start in
pub const NEW_SUBSCRIPTION_MODES: [PaymentMode; 3] =
    [PaymentMode::Manual, PaymentMode::Automated, PaymentMode::Failed];

/// Raw form input, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub name: String,
    pub email: String,
    /// Unset until the user picks one
    pub plan: Option<Plan>,
    pub payment_mode: PaymentMode,
}

impl Default for NewSubscription {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            plan: None,
            payment_mode: PaymentMode::Manual,
        }
    }
}

impl NewSubscription {
    /// Check fields in form order, reporting the first problem
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        if self.plan.is_none() {
            return Err(FormError::MissingPlan);
        }
        Ok(())
    }

    /// Validate and produce the confirmation to show
    pub fn submit(&self) -> Result<Notification, FormError> {
        if let Err(e) = self.validate() {
            tracing::warn!(error = %e, "Add subscription rejected");
            return Err(e);
        }

        tracing::info!(
            name = %self.name,
            plan = ?self.plan,
            payment_mode = %self.payment_mode,
            "Simulated subscription created"
        );

        Ok(Notification::new(
            "Subscription Added",
            format!("New subscription created for {}", self.name.trim()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewSubscription {
        NewSubscription {
            name: "Dana Lee".to_string(),
            email: "dana@example.com".to_string(),
            plan: Some(Plan::Pro),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_to_manual() {
        let form = NewSubscription::default();
        assert_eq!(form.payment_mode, PaymentMode::Manual);
        assert!(form.plan.is_none());
    }

    #[test]
    fn test_valid_submission() {
        let n = valid().submit().unwrap();
        assert_eq!(n.title, "Subscription Added");
        assert_eq!(n.description, "New subscription created for Dana Lee");
    }

    #[test]
    fn test_rejects_missing_name() {
        let form = NewSubscription {
            name: "   ".to_string(),
            ..valid()
        };
        assert_eq!(form.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["", "dana", "dana@", "dana@example", "da na@example.com"] {
            let form = NewSubscription {
                email: email.to_string(),
                ..valid()
            };
            assert!(
                matches!(form.validate(), Err(FormError::InvalidEmail(_))),
                "accepted {:?}",
                email
            );
        }
    }

    #[test]
    fn test_rejects_missing_plan() {
        let form = NewSubscription {
            plan: None,
            ..valid()
        };
        assert_eq!(form.submit(), Err(FormError::MissingPlan));
    }
}
