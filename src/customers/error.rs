//! Customer directory error types

use thiserror::Error;

/// Errors from simulated customer actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No record with this id in the directory
    #[error("Customer not found: {0}")]
    NotFound(u32),
}

/// Validation failures for the add-subscription form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Customer name is required")]
    MissingName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Select a subscription plan")]
    MissingPlan,
}
