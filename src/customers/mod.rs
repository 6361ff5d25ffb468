//! Customer Directory
//!
//! - **types**: `CustomerRecord` and its plan/status/payment enums
//! - **seed**: the built-in sample customers
//! - **filter**: search text + status + plan filtering
//! - **directory**: the `CustomerDirectory` data-access trait
//! - **actions**: simulated payment actions
//! - **form**: add-subscription validation
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use subscription_manager::customers::{CustomerDirectory, CustomerFilter, Status, StaticDirectory};
//!
//! let directory = StaticDirectory::seeded();
//! let active = directory.filter(&CustomerFilter::new().status(Status::Active));
//! assert_eq!(active.len(), 3);
//! ```

pub mod actions;
pub mod directory;
pub mod error;
pub mod filter;
pub mod form;
pub mod seed;
pub mod types;

pub use actions::{perform, PaymentAction};
pub use directory::{CustomerDirectory, StaticDirectory};
pub use error::{ActionError, FormError};
pub use filter::{CustomerFilter, Selector, WILDCARD};
pub use form::{NewSubscription, NEW_SUBSCRIPTION_MODES};
pub use seed::seed_customers;
pub use types::{CustomerRecord, PaymentMode, Plan, Status, UnknownVariant};
