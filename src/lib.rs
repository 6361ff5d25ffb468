//! # Subscription Manager
//!
//! Core of a subscription-management admin dashboard: a login gate, a
//! customer directory with search and filters, and overview/analytics
//! figures, all over built-in sample data.
//!
//! ## Modules
//!
//! - [`app`]: top-level coordinator owning session, active view and filters
//! - [`auth`]: placeholder login that fabricates an identity from an email
//! - [`session`]: current identity, mirrored into a local key-value cache
//! - [`router`]: the three dashboard views
//! - [`customers`]: customer records, filtering and simulated actions
//! - [`presenters`]: overview and analytics figures
//! - [`notify`]: transient notifications
//! - [`config`]: TOML + environment configuration
//!
//! With the default `native` feature the crate also provides a file-backed
//! session cache and [`logging::init`].
//!
//! ## Quick Start
//!
//! ```rust
//! use subscription_manager::{AppState, Config, Credentials, MemoryCache, Screen, View};
//!
//! let mut app = AppState::new(Config::default(), MemoryCache::new());
//! assert_eq!(app.screen(), Screen::Login);
//!
//! let user = app.submit_login(&Credentials::new("jane@example.com", "secret")).unwrap();
//! assert_eq!(user.name, "jane");
//!
//! app.select_view(View::Customers);
//! app.set_status("active");
//! assert_eq!(app.visible_customers().len(), 3);
//! ```

pub mod app;
pub mod auth;
pub mod config;
pub mod customers;
#[cfg(feature = "native")]
pub mod logging;
pub mod notify;
pub mod presenters;
pub mod router;
pub mod session;

// Re-export top-level types for convenience
pub use app::{AppState, Screen};

pub use auth::{derive_label, outcome_notification, AuthError, AuthGate, Credentials};

pub use config::{
    generate_default_config, AuthConfig, Config, ConfigError, LoadReport, LoggingConfig,
    NotificationConfig, SessionConfig,
};

pub use customers::{
    ActionError, CustomerDirectory, CustomerFilter, CustomerRecord, FormError, NewSubscription,
    PaymentAction, PaymentMode, Plan, Selector, StaticDirectory, Status,
};

pub use notify::{Notification, Variant};

pub use router::{View, ViewRouter};

#[cfg(feature = "native")]
pub use session::FileCache;
pub use session::{
    KeyValueCache, MemoryCache, SessionError, SessionResult, SessionStore, UserIdentity,
};
