//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod add_subscription;
pub mod chart;
pub mod customer_card;
pub mod loading;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use add_subscription::AddSubscription;
pub use chart::{PieChart, Series, SeriesChart, SeriesKind, Slice};
pub use customer_card::CustomerCard;
pub use loading::BusyLabel;
pub use sidebar::{MobileNav, Sidebar};
pub use stat_card::{KeyMetricCard, StatCard};
pub use toast::Toast;
