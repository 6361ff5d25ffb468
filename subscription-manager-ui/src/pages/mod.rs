//! Pages
//!
//! The login gate, the dashboard shell, and one page per dashboard view.

pub mod analytics;
pub mod customers;
pub mod dashboard;
pub mod login;
pub mod overview;

pub use analytics::AnalyticsPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardShell;
pub use login::LoginPage;
pub use overview::OverviewPage;
