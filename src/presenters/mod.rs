//! Overview and Analytics presenters
//!
//! Fixed sample figures for the two read-only views. Nothing here is
//! computed from the customer directory; the only logic is formatting.

pub mod analytics;
pub mod format;
pub mod overview;

pub use analytics::{
    key_metrics, monthly_snapshots, plan_distribution, share_fractions, share_labels, KeyMetric,
    MonthlySnapshot, PlanShare, Trend,
};
pub use format::{group_thousands, signed_percent, StatValue};
pub use overview::{overview_stats, recent_activity, ActivityEntry, OverviewStat, Sentiment};
