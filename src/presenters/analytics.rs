//! Analytics presenter data
//!
//! Six months of subscriber, revenue and churn figures, the subscriber split
//! by plan, and the key-metric cards.

use super::format::StatValue;
use crate::customers::Plan;

/// One month of aggregate figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySnapshot {
    pub month: &'static str,
    pub subscribers: u32,
    /// Dollars
    pub revenue: u32,
    /// Cancelled subscriptions
    pub churn: u32,
}

/// Subscribers on one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanShare {
    pub plan: Plan,
    pub subscribers: u32,
    /// Chart fill colour
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "↑ Trending up",
            Trend::Down => "↓ Trending down",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: StatValue,
    pub description: &'static str,
    pub trend: Trend,
    /// Text colour class
    pub accent: &'static str,
}

pub fn monthly_snapshots() -> Vec<MonthlySnapshot> {
    [
        ("Jan", 2400, 38400, 120),
        ("Feb", 2210, 35360, 98),
        ("Mar", 2290, 36640, 85),
        ("Apr", 2000, 32000, 105),
        ("May", 2181, 34896, 92),
        ("Jun", 2500, 40000, 78),
    ]
    .into_iter()
    .map(|(month, subscribers, revenue, churn)| MonthlySnapshot {
        month,
        subscribers,
        revenue,
        churn,
    })
    .collect()
}

pub fn plan_distribution() -> Vec<PlanShare> {
    vec![
        PlanShare {
            plan: Plan::Basic,
            subscribers: 1245,
            color: "#6B7280",
        },
        PlanShare {
            plan: Plan::Pro,
            subscribers: 856,
            color: "#3B82F6",
        },
        PlanShare {
            plan: Plan::Premium,
            subscribers: 746,
            color: "#8B5CF6",
        },
    ]
}

/// Each share's fraction of the total, in input order. All zeros for an empty total.
pub fn share_fractions(shares: &[PlanShare]) -> Vec<f64> {
    let total: u32 = shares.iter().map(|s| s.subscribers).sum();
    shares
        .iter()
        .map(|s| {
            if total == 0 {
                0.0
            } else {
                s.subscribers as f64 / total as f64
            }
        })
        .collect()
}

/// Slice labels such as `"Basic 44%"`
pub fn share_labels(shares: &[PlanShare]) -> Vec<String> {
    shares
        .iter()
        .zip(share_fractions(shares))
        .map(|(s, frac)| format!("{} {:.0}%", s.plan, frac * 100.0))
        .collect()
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric {
            title: "Subscriber Growth Rate",
            value: StatValue::Percent(15.2),
            description: "Monthly growth in subscribers",
            trend: Trend::Up,
            accent: "text-green-400",
        },
        KeyMetric {
            title: "Average Subscription Length",
            value: StatValue::Months(8.4),
            description: "Median time customers stay subscribed",
            trend: Trend::Up,
            accent: "text-blue-400",
        },
        KeyMetric {
            title: "Churn Rate",
            value: StatValue::Percent(3.4),
            description: "Percentage of subscribers who cancel",
            trend: Trend::Down,
            accent: "text-red-400",
        },
        KeyMetric {
            title: "Customer Lifetime Value",
            value: StatValue::Currency(247.0),
            description: "Average revenue per customer",
            trend: Trend::Up,
            accent: "text-purple-400",
        },
        KeyMetric {
            title: "Monthly Recurring Revenue",
            value: StatValue::Currency(47892.0),
            description: "Predictable monthly income",
            trend: Trend::Up,
            accent: "text-green-400",
        },
        KeyMetric {
            title: "Revenue per User",
            value: StatValue::Currency(16.83),
            description: "Average monthly revenue per subscriber",
            trend: Trend::Up,
            accent: "text-blue-400",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_months_in_order() {
        let months: Vec<_> = monthly_snapshots().iter().map(|m| m.month).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn test_share_labels() {
        assert_eq!(
            share_labels(&plan_distribution()),
            vec!["Basic 44%", "Pro 30%", "Premium 26%"]
        );
    }

    #[test]
    fn test_share_fractions_sum_to_one() {
        let sum: f64 = share_fractions(&plan_distribution()).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_distribution() {
        let empty = [PlanShare {
            plan: Plan::Pro,
            subscribers: 0,
            color: "#000000",
        }];
        assert_eq!(share_fractions(&empty), vec![0.0]);
    }

    #[test]
    fn test_key_metric_values() {
        let values: Vec<String> = key_metrics().iter().map(|m| m.value.to_string()).collect();
        assert_eq!(
            values,
            ["15.2%", "8.4 months", "3.4%", "$247", "$47,892", "$16.83"]
        );
    }
}
