//! Overview presenter data

use super::format::{signed_percent, StatValue};
use crate::customers::Plan;

/// Whether a change is good news
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Headline stat card
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStat {
    pub title: &'static str,
    pub value: StatValue,
    /// Change from last month, in percent
    pub change_percent: f64,
    pub sentiment: Sentiment,
    pub icon: &'static str,
}

impl OverviewStat {
    pub fn change_label(&self) -> String {
        signed_percent(self.change_percent)
    }
}

/// One line in the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: u32,
    pub user_email: &'static str,
    pub action: &'static str,
    pub plan: Plan,
    pub when: &'static str,
}

pub fn overview_stats() -> Vec<OverviewStat> {
    vec![
        OverviewStat {
            title: "Total Subscribers",
            value: StatValue::Count(2847),
            change_percent: 12.5,
            sentiment: Sentiment::Positive,
            icon: "👥",
        },
        OverviewStat {
            title: "Monthly Revenue",
            value: StatValue::Currency(47892.0),
            change_percent: 8.3,
            sentiment: Sentiment::Positive,
            icon: "💲",
        },
        OverviewStat {
            title: "Growth Rate",
            value: StatValue::Percent(15.2),
            change_percent: 2.1,
            sentiment: Sentiment::Positive,
            icon: "📈",
        },
        // Churn going down is good news
        OverviewStat {
            title: "Churn Rate",
            value: StatValue::Percent(3.4),
            change_percent: -0.5,
            sentiment: Sentiment::Positive,
            icon: "⚠",
        },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: 1,
            user_email: "john@example.com",
            action: "Upgraded to Premium",
            plan: Plan::Premium,
            when: "2 min ago",
        },
        ActivityEntry {
            id: 2,
            user_email: "sarah@company.com",
            action: "New subscription",
            plan: Plan::Basic,
            when: "5 min ago",
        },
        ActivityEntry {
            id: 3,
            user_email: "mike@startup.io",
            action: "Payment failed",
            plan: Plan::Pro,
            when: "12 min ago",
        },
        ActivityEntry {
            id: 4,
            user_email: "emma@design.co",
            action: "Cancelled subscription",
            plan: Plan::Basic,
            when: "1 hour ago",
        },
        ActivityEntry {
            id: 5,
            user_email: "alex@tech.com",
            action: "Renewed subscription",
            plan: Plan::Premium,
            when: "2 hours ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::{CustomerDirectory, StaticDirectory};

    #[test]
    fn test_stat_cards() {
        let stats = overview_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].value.to_string(), "2,847");
        assert_eq!(stats[1].value.to_string(), "$47,892");
        assert_eq!(stats[3].change_label(), "-0.5%");
        assert!(stats.iter().all(|s| s.sentiment == Sentiment::Positive));
    }

    #[test]
    fn test_activity_references_known_customers() {
        let directory = StaticDirectory::seeded();
        for entry in recent_activity() {
            assert!(
                directory.all().iter().any(|c| c.email == entry.user_email),
                "{} not in directory",
                entry.user_email
            );
        }
    }
}
