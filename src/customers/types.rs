//! Core data types for the customer directory
//!
//! - `CustomerRecord`: one subscriber and their billing state
//! - `Plan`, `Status` and `PaymentMode`: classification enums
//!
//! String forms match the values offered by the dashboard's select widgets,
//! so `Plan` is capitalised (`"Premium"`) while `Status` and `PaymentMode`
//! are lowercase (`"active"`, `"automated"`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single subscriber in the directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    /// Unique, stable identifier
    pub id: u32,
    /// Display name
    pub name: String,
    pub email: String,
    pub plan: Plan,
    pub status: Status,
    /// Date the subscription started
    pub subscription_date: NaiveDate,
    /// Days the customer has been subscribed
    pub subscription_days: u32,
    /// Next scheduled charge, absent once billing has stopped
    pub next_payment: Option<NaiveDate>,
    pub payment_mode: PaymentMode,
}

impl CustomerRecord {
    /// Case-insensitive substring match against name or email.
    ///
    /// `needle` must already be lowercased; the filter lowercases the query
    /// once rather than per record.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }

    /// Next payment formatted for display
    pub fn next_payment_label(&self) -> String {
        self.next_payment
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Subscription tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Plan {
    Basic,
    Pro,
    Premium,
}

impl Plan {
    /// All plans in the order the dashboard lists them
    pub fn all() -> &'static [Plan] {
        &[Plan::Basic, Plan::Pro, Plan::Premium]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Pro => "Pro",
            Plan::Premium => "Premium",
        }
    }

    /// Outline badge classes for this plan
    pub fn badge_class(&self) -> &'static str {
        match self {
            Plan::Premium => "border-purple-500 text-purple-400",
            Plan::Pro => "border-blue-500 text-blue-400",
            Plan::Basic => "border-gray-500 text-gray-400",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(Plan::Basic),
            "Pro" => Ok(Plan::Pro),
            "Premium" => Ok(Plan::Premium),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Lifecycle state of a subscription
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Pending,
    Cancelled,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Active, Status::Pending, Status::Cancelled]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Cancelled => "cancelled",
        }
    }

    /// Human label for select options
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Pending => "Pending",
            Status::Cancelled => "Cancelled",
        }
    }

    /// Filled badge classes for this status
    pub fn badge_class(&self) -> &'static str {
        match self {
            Status::Active => "bg-green-600/20 text-green-400",
            Status::Pending => "bg-yellow-600/20 text-yellow-400",
            Status::Cancelled => "bg-red-600/20 text-red-400",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "pending" => Ok(Status::Pending),
            "cancelled" => Ok(Status::Cancelled),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// How the customer's recurring charge is collected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Automated,
    Manual,
    Failed,
    Stopped,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Automated => "automated",
            PaymentMode::Manual => "manual",
            PaymentMode::Failed => "failed",
            PaymentMode::Stopped => "stopped",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Automated => "Automated",
            PaymentMode::Manual => "Manual",
            PaymentMode::Failed => "Failed",
            PaymentMode::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "automated" => Ok(PaymentMode::Automated),
            "manual" => Ok(PaymentMode::Manual),
            "failed" => Ok(PaymentMode::Failed),
            "stopped" => Ok(PaymentMode::Stopped),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A select-widget value that names no known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_round_trips_through_select_value() {
        for plan in Plan::all() {
            assert_eq!(plan.as_str().parse::<Plan>().unwrap(), *plan);
        }
        assert!("premium".parse::<Plan>().is_err());
    }

    #[test]
    fn test_status_parsing_is_lowercase() {
        assert_eq!("cancelled".parse::<Status>().unwrap(), Status::Cancelled);
        assert!("Active".parse::<Status>().is_err());
    }

    #[test]
    fn test_record_json_field_names() {
        let record = CustomerRecord {
            id: 9,
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            plan: Plan::Pro,
            status: Status::Pending,
            subscription_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            subscription_days: 44,
            next_payment: None,
            payment_mode: PaymentMode::Failed,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["plan"], "Pro");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["paymentMode"], "failed");
        assert_eq!(json["subscriptionDate"], "2024-05-10");
        assert!(json["nextPayment"].is_null());
    }

    #[test]
    fn test_matches_text() {
        let record = CustomerRecord {
            id: 1,
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            plan: Plan::Premium,
            status: Status::Active,
            subscription_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            subscription_days: 158,
            next_payment: NaiveDate::from_ymd_opt(2024, 7, 15),
            payment_mode: PaymentMode::Automated,
        };

        assert!(record.matches_text(""));
        assert!(record.matches_text("smith"));
        assert!(record.matches_text("example.com"));
        assert!(!record.matches_text("sarah"));
        assert_eq!(record.next_payment_label(), "2024-07-15");
    }
}
