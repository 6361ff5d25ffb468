//! Sample customers standing in for a real data source

use chrono::NaiveDate;

use super::types::{CustomerRecord, PaymentMode, Plan, Status};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal dates below are all valid calendar days
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    email: &str,
    plan: Plan,
    status: Status,
    subscription_date: NaiveDate,
    subscription_days: u32,
    next_payment: Option<NaiveDate>,
    payment_mode: PaymentMode,
) -> CustomerRecord {
    CustomerRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
        plan,
        status,
        subscription_date,
        subscription_days,
        next_payment,
        payment_mode,
    }
}

/// The fixed customer set, in display order
pub fn seed_customers() -> Vec<CustomerRecord> {
    vec![
        record(
            1,
            "John Smith",
            "john@example.com",
            Plan::Premium,
            Status::Active,
            date(2024, 1, 15),
            158,
            Some(date(2024, 7, 15)),
            PaymentMode::Automated,
        ),
        record(
            2,
            "Sarah Johnson",
            "sarah@company.com",
            Plan::Basic,
            Status::Active,
            date(2024, 3, 20),
            94,
            Some(date(2024, 7, 20)),
            PaymentMode::Manual,
        ),
        record(
            3,
            "Mike Wilson",
            "mike@startup.io",
            Plan::Pro,
            Status::Pending,
            date(2024, 5, 10),
            44,
            Some(date(2024, 7, 10)),
            PaymentMode::Failed,
        ),
        record(
            4,
            "Emma Davis",
            "emma@design.co",
            Plan::Basic,
            Status::Cancelled,
            date(2023, 12, 1),
            201,
            None,
            PaymentMode::Stopped,
        ),
        record(
            5,
            "Alex Brown",
            "alex@tech.com",
            Plan::Premium,
            Status::Active,
            date(2024, 2, 28),
            115,
            Some(date(2024, 7, 28)),
            PaymentMode::Automated,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = seed_customers();
        let ids: HashSet<u32> = seed.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), seed.len());
        assert_eq!(seed.len(), 5);
    }

    #[test]
    fn test_cancelled_customers_have_no_next_payment() {
        for customer in seed_customers() {
            if customer.status == Status::Cancelled {
                assert!(customer.next_payment.is_none());
                assert_eq!(customer.payment_mode, PaymentMode::Stopped);
            }
        }
    }
}
