//! Customer filtering
//!
//! A [`CustomerFilter`] combines three predicates with logical AND:
//!
//! ```text
//! text   : query empty, or lowercase substring of name or email
//! status : Any, or equal to record.status
//! plan   : Any, or equal to record.plan
//! ```
//!
//! Applying a filter never reorders or copies records; the result borrows
//! from the input slice in its original order.

use std::str::FromStr;

use super::types::{CustomerRecord, Plan, Status};

/// Select-widget value that matches every record
pub const WILDCARD: &str = "all";

/// A filter selector: either the wildcard or one concrete value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Selector<T> {
    /// Parse a select-widget value. `"all"` and unknown strings both yield `Any`.
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD {
            return Selector::Any;
        }
        value.parse().map(Selector::Only).unwrap_or(Selector::Any)
    }
}

impl<T: AsSelectValue> Selector<T> {
    /// The select-widget value for this selector
    pub fn as_value(&self) -> &'static str {
        match self {
            Selector::Any => WILDCARD,
            Selector::Only(v) => v.select_value(),
        }
    }
}

/// Types that can appear as a select-widget option
pub trait AsSelectValue {
    fn select_value(&self) -> &'static str;
}

impl AsSelectValue for Status {
    fn select_value(&self) -> &'static str {
        self.as_str()
    }
}

impl AsSelectValue for Plan {
    fn select_value(&self) -> &'static str {
        self.as_str()
    }
}

/// Search text plus status and plan selectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFilter {
    pub query: String,
    pub status: Selector<Status>,
    pub plan: Selector<Plan>,
}

impl CustomerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the search text
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder method: restrict to one status
    pub fn status(mut self, status: Status) -> Self {
        self.status = Selector::Only(status);
        self
    }

    /// Builder method: restrict to one plan
    pub fn plan(mut self, plan: Plan) -> Self {
        self.plan = Selector::Only(plan);
        self
    }

    /// True when no predicate narrows the set
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.status == Selector::Any && self.plan == Selector::Any
    }

    /// Check a single record against all three predicates
    pub fn matches(&self, record: &CustomerRecord) -> bool {
        self.matches_lowered(record, &self.query.to_lowercase())
    }

    fn matches_lowered(&self, record: &CustomerRecord, needle: &str) -> bool {
        record.matches_text(needle)
            && self.status.matches(&record.status)
            && self.plan.matches(&record.plan)
    }

    /// The ordered subsequence of `records` that passes the filter
    pub fn apply<'a>(&self, records: &'a [CustomerRecord]) -> Vec<&'a CustomerRecord> {
        let needle = self.query.to_lowercase();
        let visible: Vec<&CustomerRecord> = records
            .iter()
            .filter(|r| self.matches_lowered(r, &needle))
            .collect();

        tracing::debug!(
            query = %self.query,
            status = self.status.as_value(),
            plan = self.plan.as_value(),
            visible = visible.len(),
            total = records.len(),
            "Customer filter applied"
        );

        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::seed::seed_customers;

    fn ids(records: &[&CustomerRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    /// Every query/status/plan combination the widgets can produce, plus a few free-text queries
    fn all_filters() -> Vec<CustomerFilter> {
        let queries = ["", "a", "JOHN", "example", ".co", "zzz"];
        let statuses = std::iter::once(Selector::Any)
            .chain(Status::all().iter().copied().map(Selector::Only))
            .collect::<Vec<_>>();
        let plans = std::iter::once(Selector::Any)
            .chain(Plan::all().iter().copied().map(Selector::Only))
            .collect::<Vec<_>>();

        let mut filters = Vec::new();
        for q in queries {
            for s in &statuses {
                for p in &plans {
                    filters.push(CustomerFilter {
                        query: q.to_string(),
                        status: *s,
                        plan: *p,
                    });
                }
            }
        }
        filters
    }

    #[test]
    fn test_result_is_ordered_subset_for_every_combination() {
        let seed = seed_customers();

        for filter in all_filters() {
            let visible = filter.apply(&seed);
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| seed.iter().position(|s| s == *v).unwrap())
                .collect();

            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "order broken for {:?}",
                filter
            );
            for record in &visible {
                assert!(filter.matches(record));
            }
            // Nothing that matches was dropped
            assert_eq!(
                visible.len(),
                seed.iter().filter(|r| filter.matches(r)).count()
            );
        }
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let seed = seed_customers();
        let visible = CustomerFilter::new().query("no-such-customer").apply(&seed);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let seed = seed_customers();
        let filter = CustomerFilter::new();
        assert!(filter.is_unrestricted());
        assert_eq!(ids(&filter.apply(&seed)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_wildcard_selectors_do_not_narrow() {
        let seed = seed_customers();

        let text_only = CustomerFilter::new().query("o");
        let with_wildcards = CustomerFilter {
            query: "o".to_string(),
            status: Selector::parse("all"),
            plan: Selector::parse("all"),
        };

        assert_eq!(ids(&text_only.apply(&seed)), ids(&with_wildcards.apply(&seed)));
    }

    #[test]
    fn test_query_is_case_insensitive_on_name_and_email() {
        let seed = seed_customers();

        assert_eq!(ids(&CustomerFilter::new().query("SARAH").apply(&seed)), vec![2]);
        assert_eq!(ids(&CustomerFilter::new().query("startup.IO").apply(&seed)), vec![3]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let seed = seed_customers();

        let filter = CustomerFilter::new().status(Status::Active).plan(Plan::Premium);
        assert_eq!(ids(&filter.apply(&seed)), vec![1, 5]);

        let filter = CustomerFilter::new()
            .query("alex")
            .status(Status::Active)
            .plan(Plan::Basic);
        assert!(filter.apply(&seed).is_empty());

        let filter = CustomerFilter::new().plan(Plan::Basic);
        assert_eq!(ids(&filter.apply(&seed)), vec![2, 4]);
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::<Status>::parse("all"), Selector::Any);
        assert_eq!(Selector::<Status>::parse("pending"), Selector::Only(Status::Pending));
        assert_eq!(Selector::<Plan>::parse("Pro"), Selector::Only(Plan::Pro));
        assert_eq!(Selector::<Plan>::parse("Enterprise"), Selector::Any);
        assert_eq!(Selector::Only(Plan::Premium).as_value(), "Premium");
        assert_eq!(Selector::<Plan>::Any.as_value(), "all");
    }
}
