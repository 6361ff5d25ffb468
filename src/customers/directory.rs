//! Customer data access
//!
//! [`CustomerDirectory`] is the seam a real data source would plug into.
//! The only implementation today is [`StaticDirectory`], backed by seed data.

use super::filter::CustomerFilter;
use super::seed::seed_customers;
use super::types::CustomerRecord;

/// Read-only access to customer records
pub trait CustomerDirectory {
    /// Every record, in directory order
    fn all(&self) -> &[CustomerRecord];

    /// Look up a record by id
    fn find(&self, id: u32) -> Option<&CustomerRecord> {
        self.all().iter().find(|c| c.id == id)
    }

    /// Records passing `filter`, in directory order
    fn filter(&self, filter: &CustomerFilter) -> Vec<&CustomerRecord> {
        filter.apply(self.all())
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// In-memory directory over a fixed record set
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    records: Vec<CustomerRecord>,
}

impl StaticDirectory {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    /// Directory over the built-in sample customers
    pub fn seeded() -> Self {
        Self::new(seed_customers())
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CustomerDirectory for StaticDirectory {
    fn all(&self) -> &[CustomerRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::types::Status;

    #[test]
    fn test_find() {
        let directory = StaticDirectory::seeded();
        assert_eq!(directory.find(3).map(|c| c.name.as_str()), Some("Mike Wilson"));
        assert!(directory.find(42).is_none());
    }

    #[test]
    fn test_filter_delegates_to_customer_filter() {
        let directory = StaticDirectory::seeded();
        let pending = directory.filter(&CustomerFilter::new().status(Status::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].email, "mike@startup.io");
    }

    #[test]
    fn test_empty_directory() {
        let directory = StaticDirectory::new(Vec::new());
        assert!(directory.is_empty());
        assert!(directory.filter(&CustomerFilter::new()).is_empty());
    }
}
