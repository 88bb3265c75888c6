use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{TransactionPage, TransactionRecord};
use crate::query::filters::Predicate;
use crate::query::{PageRequest, QueryEngine, SearchCriteria, TransactionFilter};
use crate::types::ClientId;

impl QueryEngine {
    /// Lists transactions matching `filter`, one page at a time.
    pub fn list_transactions(&self, filter: &TransactionFilter, page: PageRequest) -> TransactionPage {
        self.paginate(Predicate::from(filter), page)
    }

    /// Searches with structured criteria. Callers validate `criteria` first; an inverted
    /// range that slips through simply matches nothing.
    pub fn search_transactions(&self, criteria: &SearchCriteria, page: PageRequest) -> TransactionPage {
        self.paginate(Predicate::from(criteria), page)
    }

    pub fn transaction_by_id(&self, transaction_id: &str) -> Option<&TransactionRecord> {
        self.snapshot.get(transaction_id)
    }

    /// All transactions of one client, in storage order.
    pub fn transactions_by_client(&self, client_id: ClientId) -> Vec<&TransactionRecord> {
        self.snapshot.records().iter()
            .filter(|record| record.client_id == client_id)
            .collect()
    }

    /// The `count` most recent transactions, newest first. Equal timestamps keep storage order.
    pub fn recent_transactions(&self, count: usize) -> Vec<&TransactionRecord> {
        let mut records: Vec<&TransactionRecord> = self.snapshot.records().iter().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(count);
        records
    }

    /// Distinct transaction methods, sorted.
    pub fn transaction_methods(&self) -> Vec<String> {
        self.snapshot.records().iter()
            .map(|record| record.method.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Simulated delete: reports whether the transaction exists. The snapshot is left untouched.
    pub fn delete_transaction(&self, transaction_id: &str) -> bool {
        let exists = self.snapshot.contains(transaction_id);
        debug!("Simulated delete of transaction [{transaction_id}], exists: {exists}");
        exists
    }

    fn paginate(&self, predicate: Predicate<'_>, page: PageRequest) -> TransactionPage {
        let working_set = predicate.select(self.snapshot.records());
        let records = page.slice(&working_set).iter().map(|record| (*record).clone()).collect();

        debug!("Matched {} transactions, returning page {}", working_set.len(), page.page());

        TransactionPage {
            page: page.page(),
            limit: page.limit(),
            total: working_set.len(),
            records
        }
    }
}
