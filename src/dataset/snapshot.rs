use std::collections::HashMap;

use tracing::warn;

use crate::models::{FraudLabelSet, TransactionRecord};
use crate::types::TransactionId;

/// The loaded, label-merged transaction table.
///
/// Immutable once constructed. Records keep their storage order and are indexed by id
/// for point lookups.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<TransactionRecord>,
    positions: HashMap<TransactionId, usize>
}

impl Snapshot {
    /// Builds a snapshot from records in storage order.
    ///
    /// Ids must be unique: the first record for a given id wins and later duplicates
    /// are dropped with a warning.
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());

        for record in records {
            if positions.contains_key(&record.id) {
                warn!("Duplicate transaction [{}] dropped from snapshot", record.id);
                continue;
            }

            positions.insert(record.id.clone(), unique.len());
            unique.push(record);
        }

        Self {
            records: unique,
            positions
        }
    }

    /// Builds a snapshot after merging `labels` into each record's `is_fraud` flag.
    pub fn with_labels(mut records: Vec<TransactionRecord>, labels: &FraudLabelSet) -> Self {
        for record in records.iter_mut() {
            record.is_fraud = labels.flag_for(&record.id);
        }

        Self::new(records)
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn get(&self, transaction_id: &str) -> Option<&TransactionRecord> {
        self.positions.get(transaction_id).map(|position| &self.records[*position])
    }

    pub fn contains(&self, transaction_id: &str) -> bool {
        self.positions.contains_key(transaction_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fraud_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_fraudulent()).count()
    }
}
