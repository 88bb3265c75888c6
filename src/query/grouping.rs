use std::collections::HashMap;
use std::hash::Hash;

use crate::models::TransactionRecord;

/// Running count, amount sum and fraud count for one group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Totals {
    pub count: usize,
    pub total_amount: f64,
    pub fraud_count: usize
}

impl Totals {
    pub fn add(&mut self, record: &TransactionRecord) {
        self.count += 1;
        self.total_amount += record.amount;
        self.fraud_count += usize::from(record.is_fraud);
    }

    pub fn total_amount(&self) -> f64 {
        finite_or_zero(self.total_amount)
    }

    pub fn avg_amount(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        finite_or_zero(self.total_amount / self.count as f64)
    }

    pub fn fraud_rate(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        self.fraud_count as f64 / self.count as f64
    }
}

impl<'a> FromIterator<&'a TransactionRecord> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a TransactionRecord>>(records: I) -> Self {
        let mut totals = Totals::default();

        for record in records {
            totals.add(record);
        }

        totals
    }
}

/// Single-pass grouped accumulation that remembers the order groups were discovered in.
pub(crate) struct OrderedGroups<K> {
    positions: HashMap<K, usize>,
    groups: Vec<(K, Totals)>
}

impl<K: Hash + Eq + Clone> OrderedGroups<K> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            groups: Vec::new()
        }
    }

    pub fn add(&mut self, key: K, record: &TransactionRecord) {
        let position = match self.positions.get(&key) {
            Some(position) => *position,
            None => {
                self.positions.insert(key.clone(), self.groups.len());
                self.groups.push((key, Totals::default()));
                self.groups.len() - 1
            }
        };

        self.groups[position].1.add(record);
    }

    pub fn into_groups(self) -> Vec<(K, Totals)> {
        self.groups
    }
}

/// NaN and infinities never leave an aggregate.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
