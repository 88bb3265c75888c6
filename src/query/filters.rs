use serde::Deserialize;

use crate::models::TransactionRecord;
use crate::query::QueryError;
use crate::types::ClientId;

/// Filters accepted by the transaction listing. All provided filters are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the transaction method.
    pub method: Option<String>,
    pub is_fraud: Option<u8>,
    /// Inclusive lower bound on amount.
    pub min_amount: Option<f64>,
    /// Inclusive upper bound on amount.
    pub max_amount: Option<f64>,
    pub merchant_state: Option<String>
}

/// Structured search criteria. Same semantics as `TransactionFilter`, plus client and
/// city matching and an inclusive `[min, max]` amount range.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub method: Option<String>,
    pub is_fraud: Option<u8>,
    pub amount_range: Option<(f64, f64)>,
    pub client_id: Option<ClientId>,
    pub merchant_state: Option<String>,
    pub merchant_city: Option<String>
}

impl SearchCriteria {
    /// Rejects criteria that can never be satisfied because they are malformed.
    ///
    /// # Errors
    /// Returns `QueryError::InvalidArgument` when `amount_range` has `min > max` (or a
    /// NaN bound) or when `is_fraud` is not 0 or 1.
    pub fn validate(&self) -> Result<(), QueryError> {
        if let Some((min, max)) = self.amount_range {
            if !(min <= max) {
                return Err(QueryError::invalid_argument("amount_range min must be <= max"));
            }
        }

        if let Some(flag) = self.is_fraud {
            if flag > 1 {
                return Err(QueryError::invalid_argument("is_fraud must be 0 or 1"));
            }
        }

        Ok(())
    }
}

/// Compiled form of a filter, evaluated once per record.
pub(crate) struct Predicate<'a> {
    method: Option<String>,
    is_fraud: Option<u8>,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
    client_id: Option<ClientId>,
    merchant_state: Option<&'a str>,
    merchant_city: Option<&'a str>
}

impl Predicate<'_> {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if let Some(needle) = &self.method {
            if !record.method.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        if self.is_fraud.is_some_and(|flag| record.is_fraud != flag) {
            return false;
        }

        if self.min_amount.is_some_and(|min| record.amount < min) {
            return false;
        }

        if self.max_amount.is_some_and(|max| record.amount > max) {
            return false;
        }

        if self.client_id.is_some_and(|client_id| record.client_id != client_id) {
            return false;
        }

        if self.merchant_state.is_some_and(|state| record.merchant_state.as_deref() != Some(state)) {
            return false;
        }

        if self.merchant_city.is_some_and(|city| record.merchant_city.as_deref() != Some(city)) {
            return false;
        }

        true
    }

    /// Returns the working set: matching records in storage order.
    pub fn select<'r>(&self, records: &'r [TransactionRecord]) -> Vec<&'r TransactionRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

impl<'a> From<&'a TransactionFilter> for Predicate<'a> {
    fn from(filter: &'a TransactionFilter) -> Self {
        Self {
            method: text(&filter.method).map(str::to_lowercase),
            is_fraud: filter.is_fraud,
            min_amount: filter.min_amount,
            max_amount: filter.max_amount,
            client_id: None,
            merchant_state: text(&filter.merchant_state),
            merchant_city: None
        }
    }
}

impl<'a> From<&'a SearchCriteria> for Predicate<'a> {
    fn from(criteria: &'a SearchCriteria) -> Self {
        Self {
            method: text(&criteria.method).map(str::to_lowercase),
            is_fraud: criteria.is_fraud,
            min_amount: criteria.amount_range.map(|(min, _)| min),
            max_amount: criteria.amount_range.map(|(_, max)| max),
            client_id: criteria.client_id,
            merchant_state: text(&criteria.merchant_state),
            merchant_city: text(&criteria.merchant_city)
        }
    }
}

// An empty text filter means "not filtering".
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
