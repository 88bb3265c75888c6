use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::types::TransactionId;

/// Categorical fraud label from the external label file.
///
/// Only the literal string `Yes` marks a transaction as fraud. Any other value, including
/// `null`, numbers and booleans, reads as `No` without failing the rest of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum FraudLabel {
    Yes,
    No
}

impl FraudLabel {
    pub fn as_flag(self) -> u8 {
        match self {
            FraudLabel::Yes => 1,
            FraudLabel::No => 0
        }
    }
}

impl From<Value> for FraudLabel {
    fn from(value: Value) -> Self {
        if value.as_str() == Some("Yes") { FraudLabel::Yes } else { FraudLabel::No }
    }
}

/// Side table mapping transaction id to fraud label, merged into the snapshot at load.
///
/// Deserializes from `{"target": {"<id>": "Yes" | "No"}}`. A missing `target` key
/// yields an empty set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FraudLabelSet {
    #[serde(default)]
    target: HashMap<TransactionId, FraudLabel>
}

impl FraudLabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transaction_id: impl Into<TransactionId>, label: FraudLabel) {
        self.target.insert(transaction_id.into(), label);
    }

    /// Returns the `is_fraud` flag for a transaction, defaulting to 0 when unlabelled.
    pub fn flag_for(&self, transaction_id: &str) -> u8 {
        self.target.get(transaction_id).map_or(0, |label| label.as_flag())
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}
