use crate::types::{AmountError, TimestampError, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Transaction row is missing an id")]
    MissingId,
    #[error("Transaction [{transaction_id}] has an invalid amount: {source}")]
    InvalidAmount {
        transaction_id: TransactionId,
        source: AmountError
    },
    #[error("Transaction [{transaction_id}] has an invalid date: {source}")]
    InvalidTimestamp {
        transaction_id: TransactionId,
        source: TimestampError
    }
}

impl RecordError {
    pub fn invalid_amount(transaction_id: &str, source: AmountError) -> Self {
        Self::InvalidAmount {
            transaction_id: transaction_id.to_string(),
            source
        }
    }

    pub fn invalid_timestamp(transaction_id: &str, source: TimestampError) -> Self {
        Self::InvalidTimestamp {
            transaction_id: transaction_id.to_string(),
            source
        }
    }
}
