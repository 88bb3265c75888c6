use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::errors::RecordError;
use crate::models::UNKNOWN_METHOD;
use crate::types::{
    parse_amount, parse_timestamp, serialize_timestamp, CardId, CategoryCode, ClientId, MerchantId, TransactionId
};

/// Represents a single row from the transactions CSV file.
///
/// This struct captures the raw column values before normalization. `client_id` is typed
/// so that the CSV reader rejects rows without a client. Blank or malformed card, merchant
/// and category columns read as absent instead of rejecting the row. Everything that
/// needs cleanup (amount, date, optional text) is kept as text and normalized by
/// `TransactionRecord::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub client_id: ClientId,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub card_id: Option<CardId>,
    pub amount: String,
    pub use_chip: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub merchant_id: Option<MerchantId>,
    pub merchant_city: Option<String>,
    pub merchant_state: Option<String>,
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub mcc: Option<CategoryCode>,
    pub errors: Option<String>
}

/// A normalized transaction as held in the dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Unique transaction identifier.
    pub id: TransactionId,
    /// When the transaction happened. Storage order is not sorted by this.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub client_id: ClientId,
    pub card_id: Option<CardId>,
    /// Signed amount, already stripped of currency formatting.
    pub amount: f64,
    /// Transaction method (Swipe, Chip, Online), or `Unknown` when the source had none.
    pub method: String,
    pub merchant_id: Option<MerchantId>,
    pub merchant_city: Option<String>,
    pub merchant_state: Option<String>,
    pub postal_code: Option<f64>,
    /// Merchant category code.
    pub category_code: Option<CategoryCode>,
    pub error_flags: Option<String>,
    /// 1 when the label set marks this transaction as fraud, 0 otherwise.
    pub is_fraud: u8
}

impl TransactionRecord {
    /// Creates a record with the mandatory fields set and every optional field absent.
    pub fn new(id: impl Into<TransactionId>, timestamp: NaiveDateTime, client_id: ClientId, amount: f64, method: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            client_id,
            card_id: None,
            amount,
            method: method.into(),
            merchant_id: None,
            merchant_city: None,
            merchant_state: None,
            postal_code: None,
            category_code: None,
            error_flags: None,
            is_fraud: 0
        }
    }

    pub fn with_fraud(mut self, is_fraud: bool) -> Self {
        self.is_fraud = u8::from(is_fraud);
        self
    }

    pub fn with_merchant(mut self, city: Option<&str>, state: Option<&str>) -> Self {
        self.merchant_city = city.map(str::to_string);
        self.merchant_state = state.map(str::to_string);
        self
    }

    pub fn is_fraudulent(&self) -> bool {
        self.is_fraud == 1
    }
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = RecordError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let id = row.id.trim().to_string();

        if id.is_empty() {
            return Err(RecordError::MissingId);
        }

        let amount = parse_amount(&row.amount)
            .map_err(|error| RecordError::invalid_amount(&id, error))?;
        let timestamp = parse_timestamp(&row.date)
            .map_err(|error| RecordError::invalid_timestamp(&id, error))?;

        Ok(Self {
            timestamp,
            client_id: row.client_id,
            card_id: row.card_id,
            amount,
            method: present(row.use_chip).unwrap_or_else(|| UNKNOWN_METHOD.to_string()),
            merchant_id: row.merchant_id,
            merchant_city: present(row.merchant_city),
            merchant_state: present(row.merchant_state),
            postal_code: present(row.zip).and_then(|zip| zip.parse().ok()),
            category_code: row.mcc,
            error_flags: present(row.errors),
            is_fraud: 0,
            id
        })
    }
}

/// Paginated slice of a filtered working set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPage {
    pub page: usize,
    pub limit: usize,
    /// Size of the working set before pagination.
    pub total: usize,
    pub records: Vec<TransactionRecord>
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
