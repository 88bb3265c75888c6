mod customer;
mod errors;
mod labels;
mod stats;
#[cfg(test)]
mod tests;
mod transaction;

pub use customer::{CustomerPage, CustomerProfile, TopCustomer};
pub use errors::RecordError;
pub use labels::{FraudLabel, FraudLabelSet};
pub use stats::{AmountHistogram, DailyStats, FraudByMethod, FraudSummary, MethodStats, StatsOverview};
pub use transaction::{TransactionPage, TransactionRecord, TransactionRow};

/// Method recorded for transactions whose source row has no `use_chip` value.
pub const UNKNOWN_METHOD: &str = "Unknown";
