mod amount;
mod errors;
#[cfg(test)]
mod tests;
mod timestamp;

pub use amount::parse_amount;
pub use errors::{AmountError, TimestampError};
pub use timestamp::{parse_timestamp, serialize_timestamp, TIMESTAMP_FORMAT};

pub type TransactionId = String;
pub type ClientId = u32;
pub type CardId = u32;
pub type MerchantId = u32;
pub type CategoryCode = u32;
