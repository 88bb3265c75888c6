use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AmountError {
    #[error("Amount error: Value is an empty string")]
    Empty,
    #[error("Amount error: {0}")]
    Invalid(String)
}

#[derive(Debug, Clone, Error)]
pub enum TimestampError {
    #[error("Timestamp error: Unrecognized format '{0}'")]
    UnrecognizedFormat(String)
}
