mod fraud_scorer;
#[cfg(test)]
mod tests;

pub use fraud_scorer::{score, FraudScore, FraudScoreRequest, FRAUD_THRESHOLD, RISKY_CATEGORY_CODES, RISKY_STATES};
