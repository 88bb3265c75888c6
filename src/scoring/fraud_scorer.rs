use serde::{Deserialize, Serialize};

use crate::types::CategoryCode;

/// Merchant categories treated as high risk (miscellaneous retail, digital goods, telemarketing, drug stores).
pub const RISKY_CATEGORY_CODES: [CategoryCode; 4] = [5999, 5815, 5962, 5912];
pub const RISKY_STATES: [&str; 4] = ["CA", "FL", "NY", "TX"];
/// Probabilities strictly above this are classified as fraud.
pub const FRAUD_THRESHOLD: f64 = 0.5;

const ONLINE_WEIGHT: f64 = 0.3;
const CHIP_WEIGHT: f64 = 0.1;
const HIGH_AMOUNT: f64 = 1000.0;
const HIGH_AMOUNT_WEIGHT: f64 = 0.3;
const VERY_HIGH_AMOUNT: f64 = 5000.0;
const VERY_HIGH_AMOUNT_WEIGHT: f64 = 0.2;
const RISKY_CATEGORY_WEIGHT: f64 = 0.2;
const RISKY_STATE_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FraudScoreRequest {
    pub amount: f64,
    pub method: String,
    pub merchant_state: String,
    pub category_code: CategoryCode
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FraudScore {
    pub is_fraud: bool,
    /// Sum of the matched rule weights, capped at 1.0.
    pub probability: f64
}

/// Rule-based fraud score for a single transaction.
///
/// Stateless: the same request always yields the same score.
pub fn score(request: &FraudScoreRequest) -> FraudScore {
    let mut total = 0.0;

    if request.method.contains("Online") {
        total += ONLINE_WEIGHT;
    } else if request.method.contains("Chip") {
        total += CHIP_WEIGHT;
    }

    if request.amount > HIGH_AMOUNT {
        total += HIGH_AMOUNT_WEIGHT;
    }

    if request.amount > VERY_HIGH_AMOUNT {
        total += VERY_HIGH_AMOUNT_WEIGHT;
    }

    if RISKY_CATEGORY_CODES.contains(&request.category_code) {
        total += RISKY_CATEGORY_WEIGHT;
    }

    if RISKY_STATES.contains(&request.merchant_state.as_str()) {
        total += RISKY_STATE_WEIGHT;
    }

    let probability = f64::min(total, 1.0);

    FraudScore {
        is_fraud: probability > FRAUD_THRESHOLD,
        probability
    }
}
