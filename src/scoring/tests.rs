use super::{score, FraudScoreRequest};

fn create_request(amount: f64, method: &str, merchant_state: &str, category_code: u32) -> FraudScoreRequest {
    FraudScoreRequest {
        amount,
        method: method.to_string(),
        merchant_state: merchant_state.to_string(),
        category_code
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn test_low_risk_swipe_transaction_scores_zero() {
    let result = score(&create_request(50.0, "Swipe Transaction", "ND", 5411));

    assert_close(result.probability, 0.0);
    assert!(!result.is_fraud);
}

#[test]
fn test_each_rule_contributes_its_weight() {
    assert_close(score(&create_request(50.0, "Online Transaction", "ND", 5411)).probability, 0.3);
    assert_close(score(&create_request(50.0, "Chip Transaction", "ND", 5411)).probability, 0.1);
    assert_close(score(&create_request(1500.0, "Swipe Transaction", "ND", 5411)).probability, 0.3);
    assert_close(score(&create_request(6000.0, "Swipe Transaction", "ND", 5411)).probability, 0.5);
    assert_close(score(&create_request(50.0, "Swipe Transaction", "ND", 5999)).probability, 0.2);
    assert_close(score(&create_request(50.0, "Swipe Transaction", "CA", 5411)).probability, 0.1);
}

#[test]
fn test_amount_thresholds_are_exclusive() {
    assert_close(score(&create_request(1000.0, "Swipe Transaction", "ND", 5411)).probability, 0.0);
    assert_close(score(&create_request(5000.0, "Swipe Transaction", "ND", 5411)).probability, 0.3);
}

#[test]
fn test_probability_exactly_at_threshold_is_not_fraud() {
    let result = score(&create_request(6000.0, "Swipe Transaction", "ND", 5411));

    assert!(!result.is_fraud);
}

#[test]
fn test_high_risk_transaction_is_flagged_and_capped() {
    let result = score(&create_request(9000.0, "Online Transaction", "TX", 5815));

    assert_close(result.probability, 1.0);
    assert!(result.is_fraud);

    let result = score(&create_request(2000.0, "Online Transaction", "FL", 5411));

    assert_close(result.probability, 0.7);
    assert!(result.is_fraud);
}
