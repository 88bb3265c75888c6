use super::{FraudLabel, FraudLabelSet, RecordError, TransactionRecord, TransactionRow, UNKNOWN_METHOD};

use anyhow::Result;
use chrono::NaiveDate;

fn create_row(id: &str, date: &str, amount: &str) -> TransactionRow {
    TransactionRow {
        id: id.to_string(),
        date: date.to_string(),
        client_id: 1556,
        card_id: Some(2972),
        amount: amount.to_string(),
        use_chip: Some("Swipe Transaction".to_string()),
        merchant_id: Some(59935),
        merchant_city: Some("Beulah".to_string()),
        merchant_state: Some("ND".to_string()),
        zip: Some("58523.0".to_string()),
        mcc: Some(5499),
        errors: None
    }
}

#[test]
fn test_row_is_normalized_into_record() -> Result<()> {
    let record = TransactionRecord::try_from(create_row(" 7475327 ", "2010-01-01 00:01:00", "$-77.00"))?;

    assert_eq!(record.id, "7475327");
    assert_eq!(record.amount, -77.0);
    assert_eq!(record.method, "Swipe Transaction");
    assert_eq!(record.merchant_state.as_deref(), Some("ND"));
    assert_eq!(record.postal_code, Some(58523.0));
    assert_eq!(record.category_code, Some(5499));
    assert_eq!(record.is_fraud, 0);
    assert_eq!(record.timestamp.date(), NaiveDate::from_ymd_opt(2010, 1, 1).ok_or_else(|| anyhow::anyhow!("bad date"))?);

    Ok(())
}

#[test]
fn test_empty_optional_fields_become_absent() -> Result<()> {
    let mut row = create_row("1", "2010-01-01 00:01:00", "$10.00");
    row.use_chip = Some("  ".to_string());
    row.merchant_city = Some(String::new());
    row.merchant_state = None;
    row.zip = Some("not-a-zip".to_string());
    row.errors = Some("".to_string());
    row.mcc = None;

    let record = TransactionRecord::try_from(row)?;

    assert_eq!(record.method, UNKNOWN_METHOD);
    assert!(record.merchant_city.is_none());
    assert!(record.merchant_state.is_none());
    assert!(record.postal_code.is_none());
    assert!(record.error_flags.is_none());
    assert!(record.category_code.is_none());

    Ok(())
}

#[test]
fn test_error_flags_are_preserved_when_present() -> Result<()> {
    let mut row = create_row("1", "2010-01-01 00:01:00", "$10.00");
    row.errors = Some("Insufficient Balance".to_string());

    let record = TransactionRecord::try_from(row)?;

    assert_eq!(record.error_flags.as_deref(), Some("Insufficient Balance"));

    Ok(())
}

#[test]
fn test_row_with_invalid_required_fields_is_rejected() {
    let result = TransactionRecord::try_from(create_row("1", "2010-01-01 00:01:00", "$abc"));
    assert!(matches!(result, Err(RecordError::InvalidAmount { .. })));

    let result = TransactionRecord::try_from(create_row("2", "not a date", "$1.00"));
    assert!(matches!(result, Err(RecordError::InvalidTimestamp { .. })));

    let result = TransactionRecord::try_from(create_row("   ", "2010-01-01 00:01:00", "$1.00"));
    assert!(matches!(result, Err(RecordError::MissingId)));
}

#[test]
fn test_label_set_deserializes_and_maps_flags() -> Result<()> {
    let labels: FraudLabelSet = serde_json::from_str(r#"{"target": {"1": "Yes", "2": "No", "3": "maybe"}}"#)?;

    assert_eq!(labels.len(), 3);
    assert_eq!(labels.flag_for("1"), 1);
    assert_eq!(labels.flag_for("2"), 0);
    assert_eq!(labels.flag_for("3"), 0);
    assert_eq!(labels.flag_for("404"), 0);

    Ok(())
}

#[test]
fn test_label_set_tolerates_non_string_labels() -> Result<()> {
    let labels: FraudLabelSet = serde_json::from_str(r#"{"target": {"1": "Yes", "2": null, "3": 1, "4": true, "5": ["Yes"]}}"#)?;

    assert_eq!(labels.len(), 5);
    assert_eq!(labels.flag_for("1"), 1);
    assert!(["2", "3", "4", "5"].iter().all(|id| labels.flag_for(id) == 0));

    Ok(())
}

#[test]
fn test_label_set_without_target_is_empty() -> Result<()> {
    let labels: FraudLabelSet = serde_json::from_str("{}")?;

    assert!(labels.is_empty());

    let mut labels = FraudLabelSet::new();
    labels.insert("9", FraudLabel::Yes);

    assert_eq!(labels.flag_for("9"), 1);

    Ok(())
}

#[test]
fn test_record_serializes_timestamp_in_source_format() -> Result<()> {
    let record = TransactionRecord::try_from(create_row("1", "2010-01-01T00:01:00", "$10.00"))?;
    let json = serde_json::to_value(&record)?;

    assert_eq!(json["timestamp"], "2010-01-01 00:01:00");
    assert_eq!(json["merchant_city"], "Beulah");
    assert!(json["error_flags"].is_null());

    Ok(())
}
