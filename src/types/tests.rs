use super::{parse_amount, parse_timestamp, AmountError};
use anyhow::Result;
use chrono::{Datelike, Timelike};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0), "expected {expected}, got {actual}");
}

#[test]
fn test_amount_successfully_parses_currency_formatted_strings() -> Result<()> {
    let test_cases = vec![
        ("$-77.00", -77.0),
        ("$14.57", 14.57),
        ("$1,234.50", 1234.5),
        ("  $80.00  ", 80.0),
        ("-$5.25", -5.25),
        ("9839.64", 9839.64),
        ("100", 100.0),
        ("$12,345,678.90", 12345678.9),
    ];

    for (input_string, expected_output) in test_cases {
        assert_close(parse_amount(input_string)?, expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(matches!(parse_amount(""), Err(AmountError::Empty)));
    assert!(matches!(parse_amount("   "), Err(AmountError::Empty)));
    assert!(matches!(parse_amount("$"), Err(AmountError::Invalid(_))));
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("1.2.3").is_err());
}

#[test]
fn test_timestamp_parses_supported_formats() -> Result<()> {
    let timestamp = parse_timestamp("2010-01-01 00:01:00")?;

    assert_eq!(timestamp.year(), 2010);
    assert_eq!(timestamp.minute(), 1);

    assert_eq!(parse_timestamp("2010-01-01T00:01:00")?, timestamp);
    assert_eq!(parse_timestamp("2010-01-01 00:01")?, timestamp);
    assert_eq!(parse_timestamp("2010-03-04")?.hour(), 0);

    Ok(())
}

#[test]
fn test_timestamp_rejects_unrecognized_values() {
    assert!(parse_timestamp("").is_err());
    assert!(parse_timestamp("01/01/2010").is_err());
    assert!(parse_timestamp("yesterday").is_err());
}
