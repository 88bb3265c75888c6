use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use serde_json::Value;

fn run_report(transactions: &Path, labels: &Path) -> Result<Value> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-query");

    let output = Command::new(binary_path)
        .arg(transactions)
        .arg(labels)
        .output()?;

    assert!(output.status.success());

    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_cli_reports_statistics_for_the_sample_dataset() -> Result<()> {
    let samples = Path::new("samples");
    let report = run_report(&samples.join("transactions.csv"), &samples.join("fraud_labels.json"))?;

    assert_eq!(report["health"]["status"], "ok");
    assert_eq!(report["health"]["dataset_loaded"], true);
    assert_eq!(report["health"]["dataset_size"], 19);

    assert_eq!(report["overview"]["total_transactions"], 19);
    assert_eq!(report["overview"]["most_common_method"], "Swipe Transaction");

    assert_eq!(report["fraud_summary"]["total_frauds"], 3);
    assert_eq!(report["fraud_summary"]["flagged"], 3);

    let fraud_amount = report["fraud_summary"]["total_fraud_amount"].as_f64()
        .ok_or_else(|| anyhow!("total_fraud_amount missing from report"))?;
    assert!((fraud_amount - 1327.16).abs() < 1e-6);

    let top_customers = report["top_customers"].as_array()
        .ok_or_else(|| anyhow!("top_customers missing from report"))?;
    assert_eq!(top_customers.len(), 5);
    assert_eq!(top_customers[0]["client_id"], 1556);
    assert_eq!(top_customers[0]["transactions_count"], 3);

    let methods = report["stats_by_method"].as_array()
        .ok_or_else(|| anyhow!("stats_by_method missing from report"))?;
    assert_eq!(methods[0]["method"], "Swipe Transaction");

    Ok(())
}

#[test]
fn test_cli_loads_without_a_label_file() -> Result<()> {
    let samples = Path::new("samples");
    let report = run_report(&samples.join("transactions.csv"), &samples.join("missing_labels.json"))?;

    assert_eq!(report["health"]["status"], "ok");
    assert_eq!(report["fraud_summary"]["total_frauds"], 0);
    assert_eq!(report["overview"]["fraud_rate"], 0.0);

    Ok(())
}

#[test]
fn test_cli_starts_degraded_when_the_dataset_is_missing() -> Result<()> {
    let samples = Path::new("samples");
    let report = run_report(&samples.join("missing.csv"), &samples.join("fraud_labels.json"))?;

    assert_eq!(report["health"]["status"], "degraded");
    assert_eq!(report["health"]["dataset_loaded"], false);
    assert_eq!(report["health"]["dataset_size"], 0);
    assert!(report.get("overview").is_none());
    assert!(report["metadata"]["version"].is_string());

    Ok(())
}
