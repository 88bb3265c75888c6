use crate::models::{FraudByMethod, FraudSummary};
use crate::query::grouping::{finite_or_zero, OrderedGroups};
use crate::query::QueryEngine;

impl QueryEngine {
    pub fn fraud_summary(&self) -> FraudSummary {
        let records = self.snapshot.records();
        let total_frauds = self.snapshot.fraud_count();

        let fraud_rate = if records.is_empty() {
            0.0
        } else {
            total_frauds as f64 / records.len() as f64
        };

        let total_fraud_amount: f64 = records.iter()
            .filter(|record| record.is_fraudulent())
            .map(|record| record.amount)
            .sum();

        FraudSummary {
            total_frauds,
            flagged: total_frauds,
            fraud_rate,
            total_fraud_amount: finite_or_zero(total_fraud_amount)
        }
    }

    /// Fraud rate per transaction method, riskiest first.
    pub fn fraud_by_method(&self) -> Vec<FraudByMethod> {
        let mut groups = OrderedGroups::new();

        for record in self.snapshot.records() {
            groups.add(record.method.as_str(), record);
        }

        let mut stats: Vec<FraudByMethod> = groups.into_groups().into_iter()
            .map(|(method, totals)| FraudByMethod {
                method: method.to_string(),
                fraud_rate: totals.fraud_rate(),
                fraud_count: totals.fraud_count,
                total_count: totals.count
            })
            .collect();

        stats.sort_by(|a, b| b.fraud_rate.total_cmp(&a.fraud_rate));
        stats
    }
}
