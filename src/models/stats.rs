use chrono::NaiveDate;
use serde::Serialize;

/// Dataset-wide totals and averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsOverview {
    pub total_transactions: usize,
    /// Fraction of transactions labelled as fraud, 0 for an empty dataset.
    pub fraud_rate: f64,
    pub avg_amount: f64,
    /// Mode of the transaction method; ties go to the first method seen in storage order.
    pub most_common_method: String,
    pub total_amount: f64
}

/// Equal-width histogram over the full range of amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountHistogram {
    /// `"<low>-<high>"` per bin, bounds truncated to integers.
    pub bin_labels: Vec<String>,
    pub counts: Vec<usize>
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodStats {
    pub method: String,
    pub count: usize,
    pub avg_amount: f64,
    pub total_amount: f64,
    pub fraud_rate: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub count: usize,
    pub avg_amount: f64,
    pub total_amount: f64,
    pub fraud_count: usize
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudSummary {
    pub total_frauds: usize,
    /// Always equal to `total_frauds`: the dataset carries no independent flagging signal.
    pub flagged: usize,
    pub fraud_rate: f64,
    pub total_fraud_amount: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudByMethod {
    pub method: String,
    pub fraud_rate: f64,
    pub fraud_count: usize,
    pub total_count: usize
}
