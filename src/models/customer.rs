use serde::Serialize;

use crate::types::ClientId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCustomer {
    pub client_id: ClientId,
    pub total_amount: f64,
    pub transactions_count: usize
}

/// Transaction summary for one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProfile {
    pub client_id: ClientId,
    pub transactions_count: usize,
    pub avg_amount: f64,
    pub total_amount: f64,
    /// True when at least one of the client's transactions is labelled as fraud.
    pub fraudulent: bool,
    pub fraud_count: usize
}

/// Paginated list of distinct client ids, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerPage {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub customers: Vec<String>
}
