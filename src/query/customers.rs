use std::collections::BTreeSet;

use crate::models::{CustomerPage, CustomerProfile, TopCustomer};
use crate::query::grouping::{OrderedGroups, Totals};
use crate::query::{PageRequest, QueryEngine};
use crate::types::ClientId;

impl QueryEngine {
    /// Clients ranked by total amount, descending. Equal totals keep the order clients
    /// first appear in storage.
    pub fn top_customers(&self, count: usize) -> Vec<TopCustomer> {
        let mut groups = OrderedGroups::new();

        for record in self.snapshot.records() {
            groups.add(record.client_id, record);
        }

        let mut customers: Vec<TopCustomer> = groups.into_groups().into_iter()
            .map(|(client_id, totals)| TopCustomer {
                client_id,
                total_amount: totals.total_amount(),
                transactions_count: totals.count
            })
            .collect();

        customers.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
        customers.truncate(count);
        customers
    }

    /// Transaction summary for one client, `None` when the client has no transactions.
    pub fn customer_profile(&self, client_id: ClientId) -> Option<CustomerProfile> {
        let totals: Totals = self.snapshot.records().iter()
            .filter(|record| record.client_id == client_id)
            .collect();

        if totals.count == 0 {
            return None;
        }

        Some(CustomerProfile {
            client_id,
            transactions_count: totals.count,
            avg_amount: totals.avg_amount(),
            total_amount: totals.total_amount(),
            fraudulent: totals.fraud_count > 0,
            fraud_count: totals.fraud_count
        })
    }

    /// Distinct client ids in ascending order, paginated.
    pub fn customers(&self, page: PageRequest) -> CustomerPage {
        let client_ids: Vec<ClientId> = self.snapshot.records().iter()
            .map(|record| record.client_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        CustomerPage {
            page: page.page(),
            limit: page.limit(),
            total: client_ids.len(),
            customers: page.slice(&client_ids).iter().map(ClientId::to_string).collect()
        }
    }
}
