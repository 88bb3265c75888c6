mod customers;
mod errors;
mod filters;
mod fraud;
mod grouping;
mod params;
mod stats;
mod transactions;

use std::sync::Arc;

use crate::dataset::{DatasetCache, DatasetError, DatasetSource, Snapshot};

pub use errors::QueryError;
pub use filters::{SearchCriteria, TransactionFilter};
pub use params::{BinCount, PageRequest};

/// Read-only queries over one dataset snapshot.
///
/// Every operation is a pure function of the snapshot: nothing here mutates it, so any
/// number of engines can share the same `Arc<Snapshot>` across threads.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    snapshot: Arc<Snapshot>
}

impl QueryEngine {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }

    /// Binds an engine to the snapshot currently held by `cache`.
    ///
    /// # Errors
    /// Returns `DatasetError::NotReady` if the cache has not been loaded.
    pub async fn from_cache<S: DatasetSource>(cache: &DatasetCache<S>) -> Result<Self, DatasetError> {
        Ok(Self::new(cache.get().await?))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}
