use std::sync::Arc;
use std::time::Instant;

use moka::future::Cache;
use tokio::task::spawn_blocking;
use tracing::{error, info};

use crate::dataset::{DatasetConfig, DatasetError, DatasetSource, FileDatasetSource, Snapshot};

const SNAPSHOT_KEY: &str = "snapshot";

/// Process-wide holder of the dataset snapshot.
///
/// Constructed once by the entry point and shared by reference (or `Arc`) with every
/// caller. The snapshot is read at most once per lifetime of the cached entry:
/// concurrent first calls to `load` are coalesced onto a single read, and all of them
/// observe the same snapshot or the same error. Failed loads are not cached.
pub struct DatasetCache<S: DatasetSource = FileDatasetSource> {
    source: Arc<S>,
    snapshots: Cache<&'static str, Arc<Snapshot>>
}

impl DatasetCache<FileDatasetSource> {
    /// Creates a cache backed by the CSV and label files named in `config`.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(FileDatasetSource::new(config))
    }
}

impl<S: DatasetSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            snapshots: Cache::builder()
                .name("dataset-snapshot")
                .build()
        }
    }

    /// Returns the cached snapshot, reading it from the source on first use.
    ///
    /// # Errors
    /// Returns `DatasetError::NotFound` when the primary transaction source is missing,
    /// `DatasetError::Read` when it exists but cannot be read. A missing label set is
    /// never an error.
    pub async fn load(&self) -> Result<Arc<Snapshot>, DatasetError> {
        self.snapshots.try_get_with(SNAPSHOT_KEY, self.read_snapshot()).await
            .map_err(|error| (*error).clone())
    }

    /// Returns the cached snapshot without ever touching storage.
    ///
    /// # Errors
    /// Returns `DatasetError::NotReady` if no load has completed since construction
    /// or the last `clear`.
    pub async fn get(&self) -> Result<Arc<Snapshot>, DatasetError> {
        self.snapshots.get(&SNAPSHOT_KEY).await
            .ok_or(DatasetError::NotReady)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshots.contains_key(&SNAPSHOT_KEY)
    }

    /// Drops the cached snapshot so the next `load` reads from the source again.
    pub async fn clear(&self) {
        self.snapshots.invalidate(&SNAPSHOT_KEY).await;
        info!("Dataset cache cleared");
    }

    /// Replaces the cached snapshot with one built elsewhere (fixtures, warm starts).
    pub async fn install(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        self.snapshots.insert(SNAPSHOT_KEY, snapshot.clone()).await;
        snapshot
    }

    async fn read_snapshot(&self) -> Result<Arc<Snapshot>, DatasetError> {
        let source = self.source.clone();
        let timer = Instant::now();

        info!("Loading transaction dataset");

        let result = spawn_blocking(move || source.read()).await
            .map_err(|error| DatasetError::Task(error.to_string()))
            .and_then(|result| result);

        match result {
            Ok(snapshot) => {
                info!(
                    records = snapshot.len(),
                    frauds = snapshot.fraud_count(),
                    "Loaded transaction dataset in {:?}", timer.elapsed()
                );
                Ok(Arc::new(snapshot))
            }
            Err(error) => {
                error!("{error}");
                Err(error)
            }
        }
    }
}
