mod cache;
mod errors;
mod snapshot;
mod source;

pub use cache::DatasetCache;
pub use errors::DatasetError;
pub use snapshot::Snapshot;
pub use source::{DatasetConfig, FileDatasetSource, DEFAULT_LABELS_PATH, DEFAULT_TRANSACTIONS_PATH};

/// Produces a fully normalized, label-merged snapshot from backing storage.
///
/// `read` is blocking and is only ever invoked from a blocking task by `DatasetCache`.
pub trait DatasetSource: Send + Sync + 'static {
    fn read(&self) -> Result<Snapshot, DatasetError>;
}
