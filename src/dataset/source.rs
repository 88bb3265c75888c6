use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, error, warn};

use crate::dataset::{DatasetError, DatasetSource, Snapshot};
use crate::models::{FraudLabelSet, TransactionRecord, TransactionRow};

pub const DEFAULT_TRANSACTIONS_PATH: &str = "data/transactions_data.csv";
pub const DEFAULT_LABELS_PATH: &str = "data/train_fraud_labels.json";

/// Locations of the transaction CSV and the optional fraud label JSON.
///
/// Unset paths resolve to the conventional `data/` locations.
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    pub transactions_path: Option<PathBuf>,
    pub labels_path: Option<PathBuf>
}

impl DatasetConfig {
    pub fn new(transactions_path: Option<PathBuf>, labels_path: Option<PathBuf>) -> Self {
        Self {
            transactions_path,
            labels_path
        }
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.transactions_path.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSACTIONS_PATH))
    }

    pub fn labels_path(&self) -> PathBuf {
        self.labels_path.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LABELS_PATH))
    }
}

/// Reads the dataset from a CSV file of transactions and a JSON file of fraud labels.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    transactions_path: PathBuf,
    labels_path: PathBuf
}

impl FileDatasetSource {
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            transactions_path: config.transactions_path(),
            labels_path: config.labels_path()
        }
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }

    fn read_transactions(&self) -> Result<Vec<TransactionRecord>, DatasetError> {
        let path = &self.transactions_path;

        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(DatasetError::not_found(path));
            }
            Err(error) => {
                error!("Error opening transactions CSV at path: {} | {error}", path.display());
                return Err(DatasetError::read(path, error));
            }
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        reader.headers().map_err(|error| DatasetError::read(path, error))?;

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for result in reader.deserialize::<TransactionRow>() {
            let row = match result {
                Ok(row) => row,
                Err(error) => {
                    debug!("CSV deserialization error: {error}");
                    skipped += 1;
                    continue;
                }
            };

            match TransactionRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(error) => {
                    debug!("{error}");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {skipped} malformed transaction rows in {}", path.display());
        }

        Ok(records)
    }

    fn read_labels(&self) -> FraudLabelSet {
        let path = &self.labels_path;

        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) => {
                warn!("Fraud labels unavailable at {} ({error}), every transaction defaults to not fraud", path.display());
                return FraudLabelSet::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(labels) => labels,
            Err(error) => {
                warn!("Fraud labels at {} are malformed ({error}), every transaction defaults to not fraud", path.display());
                FraudLabelSet::new()
            }
        }
    }
}

impl DatasetSource for FileDatasetSource {
    fn read(&self) -> Result<Snapshot, DatasetError> {
        let records = self.read_transactions()?;
        let labels = self.read_labels();

        debug!("Merging {} fraud labels into {} transactions", labels.len(), records.len());

        Ok(Snapshot::with_labels(records, &labels))
    }
}
