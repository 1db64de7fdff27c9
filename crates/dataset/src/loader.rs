use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::sample;
use crate::types::Dataset;

/// Where a loaded dataset actually came from.
///
/// Surfaced to operators instead of being swallowed: a process serving
/// fallback data is healthy but should be visible as such.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// Parsed from the primary data file.
    Primary,
    /// Primary file missing or corrupt; deterministic sample data generated.
    Fallback,
}

/// A process-scoped, read-only dataset handle plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub data: Arc<Dataset>,
    pub origin: DatasetOrigin,
}

#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            DatasetError::Parse { path, source } => {
                write!(f, "failed to parse dataset {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// Strict load: parse the primary data file or report why it could not be.
pub fn load_file(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| DatasetError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the dataset for the lifetime of the process.
///
/// Never fails: a missing or corrupt primary file falls back to the
/// deterministic sample generator. The outcome is reported both in the
/// returned [`DatasetOrigin`] and through tracing.
pub fn load_or_fallback(path: impl AsRef<Path>) -> LoadedDataset {
    let path = path.as_ref();
    match load_file(path) {
        Ok(data) => {
            info!(
                path = %path.display(),
                states = data.states.len(),
                cities = data.cities.len(),
                metrics = data.metrics.len(),
                "dataset loaded from primary file"
            );
            LoadedDataset {
                data: Arc::new(data),
                origin: DatasetOrigin::Primary,
            }
        }
        Err(e) => {
            warn!(error = %e, "primary dataset unavailable, generating sample data");
            LoadedDataset {
                data: Arc::new(sample::generate()),
                origin: DatasetOrigin::Fallback,
            }
        }
    }
}
