use std::path::PathBuf;

/// Failures while loading a catalogue snapshot from disk.
///
/// Load failures are fatal to the snapshot; resolution failures at runtime
/// use [`onko_model::DataAccessError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalogue CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("catalogue CSV {path} is missing column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("catalogue CSV {path} row {row}: {message}")]
    InvalidRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

impl CatalogueError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
