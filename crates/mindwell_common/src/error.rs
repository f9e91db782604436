//! Dataset loading errors

use std::path::PathBuf;

/// Errors raised while loading a CSV dataset into a typed table.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("required table '{0}' is not available")]
    MissingTable(String),
}
