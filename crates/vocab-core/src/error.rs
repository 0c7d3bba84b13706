//! Error types for the normalization pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a normalization run.
///
/// None of these are recovered internally; the binary reports them and exits
/// non-zero without writing the output file.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The input file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not a JSON array of objects.
    #[error("{} is not a JSON array of objects: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A record lacks `id`, `word` or `slug`.
    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A known field holds a JSON value of the wrong type.
    #[error("record {index}: field `{field}` must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    /// An article outside `der`/`die`/`das` under the strict policy.
    #[error("record {index}: article {article:?} is not one of der, die, das")]
    InvalidArticle { index: usize, article: String },

    /// The output file could not be created or replaced.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
