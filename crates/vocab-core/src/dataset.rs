//! Dataset — loads the input JSON array into [`RawRecord`] values.
//!
//! The whole file is read into memory at once. Anything other than a
//! top-level array of objects is rejected before normalization starts.

use std::path::Path;

use crate::error::{NormalizeError, Result};
use crate::types::RawRecord;

/// Read and parse the input file at `path`.
pub fn load(path: &Path) -> Result<Vec<RawRecord>> {
    let data = std::fs::read_to_string(path).map_err(|source| NormalizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&data).map_err(|source| NormalizeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON document whose top-level value is an array of objects.
pub fn parse(data: &str) -> serde_json::Result<Vec<RawRecord>> {
    serde_json::from_str(data)
}
