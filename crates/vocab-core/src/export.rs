//! Export — renders normalized records and writes the output file.
//!
//! The rendered document uses two-space indentation and keeps non-ASCII text
//! literal (`"Straße"`, not `"Stra\u00dfe"`). Writes go through a temporary
//! file in the target directory that is persisted over the target only once
//! it is complete.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{NormalizeError, Result};
use crate::types::VocabRecord;

/// Render `records` as a pretty-printed JSON array, without a trailing newline.
pub fn render(records: &[VocabRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render `records` and atomically replace the file at `path` with the result.
pub fn write(path: &Path, records: &[VocabRecord]) -> Result<()> {
    let rendered = render(records)?;
    write_atomic(path, &rendered)
}

/// Write `contents` to `path`. Either the whole document lands or the target
/// is left as it was.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| NormalizeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // NamedTempFile is created 0600; the dataset is meant to be shared.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
