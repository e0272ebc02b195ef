//! Report persistence.

use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Write `report` as pretty JSON to `dir/file_name`, creating `dir` if needed.
/// Non-ASCII text is written as-is.
pub fn write_report<T: Serialize>(dir: &Path, file_name: &str, report: &T) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let path = dir.join(file_name);
    let mut body = serde_json::to_string_pretty(report)?;
    body.push('\n');
    std::fs::write(&path, body).map_err(|e| Error::io(&path, e))?;

    tracing::info!(path = %path.display(), "wrote report");
    Ok(path)
}
