//! Atomic file replacement

use std::fs;
use std::path::Path;

use crate::errors::{io_error, Result};

/// Write `contents` to `path` through a temp file and rename
///
/// The rename makes the replacement atomic on one filesystem: a reader sees
/// either the previous file or the new one, never a truncated mix. Missing
/// parent directories are created first.
///
/// # Errors
/// * `Io` - Directory creation, temp write, or rename failed
pub fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents).map_err(|e| io_error("write_order_temp", e))?;
    fs::rename(&tmp, path).map_err(|e| io_error("rename_order_temp", e))?;

    Ok(())
}
