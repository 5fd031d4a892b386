//! Atomic file replacement
//!
//! Writes go to a sibling temp file which is then renamed over the target, so
//! a reader never sees a half-written blob.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Replace `target_path` with `content` in one rename
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_kv_dir", e))?;
    }

    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_kv_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_kv_temp", e))?;

    Ok(())
}
