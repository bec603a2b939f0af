//! Disk I/O for the inventory file: one whole-file read, one rename-over
//! write.
//!
//! Rename-over keeps a crashed save from corrupting the previous file on
//! common filesystems. FAT32 and network shares make weaker promises; if the
//! inventory file matters that much, keep a backup copy.

use crate::error::{Error, Result};
use std::path::Path;

/// Read the whole file at `path`. A missing or unreadable file is an
/// [`Error::Io`] — unlike a database that auto-creates, loading an inventory
/// that isn't there is a caller mistake worth surfacing.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
}

/// Write `bytes` next to `path` (same directory, `.tmp` suffix) and rename
/// into place, so readers only ever see the old file or the complete new one.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    std::fs::write(&tmp, bytes).map_err(|e| Error::Io(format!("{}: {e}", tmp.display())))?;
    std::fs::rename(&tmp, path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    Ok(())
}
