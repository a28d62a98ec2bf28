//! Snapshot sequence to JSON Lines.
//!
//! One JSON object per snapshot, one snapshot per line, in step order. The
//! log is a machine-readable record of the run that can be diffed between
//! seeds or fed to external plotting tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use contact_types::Snapshot;
use tracing::info;

use crate::error::RenderError;

/// Write every snapshot as one JSON line to `path`. Returns the number of
/// lines written.
///
/// # Errors
///
/// Returns [`RenderError::Io`] if the file cannot be created or written and
/// [`RenderError::Json`] if a snapshot fails to serialize.
pub fn write_snapshot_log(snapshots: &[Snapshot], path: &Path) -> Result<usize, RenderError> {
    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for snapshot in snapshots {
        serde_json::to_writer(&mut writer, snapshot)
            .map_err(|e| RenderError::from_json(path, e))?;
        writer
            .write_all(b"\n")
            .map_err(|e| RenderError::io(path, e))?;
    }
    writer.flush().map_err(|e| RenderError::io(path, e))?;

    info!(path = %path.display(), lines = snapshots.len(), "Snapshot log written");
    Ok(snapshots.len())
}
