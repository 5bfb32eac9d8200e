//! Export module for tcover
//!
//! Turns the finished canvas into file bytes and puts them on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tcover_core::error::{ExportError, Result};

pub mod jpeg;

pub use jpeg::JpegExporter;
pub use tcover_core::traits::Exporter;

/// Writes `bytes` to `path`, replacing whatever was there
///
/// The bytes are complete before this is called, so a failure never leaves
/// a half-written cover behind. A missing directory is reported with the
/// underlying I/O error and creates nothing.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    fs::write(path, bytes).map_err(|source| ExportError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path.to_path_buf())
}
