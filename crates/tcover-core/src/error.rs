//! Error types for tcover

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverError>;

/// Main error type for tcover
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Font loading errors
///
/// These never leave the font resolver: a candidate that fails to load is
/// skipped and the next one is tried.
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font has no outline glyphs: {0}")]
    NoOutlines(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed for {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// The underlying filesystem error, when the failure came from writing
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            ExportError::WriteFailed { source, .. } => Some(source),
            ExportError::EncodingFailed(_) => None,
        }
    }
}
