//! Error types for fontdrawer

use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawerError>;

/// Main error type for fontdrawer
#[derive(Debug, Error)]
pub enum DrawerError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Invalid face parameters: {0}")]
    InvalidFaceParameters(#[from] FaceError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Cannot read font file {0}")]
    ReadFailed(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font not supported: {0}")]
    NotSupported(String),
}

impl FontLoadError {
    /// Classify a failed read of the font file at `path`
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FontLoadError::FileNotFound(path.display().to_string()),
            _ => FontLoadError::ReadFailed(format!("{}: {}", path.display(), err)),
        }
    }
}

/// Face building errors
#[derive(Debug, Error, PartialEq)]
pub enum FaceError {
    #[error("size must be a positive number of points, got {0}")]
    InvalidSize(f32),

    #[error("dpi must be positive, got {0}")]
    InvalidDpi(f32),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
