use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, exporting or capturing images
#[derive(Error, Debug)]
pub enum PainterError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Dropped file has no accessible data: {0}")]
    NoFileData(String),

    #[error("Not a supported image file: {0}")]
    UnsupportedFile(String),

    #[error("Failed to export image to {path}: {source}")]
    Export {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No image is loaded")]
    NoImage,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for image operations
pub type PainterResult<T> = Result<T, PainterError>;
