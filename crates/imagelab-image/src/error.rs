//! Error types for the pixel codec and channel planes.

use thiserror::Error;

/// Stable error reporting shared by the ImageLab library crates.
///
/// Codes are stable strings like "IMAGE_001" or "SOUND_002" and can be used
/// for programmatic error handling by the collaborators that surface errors
/// to users.
pub trait ErrorCode: std::error::Error {
    /// Get the error code for reporting.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category ("image", "sound").
    fn category(&self) -> &'static str;
}

/// Errors raised by structural validation of pixel buffers and planes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Buffer length or plane shape disagrees with the declared dimensions.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Width or height is zero where a positive size is required.
    #[error("empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Row index past the bottom of the image.
    #[error("row {row} out of bounds (height {height})")]
    RowOutOfBounds { row: u32, height: u32 },
}

impl ImageError {
    /// A plane whose shape differs from the red plane's.
    pub(crate) fn plane_shape(red: (u32, u32), actual: (u32, u32), channel: &str) -> Self {
        ImageError::DimensionMismatch {
            expected: format!("{}x{} (red)", red.0, red.1),
            actual: format!("{}x{} ({})", actual.0, actual.1, channel),
        }
    }

    pub(crate) fn buffer_length(width: u32, height: u32, len: usize) -> Self {
        ImageError::DimensionMismatch {
            expected: format!("{} pixels ({}x{})", width as u64 * height as u64, width, height),
            actual: format!("{} pixels", len),
        }
    }
}

impl ErrorCode for ImageError {
    fn code(&self) -> &'static str {
        match self {
            ImageError::DimensionMismatch { .. } => "IMAGE_001",
            ImageError::EmptyImage { .. } => "IMAGE_002",
            ImageError::RowOutOfBounds { .. } => "IMAGE_003",
        }
    }

    fn category(&self) -> &'static str {
        "image"
    }
}
