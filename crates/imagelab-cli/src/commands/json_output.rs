//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `info` and `sonify`.

use imagelab_image::{ErrorCode, ImageError};
use imagelab_sound::SoundError;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Library failures pass their own codes through ("IMAGE_001", "SOUND_003").
pub mod error_codes {
    /// File could not be read or decoded
    pub const FILE_READ: &str = "CLI_001";
    /// Config file could not be parsed
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Output could not be written
    pub const FILE_WRITE: &str = "CLI_003";
    /// Anything without a more specific code
    pub const INTERNAL: &str = "CLI_099";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "IMAGE_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Build from a library error, keeping its stable code.
    pub fn from_error_code(err: &dyn ErrorCode) -> Self {
        Self::new(err.code(), err.message())
    }

    /// Build from an `anyhow` chain, looking through it for a library error.
    ///
    /// A JSON syntax or schema error in the chain maps to `CONFIG_PARSE`.
    /// `fallback` is used when the chain holds neither.
    pub fn from_anyhow(err: &anyhow::Error, fallback: &str) -> Self {
        for cause in err.chain() {
            if let Some(e) = cause.downcast_ref::<SoundError>() {
                return Self::from_error_code(e);
            }
            if let Some(e) = cause.downcast_ref::<ImageError>() {
                return Self::from_error_code(e);
            }
        }
        if err.chain().any(|cause| cause.is::<serde_json::Error>()) {
            return Self::new(error_codes::CONFIG_PARSE, format!("{:#}", err));
        }
        Self::new(fallback, format!("{:#}", err))
    }
}
