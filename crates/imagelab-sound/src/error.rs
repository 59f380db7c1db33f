//! Error types for score assembly.

use imagelab_image::{ErrorCode, ImageError};
use thiserror::Error;

/// Errors that can occur while building scales, chords or tunes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    /// A scale must hold at least one pitch.
    #[error("scale has no pitches")]
    EmptyScale,

    /// The null note marks an absent note and cannot join a chord.
    #[error("the null note cannot be added to a chord")]
    NullNote,

    /// Pentatonic variants are numbered 1 to 3.
    #[error("unknown pentatonic variant {0} (expected 1, 2 or 3)")]
    InvalidScaleVariant(u8),

    /// Note durations cannot be negative.
    #[error("invalid whole-note duration {0} ms")]
    InvalidDuration(i32),

    /// The image could not be read row by row.
    #[error(transparent)]
    Image(#[from] ImageError),
}

impl ErrorCode for SoundError {
    fn code(&self) -> &'static str {
        match self {
            SoundError::EmptyScale => "SOUND_001",
            SoundError::NullNote => "SOUND_002",
            SoundError::InvalidScaleVariant(_) => "SOUND_003",
            SoundError::InvalidDuration(_) => "SOUND_004",
            SoundError::Image(e) => e.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            SoundError::Image(e) => e.category(),
            _ => "sound",
        }
    }
}
