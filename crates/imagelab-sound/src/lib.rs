//! ImageLab Sound - Deterministic Image Sonification
//!
//! This crate turns the rows of an image into a playable score: one chord of
//! three notes per row, with pitches chosen from a seven-octave pentatonic
//! scale and velocities taken from the row's hue, saturation and brightness.
//!
//! # Determinism
//!
//! Sonification is a pure function of the pixel data and the
//! [`SonifyConfig`]. Running it twice on the same image yields equal tunes
//! with equal [`Tune::content_hash`] digests.
//!
//! # Example
//!
//! ```
//! use imagelab_sound::{sonify_pixels, SonifyConfig};
//!
//! let tune = sonify_pixels(&[0xFFFF_0000, 0xFFFF_0000], 2, 1, &SonifyConfig::default()).unwrap();
//! assert_eq!(tune.len(), 1);
//! assert_eq!(tune.chords()[0].len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: notes, durations, velocity and instrument constants
//! - [`chord`]: simultaneous notes
//! - [`tune`]: the finished score
//! - [`scale`]: cyclic pitch scales
//! - [`sonify`]: row-to-chord translation
//! - [`playback`]: hand-off to audio output

pub mod chord;
pub mod error;
pub mod note;
pub mod playback;
pub mod scale;
pub mod sonify;
pub mod tune;

// Re-export main types
pub use chord::Chord;
pub use error::SoundError;
pub use note::{Note, NoteDurations};
pub use playback::Playback;
pub use scale::{PentatonicVariant, PitchScale};
pub use sonify::{sonify, sonify_pixels, velocity, ScoreAssembler, SonifyConfig};
pub use tune::{Tune, TuneBuilder};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
