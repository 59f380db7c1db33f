//! Notes and note durations.
//!
//! A [`Note`] is an immutable `(channel, pitch, duration, velocity)` tuple.
//! [`Note::NULL`] has every field set to -1 and stands for "no note".

mod constants;


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SoundError;

pub use constants::{
    instrument, MAX_CHANNEL, MIDDLE_C, PITCH_HIGH, PITCH_LOW, PITCH_RANGE, VELOCITY_FF,
    VELOCITY_PP, VELOCITY_RANGE, WHOLE_NOTE_MS,
};

/// A single MIDI-style note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    channel: i32,
    pitch: i32,
    duration: i32,
    velocity: i32,
}

impl Note {
    /// The "no note" sentinel.
    pub const NULL: Note = Note::new(-1, -1, -1, -1);

    /// Create a note.
    ///
    /// # Arguments
    /// * `channel` - Output channel, 0 to 15
    /// * `pitch` - MIDI pitch, 60 is middle C
    /// * `duration` - Length in milliseconds
    /// * `velocity` - Note-on velocity, 0 to 127
    pub const fn new(channel: i32, pitch: i32, duration: i32, velocity: i32) -> Self {
        Self {
            channel,
            pitch,
            duration,
            velocity,
        }
    }

    pub const fn channel(&self) -> i32 {
        self.channel
    }

    pub const fn pitch(&self) -> i32 {
        self.pitch
    }

    /// Duration in milliseconds.
    pub const fn duration(&self) -> i32 {
        self.duration
    }

    /// Note-on velocity.
    pub const fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Channel {}; Pitch {}; Duration {}; Velocity {}]",
            self.channel, self.pitch, self.duration, self.velocity
        )
    }
}

/// Standard note lengths derived from one whole-note duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteDurations {
    pub whole: i32,
    pub half: i32,
    pub quarter: i32,
    pub eighth: i32,
}

impl NoteDurations {
    /// Derive lengths from `whole_ms`, which must not be negative.
    pub fn from_whole(whole_ms: i32) -> Result<Self, SoundError> {
        if whole_ms < 0 {
            return Err(SoundError::InvalidDuration(whole_ms));
        }
        Ok(Self {
            whole: whole_ms,
            half: whole_ms / 2,
            quarter: whole_ms / 4,
            eighth: whole_ms / 8,
        })
    }

    /// Length of each note in a sonified chord: half an eighth.
    pub fn chord_note(&self) -> i32 {
        self.eighth / 2
    }
}

impl Default for NoteDurations {
    fn default() -> Self {
        Self {
            whole: WHOLE_NOTE_MS,
            half: WHOLE_NOTE_MS / 2,
            quarter: WHOLE_NOTE_MS / 4,
            eighth: WHOLE_NOTE_MS / 8,
        }
    }
}
