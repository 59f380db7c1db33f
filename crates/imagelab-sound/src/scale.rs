//! Cyclically indexed pitch scales.
//!
//! A [`PitchScale`] is a non-empty ordered list of MIDI pitches. Indexing
//! wraps modulo the scale length in both directions, so every integer index
//! names a pitch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SoundError;
use crate::note::MIDDLE_C;

/// Lowest octave offset from middle C in the pentatonic scales.
const PENTATONIC_FIRST_OCTAVE: i32 = -3;
/// Highest octave offset from middle C in the pentatonic scales.
const PENTATONIC_LAST_OCTAVE: i32 = 3;
/// Pitches per pentatonic octave.
const PENTATONIC_NOTES: usize = 5;

/// The three seven-octave pentatonic scales, numbered 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PentatonicVariant {
    /// Variant 1: intervals {0, 2, 5, 7, 9}.
    Suspended,
    /// Variant 2: intervals {0, 3, 5, 7, 10}.
    #[default]
    Minor,
    /// Variant 3: intervals {0, 2, 4, 7, 9}.
    Major,
}

impl PentatonicVariant {
    pub const ALL: [PentatonicVariant; 3] = [
        PentatonicVariant::Suspended,
        PentatonicVariant::Minor,
        PentatonicVariant::Major,
    ];

    /// Semitone offsets above each octave's C, in insertion order.
    pub const fn intervals(self) -> [i32; 5] {
        match self {
            PentatonicVariant::Suspended => [0, 2, 5, 7, 9],
            PentatonicVariant::Minor => [0, 3, 5, 7, 10],
            PentatonicVariant::Major => [0, 2, 4, 7, 9],
        }
    }

    /// Variant number, 1 to 3.
    pub const fn number(self) -> u8 {
        match self {
            PentatonicVariant::Suspended => 1,
            PentatonicVariant::Minor => 2,
            PentatonicVariant::Major => 3,
        }
    }

    pub fn from_number(n: u8) -> Result<Self, SoundError> {
        match n {
            1 => Ok(PentatonicVariant::Suspended),
            2 => Ok(PentatonicVariant::Minor),
            3 => Ok(PentatonicVariant::Major),
            other => Err(SoundError::InvalidScaleVariant(other)),
        }
    }
}

impl TryFrom<u8> for PentatonicVariant {
    type Error = SoundError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n)
    }
}

impl From<PentatonicVariant> for u8 {
    fn from(v: PentatonicVariant) -> u8 {
        v.number()
    }
}

impl fmt::Display for PentatonicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PentatonicVariant::Suspended => "suspended",
            PentatonicVariant::Minor => "minor",
            PentatonicVariant::Major => "major",
        };
        write!(f, "pentatonic {} ({})", self.number(), name)
    }
}

/// Ordered, non-empty list of pitches with wrap-around indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct PitchScale {
    pitches: Vec<i32>,
}

impl PitchScale {
    /// Create a scale. Fails with `EmptyScale` when `pitches` is empty.
    pub fn new(pitches: Vec<i32>) -> Result<Self, SoundError> {
        if pitches.is_empty() {
            return Err(SoundError::EmptyScale);
        }
        Ok(Self { pitches })
    }

    /// Build one of the seven-octave pentatonic scales.
    ///
    /// For each octave offset `i` in `-3..=3` the five intervals are added
    /// above `60 + 12 * i`, giving 35 pitches from 24 up to the last
    /// interval of the octave above 96.
    pub fn pentatonic(variant: PentatonicVariant) -> Self {
        let intervals = variant.intervals();
        let octaves = (PENTATONIC_LAST_OCTAVE - PENTATONIC_FIRST_OCTAVE + 1) as usize;
        let mut pitches = Vec::with_capacity(octaves * PENTATONIC_NOTES);
        for octave in PENTATONIC_FIRST_OCTAVE..=PENTATONIC_LAST_OCTAVE {
            let base = MIDDLE_C + 12 * octave;
            pitches.extend(intervals.iter().map(|i| base + i));
        }
        Self { pitches }
    }

    /// Number of pitches.
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Pitch at `index` modulo the scale length. Negative indices count back
    /// from the end.
    pub fn pitch(&self, index: i64) -> i32 {
        let i = index.rem_euclid(self.pitches.len() as i64) as usize;
        self.pitches[i]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.pitches.iter()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.pitches
    }
}

impl TryFrom<Vec<i32>> for PitchScale {
    type Error = SoundError;

    fn try_from(pitches: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(pitches)
    }
}

impl From<PitchScale> for Vec<i32> {
    fn from(scale: PitchScale) -> Vec<i32> {
        scale.pitches
    }
}

impl From<PentatonicVariant> for PitchScale {
    fn from(variant: PentatonicVariant) -> Self {
        Self::pentatonic(variant)
    }
}
