//! A complete playable score.

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::note::{Note, NoteDurations, MIDDLE_C, VELOCITY_PP, VELOCITY_RANGE};

/// An ordered list of chords, a tempo, and the instrument for each channel.
///
/// A tune is immutable once built; use [`TuneBuilder`] to assemble one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tune {
    /// Milliseconds per beat.
    tempo: i32,
    /// Program number for channel `i` at index `i`.
    instruments: Vec<u8>,
    chords: Vec<Chord>,
}

impl Tune {
    /// Start building a tune with the default tempo (one quarter note).
    pub fn builder() -> TuneBuilder {
        TuneBuilder::new()
    }

    /// Two identical C-major triads on channels 0 to 2, for checking a
    /// playback path end to end.
    pub fn sample() -> Tune {
        let durations = NoteDurations::default();
        let velocity = VELOCITY_PP + VELOCITY_RANGE / 2;
        let triad = [0, 4, 7]
            .iter()
            .enumerate()
            .map(|(channel, offset)| {
                Note::new(channel as i32, MIDDLE_C + offset, durations.half, velocity)
            });
        let mut chord = Chord::new();
        for note in triad {
            chord.push(note);
        }
        Tune::builder().chord(chord.clone()).chord(chord).build()
    }

    /// Milliseconds per beat.
    pub fn tempo(&self) -> i32 {
        self.tempo
    }

    /// Program number per channel.
    pub fn instruments(&self) -> &[u8] {
        &self.instruments
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Total number of notes across all chords.
    pub fn note_count(&self) -> usize {
        self.chords.iter().map(Chord::len).sum()
    }

    /// BLAKE3 hex digest over tempo, instruments and every note field.
    ///
    /// Two tunes hash equal exactly when they compare equal.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.tempo.to_le_bytes());
        hasher.update(&(self.instruments.len() as u64).to_le_bytes());
        hasher.update(&self.instruments);
        hasher.update(&(self.chords.len() as u64).to_le_bytes());
        for chord in &self.chords {
            hasher.update(&(chord.len() as u64).to_le_bytes());
            for note in chord {
                for field in [note.channel(), note.pitch(), note.duration(), note.velocity()] {
                    hasher.update(&field.to_le_bytes());
                }
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl<'a> IntoIterator for &'a Tune {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Incremental construction of a [`Tune`].
#[derive(Debug, Clone)]
pub struct TuneBuilder {
    tempo: i32,
    instruments: Vec<u8>,
    chords: Vec<Chord>,
}

impl TuneBuilder {
    pub fn new() -> Self {
        Self {
            tempo: NoteDurations::default().quarter,
            instruments: Vec::new(),
            chords: Vec::new(),
        }
    }

    /// Set milliseconds per beat.
    pub fn tempo(mut self, tempo: i32) -> Self {
        self.tempo = tempo;
        self
    }

    /// Set the program number for each channel.
    pub fn instruments(mut self, instruments: impl Into<Vec<u8>>) -> Self {
        self.instruments = instruments.into();
        self
    }

    /// Append a chord.
    pub fn chord(mut self, chord: Chord) -> Self {
        self.chords.push(chord);
        self
    }

    /// Append a chord in place.
    pub fn push_chord(&mut self, chord: Chord) {
        self.chords.push(chord);
    }

    pub fn build(self) -> Tune {
        Tune {
            tempo: self.tempo,
            instruments: self.instruments,
            chords: self.chords,
        }
    }
}

impl Default for TuneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_tempo_is_a_quarter_note() {
        assert_eq!(Tune::builder().build().tempo(), 600);
    }

    #[test]
    fn sample_tune_has_two_triads() {
        let tune = Tune::sample();
        assert_eq!(tune.len(), 2);
        assert_eq!(tune.chords()[0], tune.chords()[1]);
        let pitches: Vec<i32> = tune.chords()[0].iter().map(Note::pitch).collect();
        assert_eq!(pitches, vec![60, 64, 67]);
        assert!(tune.chords()[0]
            .iter()
            .all(|n| n.duration() == 1200 && n.velocity() == 72));
        assert_eq!(tune.note_count(), 6);
    }

    #[test]
    fn content_hash_tracks_content() {
        let a = Tune::sample();
        let b = Tune::sample();
        assert_eq!(a.content_hash(), b.content_hash());
        assert_eq!(a.content_hash().len(), 64);

        let slower = Tune::builder()
            .tempo(601)
            .chord(a.chords()[0].clone())
            .chord(a.chords()[1].clone())
            .build();
        assert_ne!(a.content_hash(), slower.content_hash());
    }

    #[test]
    fn serializes_as_json() {
        let tune = Tune::builder()
            .instruments([11u8, 45, 117])
            .chord(Chord::from_notes([Note::new(0, 60, 150, 25)]).unwrap())
            .build();
        let json = serde_json::to_value(&tune).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tempo": 600,
                "instruments": [11, 45, 117],
                "chords": [[{"channel": 0, "pitch": 60, "duration": 150, "velocity": 25}]]
            })
        );
        let back: Tune = serde_json::from_value(json).unwrap();
        assert_eq!(back, tune);
    }
}
