//! Notes that sound together.

use serde::{Deserialize, Serialize};

use crate::error::SoundError;
use crate::note::Note;

/// An ordered group of notes played at the same instant.
///
/// Insertion order is kept for reproducible output; it does not stagger the
/// notes in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    /// Create an empty chord.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chord from notes, rejecting [`Note::NULL`].
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Result<Self, SoundError> {
        let mut chord = Self::new();
        for note in notes {
            chord.add_note(note)?;
        }
        Ok(chord)
    }

    /// Append a note.
    pub fn add_note(&mut self, note: Note) -> Result<(), SoundError> {
        if note.is_null() {
            return Err(SoundError::NullNote);
        }
        self.notes.push(note);
        Ok(())
    }

    /// Append a note the caller has built from real values.
    pub(crate) fn push(&mut self, note: Note) {
        debug_assert!(!note.is_null());
        self.notes.push(note);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut chord = Chord::new();
        chord.add_note(Note::new(2, 67, 100, 50)).unwrap();
        chord.add_note(Note::new(0, 60, 100, 50)).unwrap();
        let channels: Vec<i32> = chord.iter().map(Note::channel).collect();
        assert_eq!(channels, vec![2, 0]);
    }

    #[test]
    fn rejects_null_note() {
        let mut chord = Chord::new();
        assert_eq!(chord.add_note(Note::NULL), Err(SoundError::NullNote));
        assert!(chord.is_empty());

        let result = Chord::from_notes([Note::new(0, 60, 1, 1), Note::NULL]);
        assert_eq!(result, Err(SoundError::NullNote));
    }
}
