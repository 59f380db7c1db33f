//! Pitch, duration and velocity constants for MIDI-style notes.

/// Middle C (MIDI note 60).
pub const MIDDLE_C: i32 = 60;

/// Lowest pitch considered playable.
pub const PITCH_LOW: i32 = 25;
/// Highest pitch considered playable.
pub const PITCH_HIGH: i32 = 120;
/// Span between the lowest and highest playable pitch.
pub const PITCH_RANGE: i32 = PITCH_HIGH - PITCH_LOW;

/// Default whole-note duration in milliseconds.
pub const WHOLE_NOTE_MS: i32 = 2400;

/// Note-on velocity for pianissimo.
pub const VELOCITY_PP: i32 = 25;
/// Note-on velocity for fortissimo.
pub const VELOCITY_FF: i32 = 120;
/// Span between pianissimo and fortissimo.
pub const VELOCITY_RANGE: i32 = VELOCITY_FF - VELOCITY_PP;

/// Highest MIDI channel number.
pub const MAX_CHANNEL: i32 = 15;

/// General MIDI program numbers used for channel instruments.
pub mod instrument {
    pub const PIANO: u8 = 1;
    pub const ELECTRIC_PIANO: u8 = 4;
    pub const HARPSICHORD: u8 = 6;
    pub const VIBES: u8 = 11;
    pub const ORGAN: u8 = 19;
    pub const ACCORDION: u8 = 23;
    pub const BANJO: u8 = 25;
    pub const PIZZICATO: u8 = 45;
    pub const VIOLIN: u8 = 52;
    pub const TRUMPET: u8 = 56;
    pub const TROMBONE: u8 = 57;
    pub const VIOLIN2: u8 = 59;
    pub const VIOLIN3: u8 = 65;
    pub const TENOR_SAX: u8 = 66;
    pub const FLUTE: u8 = 73;
    pub const PAN_FLUTE: u8 = 75;
    pub const PIANO1: u8 = 80;
    pub const SYNTH_VOICE: u8 = 85;
    pub const BASS_DRUM: u8 = 116;
    pub const MELODIC_TOM: u8 = 117;
    pub const SNARE_DRUM: u8 = 120;
}
