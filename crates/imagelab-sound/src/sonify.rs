//! Translation of image rows into chords.
//!
//! Each row becomes one chord of three notes. Channel 0 follows red, channel
//! 1 green and channel 2 blue:
//!
//! - pitch index = `floor(scale_len * channel_sum / width / 256)`, wrapped
//!   through the scale
//! - velocity = `25 + round(95 * average)` clamped to `[25, 120]`, where the
//!   average is the row's mean hue (red note), saturation (green note) or
//!   brightness (blue note)
//!
//! A failure on any row aborts the whole run; there is no partial tune.

use imagelab_image::{decode, ChannelPlaneStore, PlaneSet, RowStatistics, RowStatisticsAggregator};
use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::SoundError;
use crate::note::{instrument, Note, NoteDurations, VELOCITY_FF, VELOCITY_PP, VELOCITY_RANGE, WHOLE_NOTE_MS};
use crate::playback::Playback;
use crate::scale::{PentatonicVariant, PitchScale};
use crate::tune::{Tune, TuneBuilder};

/// Divisor that maps an 8-bit channel mean onto the scale length.
const CHANNEL_LEVELS: u64 = 256;

/// Output channels in red, green, blue order.
pub const SONIFY_CHANNELS: [i32; 3] = [0, 1, 2];

/// Settings for a sonification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SonifyConfig {
    /// Pentatonic variant, 1 to 3.
    pub scale: PentatonicVariant,
    /// Whole-note duration in milliseconds.
    pub whole_note_ms: i32,
    /// Program number for the red, green and blue channels.
    pub instruments: [u8; 3],
}

impl Default for SonifyConfig {
    fn default() -> Self {
        Self {
            scale: PentatonicVariant::Minor,
            whole_note_ms: WHOLE_NOTE_MS,
            instruments: [instrument::VIBES, instrument::PIZZICATO, instrument::MELODIC_TOM],
        }
    }
}

/// Builds a [`Tune`] from an image, one chord per row.
#[derive(Debug, Clone)]
pub struct ScoreAssembler {
    scale: PitchScale,
    durations: NoteDurations,
    instruments: [u8; 3],
}

impl ScoreAssembler {
    /// Create an assembler using the configured pentatonic scale.
    pub fn new(config: &SonifyConfig) -> Result<Self, SoundError> {
        Self::with_scale(config, PitchScale::pentatonic(config.scale))
    }

    /// Create an assembler with an arbitrary scale. `config.scale` is ignored.
    pub fn with_scale(config: &SonifyConfig, scale: PitchScale) -> Result<Self, SoundError> {
        Ok(Self {
            scale,
            durations: NoteDurations::from_whole(config.whole_note_ms)?,
            instruments: config.instruments,
        })
    }

    pub fn scale(&self) -> &PitchScale {
        &self.scale
    }

    /// Duration of every generated note.
    pub fn note_duration(&self) -> i32 {
        self.durations.chord_note()
    }

    /// Scale index for a row's channel sum, before wrapping.
    pub fn pitch_index(&self, channel_sum: u64, width: u32) -> i64 {
        let range = self.scale.len() as u64;
        (range * channel_sum / width as u64 / CHANNEL_LEVELS) as i64
    }

    /// Chord for one row's statistics.
    pub fn chord_for_row(&self, stats: &RowStatistics) -> Chord {
        let sums = stats.channel_sums();
        let averages = stats.hsb_averages().to_array();
        let duration = self.note_duration();

        let mut chord = Chord::new();
        for ((&channel, &sum), &average) in SONIFY_CHANNELS.iter().zip(&sums).zip(&averages) {
            let pitch = self.scale.pitch(self.pitch_index(sum, stats.width));
            chord.push(Note::new(channel, pitch, duration, velocity(average)));
        }
        chord
    }

    /// Build the tune for every row of `planes`, top to bottom.
    ///
    /// Fails with `EmptyImage` when the planes have zero width or height and
    /// with `DimensionMismatch` when they disagree.
    pub fn assemble(&self, planes: &PlaneSet) -> Result<Tune, SoundError> {
        let aggregator = RowStatisticsAggregator::new(planes)?;
        let mut builder = TuneBuilder::new()
            .tempo(self.durations.quarter)
            .instruments(self.instruments);
        for row in 0..aggregator.height() {
            let stats = aggregator.row(row)?;
            builder.push_chord(self.chord_for_row(&stats));
        }
        Ok(builder.build())
    }

    /// Assemble a tune and hand it to `player` without waiting on the result.
    pub fn perform(&self, planes: &PlaneSet, player: &mut dyn Playback) -> Result<(), SoundError> {
        let tune = self.assemble(planes)?;
        player.play(&tune);
        Ok(())
    }
}

/// Note-on velocity for an average hue, saturation or brightness.
pub fn velocity(average: f64) -> i32 {
    let v = VELOCITY_PP + (VELOCITY_RANGE as f64 * average).round() as i32;
    v.clamp(VELOCITY_PP, VELOCITY_FF)
}

/// Sonify a store with `config`.
pub fn sonify(store: &ChannelPlaneStore, config: &SonifyConfig) -> Result<Tune, SoundError> {
    ScoreAssembler::new(config)?.assemble(store.plane_set())
}

/// Decode a packed ARGB buffer and sonify it.
pub fn sonify_pixels(
    pixels: &[u32],
    width: u32,
    height: u32,
    config: &SonifyConfig,
) -> Result<Tune, SoundError> {
    let store = decode(pixels, width, height)?;
    sonify(&store, config)
}
