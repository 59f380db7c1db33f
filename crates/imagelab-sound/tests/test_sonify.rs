//! Sonification tests through the public API: scale lookups, chord shape and
//! per-row independence.

use imagelab_image::{decode, pack_argb, row_statistics};
use imagelab_sound::{
    sonify, velocity, Note, PentatonicVariant, PitchScale, ScoreAssembler, SonifyConfig,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Scenarios
// ============================================================================

/// A single row gives a single three-note chord.
#[test]
fn test_one_row_one_chord() {
    let pixels: Vec<u32> = (0..8).map(|x| pack_argb(255, x * 30, 255 - x * 30, 77)).collect();
    let store = decode(&pixels, 8, 1).unwrap();
    let tune = sonify(&store, &SonifyConfig::default()).unwrap();
    assert_eq!(tune.len(), 1);
    assert_eq!(tune.chords()[0].len(), 3);
}

/// Pure red on variant 1: red maps to the top of the scale, green and blue
/// to the bottom.
#[test]
fn test_pure_red_on_suspended_scale() {
    let config = SonifyConfig {
        scale: PentatonicVariant::Suspended,
        ..SonifyConfig::default()
    };
    let store = decode(&[0xFFFF_0000; 2], 2, 1).unwrap();
    let tune = sonify(&store, &config).unwrap();
    let pitches: Vec<i32> = tune.chords()[0].iter().map(Note::pitch).collect();
    let expected_index = (35 * 510 / 2 / 256) % 35;
    let scale = PitchScale::pentatonic(PentatonicVariant::Suspended);
    assert_eq!(
        pitches,
        vec![scale.pitch(expected_index), scale.pitch(0), scale.pitch(0)]
    );
    assert_eq!(pitches[1], 24);
}

/// Velocities follow the row's averaged hue, saturation and brightness.
#[test]
fn test_velocities_follow_row_hsb() {
    let pixels = [pack_argb(255, 0, 255, 0), pack_argb(255, 0, 0, 0)];
    let store = decode(&pixels, 2, 1).unwrap();
    let stats = row_statistics(store.plane_set()).unwrap()[0];
    let avg = stats.hsb_averages();

    let tune = sonify(&store, &SonifyConfig::default()).unwrap();
    let velocities: Vec<i32> = tune.chords()[0].iter().map(Note::velocity).collect();
    assert_eq!(
        velocities,
        vec![
            velocity(avg.hue),
            velocity(avg.saturation),
            velocity(avg.brightness)
        ]
    );
    // green hue is 1/3, halved over two pixels
    assert_eq!(velocities[0], 25 + (95.0_f64 / 6.0).round() as i32);
}

/// Every velocity stays within pianissimo..fortissimo.
#[test]
fn test_velocities_in_range() {
    let pixels: Vec<u32> = (0..64u32)
        .map(|i| pack_argb(255, (i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13 % 256) as u8))
        .collect();
    let store = decode(&pixels, 8, 8).unwrap();
    let tune = sonify(&store, &SonifyConfig::default()).unwrap();
    for chord in &tune {
        for note in chord {
            assert!((25..=120).contains(&note.velocity()), "{}", note);
        }
    }
}

// ============================================================================
// Row Independence
// ============================================================================

/// A row's chord depends only on that row.
#[test]
fn test_rows_are_independent() {
    let top = [pack_argb(255, 200, 10, 90); 4];
    let bottom = [pack_argb(255, 5, 250, 60); 4];

    let alone = sonify(&decode(&bottom, 4, 1).unwrap(), &SonifyConfig::default()).unwrap();
    let stacked: Vec<u32> = top.iter().chain(bottom.iter()).copied().collect();
    let both = sonify(&decode(&stacked, 4, 2).unwrap(), &SonifyConfig::default()).unwrap();

    assert_eq!(both.chords()[1], alone.chords()[0]);
}

/// Alpha has no effect on the score.
#[test]
fn test_alpha_is_ignored() {
    let opaque = decode(&[pack_argb(255, 10, 120, 240)], 1, 1).unwrap();
    let clear = decode(&[pack_argb(0, 10, 120, 240)], 1, 1).unwrap();
    let assembler = ScoreAssembler::new(&SonifyConfig::default()).unwrap();
    assert_eq!(
        assembler.assemble(opaque.plane_set()).unwrap(),
        assembler.assemble(clear.plane_set()).unwrap()
    );
}
