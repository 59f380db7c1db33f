//! Hand-off point to whatever actually makes sound.

use crate::tune::Tune;

/// Receives finished tunes.
///
/// Implementations own device output. The caller does not wait for playback
/// to finish and receives nothing back.
pub trait Playback {
    fn play(&mut self, tune: &Tune);
}

impl<F: FnMut(&Tune)> Playback for F {
    fn play(&mut self, tune: &Tune) {
        self(tune)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonify::{ScoreAssembler, SonifyConfig};
    use imagelab_image::decode;

    #[test]
    fn perform_hands_tune_to_player() {
        let store = decode(&[0xFF00_FF00, 0xFF00_00FF], 1, 2).unwrap();
        let assembler = ScoreAssembler::new(&SonifyConfig::default()).unwrap();

        let mut received = Vec::new();
        let mut player = |tune: &Tune| received.push(tune.clone());
        assembler.perform(store.plane_set(), &mut player).unwrap();

        assert_eq!(received.len(), 1);
        assert_eq!(received[0], assembler.assemble(store.plane_set()).unwrap());
    }
}
