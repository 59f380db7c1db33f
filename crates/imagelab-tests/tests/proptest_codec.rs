//! Property-based tests for the pixel codec and pitch scales using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p imagelab-tests --test proptest_codec
//! ```

use proptest::prelude::*;

use imagelab_image::{decode, encode, to_grayscale, ChannelPlane, PlaneSet};
use imagelab_sound::{PentatonicVariant, PitchScale};

// ============================================================================
// Strategies
// ============================================================================

/// A width, height and matching pixel buffer.
fn image_buffer() -> impl Strategy<Value = (u32, u32, Vec<u32>)> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(any::<u32>(), (w * h) as usize),
        )
    })
}

/// Four same-shaped planes.
fn plane_set() -> impl Strategy<Value = PlaneSet> {
    (1u32..10, 1u32..10).prop_flat_map(|(w, h)| {
        let plane = move || {
            prop::collection::vec(any::<u8>(), (w * h) as usize)
                .prop_map(move |data| ChannelPlane::from_vec(w, h, data).unwrap())
        };
        (plane(), plane(), plane(), plane()).prop_map(|(r, g, b, a)| PlaneSet::new(r, g, b, a))
    })
}

fn variant() -> impl Strategy<Value = PentatonicVariant> {
    prop::sample::select(PentatonicVariant::ALL.to_vec())
}

// ============================================================================
// 1. Codec Round Trips
// ============================================================================

proptest! {
    /// encode(decode(buffer)) reproduces the buffer.
    #[test]
    fn decode_then_encode_is_identity((w, h, pixels) in image_buffer()) {
        let store = decode(&pixels, w, h).unwrap();
        prop_assert_eq!(encode(store.plane_set()).unwrap(), pixels);
    }

    /// decode(encode(planes)) reproduces the planes.
    #[test]
    fn encode_then_decode_is_identity(planes in plane_set()) {
        let (w, h) = planes.shape().unwrap();
        let pixels = encode(&planes).unwrap();
        let store = decode(&pixels, w, h).unwrap();
        prop_assert_eq!(store.plane_set(), &planes);
    }

    /// Any buffer of the wrong length is rejected, never truncated.
    #[test]
    fn wrong_length_is_rejected((w, h, pixels) in image_buffer(), extra in 1usize..4) {
        let mut pixels = pixels;
        pixels.extend(std::iter::repeat(0).take(extra));
        prop_assert!(decode(&pixels, w, h).is_err());
    }
}

// ============================================================================
// 2. Grayscale
// ============================================================================

proptest! {
    /// Grayscale applied twice equals grayscale applied once.
    #[test]
    fn grayscale_is_idempotent(planes in plane_set()) {
        let once = to_grayscale(&planes).unwrap();
        let twice = to_grayscale(&once).unwrap();
        prop_assert_eq!(twice, once);
    }

    /// Grayscale keeps alpha and equalizes the color channels.
    #[test]
    fn grayscale_keeps_alpha(planes in plane_set()) {
        let gray = to_grayscale(&planes).unwrap();
        prop_assert_eq!(&gray.alpha, &planes.alpha);
        prop_assert_eq!(&gray.red, &gray.green);
        prop_assert_eq!(&gray.green, &gray.blue);
    }
}

// ============================================================================
// 3. Pitch Scales
// ============================================================================

proptest! {
    /// Lookups repeat every scale length, for negative indices too.
    #[test]
    fn pitch_lookup_is_periodic(v in variant(), i in -10_000i64..10_000, k in -50i64..50) {
        let scale = PitchScale::pentatonic(v);
        let n = scale.len() as i64;
        prop_assert_eq!(scale.pitch(i), scale.pitch(i + k * n));
    }

    /// Arbitrary non-empty scales are periodic as well.
    #[test]
    fn custom_scale_is_periodic(
        pitches in prop::collection::vec(0i32..128, 1..20),
        i in -1000i64..1000,
        k in -20i64..20,
    ) {
        let n = pitches.len() as i64;
        let scale = PitchScale::new(pitches).unwrap();
        prop_assert_eq!(scale.pitch(i), scale.pitch(i + k * n));
    }
}

/// Every variant has 35 strictly increasing pitches from 24 to its top interval.
#[test]
fn pentatonic_shape() {
    for variant in PentatonicVariant::ALL {
        let scale = PitchScale::pentatonic(variant);
        assert_eq!(scale.len(), 35);
        assert!(scale.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(scale.pitch(0), 24);
        assert_eq!(scale.pitch(34), 96 + variant.intervals()[4]);
    }
}
