//! ImageLab Image Core - Pixel Codec and Channel Planes
//!
//! This crate converts between flat buffers of packed ARGB words and four
//! independent 8-bit channel planes, and computes the per-row color
//! statistics that drive sonification.
//!
//! # Features
//!
//! - **Fixed ARGB layout**: alpha in bits 31-24, red 23-16, green 15-8, blue 7-0
//! - **Lossless codec**: `encode(decode(b, w, h)) == b` for every valid buffer
//! - **Grayscale**: `floor((r + g + b) / 3)` with alpha preserved, idempotent
//! - **Row statistics**: channel sums and hue/saturation/brightness sums per row
//!
//! All operations are synchronous and pure. The crate never logs; callers are
//! responsible for reporting errors.
//!
//! # Example
//!
//! ```
//! use imagelab_image::{decode, row_statistics};
//!
//! let pixels = [0xFFFF_0000u32, 0xFFFF_0000];
//! let store = decode(&pixels, 2, 1).unwrap();
//! assert_eq!(store.red().as_slice(), &[255, 255]);
//!
//! let rows = row_statistics(store.plane_set()).unwrap();
//! assert_eq!(rows[0].red_sum, 510);
//! ```
//!
//! # Module Structure
//!
//! - [`argb`]: word packing and the pixel value type
//! - [`plane`]: immutable single-channel planes
//! - [`store`]: validated ownership of the four planes
//! - [`codec`]: decode, encode, grayscale, trim
//! - [`color`]: RGB to HSB conversion
//! - [`stats`]: per-row aggregation

pub mod argb;
pub mod codec;
pub mod color;
pub mod error;
pub mod id;
pub mod plane;
pub mod stats;
pub mod store;

// Re-export main types
pub use argb::{pack_argb, unpack_argb, Argb};
pub use codec::{decode, encode, from_gray_plane, gray_plane, grayscale_pixels, to_grayscale, trim};
pub use color::Hsb;
pub use error::{ErrorCode, ImageError};
pub use id::{ImageId, ImageIdAllocator};
pub use plane::{Channel, ChannelPlane};
pub use stats::{row_statistics, RowStatistics, RowStatisticsAggregator};
pub use store::{ChannelPlaneStore, PlaneSet};

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
