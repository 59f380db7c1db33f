//! Validated ownership of an image's four channel planes.

use crate::codec;
use crate::error::ImageError;
use crate::plane::{Channel, ChannelPlane};

/// Four channel planes travelling together.
///
/// A `PlaneSet` is not validated; use [`PlaneSet::shape`] or hand it to
/// [`ChannelPlaneStore::new`] to check that all four planes agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSet {
    pub red: ChannelPlane,
    pub green: ChannelPlane,
    pub blue: ChannelPlane,
    pub alpha: ChannelPlane,
}

impl PlaneSet {
    /// Bundle four planes.
    pub fn new(red: ChannelPlane, green: ChannelPlane, blue: ChannelPlane, alpha: ChannelPlane) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Plane for one channel.
    pub fn get(&self, channel: Channel) -> &ChannelPlane {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha,
        }
    }

    /// Shared `(width, height)` of the four planes.
    ///
    /// Fails with `DimensionMismatch` naming the first plane whose shape
    /// differs from red. Zero-sized planes are accepted here.
    pub fn shape(&self) -> Result<(u32, u32), ImageError> {
        let expected = self.red.dimensions();
        for channel in [Channel::Green, Channel::Blue, Channel::Alpha] {
            let actual = self.get(channel).dimensions();
            if actual != expected {
                return Err(ImageError::plane_shape(expected, actual, channel.name()));
            }
        }
        Ok(expected)
    }
}

/// Owner of one image's planes plus their packed ARGB buffer.
///
/// Invariants: the four planes share one positive size, and `pixels` is
/// always the encoding of exactly those planes. Accessors hand out values
/// that cannot alias the stored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlaneStore {
    planes: PlaneSet,
    pixels: Vec<u32>,
}

impl ChannelPlaneStore {
    /// Validate `planes` and take ownership of them.
    pub fn new(planes: PlaneSet) -> Result<Self, ImageError> {
        let pixels = codec::encode(&planes)?;
        Ok(Self { planes, pixels })
    }

    /// Build from planes already known to agree, with their encoding.
    pub(crate) fn from_parts(planes: PlaneSet, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            planes.red.width() as usize * planes.red.height() as usize
        );
        Self { planes, pixels }
    }

    /// Replace all four planes at once.
    ///
    /// On error the store is left untouched.
    pub fn set_planes(
        &mut self,
        red: ChannelPlane,
        green: ChannelPlane,
        blue: ChannelPlane,
        alpha: ChannelPlane,
    ) -> Result<(), ImageError> {
        *self = Self::new(PlaneSet::new(red, green, blue, alpha))?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.planes.red.width()
    }

    pub fn height(&self) -> u32 {
        self.planes.red.height()
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.planes.red.dimensions()
    }

    pub fn red(&self) -> ChannelPlane {
        self.planes.red.clone()
    }

    pub fn green(&self) -> ChannelPlane {
        self.planes.green.clone()
    }

    pub fn blue(&self) -> ChannelPlane {
        self.planes.blue.clone()
    }

    pub fn alpha(&self) -> ChannelPlane {
        self.planes.alpha.clone()
    }

    /// Copy of the plane for `channel`.
    pub fn plane(&self, channel: Channel) -> ChannelPlane {
        self.planes.get(channel).clone()
    }

    /// Copy of all four planes.
    pub fn planes(&self) -> PlaneSet {
        self.planes.clone()
    }

    /// Borrow the planes for read-only computation.
    pub fn plane_set(&self) -> &PlaneSet {
        &self.planes
    }

    /// Packed ARGB words, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Consume the store and return its packed buffer.
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Grayscale copy of this image with alpha preserved.
    pub fn to_grayscale(&self) -> ChannelPlaneStore {
        let pixels = codec::grayscale_pixels(&self.pixels);
        let gray = codec::gray_plane_unchecked(&self.planes);
        let planes = PlaneSet::new(gray.clone(), gray.clone(), gray, self.planes.alpha.clone());
        Self::from_parts(planes, pixels)
    }
}
