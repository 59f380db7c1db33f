//! Immutable single-channel planes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Which component of an ARGB pixel a plane holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in red, green, blue, alpha order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Lowercase name used in file names and reports.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

/// A row-major grid of 8-bit values.
///
/// The sample storage is shared and never mutated in place; every
/// transformation returns a new plane. Cloning is cheap and a clone can never
/// observe changes made through another handle.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ChannelPlane {
    width: u32,
    height: u32,
    data: Arc<[u8]>,
}

impl ChannelPlane {
    /// Create a plane filled with one value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size].into(),
        }
    }

    /// Create a plane from row-major samples.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        if data.len() != width as usize * height as usize {
            return Err(ImageError::buffer_length(width, height, data.len()));
        }
        Ok(Self {
            width,
            height,
            data: data.into(),
        })
    }

    /// Wrap samples whose length the caller has already checked.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data: data.into(),
        }
    }

    /// Create a plane from a list of rows. Ragged input is rejected.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ImageError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(ImageError::DimensionMismatch {
                    expected: format!("{} columns", width),
                    actual: format!("{} columns in row {}", row.len(), y),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, data)
    }

    /// Create a plane by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data: data.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sample at `(x, y)`, or `None` outside the plane.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// One row of samples.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        Some(&self.data[start..start + self.width as usize])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// All samples, row-major.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Owned copy of the samples.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Copy into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// New plane with `f` applied to every sample.
    pub fn map(&self, f: impl FnMut(u8) -> u8) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Sub-plane starting at `(x0, y0)` running to the bottom-right corner.
    pub(crate) fn crop_from(&self, x0: u32, y0: u32) -> Self {
        let width = self.width.saturating_sub(x0);
        let height = self.height.saturating_sub(y0);
        Self::from_fn(width, height, |x, y| {
            self.data[self.index(x + x0, y + y0)]
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl std::fmt::Debug for ChannelPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelPlane")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}
