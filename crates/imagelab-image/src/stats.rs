//! Per-row channel sums and hue/saturation/brightness sums.
//!
//! Every figure is scoped to one row; nothing carries over from the previous
//! row.

use serde::{Deserialize, Serialize};

use crate::argb::Argb;
use crate::color::Hsb;
use crate::error::ImageError;
use crate::store::PlaneSet;

/// Aggregates for one image row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowStatistics {
    /// Row index, top row is 0.
    pub row: u32,
    /// Number of pixels summed.
    pub width: u32,
    pub red_sum: u64,
    pub green_sum: u64,
    pub blue_sum: u64,
    /// Sum of `floor((r + g + b) / 3)`.
    pub gray_sum: u64,
    pub hue_sum: f64,
    pub saturation_sum: f64,
    pub brightness_sum: f64,
}

impl RowStatistics {
    /// `[red, green, blue]` sums.
    pub fn channel_sums(&self) -> [u64; 3] {
        [self.red_sum, self.green_sum, self.blue_sum]
    }

    /// `[hue, saturation, brightness]` sums.
    pub fn hsb_sums(&self) -> [f64; 3] {
        [self.hue_sum, self.saturation_sum, self.brightness_sum]
    }

    /// Mean hue, saturation and brightness over the row.
    pub fn hsb_averages(&self) -> Hsb {
        let w = self.width as f64;
        Hsb {
            hue: self.hue_sum / w,
            saturation: self.saturation_sum / w,
            brightness: self.brightness_sum / w,
        }
    }
}

/// Computes [`RowStatistics`] over a set of planes.
///
/// Construction validates the planes once, so each row query only has to
/// check its row index.
#[derive(Debug, Clone, Copy)]
pub struct RowStatisticsAggregator<'a> {
    planes: &'a PlaneSet,
    width: u32,
    height: u32,
}

impl<'a> RowStatisticsAggregator<'a> {
    /// Fails with `EmptyImage` for zero width or height and with
    /// `DimensionMismatch` when the planes disagree.
    pub fn new(planes: &'a PlaneSet) -> Result<Self, ImageError> {
        let (width, height) = planes.red.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage { width, height });
        }
        planes.shape()?;
        Ok(Self {
            planes,
            width,
            height,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Statistics for a single row.
    pub fn row(&self, row: u32) -> Result<RowStatistics, ImageError> {
        let out_of_bounds = || ImageError::RowOutOfBounds {
            row,
            height: self.height,
        };
        let red = self.planes.red.row(row).ok_or_else(out_of_bounds)?;
        let green = self.planes.green.row(row).ok_or_else(out_of_bounds)?;
        let blue = self.planes.blue.row(row).ok_or_else(out_of_bounds)?;

        let mut stats = RowStatistics {
            row,
            width: self.width,
            red_sum: 0,
            green_sum: 0,
            blue_sum: 0,
            gray_sum: 0,
            hue_sum: 0.0,
            saturation_sum: 0.0,
            brightness_sum: 0.0,
        };
        for ((&r, &g), &b) in red.iter().zip(green).zip(blue) {
            stats.red_sum += r as u64;
            stats.green_sum += g as u64;
            stats.blue_sum += b as u64;
            stats.gray_sum += Argb::opaque(r, g, b).gray() as u64;

            let hsb = Hsb::from_rgb8(r, g, b);
            stats.hue_sum += hsb.hue;
            stats.saturation_sum += hsb.saturation;
            stats.brightness_sum += hsb.brightness;
        }
        Ok(stats)
    }

    /// Iterate every row top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = RowStatistics> + '_ {
        // Indices are in range by construction.
        (0..self.height).filter_map(move |y| self.row(y).ok())
    }
}

/// Statistics for every row of `planes`, top to bottom.
pub fn row_statistics(planes: &PlaneSet) -> Result<Vec<RowStatistics>, ImageError> {
    let aggregator = RowStatisticsAggregator::new(planes)?;
    Ok(aggregator.rows().collect())
}
