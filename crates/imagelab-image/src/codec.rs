//! Conversion between packed ARGB buffers and channel planes.
//!
//! `decode` and `encode` are exact inverses for every valid input:
//! `encode(decode(b, w, h)) == b` and `decode(encode(p)) == p`.

use crate::argb::{Argb, OPAQUE};
use crate::error::ImageError;
use crate::plane::ChannelPlane;
use crate::store::{ChannelPlaneStore, PlaneSet};

/// Split a packed buffer into four planes.
///
/// `pixels.len()` must equal `width * height` and both dimensions must be
/// positive. The returned store holds its own copy of the words.
pub fn decode(pixels: &[u32], width: u32, height: u32) -> Result<ChannelPlaneStore, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::EmptyImage { width, height });
    }
    if pixels.len() as u64 != width as u64 * height as u64 {
        return Err(ImageError::buffer_length(width, height, pixels.len()));
    }

    let len = pixels.len();
    let mut red = Vec::with_capacity(len);
    let mut green = Vec::with_capacity(len);
    let mut blue = Vec::with_capacity(len);
    let mut alpha = Vec::with_capacity(len);
    for &word in pixels {
        let p = Argb::from_word(word);
        alpha.push(p.a);
        red.push(p.r);
        green.push(p.g);
        blue.push(p.b);
    }

    let planes = PlaneSet::new(
        ChannelPlane::from_parts(width, height, red),
        ChannelPlane::from_parts(width, height, green),
        ChannelPlane::from_parts(width, height, blue),
        ChannelPlane::from_parts(width, height, alpha),
    );
    Ok(ChannelPlaneStore::from_parts(planes, pixels.to_vec()))
}

/// Pack four planes into ARGB words.
///
/// All planes must share one positive size.
pub fn encode(planes: &PlaneSet) -> Result<Vec<u32>, ImageError> {
    let (width, height) = planes.shape()?;
    if width == 0 || height == 0 {
        return Err(ImageError::DimensionMismatch {
            expected: "positive plane dimensions".to_string(),
            actual: format!("{}x{}", width, height),
        });
    }

    let words = planes
        .alpha
        .as_slice()
        .iter()
        .zip(planes.red.as_slice())
        .zip(planes.green.as_slice())
        .zip(planes.blue.as_slice())
        .map(|(((&a, &r), &g), &b)| Argb::new(a, r, g, b).to_word())
        .collect();
    Ok(words)
}

/// Grayscale every word of a packed buffer, keeping alpha.
pub fn grayscale_pixels(pixels: &[u32]) -> Vec<u32> {
    pixels
        .iter()
        .map(|&w| Argb::from_word(w).to_grayscale().to_word())
        .collect()
}

/// Single gray plane: `floor((red + green + blue) / 3)` per cell.
pub fn gray_plane(planes: &PlaneSet) -> Result<ChannelPlane, ImageError> {
    planes.shape()?;
    Ok(gray_plane_unchecked(planes))
}

pub(crate) fn gray_plane_unchecked(planes: &PlaneSet) -> ChannelPlane {
    let (width, height) = planes.red.dimensions();
    let data: Vec<u8> = planes
        .red
        .as_slice()
        .iter()
        .zip(planes.green.as_slice())
        .zip(planes.blue.as_slice())
        .map(|((&r, &g), &b)| Argb::opaque(r, g, b).gray())
        .collect();
    ChannelPlane::from_parts(width, height, data)
}

/// Full-plane grayscale: red, green and blue become the gray value and alpha
/// is carried over unchanged. Applying it twice equals applying it once.
pub fn to_grayscale(planes: &PlaneSet) -> Result<PlaneSet, ImageError> {
    let gray = gray_plane(planes)?;
    Ok(PlaneSet::new(
        gray.clone(),
        gray.clone(),
        gray,
        planes.alpha.clone(),
    ))
}

/// Build an opaque image whose red, green and blue all come from `gray`.
pub fn from_gray_plane(gray: &ChannelPlane) -> Result<ChannelPlaneStore, ImageError> {
    let (width, height) = gray.dimensions();
    if gray.is_empty() {
        return Err(ImageError::EmptyImage { width, height });
    }
    let alpha = ChannelPlane::new(width, height, OPAQUE);
    ChannelPlaneStore::new(PlaneSet::new(gray.clone(), gray.clone(), gray.clone(), alpha))
}

/// Remove `columns` columns and `rows` rows from the north-west corner.
pub fn trim(store: &ChannelPlaneStore, columns: u32, rows: u32) -> Result<ChannelPlaneStore, ImageError> {
    let (width, height) = store.dimensions();
    let new_width = width.saturating_sub(columns);
    let new_height = height.saturating_sub(rows);
    if new_width == 0 || new_height == 0 {
        return Err(ImageError::EmptyImage {
            width: new_width,
            height: new_height,
        });
    }
    let src = store.plane_set();
    ChannelPlaneStore::new(PlaneSet::new(
        src.red.crop_from(columns, rows),
        src.green.crop_from(columns, rows),
        src.blue.crop_from(columns, rows),
        src.alpha.crop_from(columns, rows),
    ))
}
