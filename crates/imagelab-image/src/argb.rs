//! Fixed-width ARGB word packing.
//!
//! Every pixel is a 32-bit word with this layout:
//!
//! ```text
//! bits 31..24  alpha
//! bits 23..16  red
//! bits 15..8   green
//! bits  7..0   blue
//! ```
//!
//! The layout is part of the public contract with image sources and
//! renderers, so the shifts live here and nowhere else.

use serde::{Deserialize, Serialize};

/// Bit offset of the alpha byte.
pub const ALPHA_SHIFT: u32 = 24;
/// Bit offset of the red byte.
pub const RED_SHIFT: u32 = 16;
/// Bit offset of the green byte.
pub const GREEN_SHIFT: u32 = 8;
/// Bit offset of the blue byte.
pub const BLUE_SHIFT: u32 = 0;

/// Fully opaque alpha value.
pub const OPAQUE: u8 = 255;

/// One unpacked pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    /// Create a pixel from its four components.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(OPAQUE, r, g, b)
    }

    /// Unpack a 32-bit word.
    #[inline]
    pub const fn from_word(word: u32) -> Self {
        Self {
            a: (word >> ALPHA_SHIFT) as u8,
            r: (word >> RED_SHIFT) as u8,
            g: (word >> GREEN_SHIFT) as u8,
            b: (word >> BLUE_SHIFT) as u8,
        }
    }

    /// Pack into a 32-bit word.
    #[inline]
    pub const fn to_word(self) -> u32 {
        ((self.a as u32) << ALPHA_SHIFT)
            | ((self.r as u32) << RED_SHIFT)
            | ((self.g as u32) << GREEN_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
    }

    /// Integer mean of red, green and blue, rounded down.
    #[inline]
    pub const fn gray(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Replace red, green and blue with their gray value, keeping alpha.
    #[inline]
    pub const fn to_grayscale(self) -> Self {
        let v = self.gray();
        Self::new(self.a, v, v, v)
    }
}

/// Pack four channel bytes into an ARGB word.
#[inline]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    Argb::new(a, r, g, b).to_word()
}

/// Unpack an ARGB word into `(a, r, g, b)`.
#[inline]
pub const fn unpack_argb(word: u32) -> (u8, u8, u8, u8) {
    let p = Argb::from_word(word);
    (p.a, p.r, p.g, p.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_alpha_red_green_blue() {
        assert_eq!(pack_argb(0x11, 0x22, 0x33, 0x44), 0x1122_3344);
        assert_eq!(unpack_argb(0xAABB_CCDD), (0xAA, 0xBB, 0xCC, 0xDD));
    }

    #[test]
    fn opaque_red_word() {
        assert_eq!(Argb::opaque(255, 0, 0).to_word(), 0xFFFF_0000);
    }

    #[test]
    fn gray_floors_the_mean() {
        assert_eq!(Argb::opaque(255, 0, 0).gray(), 85);
        assert_eq!(Argb::opaque(1, 1, 0).gray(), 0);
        assert_eq!(Argb::opaque(255, 255, 255).gray(), 255);
    }

    #[test]
    fn grayscale_keeps_alpha() {
        let p = Argb::new(17, 30, 60, 90).to_grayscale();
        assert_eq!(p, Argb::new(17, 60, 60, 60));
        assert_eq!(p.to_grayscale(), p);
    }
}
