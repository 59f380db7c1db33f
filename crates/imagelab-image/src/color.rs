//! RGB to hue/saturation/brightness conversion.

use serde::{Deserialize, Serialize};

/// Hue, saturation and brightness, each in `[0, 1]`.
///
/// Hue is a fraction of the full color wheel, so `0.5` is cyan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    /// Convert 8-bit red, green and blue.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let brightness = max as f64 / 255.0;
        let saturation = if max != 0 {
            (max - min) as f64 / max as f64
        } else {
            0.0
        };
        if max == min {
            return Self {
                hue: 0.0,
                saturation,
                brightness,
            };
        }

        let delta = (max - min) as f64;
        let rc = (max - r) as f64 / delta;
        let gc = (max - g) as f64 / delta;
        let bc = (max - b) as f64 / delta;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let hue = sector / 6.0;
        let hue = if hue < 0.0 { hue + 1.0 } else { hue };

        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Components as `[hue, saturation, brightness]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.hue, self.saturation, self.brightness]
    }
}
