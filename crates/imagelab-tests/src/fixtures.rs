//! Deterministic test images.

use std::path::{Path, PathBuf};

use imagelab_cli::png_io;
use imagelab_image::{decode, pack_argb, ChannelPlaneStore};

/// Opaque image with red rising left to right and green rising top to bottom.
pub fn gradient(width: u32, height: u32) -> ChannelPlaneStore {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(pack_argb(255, ramp(x, width), ramp(y, height), 64));
        }
    }
    build(&pixels, width, height)
}

/// Image filled with a single ARGB word.
pub fn solid(argb: u32, width: u32, height: u32) -> ChannelPlaneStore {
    build(&vec![argb; (width * height) as usize], width, height)
}

/// Pseudo-random pixels from a fixed integer hash of `seed` and position.
pub fn noise(seed: u32, width: u32, height: u32) -> ChannelPlaneStore {
    let pixels: Vec<u32> = (0..width * height)
        .map(|i| {
            let mut h = i.wrapping_mul(0x9E37_79B9) ^ seed.wrapping_mul(0x85EB_CA6B);
            h ^= h >> 15;
            h = h.wrapping_mul(0x2C1B_3C6D);
            h ^= h >> 12;
            h
        })
        .collect();
    build(&pixels, width, height)
}

/// Write `store` as `<name>.png` under `dir`.
pub fn write_fixture(dir: &Path, name: &str, store: &ChannelPlaneStore) -> PathBuf {
    let path = dir.join(format!("{}.png", name));
    if let Err(e) = png_io::write_png(store, &path) {
        panic!("failed to write fixture {}: {:#}", path.display(), e);
    }
    path
}

fn ramp(pos: u32, len: u32) -> u8 {
    if len > 1 {
        (pos * 255 / (len - 1)) as u8
    } else {
        0
    }
}

fn build(pixels: &[u32], width: u32, height: u32) -> ChannelPlaneStore {
    match decode(pixels, width, height) {
        Ok(store) => store,
        Err(e) => panic!("bad fixture {}x{}: {}", width, height, e),
    }
}
