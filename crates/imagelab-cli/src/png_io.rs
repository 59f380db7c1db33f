//! PNG loading and saving.
//!
//! Every PNG is normalized to 8-bit samples on load and converted to packed
//! ARGB words. Writes use fixed encoder settings so the same image always
//! produces the same bytes.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use imagelab_image::{decode, Argb, ChannelPlane, ChannelPlaneStore};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType, Transformations};

/// Load a PNG file into a channel store.
pub fn load_png(path: &Path) -> Result<ChannelPlaneStore> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_png(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Decode PNG bytes into a channel store.
pub fn decode_png(bytes: &[u8]) -> Result<ChannelPlaneStore> {
    let mut decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<u32> = match info.color_type {
        ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Argb::new(p[3], p[0], p[1], p[2]).to_word())
            .collect(),
        ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Argb::opaque(p[0], p[1], p[2]).to_word())
            .collect(),
        ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Argb::new(p[1], p[0], p[0], p[0]).to_word())
            .collect(),
        ColorType::Grayscale => data
            .iter()
            .map(|&v| Argb::opaque(v, v, v).to_word())
            .collect(),
        other => bail!("unsupported PNG color type after normalization: {:?}", other),
    };

    Ok(decode(&pixels, info.width, info.height)?)
}

/// Write a store as an RGBA PNG file.
pub fn write_png(store: &ChannelPlaneStore, path: &Path) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_png_to_writer(store, std::io::BufWriter::new(file))
}

/// Write a store as RGBA PNG to any writer.
pub fn write_png_to_writer<W: Write>(store: &ChannelPlaneStore, writer: W) -> Result<()> {
    let mut data = Vec::with_capacity(store.pixels().len() * 4);
    for &word in store.pixels() {
        let p = Argb::from_word(word);
        data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    encode(writer, store.width(), store.height(), ColorType::Rgba, &data)
}

/// Write one plane as a grayscale PNG file.
pub fn write_plane_png(plane: &ChannelPlane, path: &Path) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    encode(
        std::io::BufWriter::new(file),
        plane.width(),
        plane.height(),
        ColorType::Grayscale,
        plane.as_slice(),
    )
}

fn encode<W: Write>(writer: W, width: u32, height: u32, color: ColorType, data: &[u8]) -> Result<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;
    png_writer.finish()?;
    Ok(())
}
