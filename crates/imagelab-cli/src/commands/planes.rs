//! Planes command implementation
//!
//! Splits an image into one grayscale PNG per channel.

use anyhow::{Context, Result};
use colored::Colorize;
use imagelab_image::Channel;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::grayscale::sibling_with_suffix;
use crate::png_io;

/// Run the planes command.
///
/// Writes `<stem>.red.png`, `<stem>.green.png`, `<stem>.blue.png` and
/// `<stem>.alpha.png` into `out_dir`, or next to the input when absent.
pub fn run(input: &str, out_dir: Option<&str>, verbose: bool) -> Result<ExitCode> {
    let input_path = Path::new(input);
    let store = png_io::load_png(input_path)?;
    if verbose {
        println!("{} {} ({}x{})", "Loaded".cyan().bold(), input, store.width(), store.height());
    }

    if let Some(dir) = out_dir {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir))?;
    }

    for (channel, path) in plane_paths(input_path, out_dir.map(Path::new)) {
        png_io::write_plane_png(&store.plane(channel), &path)?;
        println!("{} {}", "Wrote".green().bold(), path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn plane_paths(input: &Path, out_dir: Option<&Path>) -> Vec<(Channel, PathBuf)> {
    Channel::ALL
        .iter()
        .map(|&channel| {
            let beside = sibling_with_suffix(input, channel.name());
            let path = match (out_dir, beside.file_name()) {
                (Some(dir), Some(name)) => dir.join(name),
                _ => beside,
            };
            (channel, path)
        })
        .collect()
}
