//! Info command implementation
//!
//! Loads one or more PNG files and reports their dimensions and per-channel
//! means. Every loaded image gets a session-local id.

use anyhow::{Context, Result};
use colored::Colorize;
use imagelab_image::{Channel, ChannelPlane, ChannelPlaneStore, ImageId, ImageIdAllocator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError};
use crate::png_io;

/// Summary of one loaded image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageInfo {
    pub id: ImageId,
    pub path: String,
    pub width: u32,
    pub height: u32,
    /// Mean sample value per channel, red, green, blue, alpha.
    pub channel_means: [f64; 4],
    /// Mean of the grayscale plane.
    pub gray_mean: f64,
}

impl ImageInfo {
    pub fn from_store(id: ImageId, path: &str, store: &ChannelPlaneStore) -> Self {
        let mut channel_means = [0.0; 4];
        for (mean, channel) in channel_means.iter_mut().zip(Channel::ALL) {
            *mean = plane_mean(&store.plane(channel));
        }
        Self {
            id,
            path: path.to_string(),
            width: store.width(),
            height: store.height(),
            channel_means,
            gray_mean: plane_mean(&store.to_grayscale().red()),
        }
    }
}

/// JSON output for the info command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub images: Vec<ImageInfo>,
}

fn plane_mean(plane: &ChannelPlane) -> f64 {
    let samples = plane.as_slice();
    if samples.is_empty() {
        return 0.0;
    }
    let sum: u64 = samples.iter().map(|&v| v as u64).sum();
    sum as f64 / samples.len() as f64
}

/// Run the info command.
///
/// # Returns
/// Exit code: 0 if every input loaded, 1 otherwise
pub fn run(inputs: &[String], json_output: bool) -> Result<ExitCode> {
    let mut ids = ImageIdAllocator::new();
    let mut images = Vec::new();
    let mut errors = Vec::new();

    for input in inputs {
        match png_io::load_png(Path::new(input)) {
            Ok(store) => {
                let id = ids.allocate().context("image identifiers exhausted")?;
                images.push(ImageInfo::from_store(id, input, &store));
            }
            Err(e) => errors.push(JsonError::from_anyhow(&e, error_codes::FILE_READ).with_file(input)),
        }
    }

    let success = errors.is_empty();
    if json_output {
        let output = InfoOutput {
            success,
            errors,
            images,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for info in &images {
            print_info(info);
        }
        for error in &errors {
            eprintln!(
                "{} {}: {}",
                "x".red(),
                error.file.as_deref().unwrap_or("?"),
                error.message
            );
        }
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_info(info: &ImageInfo) {
    println!("{} {}", format!("Image {}:", info.id).cyan().bold(), info.path);
    println!("  {:<8} {}x{}", "size".dimmed(), info.width, info.height);
    for (channel, mean) in Channel::ALL.iter().zip(info.channel_means) {
        println!("  {:<8} {:.2}", channel.name().dimmed(), mean);
    }
    println!("  {:<8} {:.2}", "gray".dimmed(), info.gray_mean);
}
