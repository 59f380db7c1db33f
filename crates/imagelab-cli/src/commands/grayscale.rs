//! Grayscale command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::png_io;

/// Default output path: `<stem>.gray.png` next to the input.
pub(crate) fn default_output(input: &Path) -> PathBuf {
    sibling_with_suffix(input, "gray")
}

pub(crate) fn sibling_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}.{}.png", stem, suffix))
}

/// Run the grayscale command.
///
/// # Arguments
/// * `input` - PNG to convert
/// * `output` - Output path (default: `<stem>.gray.png`)
/// * `verbose` - Print dimensions as the image is processed
pub fn run(input: &str, output: Option<&str>, verbose: bool) -> Result<ExitCode> {
    let input_path = Path::new(input);
    let store = png_io::load_png(input_path)?;
    if verbose {
        println!("{} {} ({}x{})", "Loaded".cyan().bold(), input, store.width(), store.height());
    }

    let gray = store.to_grayscale();
    let output_path = output.map(PathBuf::from).unwrap_or_else(|| default_output(input_path));
    png_io::write_png(&gray, &output_path)?;

    println!("{} {}", "Wrote".green().bold(), output_path.display());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagelab_image::{decode, pack_argb};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output(Path::new("/tmp/pics/cat.png")),
            PathBuf::from("/tmp/pics/cat.gray.png")
        );
    }

    #[test]
    fn writes_gray_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let store = decode(&[pack_argb(200, 30, 60, 90)], 1, 1).unwrap();
        png_io::write_png(&store, &input).unwrap();

        let code = run(input.to_str().unwrap(), None, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let gray = png_io::load_png(&dir.path().join("in.gray.png")).unwrap();
        assert_eq!(gray.pixels(), &[pack_argb(200, 60, 60, 60)]);
    }
}
