//! Sonify command implementation
//!
//! Turns a PNG into a tune, one chord per row, and writes the score as a
//! human-readable listing or JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use imagelab_image::trim;
use imagelab_sound::{PentatonicVariant, Playback, ScoreAssembler, SonifyConfig, Tune};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError};
use crate::png_io;

/// Options for one sonify run.
#[derive(Debug, Clone, Default)]
pub struct SonifyOptions {
    /// PNG to sonify. Ignored when `sample` is set.
    pub input: Option<String>,
    /// Emit the built-in sample tune instead of reading an image.
    pub sample: bool,
    /// JSON config file.
    pub config: Option<String>,
    /// Pentatonic variant override (1-3).
    pub scale: Option<u8>,
    /// Columns removed from the left edge before sonifying.
    pub trim_x: u32,
    /// Rows removed from the top edge before sonifying.
    pub trim_y: u32,
    /// Score output path (default: stdout).
    pub output: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

/// JSON output for the sonify command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonifyOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SonifyResult>,
}

/// A finished score with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SonifyResult {
    pub width: u32,
    pub height: u32,
    pub scale: PentatonicVariant,
    /// BLAKE3 hash of the tune.
    pub hash: String,
    pub tune: Tune,
}

/// Playback device that keeps the last tune it was handed.
#[derive(Debug, Default)]
pub struct ScoreRecorder {
    tune: Option<Tune>,
}

impl ScoreRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_tune(self) -> Option<Tune> {
        self.tune
    }
}

impl Playback for ScoreRecorder {
    fn play(&mut self, tune: &Tune) {
        self.tune = Some(tune.clone());
    }
}

/// Plain-text listing of a tune, one row per chord.
pub fn render_listing(tune: &Tune) -> String {
    let instruments: Vec<String> = tune.instruments().iter().map(u8::to_string).collect();
    let mut out = format!("tempo {} ms\ninstruments [{}]\n", tune.tempo(), instruments.join(", "));
    for (row, chord) in tune.iter().enumerate() {
        out.push_str(&format!("{:>5}:", row));
        for note in chord {
            out.push_str(&format!(" {}", note));
        }
        out.push('\n');
    }
    out
}

/// Load the config file (if any) and apply the `--scale` override.
pub fn load_config(path: Option<&str>, scale: Option<u8>) -> Result<SonifyConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path))?
        }
        None => SonifyConfig::default(),
    };
    if let Some(n) = scale {
        config.scale = PentatonicVariant::from_number(n)?;
    }
    Ok(config)
}

/// Build the score described by `options`.
pub fn build_score(options: &SonifyOptions) -> Result<SonifyResult> {
    let config = load_config(options.config.as_deref(), options.scale)?;

    if options.sample {
        let tune = Tune::sample();
        return Ok(SonifyResult {
            width: 0,
            height: 0,
            scale: config.scale,
            hash: tune.content_hash(),
            tune,
        });
    }

    let input = options
        .input
        .as_deref()
        .context("an input PNG is required unless --sample is given")?;
    let mut store = png_io::load_png(Path::new(input))?;
    if options.verbose && !options.json {
        println!("  {} {}x{}", "loaded".dimmed(), store.width(), store.height());
    }

    if options.trim_x > 0 || options.trim_y > 0 {
        store = trim(&store, options.trim_x, options.trim_y)?;
        if options.verbose && !options.json {
            println!("  {} {}x{}", "trimmed".dimmed(), store.width(), store.height());
        }
    }

    let assembler = ScoreAssembler::new(&config)?;
    let mut recorder = ScoreRecorder::new();
    assembler.perform(store.plane_set(), &mut recorder)?;
    let tune = recorder.into_tune().context("assembler produced no tune")?;

    if options.verbose && !options.json {
        println!(
            "  {} {} chords, {} notes, scale {}",
            "assembled".dimmed(),
            tune.len(),
            tune.note_count(),
            config.scale
        );
    }

    Ok(SonifyResult {
        width: store.width(),
        height: store.height(),
        scale: config.scale,
        hash: tune.content_hash(),
        tune,
    })
}

/// Run the sonify command.
///
/// # Returns
/// Exit code: 0 on success, 1 if the image could not be sonified
pub fn run(options: &SonifyOptions) -> Result<ExitCode> {
    if options.json {
        run_json(options)
    } else {
        run_human(options)
    }
}

fn run_human(options: &SonifyOptions) -> Result<ExitCode> {
    match (&options.input, options.sample) {
        (_, true) => println!("{} sample tune", "Input:".cyan().bold()),
        (Some(input), false) => println!("{} {}", "Input:".cyan().bold(), input),
        (None, false) => {}
    }

    let result = build_score(options)?;
    let listing = render_listing(&result.tune);
    emit(options.output.as_deref(), &listing)?;

    println!(
        "{} {} chords, hash {}",
        "Done:".green().bold(),
        result.tune.len(),
        &result.hash[..16]
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &SonifyOptions) -> Result<ExitCode> {
    let output = match build_score(options) {
        Ok(result) => SonifyOutput {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        },
        Err(e) => {
            let mut error = JsonError::from_anyhow(&e, error_codes::FILE_READ);
            if let Some(input) = &options.input {
                error = error.with_file(input);
            }
            SonifyOutput {
                success: false,
                errors: vec![error],
                result: None,
            }
        }
    };

    let text = serde_json::to_string_pretty(&output)?;
    match (&options.output, output.success) {
        (Some(path), true) => {
            if let Err(e) = fs::write(path, &text) {
                let failure = SonifyOutput {
                    success: false,
                    errors: vec![JsonError::new(error_codes::FILE_WRITE, format!("Failed to write {}: {}", path, e))
                        .with_file(path)],
                    result: None,
                };
                println!("{}", serde_json::to_string_pretty(&failure)?);
                return Ok(ExitCode::from(1));
            }
        }
        _ => println!("{}", text),
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn emit(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path))?;
            println!("{} {}", "Wrote".green().bold(), path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagelab_image::{decode, pack_argb};
    use pretty_assertions::assert_eq;

    fn write_fixture(dir: &Path) -> String {
        let pixels: Vec<u32> = (0..12u32)
            .map(|i| pack_argb(255, (i * 20) as u8, (255 - i * 20) as u8, 128))
            .collect();
        let store = decode(&pixels, 4, 3).unwrap();
        let path = dir.join("fixture.png");
        png_io::write_png(&store, &path).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn listing_has_one_line_per_chord() {
        let listing = render_listing(&Tune::sample());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "tempo 600 ms");
        assert_eq!(lines[1], "instruments []");
        assert!(lines[2].starts_with("    0: [Channel 0; Pitch 60;"));
    }

    #[test]
    fn scale_override_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"scale": 1, "whole_note_ms": 1600}"#).unwrap();

        let config = load_config(path.to_str(), Some(3)).unwrap();
        assert_eq!(config.scale, PentatonicVariant::Major);
        assert_eq!(config.whole_note_ms, 1600);
    }

    #[test]
    fn bad_scale_override_is_rejected() {
        let err = load_config(None, Some(4)).unwrap_err();
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn score_matches_library_sonify() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path());
        let options = SonifyOptions {
            input: Some(input.clone()),
            ..SonifyOptions::default()
        };
        let result = build_score(&options).unwrap();

        let store = png_io::load_png(Path::new(&input)).unwrap();
        let expected = imagelab_sound::sonify(&store, &SonifyConfig::default()).unwrap();
        assert_eq!(result.tune, expected);
        assert_eq!((result.width, result.height), (4, 3));
    }

    #[test]
    fn trimming_drops_rows() {
        let dir = tempfile::tempdir().unwrap();
        let options = SonifyOptions {
            input: Some(write_fixture(dir.path())),
            trim_x: 1,
            trim_y: 2,
            ..SonifyOptions::default()
        };
        let result = build_score(&options).unwrap();
        assert_eq!((result.width, result.height), (3, 1));
        assert_eq!(result.tune.len(), 1);
    }

    #[test]
    fn trimming_everything_fails() {
        let dir = tempfile::tempdir().unwrap();
        let options = SonifyOptions {
            input: Some(write_fixture(dir.path())),
            trim_y: 3,
            ..SonifyOptions::default()
        };
        let err = build_score(&options).unwrap_err();
        assert_eq!(JsonError::from_anyhow(&err, error_codes::INTERNAL).code, "IMAGE_002");
    }

    #[test]
    fn json_output_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("score.json");
        let options = SonifyOptions {
            input: Some(write_fixture(dir.path())),
            output: Some(out.to_string_lossy().into_owned()),
            json: true,
            ..SonifyOptions::default()
        };
        assert_eq!(run(&options).unwrap(), ExitCode::SUCCESS);

        let parsed: SonifyOutput = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let result = parsed.result.unwrap();
        assert_eq!(result.tune.len(), 3);
        assert_eq!(result.hash, result.tune.content_hash());
    }

    #[test]
    fn malformed_config_is_config_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"scale": "#).unwrap();
        let options = SonifyOptions {
            sample: true,
            config: Some(path.to_string_lossy().into_owned()),
            ..SonifyOptions::default()
        };

        let err = build_score(&options).unwrap_err();
        assert_eq!(JsonError::from_anyhow(&err, error_codes::FILE_READ).code, error_codes::CONFIG_PARSE);
    }

    #[test]
    fn missing_config_is_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let options = SonifyOptions {
            sample: true,
            config: Some(dir.path().join("absent.json").to_string_lossy().into_owned()),
            ..SonifyOptions::default()
        };

        let err = build_score(&options).unwrap_err();
        assert_eq!(JsonError::from_anyhow(&err, error_codes::FILE_READ).code, error_codes::FILE_READ);
    }

    #[test]
    fn unwritable_json_output_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("score.json");
        let options = SonifyOptions {
            sample: true,
            output: Some(out.to_string_lossy().into_owned()),
            json: true,
            ..SonifyOptions::default()
        };

        assert_eq!(run(&options).unwrap(), ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn sample_needs_no_input() {
        let options = SonifyOptions {
            sample: true,
            ..SonifyOptions::default()
        };
        let result = build_score(&options).unwrap();
        assert_eq!(result.tune, Tune::sample());
    }
}
