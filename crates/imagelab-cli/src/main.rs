//! ImageLab CLI - Command-line interface for channel separation and sonification
//!
//! This binary loads PNG images, splits them into channel planes, converts
//! them to grayscale and turns them into tunes.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use imagelab_cli::commands;
use imagelab_cli::commands::sonify::SonifyOptions;

/// ImageLab - Image channel planes and sonification
#[derive(Parser)]
#[command(name = "imagelab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print intermediate steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dimensions and channel means of PNG images
    Info {
        /// PNG files to inspect
        #[arg(required = true)]
        input: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a PNG to grayscale, keeping alpha
    Grayscale {
        /// PNG file to convert
        input: String,

        /// Output file path (default: <stem>.gray.png)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write each channel plane as a grayscale PNG
    Planes {
        /// PNG file to split
        input: String,

        /// Output directory (default: next to the input)
        #[arg(long)]
        out_dir: Option<String>,
    },

    /// Turn a PNG into a tune, one chord per row
    Sonify {
        /// PNG file to sonify
        #[arg(required_unless_present = "sample")]
        input: Option<String>,

        /// Emit the built-in sample tune instead of reading an image
        #[arg(long, conflicts_with = "input")]
        sample: bool,

        /// Pentatonic scale variant (1 = suspended, 2 = minor, 3 = major)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
        scale: Option<u8>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Columns to remove from the left edge
        #[arg(long, default_value_t = 0)]
        trim_x: u32,

        /// Rows to remove from the top edge
        #[arg(long, default_value_t = 0)]
        trim_y: u32,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Info { input, json } => commands::info::run(&input, json),
        Commands::Grayscale { input, output } => {
            commands::grayscale::run(&input, output.as_deref(), verbose)
        }
        Commands::Planes { input, out_dir } => {
            commands::planes::run(&input, out_dir.as_deref(), verbose)
        }
        Commands::Sonify {
            input,
            sample,
            scale,
            config,
            trim_x,
            trim_y,
            output,
            json,
        } => commands::sonify::run(&SonifyOptions {
            input,
            sample,
            config,
            scale,
            trim_x,
            trim_y,
            output,
            json,
            verbose,
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
