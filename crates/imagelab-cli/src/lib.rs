//! ImageLab CLI library.
//!
//! This crate provides the PNG boundary and the commands behind the
//! `imagelab` binary: image info, grayscale conversion, plane separation
//! and sonification.

pub mod commands;
pub mod png_io;
