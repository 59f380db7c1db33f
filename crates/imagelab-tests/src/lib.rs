//! ImageLab End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full image-to-tune flow:
//!
//! - Sonification: PNG or pixel buffer -> Tune
//! - **Determinism**: identical tunes and hashes across runs
//! - CLI: the `imagelab` commands against real files
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p imagelab-tests
//! ```

pub mod determinism;
pub mod fixtures;
