//! CLI command implementations

pub mod grayscale;
pub mod info;
pub mod json_output;
pub mod planes;
pub mod sonify;
