//! Determinism checks for sonification and PNG output.
//!
//! # Example
//!
//! ```rust,ignore
//! use imagelab_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| render(&store), 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// First byte difference between the reference run and a later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference, or the shorter length on a size change.
    pub offset: usize,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Difference at byte {} (run {})", self.offset, self.run_index)
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run `generate_fn` `runs` times and compare every output with the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let hash = blake3::hash(reference_bytes).to_hex().to_string();

    let mut diff_info = None;
    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(offset) = first_difference(reference_bytes, output.as_ref()) {
            diff_info = Some(DiffInfo { offset, run_index });
            break;
        }
    }

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info,
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(offset) => Some(offset),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}
