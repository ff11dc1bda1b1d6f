//! Self-hashing of the generating program.
//!
//! Each attestation records a digest of the binary that produced it, binding
//! the document to the exact tool version. Later disputes about authenticity
//! can compare this record against a known build.

use crate::digest::HashAlgorithm;
use crate::errors::{io_error, Result};
use serde::Serialize;
use std::path::Path;

/// Digest record of the generating program
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelfHash {
    /// Algorithm identifier (e.g. "sha256")
    pub algo: String,
    /// Lowercase hex digest of the program bytes
    pub hex: String,
}

/// Compute the hex digest of an arbitrary file.
///
/// Reads in 8 KiB chunks to avoid loading the whole file into memory.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be opened or read.
pub fn digest_of_file(path: &Path, algorithm: HashAlgorithm) -> Result<String> {
    let file = std::fs::File::open(path).map_err(|e| io_error("open_self", e))?;
    algorithm
        .hex_digest_reader(file)
        .map_err(|e| io_error("read_self", e))
}

/// Compute the digest of the currently running executable.
///
/// # Errors
///
/// Returns an `Io` error if the executable path cannot be resolved or the
/// file cannot be read. This should not happen in a packaged deployment but
/// is surfaced rather than ignored.
pub fn digest_of_self(algorithm: HashAlgorithm) -> Result<SelfHash> {
    let exe = std::env::current_exe().map_err(|e| io_error("locate_self", e))?;
    let hex = digest_of_file(&exe, algorithm)?;
    Ok(SelfHash {
        algo: algorithm.as_str().to_string(),
        hex,
    })
}
