//! Digest computation for attestation content.
//!
//! Provides the supported hash algorithm registry and hex digest helpers
//! used for nonce digests, self-hashing and digest-named output files.
//!
//! ## Supported Algorithms
//!
//! - `sha256` (default) — 64 hex chars
//! - `sha384` — 96 hex chars
//! - `sha512` — 128 hex chars

use crate::errors::{config_error, OwnmarkError};
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Supported digest algorithm identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// The identifier used in filenames and template output
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Compute the hex-encoded digest of a byte slice
    pub fn hex_digest(&self, bytes: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
            HashAlgorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        }
    }

    /// Compute the hex-encoded digest of a reader, consumed in 8 KiB chunks
    /// so large inputs are never held in memory at once.
    ///
    /// # Errors
    ///
    /// Returns the underlying `std::io::Error` if the reader fails.
    pub fn hex_digest_reader<R: Read>(&self, reader: R) -> std::io::Result<String> {
        match self {
            HashAlgorithm::Sha256 => digest_reader::<Sha256, R>(reader),
            HashAlgorithm::Sha384 => digest_reader::<Sha384, R>(reader),
            HashAlgorithm::Sha512 => digest_reader::<Sha512, R>(reader),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = OwnmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(config_error(format!(
                "unsupported hash algorithm '{}' (expected sha256, sha384 or sha512)",
                other
            ))),
        }
    }
}

/// Streaming digest shared by all algorithms
fn digest_reader<D: Digest, R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
