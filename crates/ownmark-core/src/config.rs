//! Pipeline options.
//!
//! The attestation core consumes a fully validated, immutable `Options`
//! record. Argument parsing, defaulting and help text live in the CLI crate;
//! the defaults it applies are documented here so both sides agree.

use crate::digest::HashAlgorithm;
use crate::encoding::TextEncoding;
use crate::errors::{config_error, Result};
use std::path::PathBuf;

/// Default template path, resolved against the working directory
pub const DEFAULT_TEMPLATE_PATH: &str = "attestation.tmpl";
/// Default nonce size in bits
pub const DEFAULT_NONCE_BITS: u32 = 4096;
/// Default output text encoding identifier
pub const DEFAULT_ENCODING: &str = "utf8";
/// Default digest algorithm identifier
pub const DEFAULT_ALGORITHM: &str = "sha256";
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Immutable options record consumed by the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Owner's full name
    pub name: String,
    /// Owner's email address
    pub email: String,
    /// Owner's home location
    pub home: String,
    /// Description of the owned artifact
    pub desc: String,
    /// Domain the artifact belongs to
    pub domain: String,
    /// Attestation template path
    pub template: PathBuf,
    /// Nonce size in bits, divisible by 8 (0 is valid but degenerate)
    pub nonce_bits: u32,
    /// Output text encoding
    pub encoding: TextEncoding,
    /// Digest algorithm for nonce, self-hash and output naming
    pub algorithm: HashAlgorithm,
    /// Directory the attestation is written into (must already exist)
    pub output_dir: PathBuf,
}

impl Options {
    /// Validate the record's invariants.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error naming the offending field if a required
    /// claim string is empty or the nonce bit length is not divisible by 8.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("home", &self.home),
            ("desc", &self.desc),
            ("domain", &self.domain),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(config_error(format!("required field '{}' is empty", field)));
            }
        }

        if self.nonce_bits % 8 != 0 {
            return Err(config_error(format!(
                "nonce bit length {} is not divisible by 8",
                self.nonce_bits
            )));
        }

        Ok(())
    }
}
