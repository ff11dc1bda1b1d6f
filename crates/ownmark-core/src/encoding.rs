//! Output text encodings.
//!
//! The configured encoding determines the exact bytes that are both hashed
//! for the output filename and written to disk; the two always agree.

use crate::errors::{config_error, OwnmarkError};
use std::str::FromStr;

/// Supported output text encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8 (default)
    Utf8,
    /// UTF-16 little-endian code units
    Utf16Le,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Utf16Le => "utf16le",
        }
    }

    /// Encode text into the byte sequence persisted to disk.
    ///
    /// Total for every Rust string; no replacement characters, no loss.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = OwnmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "utf16le" | "utf-16le" => Ok(TextEncoding::Utf16Le),
            other => Err(config_error(format!(
                "unsupported text encoding '{}' (expected utf8 or utf16le)",
                other
            ))),
        }
    }
}
