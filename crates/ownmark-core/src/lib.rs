//! Ownmark Core - Content-addressed proof-of-ownership attestations
//!
//! This crate provides the attestation-generation pipeline:
//! - Cryptographically secure nonce generation
//! - Self-hashing of the generating binary (tool provenance)
//! - Attestation model assembly (claims, nonce, provenance, timestamp)
//! - Plain-text template rendering with dotted-path placeholders
//! - Digest-named output persistence (filename = hash of content)
//!
//! Argument parsing lives in the CLI crate; the core consumes a validated
//! `Options` record and never touches flags.

pub mod config;
pub mod digest;
pub mod encoding;
pub mod errors;
pub mod logging;
pub mod model;
pub mod nonce;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod selfhash;

// Re-export commonly used types
pub use config::Options;
pub use digest::HashAlgorithm;
pub use encoding::TextEncoding;
pub use errors::{ErrorKind, OwnmarkError, Result};
pub use model::{AttestationModel, PackageInfo};
pub use pipeline::{run, RunReport};
pub use selfhash::SelfHash;
