//! Attestation data model.
//!
//! A read-only tree combining the validated options, the freshly generated
//! nonce, the self-hash record, a local timestamp and tool metadata. Built
//! once per run and consumed once by rendering.
//!
//! ## Template Field Paths
//!
//! - `owner.name`, `owner.email`
//! - `owned.desc`, `owned.domain`
//! - `attest.home`, `attest.date`, `attest.tz`
//! - `attest.uniqueData`, `attest.uniqueDataWrapped`, `attest.uniqueDataBits`,
//!   `attest.uniqueDataBytes`, `attest.uniqueDataDigest`
//! - `attest.package.name`, `attest.package.version`,
//!   `attest.package.description`
//! - `attest.hash.algo`, `attest.hash.hex`

use crate::config::Options;
use crate::render::wrap_columns;
use crate::selfhash::SelfHash;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Column width for the line-wrapped nonce form
pub const NONCE_WRAP_COLUMNS: usize = 120;

/// Identity claims of the attesting owner
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

/// The artifact whose ownership is being attested
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Owned {
    pub desc: String,
    pub domain: String,
}

/// Metadata of the generating tool
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl PackageInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
        }
    }
}

/// Attestation metadata: location claim, timestamp, nonce and provenance
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attest {
    pub home: String,
    /// RFC 3339 local timestamp of attestation creation
    pub date: String,
    /// UTC offset of the local timezone, e.g. "+02:00"
    pub tz: String,
    /// Nonce as standard base64
    #[serde(rename = "uniqueData")]
    pub unique_data: String,
    /// Same base64 value, line-wrapped for document readability
    #[serde(rename = "uniqueDataWrapped")]
    pub unique_data_wrapped: String,
    /// Nonce size in bits
    #[serde(rename = "uniqueDataBits")]
    pub unique_data_bits: u32,
    /// Nonce size in bytes
    #[serde(rename = "uniqueDataBytes")]
    pub unique_data_bytes: usize,
    /// Digest of the raw nonce bytes under the configured algorithm
    #[serde(rename = "uniqueDataDigest")]
    pub unique_data_digest: String,
    pub package: PackageInfo,
    pub hash: SelfHash,
}

/// The full model consumed by template rendering
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttestationModel {
    pub owner: Owner,
    pub owned: Owned,
    pub attest: Attest,
}

impl AttestationModel {
    /// Assemble the model for the current instant.
    pub fn build(
        options: &Options,
        nonce: &[u8],
        self_hash: SelfHash,
        tool: &PackageInfo,
    ) -> Self {
        Self::build_at(options, nonce, self_hash, tool, Local::now())
    }

    /// Assemble the model for an explicit timestamp.
    ///
    /// Rendering is pure given fixed inputs; injecting the timestamp keeps
    /// that property testable.
    pub fn build_at(
        options: &Options,
        nonce: &[u8],
        self_hash: SelfHash,
        tool: &PackageInfo,
        now: DateTime<Local>,
    ) -> Self {
        let unique_data = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, nonce);
        let unique_data_wrapped = wrap_columns(&unique_data, NONCE_WRAP_COLUMNS);
        let unique_data_digest = options.algorithm.hex_digest(nonce);

        Self {
            owner: Owner {
                name: options.name.clone(),
                email: options.email.clone(),
            },
            owned: Owned {
                desc: options.desc.clone(),
                domain: options.domain.clone(),
            },
            attest: Attest {
                home: options.home.clone(),
                date: now.to_rfc3339(),
                tz: now.offset().to_string(),
                unique_data,
                unique_data_wrapped,
                unique_data_bits: nonce.len() as u32 * 8,
                unique_data_bytes: nonce.len(),
                unique_data_digest,
                package: tool.clone(),
                hash: self_hash,
            },
        }
    }
}
