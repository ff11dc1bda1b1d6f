//! Digest-named output persistence.
//!
//! The rendered attestation is hashed and written to
//! `{hexDigest}_{algorithm}.txt` inside the output directory, so the
//! filename is bound to the exact bytes of the file. Writes go through a
//! temp→rename step: a failed run leaves no partial file behind.

use crate::digest::HashAlgorithm;
use crate::encoding::TextEncoding;
use crate::errors::{io_error, OwnmarkError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of persisting a rendered attestation
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenAttestation {
    /// Hex digest of the written bytes
    pub digest: String,
    /// Absolute path of the written file
    pub path: PathBuf,
}

/// Hash the rendered text and persist it under its digest name.
///
/// The digest is computed over the encoded bytes, and exactly those bytes
/// are written. Writing the same content twice hits the same name with the
/// same bytes, so the overwrite is idempotent.
///
/// # Errors
///
/// Returns an `Io` error if `output_dir` does not exist or is not a
/// directory (it is never created implicitly), or if the write fails.
pub fn write_attestation(
    rendered: &str,
    algorithm: HashAlgorithm,
    encoding: TextEncoding,
    output_dir: &Path,
) -> Result<WrittenAttestation> {
    let bytes = encoding.encode(rendered);
    let digest = algorithm.hex_digest(&bytes);

    let dir = output_dir
        .canonicalize()
        .map_err(|e| io_error("resolve_output_dir", e))?;
    if !dir.is_dir() {
        return Err(OwnmarkError::Io {
            op: "resolve_output_dir".to_string(),
            message: format!("{} is not a directory", dir.display()),
        });
    }

    let target = dir.join(format!("{}_{}.txt", digest, algorithm.as_str()));
    atomic_write(&target, &bytes)?;

    Ok(WrittenAttestation {
        digest,
        path: target,
    })
}

/// Write via temp file + rename so the target never holds partial content
fn atomic_write(target: &Path, content: &[u8]) -> Result<()> {
    let temp_path = target.with_extension("tmp");

    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("write_attestation_temp", e));
    }

    if let Err(e) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_attestation_temp", e));
    }

    Ok(())
}
