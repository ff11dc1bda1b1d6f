//! Pipeline orchestration.
//!
//! One linear run per invocation:
//!
//! ```text
//! LoadTemplate → GenerateNonce → ComputeSelfHash → BuildModel
//!     → Render → HashOutput → WriteFile
//! ```
//!
//! Any stage failure short-circuits the rest. A missing template file is the
//! one user-correctable failure and gets its own error variant; everything
//! else bubbles up with full detail.

use crate::config::Options;
use crate::errors::{io_error, OwnmarkError, Result};
use crate::model::{AttestationModel, PackageInfo};
use crate::render::{Renderer, RendererConfig};
use crate::{nonce, output, selfhash};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a successful pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Algorithm identifier used for the output digest
    pub algorithm: String,
    /// Hex digest of the written attestation bytes
    pub digest: String,
    /// Absolute path of the written attestation
    pub path: PathBuf,
}

/// Run the attestation pipeline once.
///
/// `tool` identifies the generating package; the CLI passes its own
/// metadata so the attestation names the binary the user actually ran.
///
/// # Errors
///
/// Propagates the first failing stage's error unchanged.
pub fn run(options: &Options, tool: &PackageInfo) -> Result<RunReport> {
    options.validate()?;

    let template_text = load_template(&options.template)?;
    debug!(template = %options.template.display(), "template loaded");

    let nonce_bytes = nonce::generate(options.nonce_bits)?;
    debug!(bits = options.nonce_bits, "nonce generated");

    let self_hash = selfhash::digest_of_self(options.algorithm)?;
    debug!(algo = %self_hash.algo, "self hash computed");

    let model = AttestationModel::build(options, &nonce_bytes, self_hash, tool);

    let renderer = Renderer::new(RendererConfig::default());
    let rendered = renderer.render(&template_text, &model)?;
    debug!(chars = rendered.len(), "attestation rendered");

    let written = output::write_attestation(
        &rendered,
        options.algorithm,
        options.encoding,
        &options.output_dir,
    )?;
    info!(digest = %written.digest, path = %written.path.display(), "attestation written");

    Ok(RunReport {
        algorithm: options.algorithm.as_str().to_string(),
        digest: written.digest,
        path: written.path,
    })
}

/// Read the template, classifying a missing file as user-correctable
fn load_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OwnmarkError::TemplateNotFound {
            path: path.to_path_buf(),
        },
        _ => io_error("read_template", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_template_classifies_not_found() {
        let err = load_template(Path::new("/definitely/not/here.tmpl")).unwrap_err();
        assert_eq!(err.code(), "ERR_TEMPLATE_NOT_FOUND");
        assert!(err.is_user_correctable());
        assert!(err.to_string().contains("/definitely/not/here.tmpl"));
    }

    #[test]
    fn test_load_template_reads_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{{owner.name}}").unwrap();
        assert_eq!(load_template(file.path()).unwrap(), "{{owner.name}}");
    }
}
