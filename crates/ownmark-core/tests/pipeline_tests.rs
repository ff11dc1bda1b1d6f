//! Pipeline integration tests
//!
//! Exercises the full attestation run end to end against the documented
//! properties: nonce-driven uniqueness, filename/content binding, verbatim
//! rendering, purity, and failure behavior.

use chrono::TimeZone;
use ownmark_core::model::{AttestationModel, PackageInfo};
use ownmark_core::render::Renderer;
use ownmark_core::selfhash::SelfHash;
use ownmark_core::{pipeline, HashAlgorithm, Options, TextEncoding};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_template(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("attestation.tmpl");
    fs::write(&path, content).unwrap();
    path
}

fn options(template: PathBuf, output_dir: PathBuf) -> Options {
    Options {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        home: "London".to_string(),
        desc: "Analytical engine notes".to_string(),
        domain: "mathematics".to_string(),
        template,
        nonce_bits: 256,
        encoding: TextEncoding::Utf8,
        algorithm: HashAlgorithm::Sha256,
        output_dir,
    }
}

fn tool() -> PackageInfo {
    PackageInfo::new("ownmark-test", "0.0.0", "test fixture")
}

#[test]
fn test_two_runs_produce_different_digests() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path(), "nonce: {{attest.uniqueData}}\n");
    let opts = options(template, dir.path().to_path_buf());

    let first = pipeline::run(&opts, &tool()).unwrap();
    let second = pipeline::run(&opts, &tool()).unwrap();

    assert_ne!(first.digest, second.digest);
    assert_ne!(first.path, second.path);
    assert!(first.path.exists());
    assert!(second.path.exists());
}

#[test]
fn test_zero_bit_nonce_makes_nonce_fields_constant() {
    let dir = TempDir::new().unwrap();
    // Template uses only nonce-derived fields, so with a zero-length nonce
    // two runs must collapse onto the same digest-named file.
    let template = write_template(
        dir.path(),
        "{{attest.uniqueData}}|{{attest.uniqueDataBytes}}|{{attest.uniqueDataDigest}}",
    );
    let mut opts = options(template, dir.path().to_path_buf());
    opts.nonce_bits = 0;

    let first = pipeline::run(&opts, &tool()).unwrap();
    let second = pipeline::run(&opts, &tool()).unwrap();

    assert_eq!(first.digest, second.digest);
    assert_eq!(first.path, second.path);
}

#[test]
fn test_filename_digest_matches_written_bytes() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path(), "Owned by {{owner.name}} ({{owner.email}})\n");
    let opts = options(template, dir.path().to_path_buf());

    let report = pipeline::run(&opts, &tool()).unwrap();

    let bytes = fs::read(&report.path).unwrap();
    assert_eq!(HashAlgorithm::Sha256.hex_digest(&bytes), report.digest);

    let file_name = report.path.file_name().unwrap().to_str().unwrap();
    assert_eq!(file_name, format!("{}_sha256.txt", report.digest));
}

#[test]
fn test_placeholder_free_template_renders_verbatim() {
    let dir = TempDir::new().unwrap();
    let body = "This document has no placeholders.\nIt is copied as-is.\n";
    let template = write_template(dir.path(), body);
    let opts = options(template, dir.path().to_path_buf());

    let report = pipeline::run(&opts, &tool()).unwrap();
    assert_eq!(fs::read_to_string(&report.path).unwrap(), body);
}

#[test]
fn test_missing_template_is_correctable_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let opts = options(
        dir.path().join("absent.tmpl"),
        out.path().to_path_buf(),
    );

    let err = pipeline::run(&opts, &tool()).unwrap_err();
    assert_eq!(err.code(), "ERR_TEMPLATE_NOT_FOUND");
    assert!(err.is_user_correctable());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_output_dir_is_internal_io_error() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path(), "{{owner.name}}");
    let mut opts = options(template, dir.path().join("no-such-dir"));
    opts.nonce_bits = 64;

    let err = pipeline::run(&opts, &tool()).unwrap_err();
    assert_eq!(err.code(), "ERR_IO");
    assert!(!err.is_user_correctable());
    assert!(!opts.output_dir.exists());
}

#[test]
fn test_unresolved_placeholder_is_template_error() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path(), "{{attest.signature}}");
    let opts = options(template, dir.path().to_path_buf());

    let err = pipeline::run(&opts, &tool()).unwrap_err();
    assert_eq!(err.code(), "ERR_TEMPLATE");
    // Rendering failed before the writer ran: only the template file exists
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_rendering_is_pure_for_fixed_model() {
    let dir = TempDir::new().unwrap();
    let template = write_template(
        dir.path(),
        "{{owner.name}} {{attest.date}} {{attest.uniqueData}} {{attest.hash.hex}}",
    );
    let opts = options(template.clone(), dir.path().to_path_buf());

    let now = chrono::Local.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let self_hash = SelfHash {
        algo: "sha256".to_string(),
        hex: "cd".repeat(32),
    };
    let model =
        AttestationModel::build_at(&opts, b"held-fixed", self_hash, &tool(), now);

    let renderer = Renderer::default();
    let template_text = fs::read_to_string(&template).unwrap();
    let first = renderer.render(&template_text, &model).unwrap();
    let second = renderer.render(&template_text, &model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_embedded_nonce_decodes_to_configured_length() {
    let dir = TempDir::new().unwrap();
    // Wrapped form only; decoding after whitespace strip must still yield
    // exactly nonce_bits / 8 bytes.
    let template = write_template(dir.path(), "{{attest.uniqueDataWrapped}}");
    let mut opts = options(template, dir.path().to_path_buf());
    opts.nonce_bits = 4096;

    let report = pipeline::run(&opts, &tool()).unwrap();
    let body = fs::read_to_string(&report.path).unwrap();
    let stripped: String = body.chars().filter(|c| !c.is_whitespace()).collect();

    let decoded =
        base64::Engine::decode(&base64::engine::general_purpose::STANDARD, stripped).unwrap();
    assert_eq!(decoded.len(), 4096 / 8);
}

#[test]
fn test_full_model_template_renders_every_field() {
    let dir = TempDir::new().unwrap();
    let template = write_template(
        dir.path(),
        "\
PROOF OF OWNERSHIP

Owner:    {{owner.name}} <{{owner.email}}>
Home:     {{attest.home}}
Artifact: {{owned.desc}} [{{owned.domain}}]
Date:     {{attest.date}} ({{attest.tz}})
Tool:     {{attest.package.name}} {{attest.package.version}}
Binary:   {{attest.hash.algo}}:{{attest.hash.hex}}
Nonce:    {{attest.uniqueDataBits}} bits, digest {{attest.uniqueDataDigest}}

{{attest.uniqueDataWrapped}}
",
    );
    let opts = options(template, dir.path().to_path_buf());

    let report = pipeline::run(&opts, &tool()).unwrap();
    let body = fs::read_to_string(&report.path).unwrap();

    assert!(body.contains("Ada Lovelace <ada@example.org>"));
    assert!(body.contains("Analytical engine notes [mathematics]"));
    assert!(body.contains("ownmark-test 0.0.0"));
    assert!(body.contains("256 bits"));
}
