//! Ownmark CLI
//!
//! Command-line front end for the attestation pipeline. This crate is the
//! external argument-parsing collaborator: it validates and defaults all
//! options, then hands the core a finished `Options` record.

use clap::Parser;
use ownmark_core::logging::{init, Profile};
use ownmark_core::{config, pipeline, HashAlgorithm, Options, PackageInfo, TextEncoding};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ownmark")]
#[command(about = "Generate a content-addressed proof-of-ownership attestation", long_about = None)]
#[command(version)]
struct Cli {
    /// Owner's full name
    #[arg(long)]
    name: String,

    /// Owner's email address
    #[arg(long)]
    email: String,

    /// Owner's home location
    #[arg(long)]
    home: String,

    /// Description of the owned artifact
    #[arg(long)]
    desc: String,

    /// Domain the artifact belongs to
    #[arg(long)]
    domain: String,

    /// Attestation template path
    #[arg(long, default_value = config::DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// Nonce size in bits (must be divisible by 8)
    #[arg(long, default_value_t = config::DEFAULT_NONCE_BITS)]
    nonce_bits: u32,

    /// Output text encoding (utf8 or utf16le)
    #[arg(long, default_value = config::DEFAULT_ENCODING)]
    encoding: String,

    /// Digest algorithm (sha256, sha384 or sha512)
    #[arg(long, default_value = config::DEFAULT_ALGORITHM)]
    algorithm: String,

    /// Directory the attestation is written into (must exist)
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Emit JSON logs instead of human-readable ones
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = build_options(&cli).and_then(|options| {
        let tool = PackageInfo::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        pipeline::run(&options, &tool)
    });

    match result {
        Ok(report) => {
            println!("{} {}", report.algorithm, report.digest);
            println!("✓ Attestation written to {}", report.path.display());
        }
        Err(e) if e.is_user_correctable() => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(2);
        }
    }
}

/// Assemble and validate the options record before the core ever runs
fn build_options(cli: &Cli) -> ownmark_core::Result<Options> {
    let options = Options {
        name: cli.name.clone(),
        email: cli.email.clone(),
        home: cli.home.clone(),
        desc: cli.desc.clone(),
        domain: cli.domain.clone(),
        template: cli.template.clone(),
        nonce_bits: cli.nonce_bits,
        encoding: cli.encoding.parse::<TextEncoding>()?,
        algorithm: cli.algorithm.parse::<HashAlgorithm>()?,
        output_dir: cli.out_dir.clone(),
    };
    options.validate()?;
    Ok(options)
}
