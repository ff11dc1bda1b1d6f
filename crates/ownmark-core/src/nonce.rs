//! Nonce generation.
//!
//! Every attestation embeds a freshly drawn random nonce so that two runs
//! with identical claims still produce distinct documents. The nonce must be
//! unpredictable, so bytes come from the operating system CSPRNG.

use crate::errors::{config_error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// Generate `bit_length / 8` cryptographically secure random bytes.
///
/// A bit length of 0 is valid but degenerate: the nonce is empty and the
/// attestation's uniqueness then rests on its timestamp alone.
///
/// # Errors
///
/// Returns a `Config` error if `bit_length` is not divisible by 8.
pub fn generate(bit_length: u32) -> Result<Vec<u8>> {
    if bit_length % 8 != 0 {
        return Err(config_error(format!(
            "nonce bit length {} is not divisible by 8",
            bit_length
        )));
    }

    let mut bytes = vec![0u8; (bit_length / 8) as usize];
    OsRng.fill_bytes(&mut bytes);
    Ok(bytes)
}
