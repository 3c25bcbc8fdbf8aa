//! Per-pack password generation.

use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

/// Random bytes behind every generated password.
pub const PASSWORD_BYTES: usize = 32;

/// Length of the hex-encoded password.
pub const PASSWORD_LEN: usize = PASSWORD_BYTES * 2;

/// Generates a 64-character lowercase hex password from 32 OS-random bytes.
///
/// There is no fallback source: if the OS RNG fails, so does the caller.
pub fn generate_password() -> CryptoResult<String> {
    let mut bytes = Zeroizing::new([0u8; PASSWORD_BYTES]);
    fill_random(&mut bytes[..])?;
    Ok(hex::encode(&bytes[..]))
}

/// Returns true if `candidate` has the shape of a generated password.
pub fn is_valid_password(candidate: &str) -> bool {
    candidate.len() == PASSWORD_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

pub(crate) fn fill_random(buf: &mut [u8]) -> CryptoResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CryptoError::RandomnessUnavailable(e.to_string()))
}
