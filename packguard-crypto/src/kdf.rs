//! scrypt key derivation.
//!
//! The cost parameters are part of the envelope wire format: an envelope
//! sealed under one set of parameters cannot be opened under another, and
//! nothing in the envelope records which set was used.

use crate::error::{CryptoError, CryptoResult};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-256 key length.
pub const KEY_SIZE: usize = 32;

/// scrypt salt length stored in every envelope.
pub const SALT_SIZE: usize = 32;

/// scrypt cost parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    /// CPU/memory cost factor (scrypt `N`). Must be a power of two.
    pub cost: u32,
    /// Block size (scrypt `r`).
    pub block_size: u32,
    /// Parallelization (scrypt `p`).
    pub parallelization: u32,
    /// Derived key length in bytes. Must equal [`KEY_SIZE`].
    pub output_len: usize,
}

impl KdfParams {
    /// The interoperable parameter set shared with download clients.
    pub const WIRE: Self = Self {
        cost: 32_768,
        block_size: 8,
        parallelization: 1,
        output_len: KEY_SIZE,
    };

    /// Validates the parameters and converts them for the `scrypt` crate.
    pub fn validate(&self) -> CryptoResult<scrypt::Params> {
        if self.cost < 2 || !self.cost.is_power_of_two() {
            return Err(CryptoError::InvalidKdfParams(format!(
                "cost must be a power of two greater than 1, got {}",
                self.cost
            )));
        }
        if self.output_len != KEY_SIZE {
            return Err(CryptoError::InvalidKdfParams(format!(
                "output length must be {KEY_SIZE} bytes, got {}",
                self.output_len
            )));
        }

        let log_n = self.cost.trailing_zeros() as u8;
        scrypt::Params::new(log_n, self.block_size, self.parallelization, self.output_len)
            .map_err(|e| CryptoError::InvalidKdfParams(e.to_string()))
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::WIRE
    }
}

/// A 256-bit key derived from a password. Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_SIZE],
}

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derives an AES-256 key from `password` and `salt`.
///
/// This is the expensive step of every encrypt and decrypt call.
pub fn derive_key(
    password: &str,
    salt: &[u8; SALT_SIZE],
    params: &KdfParams,
) -> CryptoResult<DerivedKey> {
    let scrypt_params = params.validate()?;

    let mut key = DerivedKey {
        bytes: [0u8; KEY_SIZE],
    };
    scrypt::scrypt(password.as_bytes(), salt, &scrypt_params, &mut key.bytes)
        .map_err(|e| CryptoError::InvalidKdfParams(e.to_string()))?;

    Ok(key)
}
