//! Password-sealed envelopes (scrypt -> AES-256-GCM).
//!
//! Layout: `MAGIC | salt | nonce | ciphertext+tag`, parsed by fixed-offset
//! slicing. The magic doubles as the "already encrypted" check used by the
//! archive pipeline.

use crate::error::{CryptoError, CryptoResult};
use crate::kdf::{KdfParams, SALT_SIZE, derive_key};
use crate::password::fill_random;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use tracing::debug;

/// Marker at offset 0 of every envelope.
pub const MAGIC: &[u8; 6] = b"QAPENC";

/// AES-GCM nonce length.
pub const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag length.
pub const TAG_SIZE: usize = 16;

/// Bytes preceding the ciphertext.
pub const HEADER_LEN: usize = MAGIC.len() + SALT_SIZE + NONCE_SIZE;

/// Borrowed view over a parsed envelope.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    salt: &'a [u8; SALT_SIZE],
    nonce: &'a [u8; NONCE_SIZE],
    ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Splits `bytes` at the fixed header offsets.
    ///
    /// Fails with [`CryptoError::MalformedEnvelope`] only when the buffer is
    /// shorter than the header. A wrong marker is reported as
    /// [`CryptoError::AuthenticationFailure`], the same as any other
    /// corruption.
    pub fn parse(bytes: &'a [u8]) -> CryptoResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(CryptoError::MalformedEnvelope {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let (magic, rest) = bytes.split_at(MAGIC.len());
        if magic != MAGIC {
            return Err(CryptoError::AuthenticationFailure);
        }
        let (salt, rest) = rest.split_at(SALT_SIZE);
        let (nonce, ciphertext) = rest.split_at(NONCE_SIZE);

        Ok(Self {
            salt: salt
                .try_into()
                .map_err(|_| CryptoError::AuthenticationFailure)?,
            nonce: nonce
                .try_into()
                .map_err(|_| CryptoError::AuthenticationFailure)?,
            ciphertext,
        })
    }

    pub fn salt(&self) -> &'a [u8; SALT_SIZE] {
        self.salt
    }

    pub fn nonce(&self) -> &'a [u8; NONCE_SIZE] {
        self.nonce
    }

    /// Ciphertext including the trailing tag.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}

/// Returns true if `data` starts with the envelope marker.
pub fn is_envelope(data: &[u8]) -> bool {
    data.starts_with(MAGIC)
}

/// Seals `plaintext` under `password` using the wire KDF parameters.
pub fn encrypt(plaintext: &[u8], password: &str) -> CryptoResult<Vec<u8>> {
    encrypt_with_params(plaintext, password, &KdfParams::WIRE)
}

/// Opens an envelope sealed by [`encrypt`].
pub fn decrypt(envelope: &[u8], password: &str) -> CryptoResult<Vec<u8>> {
    decrypt_with_params(envelope, password, &KdfParams::WIRE)
}

/// Seals `plaintext` with explicit KDF parameters.
///
/// Fresh salt and nonce are drawn for every call, so sealing the same
/// plaintext twice never produces the same envelope.
pub fn encrypt_with_params(
    plaintext: &[u8],
    password: &str,
    params: &KdfParams,
) -> CryptoResult<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    fill_random(&mut salt)?;
    let mut nonce = [0u8; NONCE_SIZE];
    fill_random(&mut nonce)?;

    let key = derive_key(password, &salt, params)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::Encryption("AES-GCM seal failed".to_string()))?;

    let mut out = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&salt);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);

    debug!(
        plaintext_len = plaintext.len(),
        envelope_len = out.len(),
        "sealed envelope"
    );
    Ok(out)
}

/// Opens an envelope with explicit KDF parameters.
pub fn decrypt_with_params(
    envelope: &[u8],
    password: &str,
    params: &KdfParams,
) -> CryptoResult<Vec<u8>> {
    let parsed = Envelope::parse(envelope)?;

    let key = derive_key(password, parsed.salt(), params)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::AuthenticationFailure)?;

    cipher
        .decrypt(Nonce::from_slice(parsed.nonce()), parsed.ciphertext())
        .map_err(|_| CryptoError::AuthenticationFailure)
}
