//! Encryption layer for marketplace packs.
//!
//! Provides the password-sealed envelope used to protect paid content:
//! - scrypt for key derivation from a per-pack password
//! - AES-256-GCM for authenticated encryption
//! - OS-backed randomness for passwords, salts and nonces
//!
//! # Envelope format
//!
//! ```text
//! offset 0  : "QAPENC"            (6 bytes)
//! offset 6  : scrypt salt         (32 bytes)
//! offset 38 : AES-GCM nonce       (12 bytes)
//! offset 50 : ciphertext + tag    (N + 16 bytes)
//! ```
//!
//! The format carries no version and no KDF parameters. Every reader,
//! including independent download clients, must use [`KdfParams::WIRE`].
//! The envelope is self-describing otherwise: decryption needs only the
//! envelope bytes and the password.

pub mod envelope;
mod error;
pub mod kdf;
pub mod password;

pub use envelope::{
    Envelope, HEADER_LEN, MAGIC, NONCE_SIZE, TAG_SIZE, decrypt, decrypt_with_params, encrypt,
    encrypt_with_params, is_envelope,
};
pub use error::{CryptoError, CryptoResult};
pub use kdf::{DerivedKey, KEY_SIZE, KdfParams, SALT_SIZE, derive_key};
pub use password::{PASSWORD_BYTES, PASSWORD_LEN, generate_password, is_valid_password};
