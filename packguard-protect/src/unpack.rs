//! Downloader-side unpacking of distributed packs.

use crate::error::{ProtectError, ProtectResult};
use packguard_archive::{METADATA_FIELD, locate_primary, read_sidecar};
use packguard_crypto::{KdfParams, decrypt_with_params, is_envelope};
use serde_json::Value;
use tracing::debug;

/// True when the archive's primary entry is an envelope.
pub fn is_protected(archive: &[u8]) -> ProtectResult<bool> {
    Ok(is_envelope(&locate_primary(archive)?.bytes))
}

/// Returns the primary entry's plaintext, decrypting it when protected.
///
/// A password supplied for a plaintext pack is ignored.
pub fn unpack_primary(archive: &[u8], password: Option<&str>) -> ProtectResult<Vec<u8>> {
    unpack_primary_with_params(archive, password, &KdfParams::WIRE)
}

/// [`unpack_primary`] with explicit KDF parameters.
pub fn unpack_primary_with_params(
    archive: &[u8],
    password: Option<&str>,
    params: &KdfParams,
) -> ProtectResult<Vec<u8>> {
    let primary = locate_primary(archive)?;
    if !is_envelope(&primary.bytes) {
        return Ok(primary.bytes);
    }

    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ProtectError::PasswordRequired),
    };
    let plaintext = decrypt_with_params(&primary.bytes, password, params)?;
    debug!(entry = %primary.name, len = plaintext.len(), "unpacked protected entry");
    Ok(plaintext)
}

/// Reads listing metadata without needing the password.
///
/// Prefers the sidecar document. Falls back to the `metadata` object of a
/// plaintext primary entry. Protected packs without a usable sidecar
/// yield `None`.
pub fn read_metadata(archive: &[u8]) -> ProtectResult<Option<Value>> {
    if let Some(bytes) = read_sidecar(archive)? {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(doc @ Value::Object(_)) => return Ok(Some(doc)),
            _ => debug!("sidecar unusable, falling back to primary entry"),
        }
    }

    let primary = locate_primary(archive)?;
    if is_envelope(&primary.bytes) {
        return Ok(None);
    }
    let metadata = serde_json::from_slice::<Value>(&primary.bytes)
        .ok()
        .and_then(|mut doc| doc.get_mut(METADATA_FIELD).map(Value::take))
        .filter(Value::is_object);
    Ok(metadata)
}
