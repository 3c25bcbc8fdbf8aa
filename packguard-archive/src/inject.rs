//! Listing identifier injection.
//!
//! The primary entry is rewritten compactly with every value other than
//! `metadata` copied from its source text, so untouched fields keep their
//! order and exact bytes. The sidecar is re-serialized pretty-printed.

use crate::entry::{PrimaryEntryName, SIDECAR_ENTRY};
use crate::error::{ArchiveError, ArchiveResult};
use crate::raw::{RawObject, raw_kind};
use crate::reader::{locate_primary, read_sidecar};
use crate::rewriter::build;
use packguard_crypto::is_envelope;
use serde_json::Value;
use serde_json::value::{RawValue, to_raw_value};
use tracing::{debug, warn};

/// Field that carries the catalog listing identifier.
pub const IDENTIFIER_FIELD: &str = "listing_id";

/// Parent object of the identifier inside the primary document.
pub const METADATA_FIELD: &str = "metadata";

/// Injects `identifier` into the primary entry (`metadata.listing_id`) and,
/// when present, the sidecar (`listing_id`).
///
/// Must run before encryption: an encrypted primary entry fails with
/// [`ArchiveError::AlreadyEncrypted`]. The returned archive holds only the
/// primary entry and the sidecar.
pub fn inject_identifier(archive: &[u8], identifier: i64) -> ArchiveResult<Vec<u8>> {
    let primary = locate_primary(archive)?;
    if is_envelope(&primary.bytes) {
        return Err(ArchiveError::AlreadyEncrypted);
    }

    let primary_bytes = inject_into_primary(&primary.bytes, primary.name, identifier)?;
    let sidecar = read_sidecar(archive)?
        .map(|bytes| inject_into_sidecar(bytes, identifier))
        .transpose()?;

    debug!(entry = %primary.name, identifier, "injected listing identifier");
    build(primary.name, &primary_bytes, sidecar.as_deref())
}

fn inject_into_primary(
    document: &[u8],
    name: PrimaryEntryName,
    identifier: i64,
) -> ArchiveResult<Vec<u8>> {
    let entry = name.as_str();
    let mut root = parse_raw_object(document, entry)?;

    let mut metadata = root
        .get(METADATA_FIELD)
        .and_then(|raw| serde_json::from_str::<RawObject>(raw.get()).ok())
        .unwrap_or_default();
    metadata.insert(IDENTIFIER_FIELD, to_raw(&identifier, entry)?);
    root.insert(METADATA_FIELD, to_raw(&metadata, entry)?);

    serde_json::to_vec(&root).map_err(|e| invalid(entry, e))
}

/// A sidecar that is not a JSON object is carried over unchanged.
fn inject_into_sidecar(document: Vec<u8>, identifier: i64) -> ArchiveResult<Vec<u8>> {
    let mut root = match parse_object(&document, SIDECAR_ENTRY) {
        Ok(root) => root,
        Err(e) => {
            warn!("leaving {SIDECAR_ENTRY} untouched: {e}");
            return Ok(document);
        }
    };

    root.insert(IDENTIFIER_FIELD.to_string(), Value::from(identifier));

    serde_json::to_vec_pretty(&Value::Object(root)).map_err(|e| invalid(SIDECAR_ENTRY, e))
}

fn parse_raw_object(document: &[u8], entry: &str) -> ArchiveResult<RawObject> {
    let raw: Box<RawValue> = serde_json::from_slice(document).map_err(|e| invalid(entry, e))?;
    serde_json::from_str(raw.get()).map_err(|_| ArchiveError::InvalidDocument {
        entry: entry.to_string(),
        reason: format!("expected a JSON object, found {}", raw_kind(&raw)),
    })
}

fn parse_object(document: &[u8], entry: &str) -> ArchiveResult<serde_json::Map<String, Value>> {
    match serde_json::from_slice(document) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ArchiveError::InvalidDocument {
            entry: entry.to_string(),
            reason: "expected a JSON object".to_string(),
        }),
        Err(e) => Err(invalid(entry, e)),
    }
}

fn to_raw<T: serde::Serialize>(value: &T, entry: &str) -> ArchiveResult<Box<RawValue>> {
    to_raw_value(value).map_err(|e| invalid(entry, e))
}

fn invalid(entry: &str, error: serde_json::Error) -> ArchiveError {
    ArchiveError::InvalidDocument {
        entry: entry.to_string(),
        reason: error.to_string(),
    }
}
