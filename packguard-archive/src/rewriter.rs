//! Minimal pack rewrite.
//!
//! The distribution layout is the primary entry followed by the sidecar
//! when one exists. Every other entry of the source archive is dropped.

use crate::entry::{PrimaryEntryName, SIDECAR_ENTRY};
use crate::error::{ArchiveError, ArchiveResult};
use crate::reader::{locate_primary, read_sidecar};
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Rebuilds `original` with `primary_bytes` as its primary entry under
/// `primary_name`, carrying over the sidecar entry byte-for-byte.
///
/// `original` must contain a primary entry under either accepted name.
pub fn rewrite(
    original: &[u8],
    primary_bytes: &[u8],
    primary_name: PrimaryEntryName,
) -> ArchiveResult<Vec<u8>> {
    locate_primary(original)?;
    let sidecar = read_sidecar(original)?;
    build(primary_name, primary_bytes, sidecar.as_deref())
}

/// Writes a fresh archive with the primary entry and an optional sidecar.
pub(crate) fn build(
    primary_name: PrimaryEntryName,
    primary_bytes: &[u8],
    sidecar: Option<&[u8]>,
) -> ArchiveResult<Vec<u8>> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    write_entry(&mut writer, primary_name.as_str(), primary_bytes, options)?;
    if let Some(sidecar) = sidecar {
        write_entry(&mut writer, SIDECAR_ENTRY, sidecar, options)?;
    }

    let archive = writer
        .finish()
        .map_err(|e| ArchiveError::ArchiveWrite(format!("finalize: {e}")))?
        .into_inner();

    debug!(
        primary = %primary_name,
        with_sidecar = sidecar.is_some(),
        archive_len = archive.len(),
        "rewrote pack archive"
    );
    Ok(archive)
}

fn write_entry(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    bytes: &[u8],
    options: SimpleFileOptions,
) -> ArchiveResult<()> {
    writer
        .start_file(name, options)
        .map_err(|e| ArchiveError::ArchiveWrite(format!("create {name}: {e}")))?;
    writer
        .write_all(bytes)
        .map_err(|e| ArchiveError::ArchiveWrite(format!("write {name}: {e}")))
}
