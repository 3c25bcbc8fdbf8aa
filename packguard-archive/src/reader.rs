//! ZIP entry reader.
//!
//! Entries are scanned in central-directory order and the first match
//! wins, so duplicate names resolve deterministically.

use crate::entry::{PrimaryEntry, PrimaryEntryName, SIDECAR_ENTRY};
use crate::error::{ArchiveError, ArchiveResult};
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

fn open(archive: &[u8]) -> ArchiveResult<ZipArchive<Cursor<&[u8]>>> {
    ZipArchive::new(Cursor::new(archive)).map_err(|e| ArchiveError::MalformedArchive(e.to_string()))
}

/// Returns the name and decompressed bytes of the first entry accepted by
/// `matches`.
fn find_first<T>(
    archive: &[u8],
    mut matches: impl FnMut(&str) -> Option<T>,
) -> ArchiveResult<Option<(T, Vec<u8>)>> {
    let mut zip = open(archive)?;

    for index in 0..zip.len() {
        let mut file = zip
            .by_index(index)
            .map_err(|e| ArchiveError::MalformedArchive(e.to_string()))?;
        if file.is_dir() {
            continue;
        }
        let Some(tag) = matches(file.name()) else {
            continue;
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArchiveError::MalformedArchive(format!("read {}: {e}", file.name()))
        })?;
        return Ok(Some((tag, bytes)));
    }

    Ok(None)
}

/// Reads the decompressed bytes of the first entry named `name`.
pub fn read_entry(archive: &[u8], name: &str) -> ArchiveResult<Vec<u8>> {
    find_first(archive, |entry| (entry == name).then_some(()))?
        .map(|((), bytes)| bytes)
        .ok_or_else(|| ArchiveError::EntryNotFound(name.to_string()))
}

/// Lists entry names in archive order.
pub fn list_entries(archive: &[u8]) -> ArchiveResult<Vec<String>> {
    let mut zip = open(archive)?;
    let mut names = Vec::with_capacity(zip.len());
    for index in 0..zip.len() {
        let file = zip
            .by_index_raw(index)
            .map_err(|e| ArchiveError::MalformedArchive(e.to_string()))?;
        names.push(file.name().to_string());
    }
    Ok(names)
}

/// Resolves the primary entry: the first entry carrying either accepted name.
pub fn locate_primary(archive: &[u8]) -> ArchiveResult<PrimaryEntry> {
    let (name, bytes) = find_first(archive, PrimaryEntryName::from_entry_name)?
        .ok_or(ArchiveError::MissingPrimaryEntry)?;
    debug!(entry = %name, len = bytes.len(), "resolved primary entry");
    Ok(PrimaryEntry { name, bytes })
}

/// Reads the sidecar metadata entry, if the archive has one.
pub fn read_sidecar(archive: &[u8]) -> ArchiveResult<Option<Vec<u8>>> {
    match read_entry(archive, SIDECAR_ENTRY) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(ArchiveError::EntryNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
