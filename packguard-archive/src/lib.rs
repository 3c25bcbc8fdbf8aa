//! Pack archive handling.
//!
//! A pack is a ZIP container with one primary JSON document (`pack.json`,
//! or `analysis_pack.json` from older producers) and an optional
//! `metadata.json` sidecar. This crate reads entries, injects the catalog
//! listing identifier into both documents, and rewrites packs down to the
//! minimal distribution layout: primary entry plus sidecar, nothing else.

mod entry;
mod error;
pub mod inject;
mod raw;
pub mod reader;
pub mod rewriter;

pub use entry::{PrimaryEntry, PrimaryEntryName, SIDECAR_ENTRY};
pub use error::{ArchiveError, ArchiveResult};
pub use inject::{IDENTIFIER_FIELD, METADATA_FIELD, inject_identifier};
pub use reader::{list_entries, locate_primary, read_entry, read_sidecar};
pub use rewriter::rewrite;
