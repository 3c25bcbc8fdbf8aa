//! Archive error types.

use thiserror::Error;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors that can occur while reading, injecting into or rewriting packs.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    #[error("archive has no pack.json or analysis_pack.json entry")]
    MissingPrimaryEntry,

    #[error("entry not found: {0}")]
    EntryNotFound(String),

    /// Identifier injection was attempted on an encrypted primary entry.
    #[error("primary entry is already encrypted")]
    AlreadyEncrypted,

    #[error("invalid JSON document in {entry}: {reason}")]
    InvalidDocument { entry: String, reason: String },

    #[error("failed to write archive: {0}")]
    ArchiveWrite(String),
}
