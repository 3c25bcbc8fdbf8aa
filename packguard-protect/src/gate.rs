//! Download-time disclosure gate.

use crate::record::{ProtectionRecord, redacted};
use std::fmt;
use tracing::debug;

/// Response header carrying the password to paid-tier downloaders.
pub const PASSWORD_HEADER: &str = "X-Encryption-Password";

/// What a downloader receives: the stored archive and, for paid tiers, the
/// password kept apart from the archive body.
#[derive(Clone, PartialEq, Eq)]
pub struct Retrieval {
    pub archive: Vec<u8>,
    pub password: Option<String>,
}

impl Retrieval {
    /// The `(name, value)` transport header for the password, if disclosed.
    pub fn password_header(&self) -> Option<(&'static str, &str)> {
        self.password.as_deref().map(|p| (PASSWORD_HEADER, p))
    }
}

impl fmt::Debug for Retrieval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retrieval")
            .field("archive_len", &self.archive.len())
            .field("password", &self.password.as_deref().map(redacted))
            .finish()
    }
}

/// Releases a stored record. The password is disclosed exactly when the
/// record's tier is paid; nothing else about the record is consulted.
pub fn on_retrieve(record: ProtectionRecord) -> Retrieval {
    let password = record
        .pricing_tier
        .is_paid()
        .then_some(record.stored_password);
    debug!(
        tier = %record.pricing_tier,
        disclosed = password.is_some(),
        "releasing pack"
    );
    Retrieval {
        archive: record.stored_archive,
        password,
    }
}
