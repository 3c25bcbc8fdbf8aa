//! Protection configuration.

use packguard_crypto::KdfParams;
use serde::{Deserialize, Serialize};

/// Upload size ceiling shared with the desktop client.
pub const DEFAULT_MAX_ARCHIVE_BYTES: u64 = 500 * 1024 * 1024;

/// Configuration for the protection policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectionConfig {
    /// scrypt parameters used to seal paid packs. Anything other than
    /// [`KdfParams::WIRE`] produces envelopes that download clients cannot
    /// open.
    pub kdf: KdfParams,

    /// Largest accepted upload, in bytes.
    pub max_archive_bytes: u64,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            kdf: KdfParams::WIRE,
            max_archive_bytes: DEFAULT_MAX_ARCHIVE_BYTES,
        }
    }
}
