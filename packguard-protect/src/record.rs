//! Persisted protection outcome.

use crate::tier::PricingTier;
use std::fmt;

/// Output of [`ProtectionPolicy::submit`](crate::ProtectionPolicy::submit).
///
/// `password` is empty for free listings and a 64-character hex string for
/// paid ones.
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub archive: Vec<u8>,
    pub password: String,
}

impl Submission {
    /// Attaches the listing's tier, producing what the catalog stores.
    pub fn into_record(self, pricing_tier: PricingTier) -> ProtectionRecord {
        ProtectionRecord {
            pricing_tier,
            stored_archive: self.archive,
            stored_password: self.password,
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("archive_len", &self.archive.len())
            .field("password", &redacted(&self.password))
            .finish()
    }
}

/// What the catalog persists per listing.
///
/// Free listings hold a plaintext archive and an empty password. Paid
/// listings hold an archive whose primary entry is an envelope that opens
/// under `stored_password`.
#[derive(Clone, PartialEq, Eq)]
pub struct ProtectionRecord {
    pub pricing_tier: PricingTier,
    pub stored_archive: Vec<u8>,
    pub stored_password: String,
}

impl ProtectionRecord {
    pub fn new(
        pricing_tier: PricingTier,
        stored_archive: Vec<u8>,
        stored_password: String,
    ) -> Self {
        Self {
            pricing_tier,
            stored_archive,
            stored_password,
        }
    }
}

impl fmt::Debug for ProtectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectionRecord")
            .field("pricing_tier", &self.pricing_tier)
            .field("stored_archive_len", &self.stored_archive.len())
            .field("stored_password", &redacted(&self.stored_password))
            .finish()
    }
}

pub(crate) fn redacted(password: &str) -> &'static str {
    if password.is_empty() { "" } else { "[REDACTED]" }
}
