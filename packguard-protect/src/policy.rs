//! Upload-time protection policy.

use crate::config::ProtectionConfig;
use crate::error::{ProtectError, ProtectResult};
use crate::record::Submission;
use crate::tier::PricingTier;
use packguard_archive::{inject_identifier, locate_primary, rewrite};
use packguard_crypto::{encrypt_with_params, generate_password, is_envelope};
use tracing::{debug, info, warn};

/// Decides, per pricing tier, how an uploaded pack is stored.
#[derive(Debug, Clone, Default)]
pub struct ProtectionPolicy {
    config: ProtectionConfig,
}

impl ProtectionPolicy {
    pub fn new(config: ProtectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProtectionConfig {
        &self.config
    }

    /// Runs an upload through inspect, inject, branch and finalize.
    ///
    /// Any failure aborts the whole submission; nothing partial is
    /// returned. The returned password is the only copy and must be
    /// persisted by the caller alongside the archive.
    pub fn submit(
        &self,
        archive: &[u8],
        tier: PricingTier,
        listing_id: i64,
    ) -> ProtectResult<Submission> {
        let size = archive.len() as u64;
        if size > self.config.max_archive_bytes {
            warn!(
                listing_id,
                size,
                limit = self.config.max_archive_bytes,
                "rejecting oversized upload"
            );
            return Err(ProtectError::ArchiveTooLarge {
                size,
                limit: self.config.max_archive_bytes,
            });
        }

        let primary = locate_primary(archive)?;
        if is_envelope(&primary.bytes) {
            warn!(listing_id, %tier, "rejecting pre-encrypted upload");
            return Err(if tier.is_paid() {
                ProtectError::PreEncryptedPaidContent
            } else {
                ProtectError::PreEncryptedContent
            });
        }

        let injected = inject_identifier(archive, listing_id)?;
        let primary = locate_primary(&injected)?;

        let (primary_bytes, password) = if tier.is_paid() {
            let password = generate_password()?;
            let envelope = encrypt_with_params(&primary.bytes, &password, &self.config.kdf)?;
            (envelope, password)
        } else {
            debug!(listing_id, "free listing stored as plaintext");
            (primary.bytes, String::new())
        };

        let archive = rewrite(&injected, &primary_bytes, primary.name)?;
        info!(
            listing_id,
            %tier,
            entry = %primary.name,
            archive_len = archive.len(),
            "pack protected"
        );
        Ok(Submission { archive, password })
    }
}
