//! Protection error types.

use packguard_archive::ArchiveError;
use packguard_crypto::CryptoError;
use thiserror::Error;

/// Result type for protection operations.
pub type ProtectResult<T> = Result<T, ProtectError>;

/// Errors surfaced to the catalog layer.
///
/// `Display` carries detail for logs. End users only ever see
/// [`ProtectError::user_message`].
#[derive(Debug, Error)]
pub enum ProtectError {
    #[error("archive too large: {size} bytes exceeds limit of {limit}")]
    ArchiveTooLarge { size: u64, limit: u64 },

    /// Paid content must arrive as plaintext so the platform controls the
    /// password.
    #[error("paid packs must not be pre-encrypted")]
    PreEncryptedPaidContent,

    /// A free upload arrived encrypted; the listing identifier cannot be
    /// injected into it.
    #[error("pack must not be pre-encrypted")]
    PreEncryptedContent,

    #[error("credits_price must be between {min} and {max} for {tier} mode, got {price}")]
    InvalidPrice {
        tier: &'static str,
        min: i64,
        max: i64,
        price: i64,
    },

    #[error("unknown pricing tier: {0}")]
    UnknownPricingTier(String),

    #[error("file is encrypted, password required")]
    PasswordRequired,

    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

impl ProtectError {
    /// The message safe to show an end user.
    ///
    /// Both cryptographic failure kinds map to the same text so a client
    /// cannot tell a short envelope from a bad password.
    pub fn user_message(&self) -> String {
        match self {
            Self::ArchiveTooLarge { .. } => "file_too_large".to_string(),
            Self::PreEncryptedPaidContent
            | Self::PreEncryptedContent
            | Self::InvalidPrice { .. }
            | Self::PasswordRequired => self.to_string(),
            Self::UnknownPricingTier(_) => {
                "share_mode must be 'free', 'per_use', or 'subscription'".to_string()
            }
            Self::Archive(
                ArchiveError::MalformedArchive(_)
                | ArchiveError::MissingPrimaryEntry
                | ArchiveError::InvalidDocument { .. },
            ) => "invalid_pack_format".to_string(),
            Self::Crypto(
                CryptoError::AuthenticationFailure | CryptoError::MalformedEnvelope { .. },
            ) => "decryption failed".to_string(),
            Self::Archive(_) | Self::Crypto(_) => "internal_error".to_string(),
        }
    }

    /// True when the caller supplied bad input and can act on the rejection;
    /// false for internal faults that should be logged and reported as
    /// `internal_error`.
    pub fn is_user_actionable(&self) -> bool {
        match self {
            Self::ArchiveTooLarge { .. }
            | Self::PreEncryptedPaidContent
            | Self::PreEncryptedContent
            | Self::InvalidPrice { .. }
            | Self::UnknownPricingTier(_)
            | Self::PasswordRequired => true,
            Self::Archive(e) => matches!(
                e,
                ArchiveError::MalformedArchive(_)
                    | ArchiveError::MissingPrimaryEntry
                    | ArchiveError::InvalidDocument { .. }
            ),
            Self::Crypto(e) => matches!(
                e,
                CryptoError::AuthenticationFailure | CryptoError::MalformedEnvelope { .. }
            ),
        }
    }
}
