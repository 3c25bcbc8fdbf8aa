//! Paid-content protection for marketplace packs.
//!
//! The catalog hands every upload to [`ProtectionPolicy::submit`] together
//! with its pricing tier and listing identifier:
//!
//! 1. **Inspect** the primary entry and reject pre-encrypted paid uploads.
//! 2. **Inject** the listing identifier into the primary and sidecar.
//! 3. **Branch** on tier: free packs stay plaintext, paid packs are sealed
//!    under a freshly generated password.
//! 4. **Finalize** into the minimal distribution archive.
//!
//! The catalog persists the result as a [`ProtectionRecord`]. On download,
//! [`on_retrieve`] releases the archive and, for paid tiers only, the
//! password through a dedicated out-of-band field.
//!
//! The downloader side lives in [`unpack`].

pub mod config;
mod error;
pub mod gate;
pub mod policy;
pub mod record;
pub mod tier;
pub mod unpack;

pub use config::ProtectionConfig;
pub use error::{ProtectError, ProtectResult};
pub use gate::{PASSWORD_HEADER, Retrieval, on_retrieve};
pub use policy::ProtectionPolicy;
pub use record::{ProtectionRecord, Submission};
pub use tier::PricingTier;
