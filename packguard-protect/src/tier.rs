//! Pricing tiers.

use crate::error::{ProtectError, ProtectResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commercial pricing tier of a listing. Decides whether the primary entry
/// is encrypted at rest and whether the password is ever disclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    #[serde(rename = "free")]
    Free,
    /// Pay-per-use. Stored by the catalog as `per_use`.
    #[serde(rename = "per_use", alias = "metered")]
    Metered,
    #[serde(rename = "subscription")]
    Subscription,
}

impl PricingTier {
    pub const ALL: [Self; 3] = [Self::Free, Self::Metered, Self::Subscription];

    /// Catalog wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Metered => "per_use",
            Self::Subscription => "subscription",
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Inclusive credits price bounds, `None` for free listings.
    pub fn price_bounds(&self) -> Option<(i64, i64)> {
        match self {
            Self::Free => None,
            Self::Metered => Some((1, 100)),
            Self::Subscription => Some((100, 1000)),
        }
    }

    /// Checks a listing's credits price against the tier's bounds.
    pub fn validate_price(&self, credits_price: i64) -> ProtectResult<()> {
        match self.price_bounds() {
            Some((min, max)) if !(min..=max).contains(&credits_price) => {
                Err(ProtectError::InvalidPrice {
                    tier: self.as_str(),
                    min,
                    max,
                    price: credits_price,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingTier {
    type Err = ProtectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "per_use" | "metered" => Ok(Self::Metered),
            "subscription" => Ok(Self::Subscription),
            other => Err(ProtectError::UnknownPricingTier(other.to_string())),
        }
    }
}
