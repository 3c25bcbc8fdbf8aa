//! Primary and sidecar entry names.

use std::fmt;

/// Name of the optional sidecar metadata entry.
pub const SIDECAR_ENTRY: &str = "metadata.json";

/// Accepted names for the primary content entry.
///
/// Two producers have shipped packs: the current one writes `pack.json`,
/// the older one `analysis_pack.json`. The name is resolved once when the
/// archive is read and carried through the pipeline as this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryEntryName {
    Pack,
    AnalysisPack,
}

impl PrimaryEntryName {
    pub const ALL: [Self; 2] = [Self::Pack, Self::AnalysisPack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pack => "pack.json",
            Self::AnalysisPack => "analysis_pack.json",
        }
    }

    /// Maps an archive entry name to a primary entry name, if it is one.
    pub fn from_entry_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == name)
    }
}

impl fmt::Display for PrimaryEntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved primary entry of a pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryEntry {
    pub name: PrimaryEntryName,
    pub bytes: Vec<u8>,
}
