//! Supplier catalog types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VayaError;

/// The supplier layout a raw table was recognised as.
///
/// `Unknown` tables have no column profile and pass through mapping
/// without remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CatalogType {
    #[serde(rename = "SANSAAR")]
    Sansaar,
    #[serde(rename = "FF_A_dress")]
    FfADress,
    #[serde(rename = "FABRIZIO")]
    Fabrizio,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl CatalogType {
    /// Catalog types that carry a column profile.
    pub const KNOWN: [CatalogType; 3] = [Self::Sansaar, Self::FfADress, Self::Fabrizio];

    /// Stable identifier, as used in logs and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sansaar => "SANSAAR",
            Self::FfADress => "FF_A_dress",
            Self::Fabrizio => "FABRIZIO",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CatalogType {
    type Err = VayaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [Self::Sansaar, Self::FfADress, Self::Fabrizio, Self::Unknown]
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VayaError::UnknownCatalogType(trimmed.to_string()))
    }
}
