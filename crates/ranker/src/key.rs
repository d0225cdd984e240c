use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced while selecting an ordering.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RankError {
    #[error("unknown sort key '{0}' (expected recency, size or name)")]
    UnknownSortKey(String),
}

/// Field a list of games is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Manifest modification time.
    #[default]
    #[serde(alias = "last_updated")]
    Recency,
    /// Disk usage.
    #[serde(alias = "size_gb")]
    Size,
    /// Case-insensitive title.
    Name,
}

impl SortKey {
    /// Returns all sort keys.
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Recency, SortKey::Size, SortKey::Name]
    }

    /// Direction used when a column is first activated: largest first for
    /// size, ascending otherwise.
    pub fn default_descending(self) -> bool {
        matches!(self, SortKey::Size)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Recency => write!(f, "recency"),
            SortKey::Size => write!(f, "size"),
            SortKey::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortKey {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recency" | "last_updated" => Ok(SortKey::Recency),
            "size" | "size_gb" => Ok(SortKey::Size),
            "name" => Ok(SortKey::Name),
            _ => Err(RankError::UnknownSortKey(s.to_string())),
        }
    }
}
