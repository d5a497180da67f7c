//! Read-only stone catalog

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Custody status of a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneStatus {
    /// Stone is accounted for
    Secured,
    /// Stone has gone missing
    Missing,
    /// Whereabouts unknown
    Unknown,
}

/// A catalog entry. The name is the identity and is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfinityStone {
    /// Unique name, matched case-sensitively
    pub name: String,
    /// Color
    pub color: String,
    /// Power description
    pub power: String,
    /// Custody status
    pub status: StoneStatus,
}

impl InfinityStone {
    /// Create a stone entry
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        power: impl Into<String>,
        status: StoneStatus,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            power: power.into(),
            status,
        }
    }
}

/// Query interface over a fixed set of stones
pub trait StoneCatalog: Send + Sync {
    /// All stones in insertion order
    fn list(&self) -> &[InfinityStone];

    /// Exact, case-sensitive lookup by name
    fn get(&self, name: &str) -> Result<&InfinityStone, CatalogError>;
}

/// Catalog backed by a vector fixed at construction.
///
/// Never mutated after construction, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryStoneCatalog {
    stones: Vec<InfinityStone>,
}

impl InMemoryStoneCatalog {
    /// Catalog with the six reference stones
    pub fn new() -> Self {
        use StoneStatus::*;

        Self {
            stones: vec![
                InfinityStone::new("space", "blue", "Teleportation", Secured),
                InfinityStone::new("mind", "yellow", "Mind Control", Secured),
                InfinityStone::new("reality", "red", "Reality Warping", Missing),
                InfinityStone::new("power", "purple", "Unlimited Strength", Secured),
                InfinityStone::new("time", "green", "Time Travel", Secured),
                InfinityStone::new("soul", "orange", "Soul Manipulation", Unknown),
            ],
        }
    }

    /// Catalog with a custom population; names must be unique
    pub fn from_stones(stones: Vec<InfinityStone>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(stones.len());
        for stone in &stones {
            if !seen.insert(stone.name.as_str()) {
                return Err(CatalogError::DuplicateStone(stone.name.clone()));
            }
        }

        Ok(Self { stones })
    }

    /// Number of stones
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// True when the catalog holds no stones
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

impl Default for InMemoryStoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StoneCatalog for InMemoryStoneCatalog {
    fn list(&self) -> &[InfinityStone] {
        &self.stones
    }

    fn get(&self, name: &str) -> Result<&InfinityStone, CatalogError> {
        // Linear scan; the catalog is a handful of entries.
        self.stones
            .iter()
            .find(|stone| stone.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }
}
