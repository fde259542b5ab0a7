//! One roster slot

use super::pokemon_type::TypePair;
use super::stats::BaseStats;
use super::status::Status;

/// State of one roster slot
///
/// A slot is a single record so a switch permutes species, hp, status,
/// stats, and types together; there are no parallel arrays to fall out
/// of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotState {
    /// Species name (including forme, e.g., "Rotom-Wash")
    pub species: String,

    /// Whether this slot has been revealed yet (false for placeholders)
    pub revealed: bool,

    /// Current HP as a percentage (0-100)
    pub hp_percent: u8,

    /// Non-volatile status condition
    pub status: Option<Status>,

    /// Species base stats
    pub stats: BaseStats,

    /// Species type pair
    pub types: TypePair,
}

impl SlotState {
    /// Create a revealed slot for a species
    pub fn revealed(species: impl Into<String>, stats: BaseStats, types: TypePair) -> Self {
        Self {
            species: species.into(),
            revealed: true,
            hp_percent: 100,
            status: None,
            stats,
            types,
        }
    }

    /// Check if this slot's Pokemon has fainted
    pub fn is_fainted(&self) -> bool {
        self.status == Some(Status::Fainted)
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self {
            species: String::new(),
            revealed: false,
            hp_percent: 100,
            status: None,
            stats: BaseStats::default(),
            types: TypePair::default(),
        }
    }
}
