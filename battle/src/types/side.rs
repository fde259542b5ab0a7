//! Side (player) state

use crate::StateError;

use super::conditions::SideConditions;
use super::forme;
use super::pokemon_type::TypePair;
use super::slot::SlotState;
use super::stats::{BaseStats, BoostStages};
use super::status::Status;

/// Number of roster slots per side
pub const ROSTER_SIZE: usize = 6;

/// Static per-species data supplied by a lookup source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeciesProfile {
    pub stats: BaseStats,
    pub types: TypePair,
}

/// Read-only species lookup consulted when a slot is first revealed
pub trait SpeciesLookup {
    fn profile(&self, species: &str) -> Option<SpeciesProfile>;
}

/// One player's side of the battle
///
/// The roster holds exactly six slots; unrevealed slots are placeholders.
/// Slot 0 is always the active Pokemon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// Roster slots, slot 0 active
    pub roster: [SlotState; ROSTER_SIZE],

    /// Stat stage modifiers for the active Pokemon
    pub boosts: BoostStages,

    /// Hazards and screens on this side
    pub conditions: SideConditions,
}

impl SideState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly revealed species in the next placeholder slot.
    ///
    /// A roster has room for six reveals; later reveals of the same
    /// battle are forme changes handled through the alias table, so a
    /// full roster ignores the registration.
    pub fn register(&mut self, species: &str, profile: SpeciesProfile) {
        if let Some(slot) = self.roster.iter_mut().find(|s| !s.revealed) {
            *slot = SlotState::revealed(species, profile.stats, profile.types);
        }
    }

    /// Number of revealed slots
    pub fn revealed_count(&self) -> usize {
        self.roster.iter().filter(|s| s.revealed).count()
    }

    /// The active slot (slot 0)
    pub fn active(&self) -> &SlotState {
        &self.roster[0]
    }

    /// Resolve a species name to its roster slot index.
    ///
    /// Exact match against revealed species first, then the forme-alias
    /// table; an alias canonical matches its slot exactly or as a
    /// species prefix (Ogerpon formes register under their full forme
    /// name).
    pub fn resolve_slot(&self, species: &str) -> Result<usize, StateError> {
        if let Some(idx) = self.find_exact(species) {
            return Ok(idx);
        }

        if let Some(canonical) = forme::canonical_species(species) {
            if let Some(idx) = self.find_exact(canonical) {
                return Ok(idx);
            }
            if let Some(idx) = self
                .roster
                .iter()
                .position(|s| s.revealed && s.species.starts_with(canonical))
            {
                return Ok(idx);
            }
        }

        Err(StateError::UnknownSpecies(species.to_string()))
    }

    fn find_exact(&self, species: &str) -> Option<usize> {
        self.roster
            .iter()
            .position(|s| s.revealed && s.species == species)
    }

    /// Bring the Pokemon in `index` onto the field.
    ///
    /// Swaps slot 0 and slot `index` as whole records, then resets this
    /// side's boosts to a freshly constructed zero vector.
    pub fn swap_to_active(&mut self, index: usize) {
        self.roster.swap(0, index);
        self.boosts = BoostStages::new();
    }

    /// Set the active Pokemon's HP percentage
    pub fn set_active_hp(&mut self, percent: u8) {
        self.roster[0].hp_percent = percent.min(100);
    }

    /// Set the active Pokemon's status condition
    pub fn set_active_status(&mut self, status: Option<Status>) {
        self.roster[0].status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    fn profile(spe: u16, primary: Type) -> SpeciesProfile {
        SpeciesProfile {
            stats: BaseStats::new(80, 80, 80, 80, 80, spe),
            types: TypePair::single(primary),
        }
    }

    fn side_with(species: &[&str]) -> SideState {
        let mut side = SideState::new();
        for (i, name) in species.iter().enumerate() {
            side.register(name, profile(i as u16, Type::Normal));
        }
        side
    }

    #[test]
    fn test_register_fills_placeholders_in_order() {
        let side = side_with(&["Pikachu", "Garchomp"]);
        assert_eq!(side.revealed_count(), 2);
        assert_eq!(side.roster[0].species, "Pikachu");
        assert_eq!(side.roster[1].species, "Garchomp");
        assert!(!side.roster[2].revealed);
    }

    #[test]
    fn test_register_ignores_seventh_reveal() {
        let mut side = side_with(&["A", "B", "C", "D", "E", "F"]);
        side.register("G", profile(0, Type::Normal));
        assert_eq!(side.revealed_count(), 6);
        assert!(side.resolve_slot("G").is_err());
    }

    #[test]
    fn test_resolve_exact_match() {
        let side = side_with(&["Pikachu", "Garchomp", "Rotom-Wash"]);
        assert_eq!(side.resolve_slot("Garchomp").unwrap(), 1);
        assert_eq!(side.resolve_slot("Rotom-Wash").unwrap(), 2);
    }

    #[test]
    fn test_resolve_forme_alias() {
        let side = side_with(&["Zamazenta", "Urshifu", "Mimikyu"]);
        assert_eq!(side.resolve_slot("Zamazenta-Crowned").unwrap(), 0);
        assert_eq!(side.resolve_slot("Urshifu-Rapid-Strike").unwrap(), 1);
        assert_eq!(side.resolve_slot("Mimikyu-Busted").unwrap(), 2);
    }

    #[test]
    fn test_resolve_ogerpon_forme_by_prefix() {
        let side = side_with(&["Kingambit", "Ogerpon-Wellspring"]);
        assert_eq!(side.resolve_slot("Ogerpon-Wellspring-Tera").unwrap(), 1);
    }

    #[test]
    fn test_resolve_unknown_species_fails() {
        let side = side_with(&["Pikachu"]);
        assert!(matches!(
            side.resolve_slot("Mewtwo"),
            Err(StateError::UnknownSpecies(name)) if name == "Mewtwo"
        ));
    }

    #[test]
    fn test_swap_moves_whole_slot_records() {
        let mut side = side_with(&["Pikachu", "Garchomp"]);
        side.roster[1].hp_percent = 40;
        side.roster[1].status = Some(Status::Burn);

        side.swap_to_active(1);

        let active = side.active();
        assert_eq!(active.species, "Garchomp");
        assert_eq!(active.hp_percent, 40);
        assert_eq!(active.status, Some(Status::Burn));
        assert_eq!(active.stats.spe, 1);
        assert_eq!(side.roster[1].species, "Pikachu");
    }

    #[test]
    fn test_swap_resets_boosts_to_fresh_zero() {
        let mut side = side_with(&["Pikachu", "Garchomp"]);
        side.boosts.atk = 4;
        side.boosts.evasion = -2;

        side.swap_to_active(1);
        assert!(side.boosts.is_clear());

        // A later boost must not leak into any other zero vector
        side.boosts.atk = 2;
        assert!(BoostStages::new().is_clear());
    }
}
