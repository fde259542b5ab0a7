//! Species and move lookup tables
//!
//! The dex is loaded once per process and shared read-only across
//! replays. It answers two questions: what are a species' base stats
//! and types, and what numeric id does a move name map to.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use turnstone_battle::{BaseStats, SpeciesLookup, SpeciesProfile, Type, TypePair};

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Malformed dex data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown type name '{type_name}' for species '{species}'")]
    UnknownType { species: String, type_name: String },
}

/// Static data for one species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesEntry {
    /// Pokedex number, used as the species code in exported records
    pub number: u32,
    pub stats: BaseStats,
    pub types: TypePair,
}

/// Read-only species and move lookup
#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: HashMap<String, SpeciesEntry>,
    moves: HashMap<String, u32>,
}

/// On-disk species row
#[derive(Deserialize)]
struct SpeciesRow {
    name: String,
    number: u32,
    hp: u16,
    atk: u16,
    def: u16,
    spa: u16,
    spd: u16,
    spe: u16,
    type1: String,
    type2: Option<String>,
}

/// On-disk move row
#[derive(Deserialize)]
struct MoveRow {
    name: String,
    id: u32,
}

#[derive(Deserialize)]
struct DexFile {
    species: Vec<SpeciesRow>,
    moves: Vec<MoveRow>,
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dex from its JSON representation.
    ///
    /// Expected shape: `{"species": [{"name", "number", "hp", "atk",
    /// "def", "spa", "spd", "spe", "type1", "type2"}], "moves":
    /// [{"name", "id"}]}`.
    pub fn from_json(json: &str) -> Result<Self, DexError> {
        let file: DexFile = serde_json::from_str(json)?;

        let mut dex = Dex::new();
        for row in file.species {
            let primary = parse_type(&row.name, &row.type1)?;
            let types = match row.type2.as_deref().filter(|t| !t.is_empty()) {
                Some(secondary) => TypePair::dual(primary, parse_type(&row.name, secondary)?),
                None => TypePair::single(primary),
            };

            dex.add_species(
                &row.name,
                SpeciesEntry {
                    number: row.number,
                    stats: BaseStats::new(row.hp, row.atk, row.def, row.spa, row.spd, row.spe),
                    types,
                },
            );
        }
        for row in file.moves {
            dex.add_move(&row.name, row.id);
        }

        Ok(dex)
    }

    pub fn add_species(&mut self, name: &str, entry: SpeciesEntry) {
        self.species.insert(name.to_string(), entry);
    }

    pub fn add_move(&mut self, name: &str, id: u32) {
        self.moves.insert(name.to_string(), id);
    }

    /// Look up a species entry by exact name
    pub fn species(&self, name: &str) -> Option<&SpeciesEntry> {
        self.species.get(name)
    }

    /// Species code for exported records (0 = unknown or empty slot)
    pub fn species_number(&self, name: &str) -> u32 {
        self.species.get(name).map_or(0, |entry| entry.number)
    }

    /// Numeric id for a move name
    pub fn move_id(&self, name: &str) -> Option<u32> {
        self.moves.get(name).copied()
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl SpeciesLookup for Dex {
    fn profile(&self, species: &str) -> Option<SpeciesProfile> {
        self.species.get(species).map(|entry| SpeciesProfile {
            stats: entry.stats,
            types: entry.types,
        })
    }
}

fn parse_type(species: &str, name: &str) -> Result<Type, DexError> {
    Type::from_name(name).ok_or_else(|| DexError::UnknownType {
        species: species.to_string(),
        type_name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEX_JSON: &str = r#"{
        "species": [
            {"name": "Pikachu", "number": 25,
             "hp": 35, "atk": 55, "def": 40, "spa": 50, "spd": 50, "spe": 90,
             "type1": "Electric", "type2": null},
            {"name": "Garchomp", "number": 445,
             "hp": 108, "atk": 130, "def": 95, "spa": 80, "spd": 85, "spe": 102,
             "type1": "Dragon", "type2": "Ground"}
        ],
        "moves": [
            {"name": "Thunderbolt", "id": 85},
            {"name": "Earthquake", "id": 89}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let dex = Dex::from_json(DEX_JSON).unwrap();
        assert_eq!(dex.species_count(), 2);
        assert_eq!(dex.move_count(), 2);

        let pikachu = dex.species("Pikachu").unwrap();
        assert_eq!(pikachu.number, 25);
        assert_eq!(pikachu.stats.spe, 90);
        assert_eq!(pikachu.types, TypePair::single(Type::Electric));

        let garchomp = dex.species("Garchomp").unwrap();
        assert_eq!(garchomp.types, TypePair::dual(Type::Dragon, Type::Ground));
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let json = r#"{
            "species": [{"name": "Missingno", "number": 0,
                "hp": 33, "atk": 136, "def": 0, "spa": 6, "spd": 6, "spe": 29,
                "type1": "Bird", "type2": null}],
            "moves": []
        }"#;
        assert!(matches!(
            Dex::from_json(json),
            Err(DexError::UnknownType { type_name, .. }) if type_name == "Bird"
        ));
    }

    #[test]
    fn test_unknown_lookups() {
        let dex = Dex::from_json(DEX_JSON).unwrap();
        assert!(dex.species("Mewtwo").is_none());
        assert_eq!(dex.species_number("Mewtwo"), 0);
        assert_eq!(dex.species_number(""), 0);
        assert_eq!(dex.move_id("Splash"), None);
    }

    #[test]
    fn test_species_lookup_trait() {
        let dex = Dex::from_json(DEX_JSON).unwrap();
        let profile = dex.profile("Garchomp").unwrap();
        assert_eq!(profile.stats.atk, 130);
        assert!(dex.profile("Mewtwo").is_none());
    }
}
