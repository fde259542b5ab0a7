//! Shared field types for battle log events

use crate::ParseError;

/// Player in a battle (p1 or p2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// Side index (p1 = 0, p2 = 1)
    pub fn index(&self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Pokemon identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRef {
    /// Player who owns this pokemon
    pub player: Player,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl PokemonRef {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p2: Garchomp"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;

        let player = if pos_part.starts_with("p1") {
            Player::P1
        } else if pos_part.starts_with("p2") {
            Player::P2
        } else {
            return None;
        };

        let position = pos_part.chars().nth(2);

        Some(PokemonRef {
            player,
            position,
            name: name.to_string(),
        })
    }
}

/// Species details string (species, level, gender)
///
/// The species token has any trailing "-*" hidden-forme marker stripped,
/// so "Arceus-*" registers as "Arceus".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeciesDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
}

impl SpeciesDetails {
    /// Parse a details string like "Pikachu, L50, M" or "Urshifu-*"
    pub fn parse(s: &str) -> Self {
        let mut details = SpeciesDetails::default();
        let parts: Vec<&str> = s.split(", ").collect();

        if let Some(species) = parts.first() {
            let species = species
                .split_once("-*")
                .map(|(base, _)| base)
                .unwrap_or(species);
            details.species = species.to_string();
        }

        for part in parts.iter().skip(1) {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if *part == "M" {
                details.gender = Some('M');
            } else if *part == "F" {
                details.gender = Some('F');
            }
        }

        details
    }
}

/// HP and status condition (e.g., "100/100", "50/100 slp", "0 fnt")
#[derive(Debug, Clone, PartialEq)]
pub struct HpStatus {
    /// Current HP (raw value or percentage depending on context)
    pub current: u32,
    /// Max HP (if known)
    pub max: Option<u32>,
    /// Status condition (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 slp", or "0 fnt"
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.is_empty() {
            return None;
        }

        let hp_part = parts[0];
        let status = parts.get(1).map(|s| s.to_string());

        if let Some((current_str, max_str)) = hp_part.split_once('/') {
            Some(HpStatus {
                current: current_str.parse().ok()?,
                max: Some(max_str.parse().ok()?),
                status,
            })
        } else {
            Some(HpStatus {
                current: hp_part.parse().ok()?,
                max: None,
                status,
            })
        }
    }

    /// HP as a percentage of max, rounded to the nearest whole point.
    ///
    /// Server logs report spectator HP out of 100 already; when a real max
    /// is present the percentage is recomputed from the current/max pair.
    /// A Pokemon with any HP left reports at least 1%, so 0 always means
    /// fainted.
    pub fn percent(&self) -> u8 {
        match self.max {
            Some(max) if max > 0 => {
                let pct = (u64::from(self.current) * 100 + u64::from(max) / 2) / u64::from(max);
                let pct = pct.clamp(u64::from(self.current > 0), 100);
                pct as u8
            }
            _ => self.current.min(100) as u8,
        }
    }
}

/// Stat abbreviation used by boost events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }
}

/// Side of the field (for side conditions)
#[derive(Debug, Clone, PartialEq)]
pub struct SideRef {
    pub player: Player,
    pub raw: String,
}

impl SideRef {
    pub fn parse(s: &str) -> Option<Self> {
        let player = if s.starts_with("p1") {
            Player::P1
        } else if s.starts_with("p2") {
            Player::P2
        } else {
            return None;
        };

        Some(SideRef {
            player,
            raw: s.to_string(),
        })
    }
}

/// Helper to parse a PokemonRef from message parts
pub(crate) fn parse_pokemon(parts: &[&str], index: usize) -> Result<PokemonRef, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| PokemonRef::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()).into())
}

/// Helper to parse SpeciesDetails from message parts
pub(crate) fn parse_details(parts: &[&str], index: usize) -> SpeciesDetails {
    parts
        .get(index)
        .map(|s| SpeciesDetails::parse(s))
        .unwrap_or_default()
}

/// Helper to parse HpStatus from message parts
pub(crate) fn parse_hp_status(parts: &[&str], index: usize) -> Option<HpStatus> {
    parts.get(index).and_then(|s| HpStatus::parse(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parse() {
        assert_eq!(Player::parse("p1"), Some(Player::P1));
        assert_eq!(Player::parse("p2"), Some(Player::P2));
        assert_eq!(Player::parse("p3"), None);
        assert_eq!(Player::P1.opponent(), Player::P2);
        assert_eq!(Player::P2.index(), 1);
    }

    #[test]
    fn test_pokemon_ref_parse() {
        let poke = PokemonRef::parse("p1a: Pikachu").unwrap();
        assert_eq!(poke.player, Player::P1);
        assert_eq!(poke.position, Some('a'));
        assert_eq!(poke.name, "Pikachu");

        assert!(PokemonRef::parse("garbage").is_none());
    }

    #[test]
    fn test_species_details_parse() {
        let details = SpeciesDetails::parse("Garchomp, L78, F");
        assert_eq!(details.species, "Garchomp");
        assert_eq!(details.level, Some(78));
        assert_eq!(details.gender, Some('F'));
    }

    #[test]
    fn test_species_details_strips_hidden_forme_marker() {
        let details = SpeciesDetails::parse("Urshifu-*, L80");
        assert_eq!(details.species, "Urshifu");
    }

    #[test]
    fn test_hp_status_parse() {
        let hp = HpStatus::parse("50/100 slp").unwrap();
        assert_eq!(hp.current, 50);
        assert_eq!(hp.max, Some(100));
        assert_eq!(hp.status.as_deref(), Some("slp"));

        let fnt = HpStatus::parse("0 fnt").unwrap();
        assert_eq!(fnt.current, 0);
        assert_eq!(fnt.max, None);
        assert_eq!(fnt.status.as_deref(), Some("fnt"));
    }

    #[test]
    fn test_hp_percent_recomputed_from_raw_max() {
        // Spectator logs: already a percentage
        assert_eq!(HpStatus::parse("73/100").unwrap().percent(), 73);
        // Player's own log: raw HP out of a real max
        assert_eq!(HpStatus::parse("155/310").unwrap().percent(), 50);
        assert_eq!(HpStatus::parse("0/310").unwrap().percent(), 0);
        assert_eq!(HpStatus::parse("0 fnt").unwrap().percent(), 0);
    }

    #[test]
    fn test_hp_percent_never_rounds_a_survivor_to_zero() {
        // A sliver of HP must stay distinguishable from fainted
        assert_eq!(HpStatus::parse("1/310").unwrap().percent(), 1);
        assert_eq!(HpStatus::parse("1/100").unwrap().percent(), 1);
    }

    #[test]
    fn test_stat_parse() {
        assert_eq!(Stat::parse("atk"), Some(Stat::Atk));
        assert_eq!(Stat::parse("evasion"), Some(Stat::Evasion));
        assert_eq!(Stat::parse("hp"), None);
    }

    #[test]
    fn test_side_ref_parse() {
        let side = SideRef::parse("p2: Bob").unwrap();
        assert_eq!(side.player, Player::P2);
        assert!(SideRef::parse("spectator").is_none());
    }
}
