//! Battle log event model and tokenizer
//!
//! Logs are line-oriented: one event per line, fields pipe-delimited with a
//! leading empty field (`|move|p1a: Pikachu|Thunderbolt|p2a: Garchomp`).
//! Blank lines and lines with fewer than two pipe-delimited fields are
//! skipped. Unrecognized event kinds pass through as [`LogEvent::Other`] so
//! downstream consumers can treat them as no-ops instead of aborting.

use anyhow::Result;

use crate::ParseError;
use crate::fields::{
    HpStatus, Player, PokemonRef, SideRef, SpeciesDetails, Stat, parse_details, parse_hp_status,
    parse_pokemon,
};

/// One event from a battle log
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    /// |poke|PLAYER|DETAILS - team preview reveal
    Poke {
        player: Player,
        details: SpeciesDetails,
    },
    /// |switch|POKEMON|DETAILS|HP STATUS - a chosen switch
    Switch {
        pokemon: PokemonRef,
        details: SpeciesDetails,
        hp: Option<HpStatus>,
    },
    /// |drag|POKEMON|DETAILS|HP STATUS - a forced switch (no player decision)
    Drag {
        pokemon: PokemonRef,
        details: SpeciesDetails,
        hp: Option<HpStatus>,
    },
    /// |move|POKEMON|MOVE|TARGET
    Move {
        pokemon: PokemonRef,
        move_name: String,
    },
    /// |-damage|POKEMON|HP STATUS
    Damage {
        pokemon: PokemonRef,
        hp: Option<HpStatus>,
    },
    /// |-heal|POKEMON|HP STATUS
    Heal {
        pokemon: PokemonRef,
        hp: Option<HpStatus>,
    },
    /// |-boost|POKEMON|STAT|AMOUNT
    Boost {
        pokemon: PokemonRef,
        stat: Stat,
        amount: i8,
    },
    /// |-unboost|POKEMON|STAT|AMOUNT
    Unboost {
        pokemon: PokemonRef,
        stat: Stat,
        amount: i8,
    },
    /// |-fieldstart|CONDITION
    FieldStart { condition: String },
    /// |-fieldend|CONDITION
    FieldEnd { condition: String },
    /// |-weather|WEATHER with optional [upkeep] tag
    Weather { weather: String, upkeep: bool },
    /// |-sidestart|SIDE|CONDITION
    SideStart { side: SideRef, condition: String },
    /// |-sideend|SIDE|CONDITION
    SideEnd { side: SideRef, condition: String },
    /// |-swapsideconditions (Court Change)
    SwapSideConditions,
    /// |turn|NUMBER
    Turn(u32),
    /// |upkeep
    Upkeep,
    /// |win|USERNAME
    Win { player: String },
    /// Any unrecognized event kind (tag only)
    Other(String),
}

/// Parse a single log line into a [`LogEvent`].
///
/// Returns `None` for blank or malformed lines (fewer than two
/// pipe-delimited fields, or a recognized kind missing required fields).
pub fn parse_log_event(line: &str) -> Option<LogEvent> {
    let line = line.trim_end_matches('\r');
    let parts: Vec<&str> = line.split('|').collect();

    if parts.len() < 2 || parts[1].is_empty() {
        return None;
    }

    match parts[1] {
        "poke" => parse_poke(&parts).ok(),
        "switch" => parse_switch(&parts).ok(),
        "drag" => parse_drag(&parts).ok(),
        "move" => parse_move(&parts).ok(),
        "-damage" => parse_damage(&parts).ok(),
        "-heal" => parse_heal(&parts).ok(),
        "-boost" => parse_boost(&parts).ok(),
        "-unboost" => parse_unboost(&parts).ok(),
        "-fieldstart" => parse_fieldstart(&parts).ok(),
        "-fieldend" => parse_fieldend(&parts).ok(),
        "-weather" => parse_weather(&parts).ok(),
        "-sidestart" => parse_sidestart(&parts).ok(),
        "-sideend" => parse_sideend(&parts).ok(),
        "-swapsideconditions" => Some(LogEvent::SwapSideConditions),
        "turn" => parse_turn(&parts).ok(),
        "upkeep" => Some(LogEvent::Upkeep),
        "win" => parse_win(&parts).ok(),
        other => Some(LogEvent::Other(other.to_string())),
    }
}

/// Tokenize a full log into its event sequence, in log order.
///
/// The returned iterator borrows the text, so the same log can be
/// tokenized again from the start.
pub fn parse_log(text: &str) -> impl Iterator<Item = LogEvent> + '_ {
    text.lines().filter_map(parse_log_event)
}

/// Parse |poke|PLAYER|DETAILS|ITEM
fn parse_poke(parts: &[&str]) -> Result<LogEvent> {
    let player = parts
        .get(2)
        .and_then(|s| Player::parse(s))
        .ok_or_else(|| ParseError::MissingField("player".to_string()))?;
    let details = parse_details(parts, 3);

    Ok(LogEvent::Poke { player, details })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS
fn parse_switch(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(LogEvent::Switch {
        pokemon,
        details,
        hp,
    })
}

/// Parse |drag|POKEMON|DETAILS|HP STATUS
fn parse_drag(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(LogEvent::Drag {
        pokemon,
        details,
        hp,
    })
}

/// Parse |move|POKEMON|MOVE|TARGET (target and tags ignored)
fn parse_move(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let move_name = parts.get(3).unwrap_or(&"").to_string();

    Ok(LogEvent::Move { pokemon, move_name })
}

fn parse_damage(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let hp = parse_hp_status(parts, 3);

    Ok(LogEvent::Damage { pokemon, hp })
}

fn parse_heal(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let hp = parse_hp_status(parts, 3);

    Ok(LogEvent::Heal { pokemon, hp })
}

fn parse_boost(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let stat = parts
        .get(3)
        .and_then(|s| Stat::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing stat"))?;
    let amount = parts
        .get(4)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing amount"))?;

    Ok(LogEvent::Boost {
        pokemon,
        stat,
        amount,
    })
}

fn parse_unboost(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let stat = parts
        .get(3)
        .and_then(|s| Stat::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing stat"))?;
    let amount = parts
        .get(4)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing amount"))?;

    Ok(LogEvent::Unboost {
        pokemon,
        stat,
        amount,
    })
}

fn parse_fieldstart(parts: &[&str]) -> Result<LogEvent> {
    let condition = parts.get(2).unwrap_or(&"").to_string();
    Ok(LogEvent::FieldStart { condition })
}

fn parse_fieldend(parts: &[&str]) -> Result<LogEvent> {
    let condition = parts.get(2).unwrap_or(&"").to_string();
    Ok(LogEvent::FieldEnd { condition })
}

fn parse_weather(parts: &[&str]) -> Result<LogEvent> {
    let weather = parts.get(2).unwrap_or(&"none").to_string();
    let upkeep = parts.iter().any(|p| *p == "[upkeep]");

    Ok(LogEvent::Weather { weather, upkeep })
}

fn parse_sidestart(parts: &[&str]) -> Result<LogEvent> {
    let side = parts
        .get(2)
        .and_then(|s| SideRef::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing side"))?;
    let condition = parts.get(3).unwrap_or(&"").to_string();

    Ok(LogEvent::SideStart { side, condition })
}

fn parse_sideend(parts: &[&str]) -> Result<LogEvent> {
    let side = parts
        .get(2)
        .and_then(|s| SideRef::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Missing side"))?;
    let condition = parts.get(3).unwrap_or(&"").to_string();

    Ok(LogEvent::SideEnd { side, condition })
}

fn parse_turn(parts: &[&str]) -> Result<LogEvent> {
    let number = parts
        .get(2)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing turn number"))?;
    Ok(LogEvent::Turn(number))
}

fn parse_win(parts: &[&str]) -> Result<LogEvent> {
    let player = parts.get(2).unwrap_or(&"").to_string();
    Ok(LogEvent::Win { player })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_malformed_lines() {
        assert_eq!(parse_log_event(""), None);
        assert_eq!(parse_log_event("no pipes here"), None);
        assert_eq!(parse_log_event("|"), None);
    }

    #[test]
    fn test_unrecognized_kind_passes_through() {
        assert_eq!(
            parse_log_event("|-ability|p1a: Torkoal|Drought"),
            Some(LogEvent::Other("-ability".to_string()))
        );
    }

    #[test]
    fn test_parse_poke() {
        let event = parse_log_event("|poke|p1|Garchomp, F|item").unwrap();
        match event {
            LogEvent::Poke { player, details } => {
                assert_eq!(player, Player::P1);
                assert_eq!(details.species, "Garchomp");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_switch() {
        let event = parse_log_event("|switch|p2a: Rotom|Rotom-Wash|100/100").unwrap();
        match event {
            LogEvent::Switch {
                pokemon,
                details,
                hp,
            } => {
                assert_eq!(pokemon.player, Player::P2);
                assert_eq!(details.species, "Rotom-Wash");
                assert_eq!(hp.unwrap().percent(), 100);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_move() {
        let event = parse_log_event("|move|p1a: Pikachu|Thunderbolt|p2a: Garchomp").unwrap();
        match event {
            LogEvent::Move { pokemon, move_name } => {
                assert_eq!(pokemon.name, "Pikachu");
                assert_eq!(move_name, "Thunderbolt");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_boost_and_unboost() {
        let boost = parse_log_event("|-boost|p1a: Dragonite|atk|2").unwrap();
        assert_eq!(
            boost,
            LogEvent::Boost {
                pokemon: PokemonRef::parse("p1a: Dragonite").unwrap(),
                stat: Stat::Atk,
                amount: 2,
            }
        );

        let unboost = parse_log_event("|-unboost|p2a: Corviknight|def|1").unwrap();
        assert_eq!(
            unboost,
            LogEvent::Unboost {
                pokemon: PokemonRef::parse("p2a: Corviknight").unwrap(),
                stat: Stat::Def,
                amount: 1,
            }
        );
    }

    #[test]
    fn test_parse_weather_with_upkeep_tag() {
        let event = parse_log_event("|-weather|Sandstorm|[upkeep]").unwrap();
        assert_eq!(
            event,
            LogEvent::Weather {
                weather: "Sandstorm".to_string(),
                upkeep: true,
            }
        );
    }

    #[test]
    fn test_parse_sidestart() {
        let event = parse_log_event("|-sidestart|p2: Bob|move: Stealth Rock").unwrap();
        match event {
            LogEvent::SideStart { side, condition } => {
                assert_eq!(side.player, Player::P2);
                assert_eq!(condition, "move: Stealth Rock");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_turn_upkeep_win() {
        assert_eq!(parse_log_event("|turn|12"), Some(LogEvent::Turn(12)));
        assert_eq!(parse_log_event("|upkeep"), Some(LogEvent::Upkeep));
        assert_eq!(
            parse_log_event("|win|Alice"),
            Some(LogEvent::Win {
                player: "Alice".to_string()
            })
        );
    }

    #[test]
    fn test_parse_log_is_restartable() {
        let log = "|turn|1\n\njunk line\n|move|p1a: Pikachu|Surf|p2a: Golem\n|win|Alice\n";
        let first: Vec<LogEvent> = parse_log(log).collect();
        let second: Vec<LogEvent> = parse_log(log).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }
}
