//! Update logic for processing LogEvent into battle state

use turnstone_protocol::{LogEvent, Player};

use super::battle::BattleState;
use crate::StateError;
use crate::types::{SideCondition, SpeciesLookup, Status, Terrain, Weather};

/// What an applied event means to the replay driver
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// State may have changed; nothing to report
    None,
    /// A player made a decision (switch chosen or move used)
    Decision { player: Player, choice: Choice },
    /// A turn/upkeep boundary: commit a new baseline
    Boundary,
    /// The battle ended
    Ended,
}

/// The decision a player made at a decision point
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// Switched to this roster species (already alias-resolved)
    Switch { species: String },
    /// Used this move (name as written in the log)
    Move { name: String },
}

impl BattleState {
    /// Apply one log event to the live state.
    ///
    /// Events must be fed strictly in log order. Unrecognized events are
    /// no-ops; unrecognized weather/terrain/side-condition names are
    /// logged and ignored. Species that cannot be resolved against the
    /// roster, alias table, and lookup fail the whole replay.
    pub fn apply(
        &mut self,
        event: &LogEvent,
        lookup: &impl SpeciesLookup,
    ) -> Result<Transition, StateError> {
        match event {
            LogEvent::Poke { player, details } => {
                let profile = lookup
                    .profile(&details.species)
                    .ok_or_else(|| StateError::UnknownSpecies(details.species.clone()))?;
                self.side_mut(*player).register(&details.species, profile);
                Ok(Transition::None)
            }

            LogEvent::Switch {
                pokemon,
                details,
                hp,
            } => {
                let species = self.bring_in(pokemon.player, &details.species)?;
                if let Some(hp) = hp {
                    self.apply_active_hp(pokemon.player, hp);
                }
                Ok(Transition::Decision {
                    player: pokemon.player,
                    choice: Choice::Switch { species },
                })
            }

            LogEvent::Drag {
                pokemon,
                details,
                hp,
            } => {
                // Forced in by Roar/Whirlwind etc.: no player decision
                self.bring_in(pokemon.player, &details.species)?;
                if let Some(hp) = hp {
                    self.apply_active_hp(pokemon.player, hp);
                }
                Ok(Transition::None)
            }

            LogEvent::Move { pokemon, move_name } => Ok(Transition::Decision {
                player: pokemon.player,
                choice: Choice::Move {
                    name: move_name.clone(),
                },
            }),

            LogEvent::Damage { pokemon, hp } | LogEvent::Heal { pokemon, hp } => {
                if let Some(hp) = hp {
                    self.apply_active_hp(pokemon.player, hp);
                }
                Ok(Transition::None)
            }

            LogEvent::Boost {
                pokemon,
                stat,
                amount,
            } => {
                self.side_mut(pokemon.player).boosts.boost(*stat, *amount);
                Ok(Transition::None)
            }

            LogEvent::Unboost {
                pokemon,
                stat,
                amount,
            } => {
                self.side_mut(pokemon.player).boosts.unboost(*stat, *amount);
                Ok(Transition::None)
            }

            LogEvent::FieldStart { condition } => {
                match Terrain::from_protocol(condition) {
                    Some(terrain) => self.terrain = Some(terrain),
                    None => tracing::debug!("ignoring unrecognized field condition: {condition}"),
                }
                Ok(Transition::None)
            }

            LogEvent::FieldEnd { condition: _ } => {
                self.terrain = None;
                Ok(Transition::None)
            }

            LogEvent::Weather { weather, upkeep: _ } => {
                if weather == "none" || weather.is_empty() {
                    self.weather = None;
                } else {
                    match Weather::from_protocol(weather) {
                        Some(parsed) => self.weather = Some(parsed),
                        None => tracing::debug!("ignoring unrecognized weather: {weather}"),
                    }
                }
                Ok(Transition::None)
            }

            LogEvent::SideStart { side, condition } => {
                match SideCondition::from_protocol(condition) {
                    Some(cond) => self.side_mut(side.player).conditions.start(cond),
                    None => tracing::debug!("ignoring unrecognized side condition: {condition}"),
                }
                Ok(Transition::None)
            }

            LogEvent::SideEnd { side, condition } => {
                match SideCondition::from_protocol(condition) {
                    Some(cond) => self.side_mut(side.player).conditions.end(cond),
                    None => tracing::debug!("ignoring unrecognized side condition: {condition}"),
                }
                Ok(Transition::None)
            }

            LogEvent::SwapSideConditions => {
                self.swap_side_conditions();
                Ok(Transition::None)
            }

            LogEvent::Turn(number) => {
                self.turn = *number;
                Ok(Transition::Boundary)
            }

            LogEvent::Upkeep => Ok(Transition::Boundary),

            LogEvent::Win { player } => {
                self.ended = true;
                self.winner = Some(player.clone());
                Ok(Transition::Ended)
            }

            LogEvent::Other(_) => Ok(Transition::None),
        }
    }

    /// Resolve the incoming species and bring it onto the field.
    ///
    /// Returns the roster species name the slot is registered under (the
    /// alias-resolved identity, not the forme name from the event).
    fn bring_in(&mut self, player: Player, species: &str) -> Result<String, StateError> {
        let side = self.side_mut(player);
        let index = side.resolve_slot(species)?;
        let resolved = side.roster[index].species.clone();
        side.swap_to_active(index);
        Ok(resolved)
    }

    fn apply_active_hp(&mut self, player: Player, hp: &turnstone_protocol::HpStatus) {
        let side = self.side_mut(player);
        side.set_active_hp(hp.percent());
        if let Some(status) = hp.status.as_deref().and_then(Status::from_protocol) {
            side.set_active_status(Some(status));
        }
    }
}
