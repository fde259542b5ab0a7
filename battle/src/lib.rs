//! Battle state tracking and domain types for Pokemon Showdown replays.
//!
//! This crate reconstructs per-match battle state from the tokenized log
//! events produced by `turnstone-protocol`.
//!
//! ```text
//! turnstone-protocol (wire format)
//!        │
//!        ▼
//! turnstone-battle (domain types + state tracking) ← THIS CRATE
//!        │
//!        └─> turnstone-replay (decision snapshots / training rows)
//! ```
//!
//! # Main Types
//!
//! - [`Type`], [`TypePair`] - Pokemon types
//! - [`Status`] - Non-volatile status conditions
//! - [`BaseStats`], [`BoostStages`] - stat sextuple and stage modifiers
//! - [`Weather`], [`Terrain`], [`SideConditions`] - field and side conditions
//! - [`SlotState`], [`SideState`] - one roster slot, one player's side
//! - [`BattleState`] - the full per-match state, mutated event by event
//!
//! [`BattleState::apply`] is the event dispatcher: it consumes one
//! [`LogEvent`](turnstone_protocol::LogEvent) at a time, strictly in log
//! order, and reports decision points and turn boundaries to the caller
//! via [`Transition`].

use thiserror::Error;

pub mod tracking;
pub mod types;

pub use tracking::{BattleState, Choice, Transition};
pub use types::{
    BaseStats, BoostStages, ROSTER_SIZE, SideConditions, SideState, SlotState, SpeciesLookup,
    SpeciesProfile, Status, Terrain, Type, TypePair, Weather,
};

// Re-export commonly used protocol types
pub use turnstone_protocol::{Player, Stat};

#[derive(Error, Debug)]
pub enum StateError {
    /// A switch/drag/poke target could not be matched against the revealed
    /// roster and forme-alias table, or is absent from the species lookup.
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
}
