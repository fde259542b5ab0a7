//! Domain types for battle state tracking

mod conditions;
mod forme;
mod pokemon_type;
mod side;
mod slot;
mod stats;
mod status;

pub use conditions::{SideCondition, SideConditions, Terrain, Weather};
pub use pokemon_type::{Type, TypePair};
pub use side::{ROSTER_SIZE, SideState, SpeciesLookup, SpeciesProfile};
pub use slot::SlotState;
pub use stats::{BaseStats, BoostStages};
pub use status::Status;
