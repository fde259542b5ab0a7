//! Battle state tracking from log events

mod battle;
mod updater;

pub use battle::BattleState;
pub use updater::{Choice, Transition};
