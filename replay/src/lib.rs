//! Replay engine: battle logs in, labeled decision snapshots out.
//!
//! A replay walks one battle log event by event, tracking state with
//! `turnstone-battle`, and emits one [`ActionRecord`] per player decision
//! (a move used or a switch chosen). Records are built from the state as
//! of the last turn boundary, so a record never encodes information that
//! only became available after the decision it labels.
//!
//! # Usage
//!
//! ```no_run
//! use turnstone_replay::{Dex, ReplaySession};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dex = Dex::from_json(&std::fs::read_to_string("dex.json")?)?;
//! let log = std::fs::read_to_string("battle.log")?;
//!
//! let output = ReplaySession::new(&dex).run(&log)?;
//! for record in &output.records {
//!     println!("{}", serde_json::to_string(record)?);
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod batch;
mod dex;
mod record;
mod session;

pub use batch::{BatchSummary, LogSource, run_batch, run_batch_parallel};
pub use dex::{Dex, DexError, SpeciesEntry};
pub use record::{ActionRecord, IncomingSpecies, SWITCH_LABEL, SideSnapshot, SlotSnapshot};
pub use session::{ReplayConfig, ReplayOutput, ReplaySession};

pub use turnstone_battle::StateError;

/// A whole-replay failure. One of these aborts the current log only;
/// batch drivers log it and move on to the next log.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error(transparent)]
    State(#[from] StateError),
}
