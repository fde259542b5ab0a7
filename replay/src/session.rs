//! Replay session: drives one log through state tracking and recording

use tracing::{debug, warn};

use turnstone_battle::{BattleState, Choice, Transition};
use turnstone_protocol::parse_log;

use crate::ReplayError;
use crate::dex::Dex;
use crate::record::{ActionRecord, IncomingSpecies, SWITCH_LABEL};

/// Tunables for one replay run
#[derive(Debug, Clone, Copy)]
pub struct ReplayConfig {
    /// Hard cap on events processed per log; a log that hits the cap
    /// stops there and keeps the records emitted so far.
    pub max_events: usize,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            max_events: 100_000,
        }
    }
}

/// Result of replaying one log
#[derive(Debug, Clone, Default)]
pub struct ReplayOutput {
    /// Emitted records, in log order
    pub records: Vec<ActionRecord>,
    /// Baselines committed (one per `turn`/`upkeep` event seen)
    pub baselines_committed: usize,
    /// Records dropped because a move name did not resolve
    pub records_dropped: usize,
    /// Events consumed from the log
    pub events_processed: usize,
    /// Winner's username, if the log reached `win`
    pub winner: Option<String>,
}

/// Replays one battle log into a sequence of [`ActionRecord`]s.
///
/// The session owns the per-log control flow: it feeds tokenized events
/// to [`BattleState::apply`] strictly in log order, commits a baseline
/// copy of the state at every turn/upkeep boundary, and emits a record
/// from the baseline whenever a decision event arrives. Decisions before
/// the first boundary (lead switches) are recorded against the state
/// just before the decision event.
pub struct ReplaySession<'a> {
    dex: &'a Dex,
    config: ReplayConfig,
}

impl<'a> ReplaySession<'a> {
    pub fn new(dex: &'a Dex) -> Self {
        Self {
            dex,
            config: ReplayConfig::default(),
        }
    }

    pub fn with_config(dex: &'a Dex, config: ReplayConfig) -> Self {
        Self { dex, config }
    }

    /// Replay one log. An unresolvable species aborts this log with an
    /// error; an unresolvable move drops that one record and continues.
    pub fn run(&self, log: &str) -> Result<ReplayOutput, ReplayError> {
        let mut battle = BattleState::new();
        let mut baseline: Option<BattleState> = None;
        let mut output = ReplayOutput::default();

        for event in parse_log(log) {
            if output.events_processed >= self.config.max_events {
                warn!(
                    max_events = self.config.max_events,
                    "event cap reached, stopping replay early"
                );
                break;
            }
            output.events_processed += 1;

            // Until the first boundary there is no committed baseline;
            // keep a pre-event copy so lead decisions still get a basis.
            let pre_event = if baseline.is_none() {
                Some(battle.clone())
            } else {
                None
            };

            match battle.apply(&event, self.dex)? {
                Transition::None => {}

                Transition::Boundary => {
                    baseline = Some(battle.clone());
                    output.baselines_committed += 1;
                }

                Transition::Decision { player, choice } => {
                    if let Some(basis) = baseline.as_ref().or(pre_event.as_ref()) {
                        self.record_decision(basis, player, &choice, &mut output);
                    }
                }

                Transition::Ended => {
                    output.winner = battle.winner.clone();
                    debug!(winner = ?output.winner, "battle ended");
                    break;
                }
            }
        }

        Ok(output)
    }

    fn record_decision(
        &self,
        basis: &BattleState,
        player: turnstone_battle::Player,
        choice: &Choice,
        output: &mut ReplayOutput,
    ) {
        match choice {
            Choice::Move { name } => match self.dex.move_id(name) {
                Some(id) => {
                    output
                        .records
                        .push(ActionRecord::from_state(basis, player, id, None, self.dex));
                }
                None => {
                    warn!(move_name = %name, "unresolvable move, dropping record");
                    output.records_dropped += 1;
                }
            },

            Choice::Switch { species } => {
                let incoming = self.dex.species(species).map(|entry| IncomingSpecies {
                    number: entry.number,
                    stats: entry.stats,
                    types: entry.types,
                });
                output.records.push(ActionRecord::from_state(
                    basis,
                    player,
                    SWITCH_LABEL,
                    incoming,
                    self.dex,
                ));
            }
        }
    }
}
