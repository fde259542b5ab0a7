//! Batch driver: replay many logs into one record table
//!
//! Per-log failures never kill a batch. A fetch error or a replay abort
//! is logged and counted, and the driver moves on to the next log.

use tracing::warn;

use crate::dex::Dex;
use crate::record::ActionRecord;
use crate::session::{ReplayConfig, ReplaySession};

/// Source of raw log text, keyed by log id
pub trait LogSource {
    fn fetch_log(&self, id: &str) -> anyhow::Result<String>;
}

/// Aggregate outcome of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Records from all successfully replayed logs, in input order
    pub records: Vec<ActionRecord>,
    /// Logs replayed to completion
    pub logs_processed: usize,
    /// Logs skipped (fetch failed or replay aborted)
    pub logs_failed: usize,
    /// Records dropped across all logs (unresolvable moves)
    pub records_dropped: usize,
}

impl BatchSummary {
    fn merge(&mut self, other: BatchSummary) {
        self.records.extend(other.records);
        self.logs_processed += other.logs_processed;
        self.logs_failed += other.logs_failed;
        self.records_dropped += other.records_dropped;
    }
}

/// Replay every log id against one shared dex.
pub fn run_batch(
    source: &impl LogSource,
    ids: &[String],
    dex: &Dex,
    config: ReplayConfig,
) -> BatchSummary {
    let session = ReplaySession::with_config(dex, config);
    let mut summary = BatchSummary::default();

    for id in ids {
        let log = match source.fetch_log(id) {
            Ok(log) => log,
            Err(err) => {
                warn!(log_id = %id, error = %err, "failed to fetch log, skipping");
                summary.logs_failed += 1;
                continue;
            }
        };

        match session.run(&log) {
            Ok(output) => {
                summary.records.extend(output.records);
                summary.records_dropped += output.records_dropped;
                summary.logs_processed += 1;
            }
            Err(err) => {
                warn!(log_id = %id, error = %err, "replay aborted, skipping log");
                summary.logs_failed += 1;
            }
        }
    }

    summary
}

/// Replay logs on `workers` threads, preserving input order in the
/// merged record table.
pub fn run_batch_parallel(
    source: &(impl LogSource + Sync),
    ids: &[String],
    dex: &Dex,
    config: ReplayConfig,
    workers: usize,
) -> BatchSummary {
    if workers <= 1 || ids.len() <= 1 {
        return run_batch(source, ids, dex, config);
    }

    let chunk_size = ids.len().div_ceil(workers);
    let mut summary = BatchSummary::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ids
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || run_batch(source, chunk, dex, config)))
            .collect();

        for handle in handles {
            if let Ok(chunk_summary) = handle.join() {
                summary.merge(chunk_summary);
            }
        }
    });

    summary
}
