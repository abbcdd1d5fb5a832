//! Event replay driver
//!
//! Replays a recorded suite run into registered reporters. Input is
//! NDJSON: one serialized `RunEvent` per line, in execution order.

use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{debug, info};

use crate::models::RunEvent;
use crate::reporter::ReporterRegistry;

/// Counts from a completed replay
#[derive(Clone, Copy, Debug, Default)]
pub struct ReplaySummary {
    /// Total lifecycle events dispatched
    pub events: usize,
    /// Spec results dispatched
    pub specs: usize,
}

/// Replay recorded lifecycle events into the registry.
///
/// Blank lines are skipped. A malformed line is fatal: dropping a lifecycle
/// event would desynchronize the TAP numbering of everything after it, so
/// the replay stops with the offending line number instead.
pub fn replay(reader: impl BufRead, registry: &mut ReporterRegistry) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read event line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let event: RunEvent = serde_json::from_str(&line)
            .with_context(|| format!("Malformed event on line {}", index + 1))?;
        debug!("Replaying event: {:?}", event);

        match event {
            RunEvent::SuiteStarted { total_specs } => registry.suite_start(total_specs),
            RunEvent::SpecStarted { id } => registry.spec_start(id),
            RunEvent::SpecFinished { result } => {
                registry.spec_result(&result);
                summary.specs += 1;
            }
            RunEvent::SuiteFinished => registry.suite_end(),
        }

        summary.events += 1;
    }

    info!(
        "Replayed {} events ({} spec results)",
        summary.events, summary.specs
    );

    Ok(summary)
}
