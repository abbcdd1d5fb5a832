//! TAP reporter
//!
//! Translates suite lifecycle events into a TAP (Test Anything Protocol)
//! line stream: one plan line, one result line per non-skipped spec, and a
//! trailing summary.

use tracing::debug;

use super::{Reporter, ReporterError};
use crate::config::ReporterConfig;
use crate::models::SpecResult;
use crate::output::{ConsoleSink, LineSink};
use crate::trace::TraceLocator;
use crate::utils::Timer;

/// Per-run counters and lifecycle flags. Created at suite start, frozen at
/// suite end.
#[derive(Debug, Default)]
struct RunState {
    started: bool,
    finished: bool,
    timer: Option<Timer>,
    executed_specs: usize,
    passed_specs: usize,
    executed_asserts: usize,
    passed_asserts: usize,
}

/// Reporter that emits a TAP stream for one suite run.
///
/// One instance serves one run; concurrent runs each need their own
/// instance. Skipped specs emit no result line and consume no plan slot,
/// so the plan may over-declare when specs are skipped.
pub struct TapReporter {
    state: RunState,
    locator: TraceLocator,
    sink: Option<Box<dyn LineSink>>,
}

impl TapReporter {
    /// Create a reporter writing to the given sink
    pub fn new(config: &ReporterConfig, sink: Box<dyn LineSink>) -> Result<Self, ReporterError> {
        Self::build(config, Some(sink))
    }

    /// Create a reporter writing to stdout
    pub fn stdout(config: &ReporterConfig) -> Result<Self, ReporterError> {
        Self::build(config, Some(Box::new(ConsoleSink)))
    }

    /// Create a reporter with no sink.
    ///
    /// Every emitted record is dropped silently; counters still advance.
    /// Sink absence is a configuration state, not an error.
    pub fn detached(config: &ReporterConfig) -> Result<Self, ReporterError> {
        Self::build(config, None)
    }

    fn build(
        config: &ReporterConfig,
        sink: Option<Box<dyn LineSink>>,
    ) -> Result<Self, ReporterError> {
        if config.framework_token.trim().is_empty() {
            return Err(ReporterError::InvalidConfig(
                "framework_token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            state: RunState::default(),
            locator: TraceLocator::new(&config.framework_token),
            sink,
        })
    }

    /// Specs executed so far
    pub fn executed_specs(&self) -> usize {
        self.state.executed_specs
    }

    /// Assertions executed so far
    pub fn executed_asserts(&self) -> usize {
        self.state.executed_asserts
    }

    fn emit(&mut self, record: &str) {
        if let Some(sink) = &mut self.sink {
            sink.write_record(record);
        }
    }

    /// Diagnostic comment lines for a failed spec, one block per assertion
    /// that carries a trace.
    fn diagnostics(&self, result: &SpecResult) -> Vec<String> {
        let mut lines = Vec::new();

        for assertion in &result.assertions {
            let Some(trace) = &assertion.trace else {
                continue;
            };

            match trace.stack.as_deref() {
                Some(stack) => match self.locator.locate(stack) {
                    Some(location) => {
                        lines.push(format!("#  {}{}", assertion.message, location));
                    }
                    None => {
                        // No locatable frame: fall back to the raw trace.
                        lines.push(format!("#  {}", assertion.message));
                        lines.push(format!("#  Stacktrace: {stack}"));
                    }
                },
                None => lines.push(format!("#  {}", assertion.message)),
            }
        }

        lines
    }

    fn summary_record(&self, elapsed_ms: u64) -> String {
        if self.state.executed_asserts == 0 {
            // A run that asserted nothing is indistinguishable from a
            // broken harness; surface it as a failure.
            return "not ok 1 - no asserts run.".to_string();
        }

        let failed = self
            .state
            .executed_specs
            .saturating_sub(self.state.passed_specs);

        format!(
            "# {} {}, {} {}, {} {} in {}s.",
            self.state.executed_specs,
            plural(self.state.executed_specs, "spec", "specs"),
            self.state.executed_asserts,
            plural(self.state.executed_asserts, "assertion", "assertions"),
            failed,
            plural(failed, "failure", "failures"),
            elapsed_ms as f64 / 1000.0
        )
    }
}

impl Reporter for TapReporter {
    fn on_suite_start(&mut self, total_specs: usize) {
        if self.state.started {
            return;
        }

        self.state = RunState {
            started: true,
            timer: Some(Timer::start("suite")),
            ..RunState::default()
        };

        // TAP requires a plan; an empty suite still declares 1..1 so
        // downstream tools flag it instead of reporting silent success.
        self.emit(&format!("1..{}", total_specs.max(1)));
        debug!("Suite started with {} declared specs", total_specs);
    }

    fn on_spec_start(&mut self, _id: usize) {
        if !self.state.started || self.state.finished {
            return;
        }
        self.state.executed_specs += 1;
    }

    fn on_spec_result(&mut self, result: &SpecResult) {
        if !self.state.started || self.state.finished {
            return;
        }
        if result.skipped {
            return;
        }

        self.state.executed_asserts += result.total_count();
        self.state.passed_asserts += result.passed_count();

        let passed = result.passed();
        let status = if passed {
            self.state.passed_specs += 1;
            "ok"
        } else {
            "not ok"
        };

        let mut record = format!(
            "{status} {} - {} : {}",
            result.id + 1,
            result.suite,
            result.description
        );

        if !passed {
            for line in self.diagnostics(result) {
                record.push('\n');
                record.push_str(&line);
            }
        }

        self.emit(&record);
    }

    fn on_suite_end(&mut self) {
        if !self.state.started || self.state.finished {
            return;
        }

        let elapsed_ms = self
            .state
            .timer
            .as_ref()
            .map(Timer::elapsed_ms)
            .unwrap_or(0);

        let record = self.summary_record(elapsed_ms);
        self.emit(&record);
        self.state.finished = true;

        debug!(
            "Suite finished: {}/{} specs passed, {}/{} assertions passed",
            self.state.passed_specs,
            self.state.executed_specs,
            self.state.passed_asserts,
            self.state.executed_asserts
        );
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
