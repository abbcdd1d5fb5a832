//! tapline - TAP lifecycle reporter
//!
//! Converts a test suite's lifecycle events (suite start, per-spec start,
//! per-spec result, suite end) into a TAP (Test Anything Protocol) line
//! stream consumable by any TAP-aware aggregator or CI tool.
//!
//! The host framework drives a [`TapReporter`] through the [`Reporter`]
//! callbacks, in execution order, and the reporter writes TAP records to a
//! [`LineSink`]:
//!
//! ```
//! use tapline::{AssertionOutcome, Reporter, ReporterConfig, SpecResult, TapReporter};
//!
//! let mut reporter = TapReporter::stdout(&ReporterConfig::default()).unwrap();
//! reporter.on_suite_start(1);
//! reporter.on_spec_start(0);
//! reporter.on_spec_result(
//!     &SpecResult::new(0, "Calc", "adds").with_assertion(AssertionOutcome::pass("1+1")),
//! );
//! reporter.on_suite_end();
//! ```
//!
//! Hosts with their own extension mechanism register the reporter in a
//! [`ReporterRegistry`]; recorded runs (NDJSON, one [`RunEvent`] per line)
//! can be replayed through [`driver::replay`] or the `tapline` binary.

pub mod cli;
pub mod config;
pub mod driver;
pub mod models;
pub mod output;
pub mod reporter;
pub mod trace;
pub mod utils;

pub use config::{ConfigFile, ReporterConfig};
pub use models::{AssertionOutcome, FailureTrace, RunEvent, SpecResult};
pub use output::{BufferSink, ConsoleSink, LineSink, WriterSink};
pub use reporter::{Reporter, ReporterError, ReporterRegistry, TapReporter};
pub use trace::{Location, TraceLocator};
