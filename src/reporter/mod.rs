//! Reporter module
//!
//! Defines the lifecycle callback interface invoked by the host test
//! framework, the registry the host exposes as its extension point, and
//! the TAP reporter implementation.

mod registry;
mod tap;

pub use registry::ReporterRegistry;
pub use tap::TapReporter;

use thiserror::Error;

use crate::models::SpecResult;

/// Reporter errors
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Reporter registry is closed; the host is no longer accepting reporters")]
    RegistryClosed,

    #[error("Invalid reporter configuration: {0}")]
    InvalidConfig(String),
}

/// Lifecycle callbacks invoked by the host test framework.
///
/// The host calls these strictly sequentially for one run: suite start
/// once, then a start/result pair per spec in execution order, then suite
/// end once. They are notifications; nothing is returned and a reporter
/// must never let a per-spec failure escape past its entry point.
pub trait Reporter {
    /// Suite is starting; `total_specs` is the declared spec count.
    fn on_suite_start(&mut self, total_specs: usize);

    /// A spec is about to execute.
    fn on_spec_start(&mut self, id: usize);

    /// A spec finished; `result` is valid only for the duration of the call.
    fn on_spec_result(&mut self, result: &SpecResult);

    /// Suite finished; no further callbacks follow for this run.
    fn on_suite_end(&mut self);
}
