//! Reporter registry
//!
//! The host framework's extension point: reporters are registered here and
//! every lifecycle event is fanned out to them in registration order.

use tracing::debug;

use super::{Reporter, ReporterError};
use crate::models::SpecResult;

/// Host-owned collection of reporters.
///
/// The host registers reporters while setting up, seals the registry before
/// the first suite starts, and then drives all of them through the registry's
/// own lifecycle methods.
#[derive(Default)]
pub struct ReporterRegistry {
    reporters: Vec<Box<dyn Reporter>>,
    sealed: bool,
}

impl ReporterRegistry {
    /// Create an empty, open registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reporter.
    ///
    /// Fails loudly once the registry has been sealed; a reporter attached
    /// after setup would miss lifecycle events and emit a truncated stream.
    pub fn add(&mut self, reporter: Box<dyn Reporter>) -> Result<(), ReporterError> {
        if self.sealed {
            return Err(ReporterError::RegistryClosed);
        }
        self.reporters.push(reporter);
        debug!("Registered reporter ({} total)", self.reporters.len());
        Ok(())
    }

    /// Stop accepting reporters
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Number of registered reporters
    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    /// Whether no reporters are registered
    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }

    pub fn suite_start(&mut self, total_specs: usize) {
        for reporter in &mut self.reporters {
            reporter.on_suite_start(total_specs);
        }
    }

    pub fn spec_start(&mut self, id: usize) {
        for reporter in &mut self.reporters {
            reporter.on_spec_start(id);
        }
    }

    pub fn spec_result(&mut self, result: &SpecResult) {
        for reporter in &mut self.reporters {
            reporter.on_spec_result(result);
        }
    }

    pub fn suite_end(&mut self) {
        for reporter in &mut self.reporters {
            reporter.on_suite_end();
        }
    }
}
