//! Spec result models
//!
//! Defines the per-spec result values handed to reporters by the host
//! test framework.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single assertion within a spec.
///
/// A `trace` is only present on failure; passing assertions carry just
/// their message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssertionOutcome {
    pub passed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<FailureTrace>,
}

impl AssertionOutcome {
    /// Create a passing assertion outcome
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            trace: None,
        }
    }

    /// Create a failing assertion outcome with no captured trace.
    ///
    /// Such an outcome affects counts but contributes no diagnostic lines.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            trace: None,
        }
    }

    /// Create a failing assertion outcome whose trace carries no stack text
    pub fn fail_traced(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            trace: Some(FailureTrace { stack: None }),
        }
    }

    /// Create a failing assertion outcome with a captured stack trace
    pub fn fail_with_stack(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            trace: Some(FailureTrace {
                stack: Some(stack.into()),
            }),
        }
    }
}

/// Captured failure trace. The stack text is raw, line-separated frames
/// exactly as the host framework recorded them; it may be absent when the
/// framework could not capture one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FailureTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Result of one completed spec, supplied by the host framework.
///
/// `id` is the spec's 0-based sequential position in the run; reporters
/// derive the 1-based TAP test number from it, so the host must deliver
/// results in execution order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecResult {
    pub id: usize,
    pub suite: String,
    pub description: String,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default)]
    pub assertions: Vec<AssertionOutcome>,
}

impl SpecResult {
    /// Create a new result with no assertions recorded yet
    pub fn new(id: usize, suite: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            suite: suite.into(),
            description: description.into(),
            skipped: false,
            assertions: Vec::new(),
        }
    }

    /// Mark this spec as skipped
    pub fn skipped(mut self) -> Self {
        self.skipped = true;
        self
    }

    /// Append an assertion outcome
    pub fn with_assertion(mut self, assertion: AssertionOutcome) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Number of assertions that passed
    pub fn passed_count(&self) -> usize {
        self.assertions.iter().filter(|a| a.passed).count()
    }

    /// Total number of assertions executed
    pub fn total_count(&self) -> usize {
        self.assertions.len()
    }

    /// Whether the spec passed overall.
    ///
    /// A spec with zero assertions passes vacuously; a skipped spec never
    /// counts as passed.
    pub fn passed(&self) -> bool {
        !self.skipped && self.assertions.iter().all(|a| a.passed)
    }
}

impl fmt::Display for SpecResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.skipped {
            "SKIP"
        } else if self.passed() {
            "PASS"
        } else {
            "FAIL"
        };
        write!(
            f,
            "{} {} : {} ({}/{})",
            status,
            self.suite,
            self.description,
            self.passed_count(),
            self.total_count()
        )
    }
}
