//! Data models for TAP reporting
//!
//! This module contains the result and lifecycle-event structures handed
//! to reporters by the host test framework.

mod event;
mod spec_result;

pub use event::RunEvent;
pub use spec_result::{AssertionOutcome, FailureTrace, SpecResult};
