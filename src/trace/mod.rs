//! Stack trace parsing module
//!
//! Extracts best-effort source locations from failure traces.

mod locator;

pub use locator::{Location, TraceLocator};
