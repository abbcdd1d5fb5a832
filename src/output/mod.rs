//! Output module
//!
//! Provides the line-sink abstraction TAP records are written through.

mod sink;

pub use sink::{BufferSink, ConsoleSink, LineSink, WriterSink};
