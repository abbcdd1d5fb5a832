//! Line sinks for TAP output
//!
//! A sink accepts one logical TAP record at a time, in order. Sinks are
//! append-only and never read back.

use std::io::Write;

/// Destination for emitted TAP records.
///
/// A record is a single line, or one result line with its diagnostic block
/// joined by embedded line breaks. Write failures are swallowed: losing
/// output is preferable to aborting the run that produced it.
pub trait LineSink {
    fn write_record(&mut self, record: &str);
}

/// Sink that prints records to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
    fn write_record(&mut self, record: &str) {
        println!("{record}");
    }
}

/// Sink that writes records to any `io::Write` destination.
///
/// I/O errors are dropped per record, matching the silent missing-sink
/// policy of the reporter.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_record(&mut self, record: &str) {
        let _ = writeln!(self.writer, "{record}");
    }
}

/// In-memory sink, used by tests to assert exact output
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    records: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records written so far, in order
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// The full stream as newline-joined text
    pub fn to_stream(&self) -> String {
        self.records.join("\n")
    }
}

impl LineSink for BufferSink {
    fn write_record(&mut self, record: &str) {
        self.records.push(record.to_string());
    }
}
