//! Output sinks for interpreter events.
//!
//! The `EventSink` trait receives one rendered line per processed command and
//! works identically for tests (`MemorySink`) and real streams (`WriterSink`).

use std::io::{self, Write};

/// Destination for event and error lines.
pub trait EventSink {
    /// Emit one line. The line carries no trailing newline.
    fn emit(&mut self, line: &str) -> io::Result<()>;

    /// Flush any buffered output. Default is a no-op.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each line followed by `\n` to the wrapped writer.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Collects lines in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
