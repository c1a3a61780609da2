//! Trace output for the reduction machine.
//!
//! Every state the machine passes through is rendered as one line,
//! `"<statement>, <environment>"`, and handed to a sink:
//! - Stdout: printed (default)
//! - Buffer: captured for assertions or later display
//! - Silent: discarded

use parking_lot::Mutex;
use std::sync::Arc;

/// Captured trace lines.
///
/// Cloning yields a handle to the same buffer, so a caller can keep one
/// handle while the machine owns the sink.
#[derive(Debug, Clone, Default)]
pub struct BufferTrace {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    /// All captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Captured lines joined with newlines, each line terminated.
    pub fn output(&self) -> String {
        self.lines.lock().iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// Destination for machine trace lines.
#[derive(Debug, Clone, Default)]
pub enum TraceSink {
    /// Writes each line to stdout.
    #[default]
    Stdout,
    /// Captures lines in memory.
    Buffer(BufferTrace),
    /// Discards all output.
    Silent,
}

impl TraceSink {
    /// A buffer sink together with a handle for reading it back.
    pub fn buffer() -> (Self, BufferTrace) {
        let buffer = BufferTrace::new();
        (TraceSink::Buffer(buffer.clone()), buffer)
    }

    pub fn emit(&self, line: &str) {
        match self {
            TraceSink::Stdout => println!("{line}"),
            TraceSink::Buffer(buffer) => buffer.push(line),
            TraceSink::Silent => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_captures() {
        let (sink, buffer) = TraceSink::buffer();
        sink.emit("x = 1, {}");
        sink.emit("do-nothing, {x: 1}");
        assert_eq!(buffer.lines(), vec!["x = 1, {}", "do-nothing, {x: 1}"]);
        assert_eq!(buffer.output(), "x = 1, {}\ndo-nothing, {x: 1}\n");
        buffer.clear();
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_silent_sink_discards() {
        TraceSink::Silent.emit("ignored");
    }
}
