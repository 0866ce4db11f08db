//! End-of-pass message buffer
//!
//! Build hosts often clear the console while a pass is running, so
//! user-facing messages are held here and emitted once the pass is decided.

/// Receives the buffered messages of a pass, in order.
pub trait LogSink {
    fn emit(&mut self, lines: &[String]);
}

impl LogSink for Vec<String> {
    fn emit(&mut self, lines: &[String]) {
        self.extend_from_slice(lines);
    }
}

/// Append-only message buffer for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBuffer {
    lines: Vec<String>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Hand every buffered line to `sink`, then clear the buffer.
    pub fn flush(&mut self, sink: &mut dyn LogSink) {
        if !self.lines.is_empty() {
            sink.emit(&self.lines);
        }
        self.clear();
    }
}
