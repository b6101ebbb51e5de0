// In-memory terminal for capturing dump output

use std::io;

/// Mock terminal recording everything written to it
///
/// Bytes are kept as written; [`CapturedTerminal::get_output`] splits them
/// into lines the same way a terminal would display them.
#[derive(Debug, Clone, Default)]
pub struct CapturedTerminal {
    buffer: Vec<u8>,
    flushes: usize,
}

impl CapturedTerminal {
    pub fn new() -> Self {
        CapturedTerminal {
            buffer: Vec::new(),
            flushes: 0,
        }
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of times the writer was flushed
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let mut result: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }
}

impl io::Write for CapturedTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
