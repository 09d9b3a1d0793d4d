//! Live capture of child process output.
//!
//! This module provides the stream-capture pipeline:
//! - Line reassembly from arbitrary-sized reads
//! - Line storage with optional indented console echo
//! - Async stream readers, one per child stream
//!
//! # Example
//!
//! ```
//! use shell_capture::capture::{IndentingSink, LineBuffer};
//!
//! let mut buffer = LineBuffer::new(IndentingSink::new());
//! buffer.feed(b"first\nsec");
//! buffer.feed(b"ond");
//! let sink = buffer.finish();
//! assert_eq!(sink.contents(), "first\nsecond\n");
//! ```

mod console;
mod line_buffer;
mod reader;
mod sink;

pub(crate) use console::echo_line;
pub use console::{BufferConsole, Console, TerminalConsole};
pub use line_buffer::LineBuffer;
pub use reader::{StreamReader, READ_BUFFER_SIZE};
pub use sink::{indent_prefix, IndentingSink, MAX_INDENT};

/// Destination for completed lines.
pub trait LineSink {
    /// Receive one completed line, terminator included.
    fn append(&mut self, line: String);
}

impl LineSink for Vec<String> {
    fn append(&mut self, line: String) {
        self.push(line);
    }
}
