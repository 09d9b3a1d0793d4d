//! Reassembly of arbitrary-sized reads into complete lines.

use super::LineSink;

/// Accumulates chunks from one stream and forwards completed lines to a sink.
///
/// Completed lines keep their `\n` terminator. Bytes are only decoded once a
/// line is complete, so multi-byte characters split across reads survive.
#[derive(Debug)]
pub struct LineBuffer<S> {
    partial: Vec<u8>,
    sink: S,
}

impl<S: LineSink> LineBuffer<S> {
    /// Create an empty buffer that emits into `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            partial: Vec::new(),
            sink,
        }
    }

    /// Append a chunk and emit every line it completes, in order.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.partial.extend_from_slice(chunk);

        let mut start = 0;
        while let Some(offset) = self.partial[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset + 1;
            let line = String::from_utf8_lossy(&self.partial[start..end]).into_owned();
            self.sink.append(line);
            start = end;
        }

        if start > 0 {
            self.partial.drain(..start);
        }
    }

    /// Bytes held back waiting for a newline.
    pub fn pending(&self) -> usize {
        self.partial.len()
    }

    /// Flush the trailing partial line (newline added) and hand back the sink.
    ///
    /// An empty accumulator emits nothing.
    pub fn finish(mut self) -> S {
        if !self.partial.is_empty() {
            let mut line = String::from_utf8_lossy(&self.partial).into_owned();
            line.push('\n');
            self.sink.append(line);
            self.partial.clear();
        }
        self.sink
    }
}
