//! Async reader that drains one child stream into a line buffer.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, trace, warn};

use super::{LineBuffer, LineSink};

/// Default buffer size for reading child output.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Reads one stream to end-of-stream, feeding every chunk through a
/// [`LineBuffer`] and returning the sink once the stream is drained.
pub struct StreamReader<R, S> {
    reader: R,
    buffer: LineBuffer<S>,
    label: &'static str,
    buffer_size: usize,
}

impl<R, S> StreamReader<R, S>
where
    R: AsyncRead + Unpin,
    S: LineSink,
{
    /// Create a new StreamReader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The child stream.
    /// * `sink` - Destination for completed lines.
    /// * `label` - Stream name used in log records (`stdout`, `stderr`).
    pub fn new(reader: R, sink: S, label: &'static str) -> Self {
        Self {
            reader,
            buffer: LineBuffer::new(sink),
            label,
            buffer_size: READ_BUFFER_SIZE,
        }
    }

    /// Create with custom buffer size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Run the read loop until end-of-stream.
    ///
    /// A read error ends the loop like end-of-stream does: whatever was
    /// buffered is still flushed, and the child's exit status remains the
    /// authoritative failure signal.
    pub async fn run(self) -> S {
        let label = self.label;
        let mut reader = self.reader;
        let mut buffer = self.buffer;
        let mut chunk = vec![0u8; self.buffer_size];

        loop {
            match reader.read(&mut chunk).await {
                Ok(0) => {
                    debug!("{} reader: EOF", label);
                    break;
                }
                Ok(n) => {
                    trace!("{} reader: read {} bytes", label, n);
                    buffer.feed(&chunk[..n]);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("{} reader error: {}", label, e);
                    break;
                }
            }
        }

        buffer.finish()
    }
}
