//! Console targets for live echo.

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Process-wide serialization point for echoed lines.
///
/// Every sink takes this lock around its console write so that a prefix
/// from one stream is never split by content from another.
static ECHO_LOCK: Mutex<()> = Mutex::new(());

/// Acquire the echo lock. A poisoned lock is still usable for output.
pub(crate) fn echo_lock() -> MutexGuard<'static, ()> {
    ECHO_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write one line to `console` under the echo lock.
pub(crate) fn echo_line(console: &dyn Console, text: &str) {
    let _guard = echo_lock();
    console.write_line(text);
}

/// A destination for echoed lines.
///
/// `write_line` receives text without a trailing newline; implementations
/// terminate the line themselves.
pub trait Console: Send + Sync {
    /// Write one line of text.
    fn write_line(&self, text: &str);
}

/// Console that writes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn write_line(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // Echo is best-effort; a closed stdout must not abort the capture.
        let _ = writeln!(stdout, "{}", text);
        let _ = stdout.flush();
    }
}

/// Console that records lines in memory.
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferConsole {
    /// Create an empty buffer console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Console for BufferConsole {
    fn write_line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(text.to_string());
    }
}
