//! Line storage with optional indented echo.

use std::fmt;
use std::sync::Arc;

use super::console::{echo_lock, Console};
use super::LineSink;

/// Widest indentation prefix, in columns.
pub const MAX_INDENT: usize = 256;

/// Build the indentation prefix for a nesting level, capped at [`MAX_INDENT`].
pub fn indent_prefix(level: usize, width: usize) -> String {
    " ".repeat(level.saturating_mul(width).min(MAX_INDENT))
}

struct Echo {
    console: Arc<dyn Console>,
    indent: String,
}

/// Stores every line it receives and, when attached to a console, echoes
/// each one prefixed with an indent fixed at construction.
pub struct IndentingSink {
    lines: Vec<String>,
    echo: Option<Echo>,
}

impl IndentingSink {
    /// Create a sink that only accumulates.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            echo: None,
        }
    }

    /// Create a sink that also echoes to `console` with the given prefix.
    pub fn with_echo(console: Arc<dyn Console>, indent: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            echo: Some(Echo {
                console,
                indent: indent.into(),
            }),
        }
    }

    /// Store a line, echoing it if a console is attached.
    pub fn append(&mut self, line: String) {
        // Held until the line is stored so echo and append form one step.
        let _guard = self.echo.as_ref().map(|echo| {
            let text = line.strip_suffix('\n').unwrap_or(&line);
            let text = text.strip_suffix('\r').unwrap_or(text);
            let guard = echo_lock();
            echo.console.write_line(&format!("{}{}", echo.indent, text));
            guard
        });
        self.lines.push(line);
    }

    /// All stored lines, concatenated in arrival order.
    ///
    /// Each line carries its own terminator, which acts as the separator.
    pub fn contents(&self) -> String {
        self.lines.concat()
    }

    /// Indent prefix used for echo, if echoing.
    pub fn indent(&self) -> Option<&str> {
        self.echo.as_ref().map(|e| e.indent.as_str())
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line has been stored.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for IndentingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IndentingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndentingSink")
            .field("lines", &self.lines.len())
            .field("indent", &self.indent())
            .finish()
    }
}

impl LineSink for IndentingSink {
    fn append(&mut self, line: String) {
        IndentingSink::append(self, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::BufferConsole;

    #[test]
    fn test_indent_prefix() {
        assert_eq!(indent_prefix(0, 2), "");
        assert_eq!(indent_prefix(1, 2), "  ");
        assert_eq!(indent_prefix(3, 4).len(), 12);
    }

    #[test]
    fn test_indent_prefix_capped() {
        assert_eq!(indent_prefix(usize::MAX / 2 + 1, 2).len(), MAX_INDENT);
        assert_eq!(indent_prefix(100_000_000_000, 2).len(), MAX_INDENT);
    }

    #[test]
    fn test_append_without_console() {
        let mut sink = IndentingSink::new();
        sink.append("x\n".to_string());
        sink.append("y\n".to_string());
        assert_eq!(sink.contents(), "x\ny\n");
        assert_eq!(sink.len(), 2);
        assert!(sink.indent().is_none());
    }

    #[test]
    fn test_append_echoes_with_indent() {
        let console = Arc::new(BufferConsole::new());
        let mut sink = IndentingSink::with_echo(console.clone(), "  ");

        sink.append("x".to_string());

        assert_eq!(console.lines(), vec!["  x"]);
        assert!(sink.contents().contains('x'));
    }

    #[test]
    fn test_echo_strips_terminator() {
        let console = Arc::new(BufferConsole::new());
        let mut sink = IndentingSink::with_echo(console.clone(), "    ");

        sink.append("windows line\r\n".to_string());
        sink.append("unix line\n".to_string());

        assert_eq!(console.lines(), vec!["    windows line", "    unix line"]);
        assert_eq!(sink.contents(), "windows line\r\nunix line\n");
    }

    #[test]
    fn test_contents_is_repeatable() {
        let mut sink = IndentingSink::new();
        assert_eq!(sink.contents(), "");
        sink.append("a\n".to_string());
        assert_eq!(sink.contents(), "a\n");
        assert_eq!(sink.contents(), "a\n");
    }

    #[test]
    fn test_concurrent_sinks_never_interleave_prefix() {
        let console = Arc::new(BufferConsole::new());

        let handles: Vec<_> = ["out", "err"]
            .into_iter()
            .map(|name| {
                let console = console.clone();
                std::thread::spawn(move || {
                    let mut sink = IndentingSink::with_echo(console, "  ");
                    for i in 0..200 {
                        sink.append(format!("{name}-{i}\n"));
                    }
                    sink
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 200);
        }

        let lines = console.lines();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.starts_with("  out-") || line.starts_with("  err-"));
        }
    }
}
