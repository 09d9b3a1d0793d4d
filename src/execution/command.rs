//! Command representation.

use std::fmt;
use std::path::{Path, PathBuf};

/// A resolved executable plus its argument list.
///
/// Immutable once built; created per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    executable: PathBuf,
    arguments: Vec<String>,
}

impl Command {
    /// Create a new command for a resolved executable.
    pub fn new(executable: impl Into<PathBuf>, arguments: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            arguments,
        }
    }

    /// Absolute path of the executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Ordered argument list.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The fully expanded command line, for echo and error messages.
    ///
    /// Arguments containing whitespace or quotes are single-quoted.
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.to_string_lossy().into_owned())
            .chain(self.arguments.iter().map(|arg| quote(arg)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build a tokio process command with stdin closed and both output
    /// streams piped.
    pub(crate) fn to_process(&self) -> tokio::process::Command {
        let mut process = tokio::process::Command::new(&self.executable);
        process
            .args(&self.arguments)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());
        process
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn quote(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');
    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}
