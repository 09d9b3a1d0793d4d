//! Error types for shell-capture.

use thiserror::Error;

/// Main error type for shell-capture operations.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Executable was not found on the search path.
    #[error("executable not found on search path: {name}")]
    Resolution { name: String },

    /// Process could not be created despite a resolved path.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process ran and exited with a failure status (strict mode only).
    #[error("command `{command_line}` failed with {}\n{output}", describe_exit(.exit_code))]
    CommandFailed {
        command_line: String,
        exit_code: Option<i32>,
        output: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stream reader task did not complete.
    #[error("output reader failed: {0}")]
    ReaderFailed(String),
}

impl CaptureError {
    /// Captured output carried by a failed command, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "termination by signal".to_string(),
    }
}

/// Convenience Result type for shell-capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_display() {
        let err = CaptureError::Resolution {
            name: "no-such-tool".into(),
        };
        assert!(err.to_string().contains("no-such-tool"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_spawn_display() {
        let err = CaptureError::Spawn {
            command: "/bin/locked".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/bin/locked"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_command_failed_display() {
        let err = CaptureError::CommandFailed {
            command_line: "/usr/bin/git status --short".into(),
            exit_code: Some(128),
            output: "fatal: not a git repository\n".into(),
        };
        let message = err.to_string();
        assert!(message.contains("/usr/bin/git status --short"));
        assert!(message.contains("fatal: not a git repository"));
        assert!(message.contains("exit code 128"));
        assert_eq!(err.output(), Some("fatal: not a git repository\n"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CaptureError = io_err.into();
        assert!(matches!(err, CaptureError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
        assert!(err.output().is_none());
    }

    #[test]
    fn test_signal_termination_display() {
        let err = CaptureError::CommandFailed {
            command_line: "/bin/sleep 100".into(),
            exit_code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("signal"));
    }
}
