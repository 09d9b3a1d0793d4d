//! Execution result types.

use std::time::Duration;

/// Result of one command invocation.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Fully expanded command line.
    pub command_line: String,
    /// Stdout lines followed by stderr lines.
    pub combined_output: String,
    /// Whether the process exited successfully.
    pub exit_success: bool,
    /// Exit code (if the process exited normally).
    pub exit_code: Option<i32>,
    /// Execution duration.
    pub duration: Duration,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(command_line: impl Into<String>, combined_output: String, duration: Duration) -> Self {
        Self {
            command_line: command_line.into(),
            combined_output,
            exit_success: false,
            exit_code: None,
            duration,
        }
    }

    /// Record the exit status.
    pub fn with_status(mut self, status: std::process::ExitStatus) -> Self {
        self.exit_success = status.success();
        self.exit_code = status.code();
        self
    }

    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.exit_success
    }

    /// Consume the result, keeping only the output.
    pub fn into_output(self) -> String {
        self.combined_output
    }
}
