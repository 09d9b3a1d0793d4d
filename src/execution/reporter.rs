//! Passive failure reporting for tolerant invocations.

use std::sync::Mutex;

use tracing::warn;

/// A command that exited unsuccessfully in tolerant mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// Fully expanded command line.
    pub command_line: String,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    /// Combined captured output.
    pub output: String,
}

/// Side channel that receives tolerant-mode failures.
pub trait FailureReporter: Send + Sync {
    /// Report one failure. Called exactly once per failed invocation.
    fn report(&self, failure: &CommandFailure);
}

/// Reports failures as `warn` level tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, failure: &CommandFailure) {
        match failure.exit_code {
            Some(code) => warn!(
                command = %failure.command_line,
                exit_code = code,
                "command failed"
            ),
            None => warn!(
                command = %failure.command_line,
                "command terminated by signal"
            ),
        }
    }
}

/// Records failures in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<CommandFailure>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded failure.
    pub fn failures(&self) -> Vec<CommandFailure> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of recorded failures.
    pub fn count(&self) -> usize {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, failure: &CommandFailure) {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(failure.clone());
    }
}
