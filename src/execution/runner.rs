//! Command execution engine.

use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::process::ExitStatus;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use super::args::IntoArgs;
use super::command::Command;
use super::program::Program;
use super::reporter::{CommandFailure, FailureReporter, TracingReporter};
use super::resolve::{Resolver, SearchPathResolver};
use super::result::ExecutionResult;
use crate::capture::{
    echo_line, indent_prefix, Console, IndentingSink, StreamReader, TerminalConsole,
    READ_BUFFER_SIZE,
};
use crate::error::CaptureError;
use crate::Result;

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Settings captured when a runner is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Echo the command line and live output to the console.
    pub verbose: bool,
    /// Nesting depth used for the echo indent.
    pub indent_level: usize,
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Chunk size for stream reads.
    pub read_buffer_size: usize,
    /// Search path override (same syntax as `PATH`).
    pub search_path: Option<OsString>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            indent_level: 0,
            indent_width: DEFAULT_INDENT_WIDTH,
            read_buffer_size: READ_BUFFER_SIZE,
            search_path: None,
        }
    }
}

/// Runs external executables and captures their combined output.
///
/// Each invocation spawns one reader task per output stream. Both readers
/// are joined before the output is read back, so no line is lost even when
/// the process exits before its streams are drained.
#[derive(Clone)]
pub struct CommandRunner {
    config: RunnerConfig,
    resolver: Arc<dyn Resolver>,
    console: Arc<dyn Console>,
    reporter: Arc<dyn FailureReporter>,
}

impl CommandRunner {
    /// Create a runner that resolves against `PATH` (or the configured
    /// search path), echoes to stdout when verbose and reports tolerant
    /// failures through tracing.
    pub fn new(config: RunnerConfig) -> Self {
        let resolver: Arc<dyn Resolver> = match &config.search_path {
            Some(path) => Arc::new(SearchPathResolver::with_search_path(path.clone())),
            None => Arc::new(SearchPathResolver::new()),
        };

        Self {
            config,
            resolver,
            console: Arc::new(TerminalConsole),
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Replace the executable resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the console used for verbose echo.
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// Replace the tolerant-mode failure reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// A runner one indentation level deeper, sharing every collaborator.
    pub fn nested(&self) -> Self {
        let mut runner = self.clone();
        runner.config.indent_level += 1;
        runner
    }

    /// Settings this runner was built with.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Indentation prefix for this runner's level.
    pub fn indent(&self) -> String {
        indent_prefix(self.config.indent_level, self.config.indent_width)
    }

    /// Handle bound to one executable name.
    pub fn program(&self, name: impl Into<String>) -> Program {
        Program::new(self.clone(), name)
    }

    /// Resolve `name` and build the command to run.
    pub fn command(&self, name: &str, args: impl IntoArgs) -> Result<Command> {
        let executable = self
            .resolver
            .resolve(name)
            .ok_or_else(|| CaptureError::Resolution {
                name: name.to_string(),
            })?;
        Ok(Command::new(executable, args.into_args()))
    }

    /// Tolerant invocation: returns the combined output whatever the exit
    /// status. A non-zero exit is reported once through the failure reporter.
    pub async fn run(&self, name: &str, args: impl IntoArgs) -> Result<String> {
        let result = self.execute(name, args).await?;

        if !result.success() {
            self.reporter.report(&CommandFailure {
                command_line: result.command_line.clone(),
                exit_code: result.exit_code,
                output: result.combined_output.clone(),
            });
        }

        Ok(result.into_output())
    }

    /// Strict invocation: a non-zero exit fails with
    /// [`CaptureError::CommandFailed`] carrying the command line and output.
    pub async fn run_strict(&self, name: &str, args: impl IntoArgs) -> Result<String> {
        let result = self.execute(name, args).await?;

        if result.success() {
            Ok(result.into_output())
        } else {
            Err(CaptureError::CommandFailed {
                command_line: result.command_line,
                exit_code: result.exit_code,
                output: result.combined_output,
            })
        }
    }

    /// Resolve, spawn and capture without applying any exit policy.
    pub async fn execute(&self, name: &str, args: impl IntoArgs) -> Result<ExecutionResult> {
        let command = self.command(name, args)?;
        self.execute_command(&command).await
    }

    /// Spawn an already resolved command and capture its output.
    pub async fn execute_command(&self, command: &Command) -> Result<ExecutionResult> {
        let start = Instant::now();
        let command_line = command.command_line();
        let indent = self.indent();

        if self.config.verbose {
            echo_line(self.console.as_ref(), &format!("{}$ {}", indent, command_line));
        }

        debug!(command = %command_line, "spawning");
        let mut child = command
            .to_process()
            .spawn()
            .map_err(|source| CaptureError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| CaptureError::ReaderFailed("stdout was not piped".into()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| CaptureError::ReaderFailed("stderr was not piped".into()))?;

        let stdout_reader = tokio::spawn(
            StreamReader::new(stdout, self.sink(&indent), "stdout")
                .with_buffer_size(self.config.read_buffer_size)
                .run(),
        );
        let stderr_reader = tokio::spawn(
            StreamReader::new(stderr, self.sink(&indent), "stderr")
                .with_buffer_size(self.config.read_buffer_size)
                .run(),
        );

        let (status, stdout_sink, stderr_sink) =
            join_readers(child.wait(), stdout_reader, stderr_reader).await?;
        debug!(command = %command_line, %status, "process exited");

        let mut combined = stdout_sink.contents();
        combined.push_str(&stderr_sink.contents());

        Ok(ExecutionResult::new(command_line, combined, start.elapsed()).with_status(status))
    }

    fn sink(&self, indent: &str) -> IndentingSink {
        if self.config.verbose {
            IndentingSink::with_echo(self.console.clone(), indent)
        } else {
            IndentingSink::new()
        }
    }
}

/// Wait for the child to exit, then collect both reader tasks.
///
/// Both readers are always awaited before returning. If waiting on the child
/// fails they are aborted first, so no reader outlives the invocation.
async fn join_readers<W, T>(
    wait: W,
    stdout: JoinHandle<T>,
    stderr: JoinHandle<T>,
) -> Result<(ExitStatus, T, T)>
where
    W: Future<Output = io::Result<ExitStatus>>,
{
    let status = match wait.await {
        Ok(status) => status,
        Err(e) => {
            stdout.abort();
            stderr.abort();
            let _ = stdout.await;
            let _ = stderr.await;
            return Err(CaptureError::Io(e));
        }
    };

    let stdout = stdout.await;
    let stderr = stderr.await;
    Ok((
        status,
        stdout.map_err(reader_failed)?,
        stderr.map_err(reader_failed)?,
    ))
}

fn reader_failed(e: JoinError) -> CaptureError {
    CaptureError::ReaderFailed(e.to_string())
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
