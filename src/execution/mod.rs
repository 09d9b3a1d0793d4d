//! Command execution engine.
//!
//! This module provides command execution capabilities:
//! - Executable resolution on the search path
//! - Concurrent capture of stdout and stderr
//! - Tolerant and strict exit policies
//!
//! # Example
//!
//! ```no_run
//! use shell_capture::execution::{CommandRunner, RunnerConfig};
//!
//! # async fn demo() -> shell_capture::Result<()> {
//! let runner = CommandRunner::new(RunnerConfig {
//!     verbose: true,
//!     ..RunnerConfig::default()
//! });
//!
//! // Output is returned even if `make` fails; the failure is logged.
//! let log = runner.run("make", ["-k", "all"]).await?;
//!
//! // Fails with `CaptureError::CommandFailed` on a non-zero exit.
//! let version = runner.nested().run_strict("rustc", "--version").await?;
//! # Ok(())
//! # }
//! ```

mod args;
mod command;
mod program;
mod reporter;
mod resolve;
mod result;
mod runner;

pub use args::IntoArgs;
pub use command::Command;
pub use program::Program;
pub use reporter::{CommandFailure, FailureReporter, RecordingReporter, TracingReporter};
pub use resolve::{Resolver, SearchPathResolver};
pub use result::ExecutionResult;
pub use runner::{CommandRunner, RunnerConfig, DEFAULT_INDENT_WIDTH};
