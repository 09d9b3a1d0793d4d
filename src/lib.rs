//! # shell-capture
//!
//! Run external programs while capturing their output live.
//!
//! Both output streams of the child are read concurrently, reassembled into
//! complete lines, optionally echoed to the console with an indentation that
//! reflects the caller's nesting depth, and returned as one string (stdout
//! lines first, then stderr lines).
//!
//! ## Features
//!
//! - **Live capture**: one async reader per stream, no output lost at exit
//! - **Indented echo**: stable per-command indent, serialized console writes
//! - **Two policies**: tolerant `run` and strict `run_strict`
//!
//! ## Quick Start
//!
//! ```no_run
//! use shell_capture::{CommandRunner, RunnerConfig};
//!
//! #[tokio::main]
//! async fn main() -> shell_capture::Result<()> {
//!     shell_capture::logging::try_init().ok();
//!
//!     let runner = CommandRunner::new(RunnerConfig {
//!         verbose: true,
//!         ..RunnerConfig::default()
//!     });
//!
//!     let listing = runner.run("ls", ["-la", "/tmp"]).await?;
//!     println!("captured {} lines", listing.lines().count());
//!
//!     let cargo = runner.nested().program("cargo");
//!     cargo.run_strict(("build", "--release")).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod logging;

// Re-export commonly used types
pub use capture::{BufferConsole, Console, IndentingSink, LineBuffer, TerminalConsole};
pub use error::{CaptureError, Result};
pub use execution::{
    Command, CommandRunner, ExecutionResult, FailureReporter, IntoArgs, Program, RunnerConfig,
};
