//! Per-executable invocation handle.

use super::args::IntoArgs;
use super::runner::CommandRunner;
use crate::Result;

/// A [`CommandRunner`] bound to one executable name.
///
/// ```no_run
/// use shell_capture::CommandRunner;
///
/// # async fn demo() -> shell_capture::Result<()> {
/// let git = CommandRunner::default().program("git");
/// let status = git.run(("status", "--short")).await?;
/// let head = git.run_strict(["rev-parse", "HEAD"]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Program {
    runner: CommandRunner,
    name: String,
}

impl Program {
    /// Bind `name` to `runner`.
    pub fn new(runner: CommandRunner, name: impl Into<String>) -> Self {
        Self {
            runner,
            name: name.into(),
        }
    }

    /// Executable name, as looked up on each call.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tolerant invocation, see [`CommandRunner::run`].
    pub async fn run(&self, args: impl IntoArgs) -> Result<String> {
        self.runner.run(&self.name, args).await
    }

    /// Strict invocation, see [`CommandRunner::run_strict`].
    pub async fn run_strict(&self, args: impl IntoArgs) -> Result<String> {
        self.runner.run_strict(&self.name, args).await
    }

    /// The same program one indentation level deeper.
    pub fn nested(&self) -> Self {
        Self {
            runner: self.runner.nested(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaptureError;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_program_name() {
        let program = CommandRunner::default().program("git");
        assert_eq!(program.name(), "git");
        assert_eq!(program.nested().name(), "git");
    }

    #[test]
    fn test_unresolvable_program_fails_both_modes() {
        let program = CommandRunner::default().program("shell-capture-missing-tool");

        let err = assert_err!(tokio_test::block_on(program.run(("a", ["b", "c"]))));
        assert!(matches!(err, CaptureError::Resolution { .. }));

        let err = assert_err!(tokio_test::block_on(program.run_strict(())));
        assert!(matches!(err, CaptureError::Resolution { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_program_flattens_arguments() {
        let echo = CommandRunner::default().program("echo");
        let output = assert_ok!(tokio_test::block_on(
            echo.run_strict(("one", vec!["two", "three"], Some(4)))
        ));
        assert_eq!(output, "one two three 4\n");
    }
}
