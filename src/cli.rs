//! Command-line interface for shell-capture.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Echo the command and its live output.
    pub verbose: bool,
    /// Fail when the program exits non-zero.
    pub strict: bool,
    /// Starting indentation level.
    pub indent: Option<usize>,
    /// Search path override.
    pub search_path: Option<String>,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Program to run.
    pub program: Option<String>,
    /// Arguments passed to the program.
    pub program_args: Vec<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
///
/// Options are only recognized before the program name; everything after
/// it (or after `--`) is passed through untouched.
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('v') | Long("verbose") => {
                result.verbose = true;
            }
            Short('s') | Long("strict") => {
                result.strict = true;
            }
            Short('i') | Long("indent") => {
                let value: String = parser.value()?.parse()?;
                result.indent = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("indent", value))?,
                );
            }
            Short('P') | Long("path") => {
                result.search_path = Some(parser.value()?.parse()?);
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                result.program = Some(val.string()?);
                for rest in parser.raw_args()? {
                    result.program_args.push(
                        rest.into_string()
                            .map_err(|s| ArgsError::NonUtf8(s.to_string_lossy().into()))?,
                    );
                }
                break;
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"shell-capture {version}
Run a program, capture its output live and echo it with indentation

USAGE:
    shell-capture [OPTIONS] [--] <PROGRAM> [ARGS...]

OPTIONS:
    -v, --verbose           Echo the command line and live output
    -s, --strict            Fail when the program exits non-zero
    -i, --indent <LEVEL>    Starting indentation level [default: 0]
    -P, --path <PATH>       Search path used to find PROGRAM
    -c, --config <FILE>     Path to configuration file (JSON)
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    SHELL_CAPTURE_VERBOSE   Enable echo (1/true/yes/on)
    SHELL_CAPTURE_INDENT    Starting indentation level
    SHELL_CAPTURE_PATH      Search path (overrides PATH)
    SHELL_CAPTURE_LOG_LEVEL Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    # Capture quietly, print the combined output afterwards
    shell-capture git status --short

    # Echo live, nested two levels, fail on non-zero exit
    shell-capture -v -i 2 --strict -- cargo build --release
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("shell-capture {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Program argument that is not valid UTF-8.
    NonUtf8(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::NonUtf8(arg) => {
                write!(f, "argument is not valid UTF-8: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<OsString> {
        std::iter::once("shell-capture")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_default_args() {
        let result = parse_args_from(args(&[])).unwrap();
        assert!(!result.verbose);
        assert!(!result.strict);
        assert!(result.program.is_none());
        assert!(result.program_args.is_empty());
    }

    #[test]
    fn test_program_and_arguments() {
        let result = parse_args_from(args(&["git", "log", "-n", "3"])).unwrap();
        assert_eq!(result.program.as_deref(), Some("git"));
        assert_eq!(result.program_args, vec!["log", "-n", "3"]);
    }

    #[test]
    fn test_options_after_program_pass_through() {
        let result = parse_args_from(args(&["-v", "ls", "-v", "--strict"])).unwrap();
        assert!(result.verbose);
        assert!(!result.strict);
        assert_eq!(result.program.as_deref(), Some("ls"));
        assert_eq!(result.program_args, vec!["-v", "--strict"]);
    }

    #[test]
    fn test_double_dash_separator() {
        let result = parse_args_from(args(&["--strict", "--", "make", "all"])).unwrap();
        assert!(result.strict);
        assert_eq!(result.program.as_deref(), Some("make"));
        assert_eq!(result.program_args, vec!["all"]);
    }

    #[test]
    fn test_indent() {
        let result = parse_args_from(args(&["-i", "2", "true"])).unwrap();
        assert_eq!(result.indent, Some(2));

        let result = parse_args_from(args(&["--indent", "x"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_path_and_config() {
        let result =
            parse_args_from(args(&["-P", "/opt/bin", "-c", "/etc/capture.json", "tool"]))
                .unwrap();
        assert_eq!(result.search_path.as_deref(), Some("/opt/bin"));
        assert_eq!(result.config, Some(PathBuf::from("/etc/capture.json")));
    }

    #[test]
    fn test_help_and_version_flags() {
        assert!(parse_args_from(args(&["-h"])).unwrap().help);
        assert!(parse_args_from(args(&["--help"])).unwrap().help);
        assert!(parse_args_from(args(&["-V"])).unwrap().version);
        assert!(parse_args_from(args(&["--version"])).unwrap().version);
    }

    #[test]
    fn test_unknown_option() {
        assert!(parse_args_from(args(&["--bogus"])).is_err());
    }
}
