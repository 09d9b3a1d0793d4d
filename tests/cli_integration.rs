//! CLI integration tests.
//!
//! These tests verify the CLI argument parsing and configuration loading.

use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

use shell_capture::cli::{parse_args_from, Args};
use shell_capture::config::{Config, ConfigError};

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("shell-capture")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(!result.verbose);
    assert!(!result.strict);
    assert!(result.indent.is_none());
    assert!(result.config.is_none());
    assert!(result.search_path.is_none());
    assert!(result.program.is_none());
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "-v",
        "--strict",
        "-i",
        "3",
        "-P",
        "/opt/tools/bin",
        "-l",
        "debug",
        "--",
        "cargo",
        "test",
        "--",
        "--nocapture",
    ]))
    .unwrap();

    assert!(result.verbose);
    assert!(result.strict);
    assert_eq!(result.indent, Some(3));
    assert_eq!(result.search_path.as_deref(), Some("/opt/tools/bin"));
    assert_eq!(result.log_level, Some("debug".to_string()));
    assert_eq!(result.program.as_deref(), Some("cargo"));
    assert_eq!(result.program_args, vec!["test", "--", "--nocapture"]);
}

#[test]
fn test_cli_invalid_indent() {
    let result = parse_args_from(args(&["-i", "deep", "ls"]));
    assert!(result.is_err());
}

#[test]
fn test_cli_missing_option_value() {
    let result = parse_args_from(args(&["--config"]));
    assert!(result.is_err());
}

// ============================================================================
// Configuration Loading Tests
// ============================================================================

#[test]
fn test_config_from_json_file() {
    let json = r#"{
        "output": {
            "verbose": true,
            "indent_level": 1,
            "indent_width": 4
        },
        "execution": {
            "search_path": "/usr/local/bin:/usr/bin",
            "read_buffer_size": 1024
        },
        "logging": {
            "level": "debug"
        }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert!(config.output.verbose);
    assert_eq!(config.output.indent_level, 1);
    assert_eq!(config.output.indent_width, 4);
    assert_eq!(
        config.execution.search_path.as_deref(),
        Some("/usr/local/bin:/usr/bin")
    );
    assert_eq!(config.execution.read_buffer_size, 1024);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_priority_cli_over_file() {
    let json = r#"{
        "output": {
            "indent_level": 5
        },
        "execution": {
            "search_path": "/from/file"
        }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let args = Args {
        indent: Some(1),
        search_path: Some("/from/cli".to_string()),
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let config = Config::load(&args).unwrap();

    assert_eq!(config.output.indent_level, 1);
    assert_eq!(config.execution.search_path.as_deref(), Some("/from/cli"));
}

#[test]
fn test_config_verbose_flag_enables_echo() {
    let args = Args {
        verbose: true,
        ..Args::default()
    };

    let config = Config::load(&args).unwrap();
    assert!(config.output.verbose);
    assert!(config.runner_config().verbose);
}

#[test]
fn test_config_missing_file() {
    let args = Args {
        config: Some("/nonexistent/shell-capture.json".into()),
        ..Args::default()
    };

    let err = Config::load(&args).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_config_zero_buffer_rejected_on_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"execution": {"read_buffer_size": 0}}"#)
        .unwrap();

    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    assert!(matches!(
        Config::load(&args),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_config_oversized_indent_rejected_on_load() {
    let huge = (usize::MAX / 2 + 1).to_string();
    let parsed = parse_args_from(args(&["-i", &huge, "echo"])).unwrap();

    assert!(matches!(
        Config::load(&parsed),
        Err(ConfigError::Invalid(_))
    ));
}

// ============================================================================
// Configuration Serialization Tests
// ============================================================================

#[test]
fn test_config_roundtrip() {
    let original = Config::default();
    let json = serde_json::to_string(&original).unwrap();
    let loaded: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(original.output.indent_width, loaded.output.indent_width);
    assert_eq!(
        original.execution.read_buffer_size,
        loaded.execution.read_buffer_size
    );
}

#[test]
fn test_config_partial_deserialization() {
    let json = r#"{"output": {"indent_level": 2}}"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.output.indent_level, 2);
    assert_eq!(config.output.indent_width, 2); // Default
    assert!(!config.output.verbose); // Default
    assert_eq!(config.execution.read_buffer_size, 4096); // Default
}
