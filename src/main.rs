//! shell-capture binary entry point.

use std::process::ExitCode;

use shell_capture::cli::{self, Args};
use shell_capture::config::Config;
use shell_capture::{logging, CommandRunner};
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'shell-capture --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    logging::try_init_with_filter(config.log_filter()).ok();
    debug!("shell-capture v{}", env!("CARGO_PKG_VERSION"));

    run(&args, &config).await
}

async fn run(args: &Args, config: &Config) -> ExitCode {
    let Some(program) = args.program.as_deref() else {
        eprintln!("error: no program given");
        eprintln!("Try 'shell-capture --help' for more information.");
        return ExitCode::from(2);
    };

    let runner = CommandRunner::new(config.runner_config());
    let result = if args.strict {
        runner.run_strict(program, &args.program_args).await
    } else {
        runner.run(program, &args.program_args).await
    };

    match result {
        Ok(output) => {
            // Verbose mode already echoed every line live.
            if !config.output.verbose {
                print!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
