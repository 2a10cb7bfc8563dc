use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use doclint::cli::{Cli, Command};
use doclint::engine::FsEngine;
use doclint::run::run_lint;

/// Diagnostics go to stderr; stdout is reserved for the report. `--debug`
/// raises the default level, RUST_LOG still wins when set.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "doclint=debug" } else { "doclint=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Lint(args) => {
            init_tracing(args.debug);

            let engine = FsEngine::new(args.md_type);
            let stdout = io::stdout();
            match run_lint(&args, &engine, &mut stdout.lock()) {
                Ok(code) => ExitCode::from(code),
                Err(err) => {
                    eprintln!("Error: {}", err);
                    ExitCode::from(err.exit_code())
                }
            }
        }
    }
}
