//! JDTS CLI
//!
//! Reconciles Javadoc block tags across a source tree against the rules in
//! `jdts.toml`.

mod cli;
mod commands;
mod error;
mod runner;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use commands::apply::ApplyOptions;
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: tracing subscriber already installed");
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Javadoc tag synchronizer", "jdts".green().bold());
            println!();
            println!("Run {} for available commands.", "jdts --help".cyan());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn execute_command(cmd: Commands) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Init { path, force } => {
            commands::run_init(&cwd.join(path), force)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Apply {
            target,
            dry_run,
            diff,
            json,
        } => {
            let options = ApplyOptions {
                dry_run,
                diff,
                json,
            };
            commands::run_apply(&cwd, &target, options)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { target, json } => {
            let compliant = commands::run_check(&cwd, &target, json)?;
            Ok(if compliant {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
