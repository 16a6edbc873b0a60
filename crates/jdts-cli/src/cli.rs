//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// JDTS - Keep Javadoc block tags in line with a shared policy
#[derive(Parser, Debug)]
#[command(name = "jdts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Files to process and the rules to apply
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// Files or directories to process (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Configuration file (defaults to jdts.toml in the current directory)
    #[arg(short, long, env = "JDTS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a starter jdts.toml
    ///
    /// Examples:
    ///   jdts init              # In the current directory
    ///   jdts init --force      # Replace an existing configuration
    Init {
        /// Directory to write the configuration into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Reconcile doc comment tags and rewrite files
    ///
    /// Examples:
    ///   jdts apply                  # Every Java file under the current directory
    ///   jdts apply src/main/java    # One source tree
    ///   jdts apply --dry-run --diff # Preview the edits
    Apply {
        #[command(flatten)]
        target: TargetArgs,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Print a unified diff of every changed file
        #[arg(long)]
        diff: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Report files whose tags are out of date
    ///
    /// Exits with a non-zero status when any file would change.
    Check {
        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },
}
