//! Apply command implementation
//!
//! Reconciles every source file and writes back the ones that changed.

use std::path::Path;

use colored::Colorize;

use super::output;
use crate::cli::TargetArgs;
use crate::error::Result;
use crate::runner;

/// Options for the apply command
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub dry_run: bool,
    pub diff: bool,
    pub json: bool,
}

/// Run the apply command
pub fn run_apply(cwd: &Path, target: &TargetArgs, options: ApplyOptions) -> Result<()> {
    let config = runner::load_config(cwd, target.config.as_deref())?;
    let files = runner::collect_sources(cwd, &target.paths, &config)?;

    if !options.json {
        println!(
            "{} Reconciling {} file(s) against {} rule(s){}",
            "=>".blue().bold(),
            files.len(),
            config.rules.len(),
            if options.dry_run { " (dry run)" } else { "" }
        );
    }

    let report = runner::reconcile_all(&config, &files);

    if !options.dry_run {
        for file in report.changed_files() {
            jdts_fs::write_text(&file.path, &file.rewritten)?;
            tracing::info!(
                path = %file.path.display(),
                replacements = file.replace_count,
                "Updated file"
            );
        }
    }

    if options.json {
        let json = output::json_report(cwd, &report, options.dry_run);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        output::print_changed_files(cwd, &report);
        if options.diff {
            for file in report.changed_files() {
                println!();
                output::print_diff(cwd, file);
            }
        }
        output::print_failures(cwd, &report);

        let changed = report.changed_files().count();
        let verb = if options.dry_run { "would be updated" } else { "updated" };
        println!(
            "{} {} file(s) {}, {} tag replacement(s)",
            "OK".green().bold(),
            changed,
            verb,
            report.total_replace_count()
        );
    }

    match output::failure_error(&report) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
