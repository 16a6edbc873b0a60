//! Shared report rendering for apply and check.

use std::path::Path;

use colored::Colorize;
use jdts_core::ReplacementSummary;
use serde_json::{Value, json};
use similar::TextDiff;

use crate::error::CliError;
use crate::runner::{FileReport, RunReport, display_path};

/// Non-zero edit counters, e.g. `2 added, 1 replaced`.
pub fn describe(summary: &ReplacementSummary) -> String {
    let parts: Vec<String> = [
        (summary.added, "added"),
        (summary.replaced, "replaced"),
        (summary.repositioned, "repositioned"),
        (summary.removed, "removed"),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{count} {label}"))
    .collect();

    if parts.is_empty() {
        "no edits".to_string()
    } else {
        parts.join(", ")
    }
}

/// One line per changed file.
pub fn print_changed_files(cwd: &Path, report: &RunReport) {
    for file in report.changed_files() {
        println!(
            "  {} {} ({})",
            "~".yellow(),
            display_path(cwd, &file.path).yellow(),
            describe(&file.summary)
        );
    }
}

/// Unified diff of one file, colored.
pub fn print_diff(cwd: &Path, file: &FileReport) {
    let name = display_path(cwd, &file.path);
    let unified = TextDiff::from_lines(&file.original, &file.rewritten)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string();

    for line in unified.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_failures(cwd: &Path, report: &RunReport) {
    if report.failures.is_empty() {
        return;
    }
    println!();
    println!("{}", "Errors:".red().bold());
    for failure in &report.failures {
        println!(
            "  {} {}: {}",
            "!".red(),
            display_path(cwd, &failure.path),
            failure.error
        );
    }
}

/// Error to return when some files could not be processed.
pub fn failure_error(report: &RunReport) -> Option<CliError> {
    match report.failures.len() {
        0 => None,
        n => Some(CliError::user(format!("{n} file(s) could not be processed"))),
    }
}

/// Machine-readable report.
pub fn json_report(cwd: &Path, report: &RunReport, dry_run: bool) -> Value {
    json!({
        "dry_run": dry_run,
        "files_checked": report.files.len(),
        "changed_files": report.changed_files().count(),
        "total_replace_count": report.total_replace_count(),
        "summary": report.summary(),
        "files": report.files.iter()
            .map(|file| json!({
                "path": display_path(cwd, &file.path),
                "changed": file.changed(),
                "replace_count": file.replace_count,
                "summary": file.summary,
                "events": file.events,
            }))
            .collect::<Vec<_>>(),
        "failures": report.failures.iter()
            .map(|failure| json!({
                "path": display_path(cwd, &failure.path),
                "error": failure.error.to_string(),
            }))
            .collect::<Vec<_>>(),
    })
}
