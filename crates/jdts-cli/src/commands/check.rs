//! Check command implementation
//!
//! Reports files whose tags would change, without writing anything.

use std::path::Path;

use colored::Colorize;

use super::output;
use crate::cli::TargetArgs;
use crate::error::Result;
use crate::runner;

/// Run the check command
///
/// Returns `Ok(true)` when every file is already compliant.
pub fn run_check(cwd: &Path, target: &TargetArgs, json: bool) -> Result<bool> {
    let config = runner::load_config(cwd, target.config.as_deref())?;
    let files = runner::collect_sources(cwd, &target.paths, &config)?;
    let report = runner::reconcile_all(&config, &files);
    let changed = report.changed_files().count();

    if json {
        let mut json = output::json_report(cwd, &report, true);
        json["compliant"] = (changed == 0).into();
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else if changed == 0 {
        println!(
            "{} {} file(s) checked, all tags compliant.",
            "OK".green().bold(),
            report.files.len()
        );
    } else {
        println!(
            "{} {} of {} file(s) would change:",
            "DRIFT".yellow().bold(),
            changed,
            report.files.len()
        );
        output::print_changed_files(cwd, &report);
        println!();
        println!("Run {} to fix.", "jdts apply".cyan());
    }

    if !json {
        output::print_failures(cwd, &report);
    }
    match output::failure_error(&report) {
        Some(error) => Err(error),
        None => Ok(changed == 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdts_test_utils::{java, project::TestProject};

    fn target() -> TargetArgs {
        TargetArgs {
            paths: Vec::new(),
            config: None,
        }
    }

    #[test]
    fn test_check_reports_drift_without_writing() {
        let project = TestProject::new();
        project.write_config("[[tags]]\nid = \"since\"\nvalue = \"1.0\"\n");
        project.write_source("Counter.java", java::UNTAGGED_CLASS);

        assert!(!run_check(project.root(), &target(), false).unwrap());
        project.assert_file_eq("Counter.java", java::UNTAGGED_CLASS);
    }

    #[test]
    fn test_check_passes_on_compliant_tree() {
        let project = TestProject::new();
        project.write_config(
            "[[tags]]\nid = \"param\"\nvalue = \"amount\"\ndescription = \"how much to add\"\nadd_missing = false\n",
        );
        project.write_source("Counter.java", java::UNTAGGED_CLASS);

        assert!(run_check(project.root(), &target(), true).unwrap());
    }
}
