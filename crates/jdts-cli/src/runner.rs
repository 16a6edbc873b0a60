//! Drives reconciliation over the files of one run.
//!
//! Configuration is loaded once and shared by every file. Each file is read,
//! parsed, and reconciled independently; a file that cannot be read or parsed
//! is reported and the run continues.

use std::path::{Path, PathBuf};

use jdts_config::{ConfigLoader, JdtsConfig};
use jdts_core::{CollectingSink, ReplacementSummary, TagEvent, TracingSink};
use jdts_model::TagConfigSet;

use crate::error::{CliError, Result};

/// Outcome for one source file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub original: String,
    pub rewritten: String,
    pub replace_count: usize,
    pub summary: ReplacementSummary,
    pub events: Vec<TagEvent>,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        self.original != self.rewritten
    }
}

/// A file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: CliError,
}

/// Outcome for a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    pub fn changed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|file| file.changed())
    }

    pub fn total_replace_count(&self) -> usize {
        self.files.iter().map(|file| file.replace_count).sum()
    }

    pub fn summary(&self) -> ReplacementSummary {
        let mut total = ReplacementSummary::default();
        for file in &self.files {
            total.merge(&file.summary);
        }
        total
    }
}

/// Load the configuration from `explicit`, or from `cwd` when not given.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<JdtsConfig> {
    let loader = ConfigLoader::new();
    let config = match explicit {
        Some(path) => loader.load(&cwd.join(path))?,
        None => loader.load_from_dir(cwd)?,
    };
    if config.rules.is_empty() {
        return Err(CliError::user(
            "Configuration defines no tag rules; add at least one [[tags]] entry",
        ));
    }
    Ok(config)
}

/// Resolve `paths` against `cwd` and list the source files beneath them.
pub fn collect_sources(cwd: &Path, paths: &[PathBuf], config: &JdtsConfig) -> Result<Vec<PathBuf>> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        paths.iter().map(|path| cwd.join(path)).collect()
    };
    let extensions: Vec<&str> = config
        .source
        .extensions
        .iter()
        .map(String::as_str)
        .collect();
    Ok(jdts_fs::discover_sources(&roots, &extensions)?)
}

/// Reconcile one file in memory.
pub fn reconcile_file(rules: &TagConfigSet, path: &Path) -> Result<FileReport> {
    let original = jdts_fs::read_text(path)?;
    let model = jdts_parser::parse_source(&original)?;
    let mut sink = (TracingSink, CollectingSink::new());
    let result = jdts_core::replace(rules, &model, &mut sink)?;

    tracing::debug!(
        path = %path.display(),
        blocks = model.len(),
        replacements = result.total_replace_count,
        "Reconciled file"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        original,
        rewritten: result.rewritten_source,
        replace_count: result.total_replace_count,
        summary: result.summary,
        events: sink.1.into_events(),
    })
}

/// Reconcile every file, collecting per-file failures.
pub fn reconcile_all(config: &JdtsConfig, files: &[PathBuf]) -> RunReport {
    let mut report = RunReport::default();
    for path in files {
        match reconcile_file(&config.rules, path) {
            Ok(file) => report.files.push(file),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Skipping file");
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    report
}

/// `path` relative to `cwd` when possible, for display.
pub fn display_path(cwd: &Path, path: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}
