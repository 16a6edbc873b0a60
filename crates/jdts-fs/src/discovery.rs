//! Candidate source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory names never descended into.
pub const SKIPPED_DIRS: &[&str] = &["target", "build", "out", "node_modules"];

/// Default source extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["java"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

fn walk(dir: &Path, extensions: &[&str], found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            tracing::warn!("Failed to read file type of {:?}", path);
            continue;
        };

        if file_type.is_dir() {
            if !is_skipped_dir(&path) {
                walk(&path, extensions, found)?;
            }
        } else if file_type.is_file() && has_extension(&path, extensions) {
            found.push(path);
        }
    }

    Ok(())
}

/// Collect source files under `roots`, sorted and deduplicated.
///
/// A root that is itself a file is included when its extension matches.
/// Hidden directories and build output directories are skipped.
///
/// # Errors
/// Returns `Error::NotFound` if a root does not exist.
pub fn discover_sources(roots: &[PathBuf], extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for root in roots {
        if !root.exists() {
            return Err(Error::NotFound { path: root.clone() });
        }
        if root.is_file() {
            if has_extension(root, extensions) {
                found.push(root.clone());
            }
        } else {
            walk(root, extensions, &mut found)?;
        }
    }

    found.sort();
    found.dedup();
    tracing::debug!(count = found.len(), "Discovered source files");
    Ok(found)
}
