//! Init command implementation
//!
//! Writes a starter `jdts.toml`.

use std::path::Path;

use colored::Colorize;
use jdts_config::{STARTER_CONFIG, find_config};

use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(dir: &Path, force: bool) -> Result<()> {
    if !dir.is_dir() {
        return Err(CliError::user(format!(
            "Directory '{}' does not exist",
            dir.display()
        )));
    }

    if let Some(existing) = find_config(dir) {
        if !force {
            return Err(CliError::user(format!(
                "Configuration already exists at {}. Use --force to overwrite.",
                existing.display()
            )));
        }
        tracing::debug!(path = %existing.display(), "Overwriting existing configuration");
    }

    let path = dir.join("jdts.toml");
    jdts_fs::write_text(&path, STARTER_CONFIG)?;

    println!(
        "{} Wrote {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );
    println!("Edit the [[tags]] entries, then run {}.", "jdts check".cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_starter_config() {
        let temp = TempDir::new().unwrap();

        run_init(temp.path(), false).unwrap();

        let content = fs::read_to_string(temp.path().join("jdts.toml")).unwrap();
        assert_eq!(content, STARTER_CONFIG);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("jdts.yaml"), "tags: []\n").unwrap();

        let err = run_init(temp.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(!temp.path().join("jdts.toml").exists());
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("jdts.toml"), "# old\n").unwrap();

        run_init(temp.path(), true).unwrap();

        let content = fs::read_to_string(temp.path().join("jdts.toml")).unwrap();
        assert_eq!(content, STARTER_CONFIG);
    }

    #[test]
    fn test_init_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(run_init(&temp.path().join("nope"), false).is_err());
    }
}
