//! Format-agnostic configuration loading.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::schema::{ConfigFile, JdtsConfig};
use crate::{Error, Result};

/// File names checked, in order, when no explicit config path is given.
pub const CONFIG_FILE_NAMES: &[&str] = &["jdts.toml", "jdts.json", "jdts.yaml", "jdts.yml"];

/// Largest config file accepted.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Starter configuration written by `jdts init`.
pub const STARTER_CONFIG: &str = r#"# JDTS tag rules, applied in order to every documented element.
version = "1"

[source]
extensions = ["java"]

# Keep an @author tag on every type.
[[tags]]
id = "author"
value = "Your Name"
position = "beginning"
overwrite = "if-blank"
targets = ["class", "interface", "enum", "record", "annotation"]

# Keep @since current everywhere and in canonical order.
[[tags]]
id = "since"
value = "1.0"
position = "canonical"
overwrite = "always"
location = { mode = "compliant", remove_if_misplaced = false }
"#;

/// Locate the first known config file in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Loads JDTS configuration files.
///
/// Format is detected from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    max_size: u64,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_CONFIG_SIZE,
        }
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Load and validate the configuration at `path`.
    pub fn load(&self, path: &Path) -> Result<JdtsConfig> {
        let file: ConfigFile = self.load_as(path)?;
        let config = file.validate(path)?;
        tracing::debug!(path = %path.display(), rules = config.rules.len(), "Loaded configuration");
        Ok(config)
    }

    /// Load the first known config file in `dir`.
    pub fn load_from_dir(&self, dir: &Path) -> Result<JdtsConfig> {
        let path = find_config(dir).ok_or_else(|| Error::ConfigNotFound {
            dir: dir.to_path_buf(),
        })?;
        self.load(&path)
    }

    fn load_as<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        if size > self.max_size {
            return Err(Error::ConfigTooLarge {
                path: path.to_path_buf(),
                size,
                max: self.max_size,
            });
        }

        let content = jdts_fs::read_text(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))
            }
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
