//! Configuration file schema and validation.

use std::path::Path;

use jdts_model::{TagConfigSet, TagRule};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

fn default_version() -> String {
    "1".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

/// Which files the coordinator visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

/// On-disk configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub tags: Vec<TagRule>,
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdtsConfig {
    pub source: SourceSettings,
    pub rules: TagConfigSet,
}

impl ConfigFile {
    /// Validate rules and build the run configuration.
    ///
    /// Tag ids lose a leading `@`; empty ids or ids containing whitespace are rejected.
    pub fn validate(self, path: &Path) -> Result<JdtsConfig> {
        let invalid = |message: String| Error::InvalidConfig {
            path: path.to_path_buf(),
            message,
        };

        if self.version != "1" {
            return Err(invalid(format!("unsupported version '{}'", self.version)));
        }
        if self.source.extensions.is_empty() {
            return Err(invalid("source.extensions must not be empty".to_string()));
        }

        let mut rules = Vec::with_capacity(self.tags.len());
        for (index, mut rule) in self.tags.into_iter().enumerate() {
            let id = rule.tag_id.trim().trim_start_matches('@').to_string();
            if id.is_empty() {
                return Err(invalid(format!("tags[{index}] has an empty id")));
            }
            if id.chars().any(char::is_whitespace) {
                return Err(invalid(format!("tags[{index}] id '{id}' contains whitespace")));
            }
            rule.tag_id = id;
            rules.push(rule);
        }

        if rules.is_empty() {
            tracing::warn!(path = %path.display(), "Configuration defines no tag rules");
        }

        Ok(JdtsConfig {
            source: self.source,
            rules: TagConfigSet::new(rules),
        })
    }
}
