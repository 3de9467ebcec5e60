//! CLI configuration
//!
//! Read from a TOML file given by `--config` or `KDICT_CONFIG`; every field
//! is optional and falls back to [`CliConfig::default`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use kdict_document::{Format, TemplateKind, DEFAULT_ID_LENGTH};
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "KDICT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Template for `new` when none is given
    pub default_template: String,
    /// Format used when a path has no recognizable extension
    pub default_format: String,
    /// JSON indentation width
    pub indent: usize,
    /// Write JSON on a single line, ignoring `indent`
    pub compact: bool,
    /// Length of generated record identifiers
    pub id_length: usize,
}

impl CliConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_default_template(mut self, template: TemplateKind) -> Self {
        self.default_template = template.to_string();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format.to_string();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        match indent {
            Some(width) => {
                self.indent = width;
                self.compact = false;
            }
            None => self.compact = true,
        }
        self
    }

    /// Load from `path`, or from `KDICT_CONFIG`, or fall back to defaults
    ///
    /// # Errors
    /// Returns error if a named file cannot be read or is not valid config TOML
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let Some(path) = path else {
            tracing::debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse config TOML
    ///
    /// # Errors
    /// Returns error on invalid TOML or unknown keys
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Configured default template
    ///
    /// # Errors
    /// Returns error if the configured name is not registered
    pub fn template(&self) -> anyhow::Result<TemplateKind> {
        Ok(self.default_template.parse()?)
    }

    /// Configured default format
    ///
    /// # Errors
    /// Returns error if the configured name is not `json` or `yaml`
    pub fn format(&self) -> anyhow::Result<Format> {
        Ok(self.default_format.parse()?)
    }

    /// JSON indentation, `None` for compact output
    #[must_use]
    pub fn indent(&self) -> Option<usize> {
        (!self.compact).then_some(self.indent)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_template: TemplateKind::Knowledge.to_string(),
            default_format: Format::Json.to_string(),
            indent: 2,
            compact: false,
            id_length: DEFAULT_ID_LENGTH,
        }
    }
}
