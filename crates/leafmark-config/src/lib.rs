//! Leafmark Config
//!
//! This crate handles configuration loading and management
//! for leafmark, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/leafmark/config.toml`
//! - macOS: `~/Library/Application Support/leafmark/config.toml`
//! - Windows: `%APPDATA%\leafmark\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use leafmark_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod inline;
mod output;

pub use inline::{InlineConfig, InlineOverride};
pub use output::{OutputConfig, OutputOverride};

use leafmark_core::{LeafmarkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[inline]
Delimiters = [
    { Delimiter = "`", Kind = "code" },
    { Delimiter = "**", Kind = "bold" },
    { Delimiter = "_", Kind = "italic" },
]

[output]
ParagraphTag = "p"
SkipBlank    = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inline parsing rules
    #[serde(default)]
    pub inline: InlineConfig,

    /// Output assembly options
    #[serde(default)]
    pub output: OutputConfig,
}

/// A partial configuration layered over a [`Config`].
///
/// Sections and keys missing from the override source stay unset, so
/// merging only touches what the override actually names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub inline: InlineOverride,

    #[serde(default)]
    pub output: OutputOverride,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use leafmark_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[inline]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "leafmark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LeafmarkError::Config(format!("Parse error in {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat `override_config` as inline TOML and merge that
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leafmark_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[output]\nParagraphTag = \"li\"")).unwrap();
    /// assert_eq!(config.output.paragraph_tag, "li");
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse an override that is either a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| LeafmarkError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys set in `other` take precedence; everything else keeps its
    /// current value.
    ///
    /// # Example
    ///
    /// ```
    /// use leafmark_config::{Config, ConfigOverride};
    ///
    /// let mut base = Config::default();
    /// base.output.paragraph_tag = "li".to_string();
    /// let override_config: ConfigOverride = toml::from_str(r#"
    ///     [output]
    ///     SkipBlank = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.output.skip_blank);
    /// assert_eq!(base.output.paragraph_tag, "li");
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.inline.merge(&other.inline);
        self.output.merge(&other.output);
    }

    /// Check values that parse but cannot produce usable output.
    pub fn validate(&self) -> Result<()> {
        if self.output.paragraph_tag.trim().is_empty() {
            return Err(LeafmarkError::Config("ParagraphTag must not be empty".into()));
        }
        if let Some(rule) = self.inline.delimiters.iter().find(|r| r.delimiter.is_empty()) {
            return Err(LeafmarkError::Config(format!(
                "empty delimiter for kind {}",
                rule.kind
            )));
        }
        Ok(())
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| LeafmarkError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
