//! Output configuration.

use serde::{Deserialize, Serialize};

/// Controls how parsed lines are assembled into HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Tag of the parent element wrapping each line.
    /// Default: "p"
    #[serde(default = "default_paragraph_tag")]
    pub paragraph_tag: String,

    /// Skip lines that are empty or whitespace only.
    /// Default: true
    #[serde(default = "default_true")]
    pub skip_blank: bool,
}

fn default_paragraph_tag() -> String {
    "p".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            paragraph_tag: default_paragraph_tag(),
            skip_blank: true,
        }
    }
}

/// Partial output configuration. Only keys present in the source are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputOverride {
    pub paragraph_tag: Option<String>,
    pub skip_blank: Option<bool>,
}

impl OutputConfig {
    /// Apply the keys set in `other`, leaving the rest untouched.
    pub fn merge(&mut self, other: &OutputOverride) {
        if let Some(ref tag) = other.paragraph_tag {
            self.paragraph_tag = tag.clone();
        }
        if let Some(skip_blank) = other.skip_blank {
            self.skip_blank = skip_blank;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.paragraph_tag, "p");
        assert!(config.skip_blank);
    }

    #[test]
    fn test_partial_toml() {
        let config: OutputConfig = toml::from_str(r#"ParagraphTag = "div""#).unwrap();
        assert_eq!(config.paragraph_tag, "div");
        assert!(config.skip_blank);
    }

    #[test]
    fn test_merge() {
        let mut base = OutputConfig::default();
        base.merge(&OutputOverride {
            paragraph_tag: Some("li".into()),
            skip_blank: Some(false),
        });
        assert_eq!(base.paragraph_tag, "li");
        assert!(!base.skip_blank);
    }

    #[test]
    fn test_merge_only_present_keys() {
        let mut base = OutputConfig {
            paragraph_tag: "div".into(),
            skip_blank: true,
        };
        let other: OutputOverride = toml::from_str("SkipBlank = false").unwrap();
        base.merge(&other);
        assert_eq!(base.paragraph_tag, "div");
        assert!(!base.skip_blank);
    }
}
