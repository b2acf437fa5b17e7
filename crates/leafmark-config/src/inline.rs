//! Inline parsing configuration.
//!
//! This module contains the `InlineConfig` struct which holds the
//! ordered delimiter rules handed to the inline parser, and its partial
//! counterpart `InlineOverride`.

use leafmark_core::DelimiterRule;
use serde::{Deserialize, Serialize};

/// Inline parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InlineConfig {
    /// Delimiter rules, applied in order.
    /// Default: `` ` `` code, `**` bold, `_` italic
    #[serde(default = "DelimiterRule::defaults")]
    pub delimiters: Vec<DelimiterRule>,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            delimiters: DelimiterRule::defaults(),
        }
    }
}

/// Partial inline configuration. Only keys present in the source are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InlineOverride {
    pub delimiters: Option<Vec<DelimiterRule>>,
}

impl InlineConfig {
    /// Apply the keys set in `other`.
    ///
    /// A present rule list replaces the current one as a whole; rule order is
    /// meaningful, so lists are never interleaved.
    pub fn merge(&mut self, other: &InlineOverride) {
        if let Some(ref delimiters) = other.delimiters {
            self.delimiters = delimiters.clone();
        }
    }
}
