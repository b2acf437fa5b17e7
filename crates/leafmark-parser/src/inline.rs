//! Inline markdown parser.
//!
//! Applies a list of delimiter rules, in order, to a line of text and
//! returns the resulting runs or leaf elements.

use leafmark_core::{DelimiterRule, Result, TextRun};
use leafmark_html::LeafNode;
use log::debug;

use crate::convert::text_runs_to_leaves;
use crate::delimiter::split_delimiter;

/// Inline markdown parser.
///
/// Each rule is one pass of [`split_delimiter`]. Runs styled by an earlier
/// rule are never touched by a later one.
#[derive(Debug, Clone)]
pub struct InlineParser {
    rules: Vec<DelimiterRule>,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineParser {
    /// Create a parser with the default rules (code, bold, italic).
    pub fn new() -> Self {
        Self::with_rules(DelimiterRule::defaults())
    }

    /// Create a parser with a custom rule list.
    pub fn with_rules(rules: Vec<DelimiterRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[DelimiterRule] {
        &self.rules
    }

    /// Apply every rule to an existing run sequence.
    pub fn split_runs(&self, mut runs: Vec<TextRun>) -> Result<Vec<TextRun>> {
        for rule in &self.rules {
            runs = split_delimiter(&runs, &rule.delimiter, rule.kind)?;
        }
        Ok(runs)
    }

    /// Parse a line of markdown into text runs.
    pub fn parse(&self, line: &str) -> Result<Vec<TextRun>> {
        let runs = self.split_runs(vec![TextRun::plain(line)])?;
        debug!("parsed {:?} into {} runs", line, runs.len());
        Ok(runs)
    }

    /// Parse a line of markdown straight into leaf elements.
    pub fn to_leaves(&self, line: &str) -> Result<Vec<LeafNode>> {
        Ok(text_runs_to_leaves(&self.parse(line)?))
    }
}
