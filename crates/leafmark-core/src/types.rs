//! Core value types for leafmark

use serde::{Deserialize, Serialize};

use crate::enums::RunKind;
use crate::error::{LeafmarkError, Result};

/// A span of text tagged with a style kind.
///
/// Runs are immutable once built; every transform produces new runs. The url
/// is only ever present on [`RunKind::Link`] and [`RunKind::Image`] runs, and
/// an empty url is distinct from an absent one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextRun {
    text: String,
    kind: RunKind,
    url: Option<String>,
}

impl TextRun {
    /// Create a run without a url.
    pub fn new(text: impl Into<String>, kind: RunKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunKind::Plain)
    }

    /// Create a link run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: RunKind::Link,
            url: Some(url.into()),
        }
    }

    /// Create an image run; `alt` becomes the run text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: RunKind::Image,
            url: Some(url.into()),
        }
    }

    /// Create a run of any kind with a url.
    ///
    /// Fails with [`LeafmarkError::UrlNotAllowed`] unless the kind takes a url.
    pub fn with_url(
        text: impl Into<String>,
        kind: RunKind,
        url: impl Into<String>,
    ) -> Result<Self> {
        if !kind.takes_url() {
            return Err(LeafmarkError::UrlNotAllowed(kind));
        }
        Ok(Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        })
    }

    /// Text of the run; the alt text for images.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Style kind of the run.
    pub fn kind(&self) -> RunKind {
        self.kind
    }

    /// Url of a link or image run, if one was given.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether this run is unstyled and may still be split.
    pub fn is_plain(&self) -> bool {
        self.kind == RunKind::Plain
    }
}

impl std::fmt::Display for TextRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TextRun({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}

/// A delimiter and the run kind it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DelimiterRule {
    /// Substring that opens and closes a styled span
    pub delimiter: String,
    /// Kind given to the text between delimiters
    pub kind: RunKind,
}

impl DelimiterRule {
    pub fn new(delimiter: impl Into<String>, kind: RunKind) -> Self {
        Self {
            delimiter: delimiter.into(),
            kind,
        }
    }

    /// The built-in rule set: code, then bold, then italic.
    ///
    /// Code comes first so that emphasis markers inside a code span are
    /// never split.
    pub fn defaults() -> Vec<DelimiterRule> {
        vec![
            DelimiterRule::new("`", RunKind::Code),
            DelimiterRule::new("**", RunKind::Bold),
            DelimiterRule::new("_", RunKind::Italic),
        ]
    }
}
