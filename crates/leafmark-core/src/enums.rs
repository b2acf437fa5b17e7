//! Text run kinds.
//!
//! Every run produced by the inline parser carries exactly one of these
//! kinds, which later decides the HTML tag it is converted into.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LeafmarkError;

/// Style kind of a text run.
///
/// Kinds are serialized by their lowercase name. Deserialization goes through
/// [`FromStr`], so an unknown name reports [`LeafmarkError::UnsupportedKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RunKind {
    /// Unstyled text
    Plain,
    /// Bold text (`<b>`)
    Bold,
    /// Italic text (`<i>`)
    Italic,
    /// Inline code (`<code>`)
    Code,
    /// Hyperlink (`<a>`), carries a url
    Link,
    /// Image (`<img>`), carries a url
    Image,
}

impl RunKind {
    /// All kinds, in declaration order.
    pub const ALL: [RunKind; 6] = [
        RunKind::Plain,
        RunKind::Bold,
        RunKind::Italic,
        RunKind::Code,
        RunKind::Link,
        RunKind::Image,
    ];

    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunKind::Plain => "plain",
            RunKind::Bold => "bold",
            RunKind::Italic => "italic",
            RunKind::Code => "code",
            RunKind::Link => "link",
            RunKind::Image => "image",
        }
    }

    /// Whether runs of this kind may carry a url.
    pub fn takes_url(&self) -> bool {
        matches!(self, RunKind::Link | RunKind::Image)
    }
}

impl std::fmt::Display for RunKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunKind {
    type Err = LeafmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(RunKind::Plain),
            "bold" => Ok(RunKind::Bold),
            "italic" => Ok(RunKind::Italic),
            "code" => Ok(RunKind::Code),
            "link" => Ok(RunKind::Link),
            "image" => Ok(RunKind::Image),
            _ => Err(LeafmarkError::UnsupportedKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for RunKind {
    type Error = LeafmarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RunKind> for String {
    fn from(kind: RunKind) -> Self {
        kind.as_str().to_string()
    }
}
