//! Error types for leafmark

use thiserror::Error;

use crate::enums::RunKind;

/// Main error type for leafmark operations
#[derive(Error, Debug)]
pub enum LeafmarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A leaf node was rendered without a value
    #[error("Render error: leaf node has no value")]
    MissingValue,

    /// A parent node was rendered without a tag
    #[error("Render error: parent node has no tag")]
    MissingTag,

    /// A parent node was rendered without children
    #[error("Render error: parent node has no children")]
    MissingChildren,

    /// A base node that is neither a leaf nor a parent reached rendering
    #[error("Render error: node is neither a leaf nor a parent")]
    Unimplemented,

    /// A text kind name that is not one of the known run kinds
    #[error("Unsupported text kind: {0:?}")]
    UnsupportedKind(String),

    /// Odd number of delimiter occurrences inside a single run
    #[error("Parse error: unbalanced delimiter {delimiter:?} in {text:?}")]
    UnbalancedDelimiter {
        /// The delimiter being split on
        delimiter: String,
        /// Text of the offending run
        text: String,
    },

    /// A url was attached to a run kind that cannot carry one
    #[error("Invalid run: {0} runs cannot carry a url")]
    UrlNotAllowed(RunKind),
}

/// Result type alias for leafmark operations
pub type Result<T> = std::result::Result<T, LeafmarkError>;
