//! Leafmark Parser
//!
//! Turns inline markdown into typed text runs and leaf elements.
//!
//! # Overview
//!
//! - [`split_delimiter`] - rewrites plain runs around one delimiter
//! - [`InlineParser`] - chains [`split_delimiter`] over a rule list
//! - [`text_run_to_leaf`] - maps a run onto its HTML leaf
//!
//! # Example
//!
//! ```
//! use leafmark_core::{RunKind, TextRun};
//! use leafmark_parser::split_delimiter;
//!
//! let runs = split_delimiter(
//!     &[TextRun::plain("This is a **bold** text")],
//!     "**",
//!     RunKind::Bold,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     runs,
//!     vec![
//!         TextRun::plain("This is a "),
//!         TextRun::new("bold", RunKind::Bold),
//!         TextRun::plain(" text"),
//!     ]
//! );
//! ```

pub mod convert;
pub mod delimiter;
pub mod inline;

pub use convert::{text_run_to_leaf, text_runs_to_leaves};
pub use delimiter::split_delimiter;
pub use inline::InlineParser;
