//! Leafmark Core
//!
//! This crate provides core types and error definitions
//! for the leafmark inline markdown pipeline.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`TextRun`] - A span of text tagged with a [`RunKind`]
//! - [`DelimiterRule`] - A delimiter and the kind of run it produces
//! - [`LeafmarkError`] - Error types shared by every leafmark crate
//!
//! # Example
//!
//! ```
//! use leafmark_core::{RunKind, TextRun};
//!
//! let run = TextRun::link("Click", "https://x.test");
//! assert_eq!(run.kind(), RunKind::Link);
//! assert_eq!(run.url(), Some("https://x.test"));
//! ```

pub mod enums;
pub mod error;
pub mod types;

pub use enums::RunKind;
pub use error::{LeafmarkError, Result};
pub use types::{DelimiterRule, TextRun};
