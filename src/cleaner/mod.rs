//! The cleaning pipeline and its stages.
//!
//! # Module Structure
//!
//! - `custom`: removal of user-pattern matches
//! - `blocks`: `<script>` and `<style>` block removal
//! - `tag_filter`: allow-list enforcement over tokenized markup
//! - `whitespace`: whitespace collapsing with optional newline preservation
//! - `pipeline`: ordered stage container and fixed-order assembly
//!
//! # Usage
//!
//! ```rust
//! use html_crawler::cleaner::{Pipeline, TagFilterStage, WhitespaceStage};
//!
//! let pipeline = Pipeline::new()
//!     .add_stage(TagFilterStage::new(["p"]))
//!     .add_stage(WhitespaceStage::new(false));
//!
//! let cleaned = pipeline.run("<div><p>Hello\n  <b>World</b></p></div>")?;
//! assert_eq!(cleaned, "<p>Hello World</p>");
//! # Ok::<(), html_crawler::Error>(())
//! ```

use std::fmt;

use crate::error::Result;

pub mod blocks;
pub mod custom;
pub mod pipeline;
pub mod tag_filter;
pub mod whitespace;

pub use blocks::{ScriptStage, StyleStage};
pub use custom::CustomPatternStage;
pub use pipeline::Pipeline;
pub use tag_filter::TagFilterStage;
pub use whitespace::WhitespaceStage;

/// One transformation step of the cleaning pipeline.
///
/// Stages are configured at construction and never mutated afterwards, so
/// the same stage may be run any number of times from any thread.
pub trait Stage: fmt::Debug + Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Transform `html`.
    fn transform(&self, html: &str) -> Result<String>;
}
