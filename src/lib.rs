//! # html-crawler
//!
//! Strip disallowed markup from HTML and optionally convert what remains to
//! Markdown.
//!
//! Cleaning runs a fixed pipeline of independent stages: custom pattern
//! removal, script removal, style removal, tag filtering against an
//! allow-list, and whitespace normalization.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_crawler::HtmlCrawler;
//!
//! let html = r#"<div><p>Hello <strong>World</strong></p><style>p { color: red }</style></div>"#;
//!
//! assert_eq!(HtmlCrawler::from_html(html).clean()?, "Hello World");
//! assert_eq!(HtmlCrawler::from_html(html).keep_paragraphs().clean()?, "<p>Hello World</p>");
//! # Ok::<(), html_crawler::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Allow-listing**: keep only the tags you name, with their attributes intact
//! - **Block removal**: scripts and styles go with their content unless kept
//! - **Custom patterns**: delete anything a regular expression matches, first
//! - **Whitespace**: collapse runs of whitespace, optionally keeping line breaks
//! - **Markdown**: entity-decode and convert the cleaned result
//! - **Fetching**: load documents by URL (`http` feature, on by default)
//!
//! This is a content-shaping tool, not a security boundary: do not rely on it
//! to neutralize hostile markup.

mod crawler;
mod custom_pattern;
mod error;
mod options;
mod patterns;

/// Cleaning stages and the pipeline that runs them.
pub mod cleaner;

/// Minimal HTML tokenizer used by tag filtering.
pub mod tokenizer;

/// Markdown conversion collaborator and entity decoding.
pub mod markdown;

/// Document retrieval by URL.
pub mod fetch;

/// URL validation.
pub mod url_utils;

/// Character encoding detection and decoding.
pub mod encoding;

// Public API - re-exports
pub use cleaner::{Pipeline, Stage};
pub use crawler::HtmlCrawler;
pub use custom_pattern::CustomPattern;
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::Fetcher;
pub use markdown::{Html2MdConverter, MarkdownConverter};
pub use options::{Options, HEADING_TAGS, LIST_TAGS, TABLE_TAGS};

/// Cleans an HTML document using default options.
///
/// # Example
///
/// ```rust
/// let text = html_crawler::clean("<div><script>x()</script><p>Content</p></div>")?;
/// assert_eq!(text, "Content");
/// # Ok::<(), html_crawler::Error>(())
/// ```
pub fn clean(html: &str) -> Result<String> {
    clean_with_options(html, &Options::default())
}

/// Cleans an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use html_crawler::{clean_with_options, Options};
///
/// let options = Options {
///     allowed_tags: vec!["a".to_string()],
///     preserve_newlines: false,
///     ..Options::default()
/// };
/// let text = clean_with_options("<p>See\n<a href=\"/x\">this</a></p>", &options)?;
/// assert_eq!(text, "See <a href=\"/x\">this</a>");
/// # Ok::<(), html_crawler::Error>(())
/// ```
pub fn clean_with_options(html: &str, options: &Options) -> Result<String> {
    HtmlCrawler::new(html, options.clone()).clean()
}
