//! Markdown conversion of cleaned HTML.
//!
//! Conversion is delegated to a [`MarkdownConverter`]. Before the converter
//! sees the document, HTML entities are decoded, so `&amp;` reaches it as `&`.
//! The default converter is backed by `quick_html2md`.

use std::borrow::Cow;

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::error::Result;

/// Converts sanitized HTML to Markdown.
///
/// Implemented for closures, which is handy for tests and for plugging in
/// another converter:
///
/// ```
/// use html_crawler::HtmlCrawler;
///
/// let markdown = HtmlCrawler::from_html("<p>Tom &amp; Jerry</p>")
///     .with_markdown()
///     .with_converter(|html: &str| -> html_crawler::Result<String> { Ok(html.to_uppercase()) })
///     .clean()?;
/// assert_eq!(markdown, "TOM & JERRY");
/// # Ok::<(), html_crawler::Error>(())
/// ```
pub trait MarkdownConverter: Send + Sync {
    /// Convert entity-decoded HTML to Markdown.
    fn convert(&self, html: &str) -> Result<String>;
}

impl<F> MarkdownConverter for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn convert(&self, html: &str) -> Result<String> {
        self(html)
    }
}

/// Default converter, backed by `quick_html2md`.
///
/// Links, images and tables are rendered in Markdown syntax when the
/// corresponding tags survived cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Html2MdConverter {
    /// Render `<a>` as `[text](href)`.
    pub include_links: bool,
    /// Render `<img>` as `![alt](src)`.
    pub include_images: bool,
    /// Render tables as GFM tables.
    pub preserve_tables: bool,
}

impl Default for Html2MdConverter {
    fn default() -> Self {
        Self {
            include_links: true,
            include_images: true,
            preserve_tables: true,
        }
    }
}

impl MarkdownConverter for Html2MdConverter {
    fn convert(&self, html: &str) -> Result<String> {
        let md_options = MarkdownOptions::new()
            .include_links(self.include_links)
            .include_images(self.include_images)
            .preserve_tables(self.preserve_tables);

        Ok(html_to_markdown_with_options(html, &md_options))
    }
}

/// Decode HTML entities (`&quot;`, `&#39;`, `&eacute;`, ...).
#[must_use]
pub fn decode_entities(html: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(html)
}

/// Decode entities, then hand the result to `converter`.
///
/// Converter errors are returned unchanged.
pub fn to_markdown(html: &str, converter: &dyn MarkdownConverter) -> Result<String> {
    let decoded = decode_entities(html);
    converter.convert(&decoded)
}
