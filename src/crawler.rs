//! The `HtmlCrawler` facade.
//!
//! A crawler binds one source document to a set of [`Options`]. Fluent
//! methods adjust the options; [`HtmlCrawler::clean`] builds a fresh
//! [`Pipeline`] from them, runs it, and converts the result to Markdown when
//! asked to.

use std::fmt;
use std::sync::Arc;

use crate::cleaner::Pipeline;
use crate::custom_pattern::CustomPattern;
use crate::encoding;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::markdown::{self, Html2MdConverter, MarkdownConverter};
use crate::options::{Options, HEADING_TAGS, LIST_TAGS, TABLE_TAGS};
use crate::url_utils;

/// Cleans one HTML document.
///
/// # Example
///
/// ```rust
/// use html_crawler::HtmlCrawler;
///
/// let html = r#"<div><h1>Title</h1><script>track()</script><p>Body <em>text</em></p></div>"#;
///
/// let cleaned = HtmlCrawler::from_html(html)
///     .keep_headings()
///     .keep_paragraphs()
///     .clean()?;
///
/// assert_eq!(cleaned, "<h1>Title</h1><p>Body text</p>");
/// # Ok::<(), html_crawler::Error>(())
/// ```
#[derive(Clone)]
pub struct HtmlCrawler {
    html: String,
    options: Options,
    converter: Arc<dyn MarkdownConverter>,
}

impl HtmlCrawler {
    /// Bind `html` to an explicit set of default options.
    #[must_use]
    pub fn new(html: impl Into<String>, options: Options) -> Self {
        Self {
            html: html.into(),
            options,
            converter: Arc::new(Html2MdConverter::default()),
        }
    }

    /// Bind `html` to `Options::default()`.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        Self::new(html, Options::default())
    }

    /// Decode raw bytes (BOM or `<meta>` charset, else UTF-8) and bind them.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], options: Options) -> Self {
        Self::new(encoding::decode_html(bytes), options)
    }

    /// Fetch `url` over HTTP and bind the decoded body to `Options::default()`.
    ///
    /// Fails with [`Error::InvalidUrl`](crate::Error::InvalidUrl) before any
    /// request when the URL is malformed, and with
    /// [`Error::FetchError`](crate::Error::FetchError) when retrieval fails.
    #[cfg(feature = "http")]
    pub fn from_url(url: &str) -> Result<Self> {
        Self::from_url_with(url, &crate::fetch::HttpFetcher::new(), Options::default())
    }

    /// Fetch `url` through `fetcher` and bind the decoded body to `options`.
    pub fn from_url_with(url: &str, fetcher: &dyn Fetcher, options: Options) -> Result<Self> {
        let url = url_utils::validate_url(url)?;
        let bytes = fetcher.fetch(&url)?;
        log::debug!("fetched {} bytes from {url}", bytes.len());
        Ok(Self::from_bytes(&bytes, options))
    }

    /// The bound source document.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The current configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    // === Allow-list ===

    /// Allow additional tags. Previously allowed tags stay allowed.
    #[must_use]
    pub fn keep_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.add_allowed_tags(tags);
        self
    }

    /// Allow one additional tag.
    #[must_use]
    pub fn keep_tag(self, tag: &str) -> Self {
        self.keep_tags([tag])
    }

    /// Replace the allow-list.
    #[must_use]
    pub fn set_allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.set_allowed_tags(tags);
        self
    }

    /// Keep `<p>`.
    #[must_use]
    pub fn keep_paragraphs(self) -> Self {
        self.keep_tag("p")
    }

    /// Keep `<h1>` through `<h6>`.
    #[must_use]
    pub fn keep_headings(self) -> Self {
        self.keep_tags(HEADING_TAGS)
    }

    /// Keep `<ul>`, `<ol>` and `<li>`.
    #[must_use]
    pub fn keep_lists(self) -> Self {
        self.keep_tags(LIST_TAGS)
    }

    /// Keep `<img>`.
    #[must_use]
    pub fn keep_images(self) -> Self {
        self.keep_tag("img")
    }

    /// Keep `<table>`, `<thead>`, `<tbody>`, `<tr>`, `<th>` and `<td>`.
    #[must_use]
    pub fn keep_tables(self) -> Self {
        self.keep_tags(TABLE_TAGS)
    }

    /// Keep `<a>`.
    #[must_use]
    pub fn keep_links(self) -> Self {
        self.keep_tag("a")
    }

    /// Keep script blocks, tags and content.
    #[must_use]
    pub fn keep_scripts(mut self) -> Self {
        self.options.keep_scripts();
        self
    }

    /// Keep style blocks and `<link>` tags.
    #[must_use]
    pub fn keep_css(mut self) -> Self {
        self.options.keep_css();
        self
    }

    // === Other options ===

    /// Delete every match of `pattern` before any other stage runs.
    ///
    /// The pattern is compiled here, so a malformed one fails immediately
    /// with [`Error::PatternError`](crate::Error::PatternError).
    pub fn custom_pattern(mut self, pattern: &str) -> Result<Self> {
        self.options.custom_pattern = Some(CustomPattern::new(pattern)?);
        Ok(self)
    }

    /// Keep (`true`) or fold (`false`) line breaks.
    #[must_use]
    pub fn preserve_newlines(mut self, preserve: bool) -> Self {
        self.options.preserve_newlines = preserve;
        self
    }

    /// Convert the cleaned result to Markdown.
    #[must_use]
    pub fn with_markdown(mut self) -> Self {
        self.options.convert_to_markdown = true;
        self
    }

    /// Use `converter` instead of the default Markdown converter.
    #[must_use]
    pub fn with_converter(mut self, converter: impl MarkdownConverter + 'static) -> Self {
        self.converter = Arc::new(converter);
        self
    }

    // === Output ===

    /// Clean the document, then convert it to Markdown if enabled.
    ///
    /// An empty cleaning result is returned as-is without conversion.
    /// Repeated calls with unchanged options return the same result.
    pub fn clean(&self) -> Result<String> {
        let pipeline = Pipeline::from_options(&self.options);
        log::debug!(
            "cleaning {} bytes through [{}]",
            self.html.len(),
            pipeline.stage_names().join(", ")
        );

        let cleaned = pipeline.run(&self.html)?;

        if self.options.convert_to_markdown && !cleaned.is_empty() {
            return markdown::to_markdown(&cleaned, self.converter.as_ref());
        }

        Ok(cleaned)
    }
}

impl fmt::Debug for HtmlCrawler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlCrawler")
            .field("html_len", &self.html.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Writes the output of [`HtmlCrawler::clean`].
///
/// When cleaning fails nothing is written and the error is logged at debug
/// level, so `to_string()` yields an empty string. Call `clean()` directly
/// to see the error.
impl fmt::Display for HtmlCrawler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.clean() {
            Ok(cleaned) => f.write_str(&cleaned),
            Err(e) => {
                log::debug!("display produced no output: {e}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn fluent_calls_accumulate() {
        let crawler = HtmlCrawler::from_html("")
            .keep_paragraphs()
            .keep_links()
            .keep_lists()
            .keep_paragraphs();

        assert_eq!(crawler.options().allowed_tags, vec!["p", "a", "ul", "ol", "li"]);
    }

    #[test]
    fn set_allowed_tags_replaces_helpers() {
        let crawler = HtmlCrawler::from_html("").keep_tables().set_allowed_tags(["em"]);
        assert_eq!(crawler.options().allowed_tags, vec!["em"]);
    }

    #[test]
    fn helpers_extend_after_replacement() {
        let crawler = HtmlCrawler::from_html("").set_allowed_tags(["em"]).keep_images();
        assert_eq!(crawler.options().allowed_tags, vec!["em", "img"]);
    }

    #[test]
    fn keep_scripts_and_css_maintain_allow_list() {
        let crawler = HtmlCrawler::from_html("").keep_scripts().keep_css();
        let options = crawler.options();

        assert!(!options.remove_scripts);
        assert!(!options.remove_styles);
        assert_eq!(options.allowed_tags, vec!["script", "style", "link"]);
    }

    #[test]
    fn invalid_pattern_fails_at_configuration() {
        let result = HtmlCrawler::from_html("<p>x</p>").custom_pattern("/[/");
        assert!(matches!(result, Err(Error::PatternError { .. })));
    }

    #[test]
    fn explicit_defaults_are_used() {
        let defaults = Options {
            allowed_tags: vec!["b".to_string()],
            preserve_newlines: false,
            ..Options::default()
        };
        let crawler = HtmlCrawler::new("<b>a</b>\n<i>b</i>", defaults);
        assert_eq!(crawler.clean().expect("ok"), "<b>a</b> b");
    }

    #[test]
    fn display_matches_clean() {
        let crawler = HtmlCrawler::from_html("<p>Hello</p>").keep_paragraphs();
        assert_eq!(crawler.to_string(), crawler.clean().expect("ok"));
    }

    #[test]
    fn display_writes_nothing_when_conversion_fails() {
        let crawler = HtmlCrawler::from_html("<p>x</p>")
            .with_markdown()
            .with_converter(|_: &str| -> Result<String> { Err(Error::ConversionError("unsupported".to_string())) });
        assert!(crawler.clean().is_err());
        assert_eq!(crawler.to_string(), "");
    }

    #[test]
    fn from_bytes_decodes_charset() {
        let crawler = HtmlCrawler::from_bytes(b"<meta charset=\"latin1\"><p>na\xEFve</p>", Options::default());
        assert_eq!(crawler.clean().expect("ok"), "na\u{ef}ve");
    }

    #[test]
    fn from_url_with_rejects_malformed_url_without_fetching() {
        let fetcher = |_: &url::Url| -> Result<Vec<u8>> { panic!("fetch must not be called") };
        let result = HtmlCrawler::from_url_with("notaurl", &fetcher, Options::default());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn from_url_with_uses_fetcher() {
        let fetcher = |url: &url::Url| -> Result<Vec<u8>> {
            Ok(format!("<p>from {}</p>", url.host_str().unwrap_or_default()).into_bytes())
        };
        let crawler =
            HtmlCrawler::from_url_with("https://example.org/x", &fetcher, Options::default()).expect("ok");
        assert_eq!(crawler.clean().expect("ok"), "from example.org");
    }

    #[test]
    fn fetch_error_propagates() {
        let fetcher = |_: &url::Url| -> Result<Vec<u8>> { Err(Error::FetchError("down".to_string())) };
        let result = HtmlCrawler::from_url_with("https://example.org", &fetcher, Options::default());
        assert!(matches!(result, Err(Error::FetchError(_))));
    }
}
