//! Configuration options for cleaning.
//!
//! The `Options` struct controls which markup survives cleaning and what
//! happens to the result. Applications that persist their defaults can load
//! them with [`Options::from_json`]; every field is optional in the JSON form.

use serde::{Deserialize, Serialize};

use crate::custom_pattern::CustomPattern;
use crate::error::{Error, Result};

/// Tags allowed by [`HtmlCrawler::keep_headings`](crate::HtmlCrawler::keep_headings).
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Tags allowed by [`HtmlCrawler::keep_lists`](crate::HtmlCrawler::keep_lists).
pub const LIST_TAGS: &[&str] = &["ul", "ol", "li"];

/// Tags allowed by [`HtmlCrawler::keep_tables`](crate::HtmlCrawler::keep_tables).
pub const TABLE_TAGS: &[&str] = &["table", "thead", "tbody", "tr", "th", "td"];

/// Configuration options for cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html_crawler::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     allowed_tags: vec!["p".to_string(), "a".to_string()],
///     preserve_newlines: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Tag names kept by tag filtering, in insertion order.
    ///
    /// Empty means every tag is stripped. Names are compared lowercase.
    ///
    /// Default: `[]`
    pub allowed_tags: Vec<String>,

    /// Pattern whose matches are deleted before any other stage runs.
    ///
    /// Default: `None`
    pub custom_pattern: Option<CustomPattern>,

    /// Keep original line breaks as single `\n` instead of folding them
    /// into spaces.
    ///
    /// Default: `true`
    pub preserve_newlines: bool,

    /// Delete `<script>` blocks including their content.
    ///
    /// Ignored when `script` is an allowed tag.
    ///
    /// Default: `true`
    pub remove_scripts: bool,

    /// Delete `<style>` blocks including their content.
    ///
    /// Ignored when `style` is an allowed tag.
    ///
    /// Default: `true`
    pub remove_styles: bool,

    /// Convert the cleaned HTML to Markdown.
    ///
    /// Default: `false`
    pub convert_to_markdown: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allowed_tags: Vec::new(),
            custom_pattern: None,
            preserve_newlines: true,
            remove_scripts: true,
            remove_styles: true,
            convert_to_markdown: false,
        }
    }
}

impl Options {
    /// Parse persisted options. Missing fields take their default value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use html_crawler::Options;
    ///
    /// let options = Options::from_json(r#"{ "allowed_tags": ["p"], "preserve_newlines": false }"#)?;
    /// assert_eq!(options.allowed_tags, vec!["p"]);
    /// assert!(options.remove_scripts);
    /// # Ok::<(), html_crawler::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Whether `tag` is in the allow-list, ignoring ASCII case.
    #[must_use]
    pub fn is_tag_allowed(&self, tag: &str) -> bool {
        self.allowed_tags.iter().any(|allowed| allowed.eq_ignore_ascii_case(tag))
    }

    /// Add tags to the allow-list. Existing entries are never removed and
    /// duplicates are skipped.
    pub fn add_allowed_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = normalize_tag(tag.as_ref());
            if !tag.is_empty() && !self.is_tag_allowed(&tag) {
                self.allowed_tags.push(tag);
            }
        }
    }

    /// Replace the allow-list wholesale.
    pub fn set_allowed_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_tags.clear();
        self.add_allowed_tags(tags);
    }

    /// Stop removing script blocks.
    ///
    /// Tag filtering runs after script removal, so `script` must also be
    /// allowed or the tags around the preserved content would be stripped.
    pub fn keep_scripts(&mut self) {
        self.remove_scripts = false;
        self.add_allowed_tags(["script"]);
    }

    /// Stop removing style blocks, and keep stylesheet `<link>` tags too.
    pub fn keep_css(&mut self) {
        self.remove_styles = false;
        self.add_allowed_tags(["style", "link"]);
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.allowed_tags.is_empty());
        assert!(opts.custom_pattern.is_none());
        assert!(opts.preserve_newlines);
        assert!(opts.remove_scripts);
        assert!(opts.remove_styles);
        assert!(!opts.convert_to_markdown);
    }

    #[test]
    fn test_add_allowed_tags_dedupes_and_keeps_order() {
        let mut opts = Options::default();
        opts.add_allowed_tags(["p", "a"]);
        opts.add_allowed_tags(["A", "<h1>", "p", " "]);

        assert_eq!(opts.allowed_tags, vec!["p", "a", "h1"]);
    }

    #[test]
    fn test_set_allowed_tags_replaces() {
        let mut opts = Options::default();
        opts.add_allowed_tags(["p", "a"]);
        opts.set_allowed_tags(["li"]);

        assert_eq!(opts.allowed_tags, vec!["li"]);
    }

    #[test]
    fn test_keep_scripts_allows_script_tag() {
        let mut opts = Options::default();
        opts.keep_scripts();
        opts.keep_scripts();

        assert!(!opts.remove_scripts);
        assert_eq!(opts.allowed_tags, vec!["script"]);
    }

    #[test]
    fn test_keep_css_allows_style_and_link() {
        let mut opts = Options::default();
        opts.keep_css();

        assert!(!opts.remove_styles);
        assert!(opts.is_tag_allowed("STYLE"));
        assert!(opts.is_tag_allowed("link"));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let opts = Options::from_json(r#"{ "convert_to_markdown": true }"#).expect("valid json");

        assert!(opts.convert_to_markdown);
        assert!(opts.preserve_newlines);
        assert!(opts.allowed_tags.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_pattern() {
        let err = Options::from_json(r#"{ "custom_pattern": "(" }"#).expect_err("bad pattern");
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut opts = Options::default();
        opts.keep_css();
        opts.custom_pattern = Some(CustomPattern::new("/x/i").expect("valid"));

        let json = serde_json::to_string(&opts).expect("serializable");
        assert_eq!(Options::from_json(&json).expect("valid json"), opts);
    }
}
