//! Allow-list enforcement.
//!
//! Disallowed start and end tags are deleted while the text between them
//! stays in place. Allowed tags are copied through verbatim, attributes and
//! quoting included. Comments and declarations never survive.

use std::collections::HashSet;

use crate::error::Result;
use crate::tokenizer::{tokenize, Token};

use super::Stage;

/// Removes every tag whose name is not in the allowed set.
///
/// An empty set strips all markup and leaves only text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilterStage {
    allowed: HashSet<String>,
}

impl TagFilterStage {
    /// Build a filter from tag names; names are lowercased.
    #[must_use]
    pub fn new<I, S>(allowed_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed_tags
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_ascii_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }

    /// Whether a tag named `name` (already lowercase) passes the filter.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    /// One filtering pass. Returns the output and whether anything was dropped.
    fn filter_once(&self, html: &str) -> (String, bool) {
        let mut out = String::with_capacity(html.len());
        let mut dropped = false;

        for token in tokenize(html) {
            let keep = match &token {
                Token::Text(_) => true,
                Token::StartTag { name, .. } | Token::EndTag { name, .. } => self.allows(name),
                Token::Comment(_) | Token::Declaration(_) => false,
            };
            if keep {
                out.push_str(token.raw());
            } else {
                dropped = true;
            }
        }

        (out, dropped)
    }
}

impl Stage for TagFilterStage {
    fn name(&self) -> &'static str {
        "tag_filter"
    }

    /// Filter until a pass removes nothing.
    ///
    /// Deleting a tag can splice the text around it into a new one
    /// (`<<b>p>` becomes `<p>`), which a single pass would let through.
    fn transform(&self, html: &str) -> Result<String> {
        let (mut current, mut dropped) = self.filter_once(html);
        while dropped {
            (current, dropped) = self.filter_once(&current);
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(tags: &[&str], html: &str) -> String {
        TagFilterStage::new(tags).transform(html).expect("tag filtering is infallible")
    }

    #[test]
    fn empty_allow_list_strips_everything() {
        assert_eq!(filter(&[], "<div><p>Hello <strong>World</strong></p></div>"), "Hello World");
    }

    #[test]
    fn allowed_tags_survive() {
        assert_eq!(
            filter(&["p"], "<div><p>Hello <strong>World</strong></p></div>"),
            "<p>Hello World</p>"
        );
    }

    #[test]
    fn allowed_attributes_are_verbatim() {
        let html = r#"<div><a href='/x?a=1&amp;b=2' data-x="1 > 0">link</a></div>"#;
        assert_eq!(filter(&["a"], html), r#"<a href='/x?a=1&amp;b=2' data-x="1 > 0">link</a>"#);
    }

    #[test]
    fn allow_list_is_case_insensitive() {
        assert_eq!(filter(&["P"], "<P>x</P><DIV>y</DIV>"), "<P>x</P>y");
    }

    #[test]
    fn disallowed_void_tags_leave_nothing() {
        assert_eq!(filter(&["p"], "<p>a<br/>b<img src=\"x.png\">c</p>"), "<p>abc</p>");
    }

    #[test]
    fn comments_are_removed_even_when_tags_allowed() {
        assert_eq!(filter(&["p"], "<p>a<!-- <p>hidden</p> -->b</p>"), "<p>ab</p>");
    }

    #[test]
    fn doctype_is_removed() {
        assert_eq!(filter(&["html"], "<!DOCTYPE html><html>x</html>"), "<html>x</html>");
    }

    #[test]
    fn spliced_tags_are_removed() {
        assert_eq!(filter(&[], "<<b>p>text<</b>/p>"), "text");
    }

    #[test]
    fn literal_angle_brackets_are_text() {
        assert_eq!(filter(&[], "<p>1 < 2 and 3 > 2</p>"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn malformed_nesting_is_best_effort() {
        assert_eq!(filter(&["b"], "<b><i>x</b></i>"), "<b>x</b>");
    }

    #[test]
    fn entities_are_untouched() {
        let html = "<div><p>&quot;Quoted&quot; &amp; &lt;bracketed&gt;</p></div>";
        assert_eq!(filter(&["p"], html), "<p>&quot;Quoted&quot; &amp; &lt;bracketed&gt;</p>");
    }
}
