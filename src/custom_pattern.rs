//! User-supplied removal patterns.
//!
//! A pattern is accepted in two spellings:
//!
//! - a bare regular expression, with flags given inline: `(?is)<aside.*?</aside>`
//! - a delimited expression with trailing modifiers, as commonly written for
//!   PCRE: `/<span class="remove">.*?<\/span>/is`
//!
//! Delimited patterns are recognized when the first character is one of
//! `/ # ~ % @ ! |`, or `{` closed by its balancing `}`. Their modifiers map
//! onto inline flags (`i`, `m`, `s`, `x`, `U`); `u` and `D` are accepted and
//! have no effect because matching is already Unicode-aware and `$` already
//! anchors at the very end.
//!
//! The other bracket pairs, `( )`, `[ ]` and `< >`, are not delimiters: a
//! pattern starting with them is an ordinary expression such as `(?i)ad` or
//! `<aside>.*?</aside>`.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters that open a delimited pattern.
const DELIMITERS: &[char] = &['/', '#', '~', '%', '@', '!', '|', '{'];

/// Delimiters that are also regex metacharacters; their escapes stay as-is.
const META_DELIMITERS: &[char] = &['#', '|', '{'];

/// A validated, compiled removal pattern.
///
/// Serializes as the pattern source string and validates on deserialization,
/// so persisted options can never hold a broken pattern.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomPattern {
    source: String,
    regex: Regex,
}

impl CustomPattern {
    /// Compile `pattern`.
    ///
    /// # Example
    ///
    /// ```
    /// use html_crawler::CustomPattern;
    ///
    /// let pattern = CustomPattern::new(r"/<em>.*?<\/em>/i")?;
    /// assert_eq!(pattern.remove_matches("a<EM>b</EM>c"), "ac");
    /// # Ok::<(), html_crawler::Error>(())
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let expression = translate(pattern).map_err(|reason| pattern_error(pattern, reason))?;
        let regex = Regex::new(&expression).map_err(|e| pattern_error(pattern, e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled expression.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Delete every match from `html`.
    #[must_use]
    pub fn remove_matches(&self, html: &str) -> String {
        self.regex.replace_all(html, "").into_owned()
    }
}

impl fmt::Debug for CustomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomPattern").field(&self.source).finish()
    }
}

impl PartialEq for CustomPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CustomPattern {}

impl TryFrom<String> for CustomPattern {
    type Error = Error;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(&pattern)
    }
}

impl From<CustomPattern> for String {
    fn from(pattern: CustomPattern) -> Self {
        pattern.source
    }
}

fn pattern_error(pattern: &str, reason: String) -> Error {
    Error::PatternError {
        pattern: pattern.to_string(),
        reason,
    }
}

/// Turn either spelling into a `regex` crate expression.
fn translate(pattern: &str) -> std::result::Result<String, String> {
    let Some(delimiter) = pattern.chars().next().filter(|c| DELIMITERS.contains(c)) else {
        return Ok(pattern.to_string());
    };

    let closing = closing_delimiter(delimiter);
    let inner = &pattern[delimiter.len_utf8()..];
    let close = find_closing_delimiter(inner, delimiter, closing)
        .ok_or_else(|| format!("no ending delimiter '{closing}' found"))?;
    let body = &inner[..close];
    let modifiers = &inner[close + closing.len_utf8()..];

    let mut flags = String::new();
    for modifier in modifiers.chars() {
        match modifier {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !flags.contains(modifier) {
                    flags.push(modifier);
                }
            }
            'u' | 'D' => {}
            other => return Err(format!("unknown modifier '{other}'")),
        }
    }

    let body = unescape_delimiter(body, delimiter);
    if flags.is_empty() {
        Ok(body)
    } else {
        Ok(format!("(?{flags}){body}"))
    }
}

fn closing_delimiter(delimiter: char) -> char {
    match delimiter {
        '{' => '}',
        other => other,
    }
}

/// Byte offset of the unescaped `closing` that ends the body in `inner`.
///
/// For bracket delimiters, unescaped inner `opening`/`closing` pairs nest,
/// so `{a{2}}` has the body `a{2}`.
fn find_closing_delimiter(inner: &str, opening: char, closing: char) -> Option<usize> {
    let mut escaped = false;
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == closing {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        } else if c == opening {
            depth += 1;
        }
    }
    None
}

/// Drop the backslash from `\<delimiter>` when the delimiter is not a
/// metacharacter, leaving every other escape untouched.
fn unescape_delimiter(body: &str, delimiter: char) -> String {
    if META_DELIMITERS.contains(&delimiter) {
        return body.to_string();
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == delimiter => out.push(next),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}
