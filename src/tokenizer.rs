//! Minimal HTML tokenizer.
//!
//! Splits markup into text, start tags, end tags, comments and declarations
//! without building a tree. Every token borrows its exact source slice, so
//! concatenating the `raw()` of all tokens reproduces the input byte for byte.
//!
//! The grammar is deliberately small:
//!
//! - `<name ...>` is a start tag when `name` begins with an ASCII letter.
//!   Attribute values in single or double quotes may contain `>`; a quote
//!   that is never closed is ignored and the first `>` ends the tag.
//! - `</name ...>` is an end tag.
//! - `<!-- ... -->` is a comment, `<![CDATA[ ... ]]>` and other `<!...>` or
//!   `<?...>` constructs are declarations.
//! - Anything else, including a construct whose terminator never appears,
//!   is text.

/// A lexical unit of an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data between markup.
    Text(&'a str),
    /// An opening tag such as `<a href="#">` or `<br/>`.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Source text of the whole tag, attributes and quoting untouched.
        raw: &'a str,
        /// Whether the tag ends in `/>`.
        self_closing: bool,
    },
    /// A closing tag such as `</p>`.
    EndTag {
        /// Lowercased tag name.
        name: String,
        /// Source text of the whole tag.
        raw: &'a str,
    },
    /// `<!-- ... -->`.
    Comment(&'a str),
    /// `<!DOCTYPE ...>`, `<?xml ...?>`, `<![CDATA[...]]>`.
    Declaration(&'a str),
}

impl<'a> Token<'a> {
    /// Source text of this token.
    #[must_use]
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(raw)
            | Token::StartTag { raw, .. }
            | Token::EndTag { raw, .. }
            | Token::Comment(raw)
            | Token::Declaration(raw) => raw,
        }
    }

    /// Tag name for start and end tags.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Token::StartTag { name, .. } | Token::EndTag { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this token is markup rather than text.
    #[must_use]
    pub fn is_markup(&self) -> bool {
        !matches!(self, Token::Text(_))
    }
}

/// Tokenize `html` into a flat list of tokens.
///
/// Adjacent text is merged into a single `Token::Text`.
///
/// # Example
///
/// ```
/// use html_crawler::tokenizer::{tokenize, Token};
///
/// let tokens = tokenize("<p class=\"a>b\">Hi</p>");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].tag_name(), Some("p"));
/// assert_eq!(tokens[1], Token::Text("Hi"));
/// ```
#[must_use]
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let bytes = html.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset;

        let Some((token, end)) = markup_at(html, bytes, start) else {
            // Literal `<`; keep scanning and let it join the surrounding text.
            pos = start + 1;
            continue;
        };

        if text_start < start {
            tokens.push(Token::Text(&html[text_start..start]));
        }
        tokens.push(token);
        text_start = end;
        pos = end;
    }

    if text_start < html.len() {
        tokens.push(Token::Text(&html[text_start..]));
    }

    tokens
}

/// Try to read a markup token starting at the `<` at `start`.
///
/// Returns the token and the byte offset just past it.
fn markup_at<'a>(html: &'a str, bytes: &[u8], start: usize) -> Option<(Token<'a>, usize)> {
    let rest = &html[start..];

    if rest.starts_with("<!--") {
        let end = start + 4 + rest[4..].find("-->")? + 3;
        return Some((Token::Comment(&html[start..end]), end));
    }

    if rest.starts_with("<![CDATA[") {
        let end = start + 9 + rest[9..].find("]]>")? + 3;
        return Some((Token::Declaration(&html[start..end]), end));
    }

    match bytes.get(start + 1).copied() {
        Some(b'!' | b'?') => {
            let end = start + 2 + rest[2..].find('>')? + 1;
            Some((Token::Declaration(&html[start..end]), end))
        }
        Some(b'/') if bytes.get(start + 2).is_some_and(u8::is_ascii_alphabetic) => {
            let (name, name_end) = read_name(html, bytes, start + 2);
            let end = name_end + html[name_end..].find('>')? + 1;
            Some((Token::EndTag { name, raw: &html[start..end] }, end))
        }
        Some(b) if b.is_ascii_alphabetic() => {
            let (name, name_end) = read_name(html, bytes, start + 1);
            let close = find_tag_end(bytes, name_end)?;
            let end = close + 1;
            let self_closing = close > name_end && bytes[close - 1] == b'/';
            Some((
                Token::StartTag {
                    name,
                    raw: &html[start..end],
                    self_closing,
                },
                end,
            ))
        }
        _ => None,
    }
}

/// Read a tag name beginning at `from`. Names run until whitespace, `/` or `>`.
fn read_name(html: &str, bytes: &[u8], from: usize) -> (String, usize) {
    let mut end = from;
    while end < bytes.len() && !matches!(bytes[end], b'>' | b'/') && !bytes[end].is_ascii_whitespace() {
        end += 1;
    }
    (html[from..end].to_ascii_lowercase(), end)
}

/// Find the `>` closing a start tag, skipping quoted attribute values.
///
/// Quotes only open a value directly after `=` (optionally spaced), so a stray
/// apostrophe in an unquoted value does not swallow the rest of the document.
/// When quoting never balances out to a `>`, the first `>` after the name
/// closes the tag.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    quoted_tag_end(bytes, from).or_else(|| bytes[from..].iter().position(|&b| b == b'>').map(|i| from + i))
}

fn quoted_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'>' => return Some(i),
            b'=' => {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                if let Some(&quote @ (b'"' | b'\'')) = bytes.get(i) {
                    let close = bytes[i + 1..].iter().position(|&b| b == quote)?;
                    i += close + 2;
                }
            }
            _ => i += 1,
        }
    }
    None
}
