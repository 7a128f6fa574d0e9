//! Character decoding of fetched documents.
//!
//! A byte order mark wins. Otherwise the first recognised charset in a
//! `<meta http-equiv="Content-Type">` or `<meta charset>` declaration is
//! used, and without one the document is read as UTF-8.
//! Undecodable sequences become U+FFFD instead of failing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Pick the encoding for `bytes`.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LIMIT)]);

    [&*META_CONTENT_TYPE, &*META_CHARSET]
        .into_iter()
        .filter_map(|pattern| pattern.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode `bytes` to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use html_crawler::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert_eq!(decode_html(html), "<meta charset=\"ISO-8859-1\"><p>Caf\u{e9}</p>");
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    log::debug!("decoding {} bytes as {}", bytes.len(), encoding.name());

    // `decode` strips a BOM and falls back to the BOM's encoding if present.
    let (decoded, _used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}
