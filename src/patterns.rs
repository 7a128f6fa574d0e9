//! Compiled regex patterns used by the cleaning stages.
//!
//! All patterns are compiled once on first use via `LazyLock`.
//! Patterns are organized by the stage that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Block Removal Patterns
// =============================================================================

/// Matches one `<script>` element including attributes and content.
///
/// Non-greedy so that adjacent blocks are removed one at a time instead of
/// as a single span from the first opening tag to the last closing tag.
/// The `\b` keeps `<scripts>`-style custom elements out of the match.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// Matches one `<style>` element including attributes and content.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("STYLE_BLOCK regex")
});

// =============================================================================
// Whitespace Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches a whitespace run that contains at least one newline.
pub static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\n\s*").expect("NEWLINE_RUN regex")
});

/// Matches a run of whitespace that contains no newline.
pub static INLINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\S\n]+").expect("INLINE_WHITESPACE regex")
});
