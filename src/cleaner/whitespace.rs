//! Whitespace normalization.

use crate::error::Result;
use crate::patterns::{INLINE_WHITESPACE, NEWLINE_RUN, WHITESPACE_NORMALIZE};

use super::Stage;

/// Collapses whitespace runs.
///
/// With `preserve_newlines`, a run containing at least one newline becomes a
/// single `\n` and every other run a single space. Without it, every run
/// becomes a single space. Applying the stage twice changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceStage {
    preserve_newlines: bool,
}

impl WhitespaceStage {
    #[must_use]
    pub fn new(preserve_newlines: bool) -> Self {
        Self { preserve_newlines }
    }
}

impl Stage for WhitespaceStage {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn transform(&self, html: &str) -> Result<String> {
        if !self.preserve_newlines {
            return Ok(WHITESPACE_NORMALIZE.replace_all(html, " ").into_owned());
        }

        // Newline runs first, so the spaces around a newline are absorbed
        // into it instead of surviving as a separate space.
        let newlines = NEWLINE_RUN.replace_all(html, "\n");
        Ok(INLINE_WHITESPACE.replace_all(&newlines, " ").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(preserve: bool, input: &str) -> String {
        WhitespaceStage::new(preserve).transform(input).expect("infallible")
    }

    #[test]
    fn newlines_preserved() {
        assert_eq!(run(true, "Line 1\nLine 2\nLine 3"), "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn newlines_collapsed() {
        assert_eq!(run(false, "Line 1\nLine 2\nLine 3"), "Line 1 Line 2 Line 3");
    }

    #[test]
    fn mixed_runs_with_newline_become_one_newline() {
        assert_eq!(run(true, "a \t\n\n   b   c\r\nd"), "a\nb c\nd");
    }

    #[test]
    fn tabs_and_unicode_spaces_collapse() {
        assert_eq!(run(false, "a\t\u{a0} b"), "a b");
    }

    #[test]
    fn edges_are_not_trimmed() {
        assert_eq!(run(false, "  x  "), " x ");
        assert_eq!(run(true, "\n x \n"), "\nx\n");
    }

    #[test]
    fn idempotent() {
        for preserve in [true, false] {
            let once = run(preserve, " a \n\t b  \n\n c ");
            assert_eq!(run(preserve, &once), once);
        }
    }
}
