//! `<script>` and `<style>` block removal.
//!
//! Unlike tag filtering, these stages delete the element content too.

use regex::Regex;

use crate::error::Result;
use crate::patterns::{SCRIPT_BLOCK, STYLE_BLOCK};

use super::Stage;

/// Whether a block stage should act: removal requested and the tag not allowed.
fn removal_active(remove: bool, tag: &str, allowed_tags: &[String]) -> bool {
    remove && !allowed_tags.iter().any(|allowed| allowed.eq_ignore_ascii_case(tag))
}

fn strip_blocks(pattern: &Regex, active: bool, html: &str) -> String {
    if active {
        pattern.replace_all(html, "").into_owned()
    } else {
        html.to_string()
    }
}

/// Removes `<script>` elements with their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStage {
    active: bool,
}

impl ScriptStage {
    /// Inactive when `remove` is false or `script` is in `allowed_tags`.
    #[must_use]
    pub fn new(remove: bool, allowed_tags: &[String]) -> Self {
        Self {
            active: removal_active(remove, "script", allowed_tags),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Stage for ScriptStage {
    fn name(&self) -> &'static str {
        "script"
    }

    fn transform(&self, html: &str) -> Result<String> {
        Ok(strip_blocks(&SCRIPT_BLOCK, self.active, html))
    }
}

/// Removes `<style>` elements with their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleStage {
    active: bool,
}

impl StyleStage {
    /// Inactive when `remove` is false or `style` is in `allowed_tags`.
    #[must_use]
    pub fn new(remove: bool, allowed_tags: &[String]) -> Self {
        Self {
            active: removal_active(remove, "style", allowed_tags),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Stage for StyleStage {
    fn name(&self) -> &'static str {
        "style"
    }

    fn transform(&self, html: &str) -> Result<String> {
        Ok(strip_blocks(&STYLE_BLOCK, self.active, html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn script_removed_with_attributes_and_content() {
        let stage = ScriptStage::new(true, &[]);
        let html = "<p>a</p><script type=\"text/javascript\">\nvar x = '<p>';\n</script><p>b</p>";
        assert_eq!(stage.transform(html).expect("ok"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn adjacent_scripts_removed_individually() {
        let stage = ScriptStage::new(true, &[]);
        let html = "<script>1</script>between<SCRIPT>2</SCRIPT>";
        assert_eq!(stage.transform(html).expect("ok"), "between");
    }

    #[test]
    fn script_kept_when_removal_disabled() {
        let stage = ScriptStage::new(false, &[]);
        assert!(!stage.is_active());
        assert_eq!(stage.transform("<script>x</script>").expect("ok"), "<script>x</script>");
    }

    #[test]
    fn script_kept_when_allowed() {
        let stage = ScriptStage::new(true, &tags(&["p", "Script"]));
        assert!(!stage.is_active());
    }

    #[test]
    fn style_removed_case_insensitively() {
        let stage = StyleStage::new(true, &[]);
        let html = "<STYLE media=\"all\">\nbody { margin: 0 }\n</Style>text";
        assert_eq!(stage.transform(html).expect("ok"), "text");
    }

    #[test]
    fn style_kept_when_allowed() {
        let stage = StyleStage::new(true, &tags(&["style"]));
        assert_eq!(stage.transform("<style>.a{}</style>").expect("ok"), "<style>.a{}</style>");
    }

    #[test]
    fn unclosed_script_is_left_for_tag_filtering() {
        let stage = ScriptStage::new(true, &[]);
        assert_eq!(stage.transform("<script>never closed").expect("ok"), "<script>never closed");
    }
}
