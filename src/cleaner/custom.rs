//! Removal of custom-pattern matches.

use crate::custom_pattern::CustomPattern;
use crate::error::Result;

use super::Stage;

/// Deletes every match of a user-supplied pattern.
///
/// Runs first in the fixed pipeline and does not consult any other option,
/// so it can remove blocks that later stages were told to keep.
#[derive(Debug, Clone, Default)]
pub struct CustomPatternStage {
    pattern: Option<CustomPattern>,
}

impl CustomPatternStage {
    #[must_use]
    pub fn new(pattern: Option<CustomPattern>) -> Self {
        Self { pattern }
    }
}

impl Stage for CustomPatternStage {
    fn name(&self) -> &'static str {
        "custom_pattern"
    }

    fn transform(&self, html: &str) -> Result<String> {
        Ok(match &self.pattern {
            Some(pattern) => pattern.remove_matches(html),
            None => html.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(pattern: &str) -> CustomPatternStage {
        CustomPatternStage::new(Some(CustomPattern::new(pattern).expect("valid pattern")))
    }

    #[test]
    fn without_pattern_input_is_unchanged() {
        let html = "<div>  untouched </div>";
        assert_eq!(CustomPatternStage::default().transform(html).expect("ok"), html);
    }

    #[test]
    fn removes_every_match() {
        let out = stage(r"/<ins>.*?<\/ins>/").transform("a<ins>1</ins>b<ins>2</ins>c").expect("ok");
        assert_eq!(out, "abc");
    }

    #[test]
    fn no_match_is_unchanged() {
        let out = stage("(?i)<blink>").transform("<p>calm</p>").expect("ok");
        assert_eq!(out, "<p>calm</p>");
    }

    #[test]
    fn flags_come_from_the_pattern_itself() {
        let html = "<AD>\nbuy\n</AD>rest";
        assert_eq!(stage(r"/<ad>.*<\/ad>/").transform(html).expect("ok"), html);
        assert_eq!(stage(r"/<ad>.*<\/ad>/is").transform(html).expect("ok"), "rest");
    }
}
