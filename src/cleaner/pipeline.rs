//! Cleaning pipeline.
//!
//! A pipeline threads a document through its stages in insertion order and
//! trims the final result. [`Pipeline::from_options`] builds the standard
//! pipeline, whose order is fixed:
//!
//! 1. custom pattern removal (only when a pattern is configured)
//! 2. script removal
//! 3. style removal
//! 4. tag filtering
//! 5. whitespace normalization

use crate::error::Result;
use crate::options::Options;

use super::{CustomPatternStage, ScriptStage, Stage, StyleStage, TagFilterStage, WhitespaceStage};

/// An ordered list of stages.
#[derive(Debug, Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline. Running it only trims the input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the standard pipeline from a snapshot of `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut pipeline = Self::new();

        if let Some(pattern) = &options.custom_pattern {
            pipeline = pipeline.add_stage(CustomPatternStage::new(Some(pattern.clone())));
        }

        pipeline
            .add_stage(ScriptStage::new(options.remove_scripts, &options.allowed_tags))
            .add_stage(StyleStage::new(options.remove_styles, &options.allowed_tags))
            .add_stage(TagFilterStage::new(&options.allowed_tags))
            .add_stage(WhitespaceStage::new(options.preserve_newlines))
    }

    /// Append a stage; it runs after every stage already added.
    #[must_use]
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage over `html` and trim the result.
    ///
    /// The first failing stage aborts the run; there is no partial output.
    pub fn run(&self, html: &str) -> Result<String> {
        let mut current = html.to_string();

        for stage in &self.stages {
            let before = current.len();
            current = stage.transform(&current)?;
            log::trace!("stage {}: {} -> {} bytes", stage.name(), before, current.len());
        }

        Ok(current.trim().to_string())
    }
}
