use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

/// Why a generated recipe was not used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeRejection {
    #[error("text generation failed: {0}")]
    Generator(CoreError),

    #[error("generated recipe has {0} lines, expected at least 3")]
    TooFewLines(usize),

    #[error("generated recipe has no ingredients section")]
    MissingIngredients,
}

/// Prompt sent to the text generator, also stripped from its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePrompt(String);

impl RecipePrompt {
    pub fn new(food_items: &[String]) -> Self {
        Self(format!("Recipe with ingredients: {}\n\n", food_items.join(", ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn strip_from(&self, output: &str) -> String {
        output.replace(&self.0, "")
    }
}
