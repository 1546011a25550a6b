use serde::{Deserialize, Serialize};

pub const NO_INGREDIENTS_MESSAGE: &str = "No food items detected to generate a recipe.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    Generated,
    Template,
    NoIngredients,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub text: String,
    pub source: RecipeSource,
}

impl Recipe {
    pub fn generated(text: String) -> Self {
        Self {
            text,
            source: RecipeSource::Generated,
        }
    }

    pub fn template(text: String) -> Self {
        Self {
            text,
            source: RecipeSource::Template,
        }
    }

    pub fn no_ingredients() -> Self {
        Self {
            text: NO_INGREDIENTS_MESSAGE.to_string(),
            source: RecipeSource::NoIngredients,
        }
    }
}
