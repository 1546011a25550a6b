use serde::{Deserialize, Serialize};

use crate::domain::{ingredient::IngredientSet, recipe::Recipe, vision::Detection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysisResult {
    pub caption: String,
    pub ingredients: IngredientSet,
    pub recipe: Recipe,
    pub detections: Vec<Detection>,
    pub food_keywords: Vec<String>,
}
