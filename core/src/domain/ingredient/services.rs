use tracing::debug;

use crate::domain::{ingredient::entities::IngredientSet, vocabulary::VOCABULARY};

/// Builds the ingredient set from a caption and the detector's labels.
///
/// Caption tokens are lowercased and kept when they match a food keyword;
/// detector labels are taken as given. Stop words and terms of two characters
/// or fewer are dropped. An empty result falls back to a default set chosen
/// from the caption.
pub fn extract_ingredients<S: AsRef<str>>(caption: &str, detected_labels: &[S]) -> IngredientSet {
    let caption_terms = caption
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| VOCABULARY.matches_food_keyword(token));

    let detected_terms = detected_labels
        .iter()
        .map(|label| label.as_ref().to_string());

    let ingredients: IngredientSet = detected_terms
        .chain(caption_terms)
        .filter(|item| is_ingredient_candidate(item))
        .collect();

    if ingredients.is_empty() {
        debug!(caption, "no ingredients found, using defaults");
        return VOCABULARY
            .default_ingredients(caption)
            .iter()
            .copied()
            .collect();
    }

    ingredients
}

fn is_ingredient_candidate(item: &str) -> bool {
    item.chars().count() > 2 && !VOCABULARY.is_stop_word(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_LABELS: &[&str] = &[];

    #[test]
    fn test_caption_keywords_are_kept() {
        let ingredients = extract_ingredients("a plate with potato and cheese", NO_LABELS);

        assert!(ingredients.contains("potato"));
        assert!(ingredients.contains("cheese"));
        for excluded in ["plate", "with", "and", "a"] {
            assert!(!ingredients.contains(excluded), "{excluded} should be dropped");
        }
    }

    #[test]
    fn test_caption_tokens_are_lowercased() {
        let ingredients = extract_ingredients("Fresh Tomatoes and RICE", NO_LABELS);

        assert!(ingredients.contains("tomatoes"));
        assert!(ingredients.contains("rice"));
        assert!(!ingredients.contains("fresh"));
    }

    #[test]
    fn test_detected_labels_are_merged_and_filtered() {
        let labels = ["bell pepper", "bowl", "person", "carrot", "ox"];
        let ingredients = extract_ingredients("a table with a cup on it", &labels);

        assert_eq!(
            ingredients,
            IngredientSet::from_iter(["bell pepper", "carrot"])
        );
    }

    #[test]
    fn test_detected_label_casing_is_preserved() {
        let ingredients = extract_ingredients("a broccoli floret", &["Broccoli"]);

        assert!(ingredients.contains("Broccoli"));
        assert!(ingredients.contains("broccoli"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let ingredients = extract_ingredients("rice rice and more rice", &["rice"]);

        assert_eq!(ingredients.len(), 1);
    }

    #[test]
    fn test_empty_input_uses_generic_defaults() {
        let ingredients = extract_ingredients("", NO_LABELS);

        assert_eq!(
            ingredients,
            IngredientSet::from_iter(["vegetable", "salt", "pepper", "olive oil"])
        );
    }

    #[test]
    fn test_potato_caption_keeps_potato_over_defaults() {
        let ingredients = extract_ingredients("the POTATO", &["plate"]);

        assert_eq!(ingredients, IngredientSet::from_iter(["potato"]));
    }

    #[test]
    fn test_generic_defaults_without_potato() {
        let ingredients = extract_ingredients("a man holding a phone", &["person"]);

        assert_eq!(
            ingredients,
            IngredientSet::from_iter(["vegetable", "salt", "pepper", "olive oil"])
        );
    }

    #[test]
    fn test_output_never_contains_stop_words_or_short_terms() {
        let labels = ["dish", "egg", "Plate", "on", "oil"];
        let ingredients = extract_ingredients("the dish of egg in a bowl", &labels);

        for item in &ingredients {
            assert!(item.chars().count() > 2);
            assert!(!VOCABULARY.is_stop_word(item));
        }
        assert!(ingredients.contains("egg"));
        assert!(ingredients.contains("oil"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let labels = ["banana", "cake"];
        let first = extract_ingredients("a cake with banana slices", &labels);
        let second = extract_ingredients("a cake with banana slices", &labels);

        assert_eq!(first, second);
    }
}
