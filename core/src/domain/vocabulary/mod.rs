//! Shared lookup tables for food terms and stop words.
//!
//! Extraction and synthesis both filter against [`VOCABULARY`], so the two
//! stages always agree on what counts as a stop word. Bump
//! [`VOCABULARY_VERSION`] whenever a list changes.

use std::collections::HashSet;
use std::sync::LazyLock;

pub const VOCABULARY_VERSION: u32 = 1;

const FOOD_KEYWORDS: &[&str] = &[
    "potato",
    "tomato",
    "onion",
    "garlic",
    "chicken",
    "beef",
    "carrot",
    "broccoli",
    "spinach",
    "rice",
    "pasta",
    "cheese",
    "egg",
    "mushroom",
    "bell pepper",
    "olive oil",
    "salt",
    "pepper",
    "basil",
    "oregano",
    "food",
    "dish",
    "meal",
    "vegetable",
    "fruit",
    "meat",
];

const STOP_WORDS: &[&str] = &[
    "a", "the", "and", "with", "of", "in", "on", "plate", "bowl", "dish", "image",
];

const PERSON_WORDS: &[&str] = &["person", "people", "man", "woman", "child", "boy", "girl"];

const DETECTABLE_FOODS: &[&str] = &[
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "bowl",
    "cup",
    "fork",
    "knife",
    "spoon",
    "food",
    "fruit",
    "vegetable",
    "potato",
    "tomato",
    "onion",
    "garlic",
    "pepper",
    "rice",
    "pasta",
    "bread",
    "cheese",
    "meat",
    "chicken",
    "beef",
    "pork",
    "fish",
    "egg",
    "milk",
    "butter",
    "oil",
    "salt",
    "bottle",
    "plate",
    "dining table",
];

const POTATO_DEFAULTS: &[&str] = &["potato", "butter", "salt", "pepper", "garlic"];

const GENERIC_DEFAULTS: &[&str] = &["vegetable", "salt", "pepper", "olive oil"];

pub static VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::new);

#[derive(Debug)]
pub struct Vocabulary {
    pub version: u32,
    food_keywords: Vec<&'static str>,
    food_keyword_set: HashSet<&'static str>,
    stop_words: HashSet<&'static str>,
    detectable_foods: HashSet<&'static str>,
}

impl Vocabulary {
    fn new() -> Self {
        Self {
            version: VOCABULARY_VERSION,
            food_keywords: FOOD_KEYWORDS.to_vec(),
            food_keyword_set: FOOD_KEYWORDS.iter().copied().collect(),
            stop_words: STOP_WORDS.iter().chain(PERSON_WORDS).copied().collect(),
            detectable_foods: DETECTABLE_FOODS.iter().copied().collect(),
        }
    }

    /// Food keywords in their published order.
    pub fn food_keywords(&self) -> &[&'static str] {
        &self.food_keywords
    }

    /// True for filler words and person-related words, compared lowercase.
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term.to_lowercase().as_str())
    }

    /// Matches a lowercase caption token either exactly or when any keyword
    /// is a substring of it ("tomatoes" matches "tomato").
    pub fn matches_food_keyword(&self, token: &str) -> bool {
        self.food_keyword_set.contains(token)
            || self.food_keywords.iter().any(|keyword| token.contains(keyword))
    }

    /// Detector-side filter: is this object label plausibly food-related.
    pub fn is_detectable_food(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.detectable_foods.contains(label.as_str())
            || self.detectable_foods.iter().any(|food| label.contains(food))
    }

    /// Fallback ingredients when nothing usable was extracted.
    pub fn default_ingredients(&self, caption: &str) -> &'static [&'static str] {
        if caption.to_lowercase().contains("potato") {
            POTATO_DEFAULTS
        } else {
            GENERIC_DEFAULTS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_include_person_words() {
        assert!(VOCABULARY.is_stop_word("plate"));
        assert!(VOCABULARY.is_stop_word("Woman"));
        assert!(VOCABULARY.is_stop_word("THE"));
        assert!(!VOCABULARY.is_stop_word("cheese"));
    }

    #[test]
    fn test_food_keyword_substring_match() {
        assert!(VOCABULARY.matches_food_keyword("tomatoes"));
        assert!(VOCABULARY.matches_food_keyword("rice"));
        assert!(!VOCABULARY.matches_food_keyword("table"));
    }

    #[test]
    fn test_detectable_food_is_case_insensitive() {
        assert!(VOCABULARY.is_detectable_food("Hot Dog"));
        assert!(VOCABULARY.is_detectable_food("dining table"));
        assert!(!VOCABULARY.is_detectable_food("person"));
    }

    #[test]
    fn test_default_ingredients() {
        assert_eq!(
            VOCABULARY.default_ingredients("A Potato on a table"),
            POTATO_DEFAULTS
        );
        assert_eq!(VOCABULARY.default_ingredients("a table"), GENERIC_DEFAULTS);
    }

    #[test]
    fn test_food_keywords_keep_order() {
        assert_eq!(VOCABULARY.food_keywords().first(), Some(&"potato"));
        assert_eq!(VOCABULARY.food_keywords().len(), FOOD_KEYWORDS.len());
        assert_eq!(VOCABULARY.version, VOCABULARY_VERSION);
    }
}
