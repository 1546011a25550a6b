use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deduplicated candidate food terms for one request.
///
/// Backed by an ordered set so the same input always serializes the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSet(BTreeSet<String>);

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ingredient: impl Into<String>) -> bool {
        self.0.insert(ingredient.into())
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.0.contains(ingredient)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for IngredientSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
