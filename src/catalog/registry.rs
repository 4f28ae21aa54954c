//! Catalog registry for category lookup.
//!
//! The `WordCatalog` stores all word categories for a game.
//! It provides fast lookup by id and preserves registration order, which
//! matters: the first registered category is the safe fallback when a
//! caller supplies an unknown id.

use rustc_hash::FxHashMap;

use super::category::Category;

/// Registry of word categories.
///
/// Read-only after construction. Lookup misses are not errors here; round
/// setup falls back to the first category instead.
///
/// ## Example
///
/// ```
/// use impostor::catalog::{Category, WordCatalog};
///
/// let mut catalog = WordCatalog::new();
/// catalog.register(Category::new("food", "Comida", "Platos.").with_word("Pizza", "queso"));
///
/// let found = catalog.find_category("food").unwrap();
/// assert_eq!(found.name, "Comida");
/// assert!(catalog.find_category("nope").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordCatalog {
    categories: Vec<Category>,
    by_id: FxHashMap<String, usize>,
}

impl WordCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category.
    ///
    /// Panics if a category with the same id already exists or if the
    /// category has no words. Both are construction-time programmer errors,
    /// never reachable from user input.
    pub fn register(&mut self, category: Category) {
        if self.by_id.contains_key(&category.id) {
            panic!("Category with id {:?} already registered", category.id);
        }
        if category.words.is_empty() {
            panic!("Category {:?} has no words", category.id);
        }
        self.by_id.insert(category.id.clone(), self.categories.len());
        self.categories.push(category);
    }

    /// Get a category by id.
    #[must_use]
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&idx| &self.categories[idx])
    }

    /// The fallback category: the first one registered.
    ///
    /// Panics if the catalog is empty.
    #[must_use]
    pub fn fallback_category(&self) -> &Category {
        self.categories.first().expect("Catalog has no categories")
    }

    /// All categories, in registration order.
    #[must_use]
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get the number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over all categories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, name: &str) -> Category {
        Category::new(id, name, "").with_word("Palabra", "pista")
    }

    #[test]
    fn test_register_and_find() {
        let mut catalog = WordCatalog::new();
        catalog.register(sample("food", "Comida"));

        let found = catalog.find_category("food");
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Comida");

        assert!(catalog.find_category("missing").is_none());
    }

    #[test]
    fn test_fallback_is_first_registered() {
        let mut catalog = WordCatalog::new();
        catalog.register(sample("random", "Aleatorio"));
        catalog.register(sample("food", "Comida"));

        assert_eq!(catalog.fallback_category().id, "random");
    }

    #[test]
    fn test_list_preserves_order() {
        let mut catalog = WordCatalog::new();
        catalog.register(sample("a", "A"));
        catalog.register(sample("b", "B"));
        catalog.register(sample("c", "C"));

        let ids: Vec<_> = catalog.list_categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = WordCatalog::new();
        catalog.register(sample("food", "Comida"));
        catalog.register(sample("food", "Otra")); // Should panic
    }

    #[test]
    #[should_panic(expected = "has no words")]
    fn test_empty_word_list_panics() {
        let mut catalog = WordCatalog::new();
        catalog.register(Category::new("empty", "Vacía", ""));
    }
}
