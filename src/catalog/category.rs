//! Word categories and their entries.
//!
//! A `Category` is a named, immutable list of `(word, hint)` entries.
//! Categories are defined at catalog construction time and never mutated.

use serde::{Deserialize, Serialize};

/// A secret word together with the hint shown to an assisted impostor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The secret word shared by all non-impostor players.
    pub word: String,
    /// Topical hint revealed to the impostor when assist mode is on.
    pub hint: String,
}

impl WordEntry {
    /// Create a new word entry.
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }
}

/// A category of secret words.
///
/// ## Example
///
/// ```
/// use impostor::catalog::Category;
///
/// let food = Category::new("food", "Comida", "Platos y antojos.")
///     .with_word("Pizza", "queso")
///     .with_word("Sushi", "arroz");
///
/// assert_eq!(food.id, "food");
/// assert_eq!(food.words.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key, stable across sessions (e.g. "food").
    pub id: String,
    /// Display label for the category picker.
    pub name: String,
    /// One-line blurb shown under the label in the picker.
    pub description: String,
    /// Word pool. Non-empty for any registered category.
    pub words: Vec<WordEntry>,
}

impl Category {
    /// Create a new empty category.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            words: Vec::new(),
        }
    }

    /// Add a word entry.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>, hint: impl Into<String>) -> Self {
        self.words.push(WordEntry::new(word, hint));
        self
    }

    /// Number of words in the pool.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
