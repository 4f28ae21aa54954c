//! Round setup: name validation, word and impostor assignment, seating.
//!
//! ## Algorithm
//!
//! 1. Trim names, drop blanks
//! 2. Reject fewer than [`MIN_PLAYERS`] names
//! 3. Reject case-insensitive duplicates
//! 4. Resolve the category, falling back to the catalog's first category
//!    for unknown ids (never a user-visible error)
//! 5. Pick the secret word uniformly from the category
//! 6. Pick the impostor uniformly over the valid names
//! 7. Build the roster in input order with positional ids
//! 8. Shuffle the roster uniformly, independent of the impostor pick, so
//!    card position carries no information
//!
//! Each random choice draws from its own context stream of the caller's
//! [`GameRng`].

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::catalog::WordCatalog;
use crate::core::{GameRng, PlayerId};
use crate::round::player::Player;
use crate::round::state::Round;

/// Minimum number of non-blank player names.
pub const MIN_PLAYERS: usize = 3;

/// Card text shown to the impostor instead of the secret word.
pub const IMPOSTOR_CARD_TEXT: &str = "🕵️ ERES EL IMPOSTOR 🕵️";

/// Validation errors for round setup.
///
/// Both are recoverable: the user edits the name list and retries. The
/// display messages are the inline text the presentation layer shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than [`MIN_PLAYERS`] non-blank names.
    #[error("Se necesitan al menos 3 jugadores")]
    TooFewPlayers {
        /// How many valid names were supplied.
        found: usize,
    },

    /// Two names collide after trimming and lowercasing.
    #[error("Los nombres deben ser únicos")]
    DuplicateName {
        /// The trimmed name that collided.
        name: String,
    },
}

/// Validate names and build a new round.
///
/// `raw_names` is taken as entered, empties and surrounding whitespace
/// included. An unknown `category_id` silently resolves to the catalog's
/// fallback category.
pub fn setup_round<S: AsRef<str>>(
    raw_names: &[S],
    category_id: &str,
    assist_impostor: bool,
    catalog: &WordCatalog,
    rng: &GameRng,
) -> Result<Round, SetupError> {
    let valid_names: Vec<&str> = raw_names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .collect();

    if valid_names.len() < MIN_PLAYERS {
        return Err(SetupError::TooFewPlayers {
            found: valid_names.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for name in &valid_names {
        if !seen.insert(name.to_lowercase()) {
            return Err(SetupError::DuplicateName {
                name: (*name).to_string(),
            });
        }
    }

    let category = catalog
        .find_category(category_id)
        .unwrap_or_else(|| catalog.fallback_category())
        .clone();

    let chosen_word = rng
        .for_context("word")
        .choose(&category.words)
        .expect("registered categories have words")
        .clone();

    let impostor_index = rng
        .for_context("impostor")
        .gen_range_usize(0..valid_names.len());

    let mut roster: Vec<Player> = valid_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let is_impostor = index == impostor_index;
            Player {
                id: PlayerId::new(index as u32),
                name: (*name).to_string(),
                is_impostor,
                word: if is_impostor {
                    IMPOSTOR_CARD_TEXT.to_string()
                } else {
                    chosen_word.word.clone()
                },
                hint: if is_impostor && assist_impostor {
                    Some(chosen_word.hint.clone())
                } else {
                    None
                },
                has_seen: false,
            }
        })
        .collect();

    rng.for_context("shuffle").shuffle(&mut roster);

    Ok(Round::new(category, chosen_word, roster))
}
