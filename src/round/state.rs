//! Round state: seen tracking and debate-starter selection.
//!
//! A `Round` is built once by setup and then mutated in place by exactly
//! one operation, `mark_seen`. Everything else is a read. The round is
//! discarded wholesale on restart; nothing carries over.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, WordEntry};
use crate::core::{GameRng, PlayerId};
use crate::round::player::Player;

/// One game round: the chosen category and word plus the shuffled roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    category: Category,
    chosen_word: WordEntry,
    roster: Vec<Player>,
}

impl Round {
    /// Assemble a round from setup's output.
    pub(crate) fn new(category: Category, chosen_word: WordEntry, roster: Vec<Player>) -> Self {
        Self {
            category,
            chosen_word,
            roster,
        }
    }

    /// The category this round draws from.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The secret word (and its hint) for this round.
    #[must_use]
    pub fn chosen_word(&self) -> &WordEntry {
        &self.chosen_word
    }

    /// The roster in seating order.
    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// The round's impostor. Setup guarantees exactly one exists.
    #[must_use]
    pub fn impostor(&self) -> &Player {
        self.roster
            .iter()
            .find(|p| p.is_impostor)
            .expect("round has exactly one impostor")
    }

    /// Mark a player's card as seen.
    ///
    /// Returns true only when the flag transitions. Already-seen players
    /// and unknown ids are silent no-ops; seen flags never reset within
    /// a round.
    pub fn mark_seen(&mut self, id: PlayerId) -> bool {
        match self.roster.iter_mut().find(|p| p.id == id) {
            Some(player) if !player.has_seen => {
                player.has_seen = true;
                true
            }
            _ => false,
        }
    }

    /// How many players have seen their card.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.roster.iter().filter(|p| p.has_seen).count()
    }

    /// Whether every player has seen their card.
    ///
    /// This is the gate for the debate transition.
    #[must_use]
    pub fn all_seen(&self) -> bool {
        self.roster.iter().all(|p| p.has_seen)
    }

    /// Pick who opens the debate, uniformly over the roster.
    ///
    /// The impostor is included; an impostor-opened debate is part of the
    /// game. Setup guarantees a non-empty roster.
    #[must_use]
    pub fn pick_debate_starter(&self, rng: &GameRng) -> &Player {
        rng.for_context("starter")
            .choose(&self.roster)
            .expect("roster is non-empty")
    }
}
