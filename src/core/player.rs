//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe per-slot identifier, unique within a round. Ids are positional:
//! the player built from the first valid name is `PlayerId(0)`. The id stays
//! stable when the roster is shuffled, so UI events keep addressing the same
//! player regardless of card order.

use serde::{Deserialize, Serialize};

/// Positional player identifier, unique within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0)
    }
}
