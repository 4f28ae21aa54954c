//! Per-round player data.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One seat in a round.
///
/// `name` and `has_seen` are always visible to the presentation layer;
/// `word`, `hint`, and `is_impostor` are only revealed behind an explicit
/// per-card reveal action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable per-slot id, unique within the round.
    pub id: PlayerId,
    /// Trimmed display name, case-insensitively unique within the round.
    pub name: String,
    /// Exactly one player per round is the impostor.
    pub is_impostor: bool,
    /// Card text: the secret word, or the impostor placeholder.
    pub word: String,
    /// Present only for the impostor, and only when assist mode is on.
    pub hint: Option<String>,
    /// Whether this player has viewed and hidden their card. Monotonic:
    /// set once, never cleared within a round.
    pub has_seen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_serde() {
        let player = Player {
            id: PlayerId::new(0),
            name: "Ana".to_string(),
            is_impostor: false,
            word: "Pizza".to_string(),
            hint: None,
            has_seen: false,
        };

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);

        // Absent hint serializes as null, not a missing invariant
        assert!(json.contains("\"hint\":null"));
    }
}
