//! Session-level phase machine: `Setup -> Playing -> Debate -> Setup`.
//!
//! `GameSession` is the single owner of the running round. The
//! presentation layer reads it and drives it through events; the round is
//! never mutated from two sources. Events arriving in the wrong phase are
//! silent no-ops, same policy as `mark_seen` with an unknown id: the UI
//! only emits events for what the current phase renders.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, WordCatalog};
use crate::core::{GameRng, PlayerId};
use crate::round::{setup_round, Round, SetupError};

/// Game phase.
///
/// `Playing -> Debate` is only permitted once every player has seen their
/// card. `Debate` is terminal until restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entering names and picking a category.
    #[default]
    Setup,
    /// Players are viewing their cards.
    Playing,
    /// Cards are done; the group debates.
    Debate,
}

/// Who opens the debate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateStart {
    /// The starter's id.
    pub starter: PlayerId,
    /// The starter's display name, for the announcement.
    pub name: String,
}

/// One local game session.
pub struct GameSession {
    catalog: WordCatalog,
    rng: GameRng,
    phase: GamePhase,
    round: Option<Round>,
    /// RNG branch for the current round, forked at game start.
    round_rng: Option<GameRng>,
}

impl GameSession {
    /// Create a session over the given catalog and RNG.
    #[must_use]
    pub fn new(catalog: WordCatalog, rng: GameRng) -> Self {
        Self {
            catalog,
            rng,
            phase: GamePhase::Setup,
            round: None,
            round_rng: None,
        }
    }

    /// Create a session with the built-in catalog and a system-seeded RNG.
    #[must_use]
    pub fn with_builtin_catalog() -> Self {
        Self::new(catalog::builtin(), GameRng::from_entropy())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The running round, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The catalog, for rendering the category picker.
    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// Display name of the running round's category.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.category().name.as_str())
    }

    /// Validate names and start a new round.
    ///
    /// Returns `Ok(true)` when a round started. Only acts in `Setup`;
    /// elsewhere the event is dropped and `Ok(false)` says so, the same
    /// transition flag `mark_seen` reports. On validation failure the
    /// session stays in `Setup` with no round, ready for the user to edit
    /// and retry.
    pub fn start_game<S: AsRef<str>>(
        &mut self,
        raw_names: &[S],
        category_id: &str,
        assist_impostor: bool,
    ) -> Result<bool, SetupError> {
        if self.phase != GamePhase::Setup {
            return Ok(false);
        }

        let round_rng = self.rng.fork();
        let round = setup_round(
            raw_names,
            category_id,
            assist_impostor,
            &self.catalog,
            &round_rng,
        )?;

        self.round = Some(round);
        self.round_rng = Some(round_rng);
        self.phase = GamePhase::Playing;
        Ok(true)
    }

    /// Mark a player's card as seen.
    ///
    /// Returns true only when the flag transitions. No-op outside
    /// `Playing` or for unknown ids.
    pub fn mark_seen(&mut self, id: PlayerId) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        match self.round.as_mut() {
            Some(round) => round.mark_seen(id),
            None => false,
        }
    }

    /// Whether the group is ready to debate.
    #[must_use]
    pub fn all_seen(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.all_seen())
    }

    /// Move to the debate phase and pick who opens it.
    ///
    /// Gated: succeeds only in `Playing` once every card has been seen.
    /// Returns `None` (and changes nothing) otherwise.
    pub fn start_debate(&mut self) -> Option<DebateStart> {
        if self.phase != GamePhase::Playing || !self.all_seen() {
            return None;
        }

        let round = self.round.as_ref()?;
        let rng = self.round_rng.as_ref()?;
        let starter = round.pick_debate_starter(rng);

        let start = DebateStart {
            starter: starter.id,
            name: starter.name.clone(),
        };
        self.phase = GamePhase::Debate;
        Some(start)
    }

    /// Discard the round entirely and return to `Setup`.
    ///
    /// Valid from any phase; nothing carries over.
    pub fn restart(&mut self) {
        self.round = None;
        self.round_rng = None;
        self.phase = GamePhase::Setup;
    }
}
