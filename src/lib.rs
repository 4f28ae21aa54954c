//! # impostor
//!
//! Game core for a local "find the impostor" party game: a group shares
//! devices to each privately view a secret word, while one secretly
//! assigned impostor gets a placeholder (or an optional hint) and must
//! bluff through the debate.
//!
//! ## Design Principles
//!
//! 1. **Logic only**: No rendering, persistence, or networking. The
//!    presentation layer consumes this crate's data and drives it via
//!    events.
//!
//! 2. **Single writer**: One `GameSession` owns the running `Round`;
//!    the round is replaced wholesale on restart, never mutated from two
//!    sources.
//!
//! 3. **Seedable randomness**: Every random choice (word, impostor,
//!    seating shuffle, debate starter) is an independent draw from an
//!    injectable seeded RNG, so tests are deterministic.
//!
//! ## Modules
//!
//! - `core`: Player ids and RNG
//! - `catalog`: Word categories and the built-in catalog
//! - `round`: Round setup (validation, assignment, shuffle) and seen
//!   tracking
//! - `session`: The `Setup -> Playing -> Debate -> Setup` phase machine

pub mod catalog;
pub mod core;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId};

pub use crate::catalog::{builtin, Category, WordCatalog, WordEntry};

pub use crate::round::{
    setup_round, Player, Round, SetupError, IMPOSTOR_CARD_TEXT, MIN_PLAYERS,
};

pub use crate::session::{DebateStart, GamePhase, GameSession};
