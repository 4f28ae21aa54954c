//! Round setup and round state.
//!
//! `setup` turns raw name input into a validated, shuffled roster;
//! `state` tracks seen flags and picks the debate starter.

pub mod player;
pub mod setup;
pub mod state;

pub use player::Player;
pub use setup::{setup_round, SetupError, IMPOSTOR_CARD_TEXT, MIN_PLAYERS};
pub use state::Round;
