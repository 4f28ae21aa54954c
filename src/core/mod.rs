//! Core types: player identity and RNG.
//!
//! These are the game-agnostic building blocks the rest of the crate is
//! built on.

pub mod player;
pub mod rng;

pub use player::PlayerId;
pub use rng::GameRng;
