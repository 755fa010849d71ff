//! Pair-matching memory game.
//!
//! A timed grid of face-down cards; matched pairs score with a streak bonus,
//! mismatches cost points. Clearing the grid poses a quiz question (the
//! clock pauses); a correct answer banks bonus points and seeds a free pair
//! into the next round. Deterministic like the catch core: seeded RNG,
//! clock advanced by caller-supplied deltas.

pub mod config;
pub mod deck;
pub mod quiz;
pub mod state;

pub use config::MemoryConfig;
pub use deck::{Card, build_deck};
pub use quiz::QuizQuestion;
pub use state::{MemoryGame, MemoryPhase};
