//! Core engine types: players, RNG, configuration.
//!
//! These are the fundamental building blocks shared by every other
//! module; nothing here knows about boards or sessions.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    GameConfig, GameMode, RuleSet, DEFAULT_MAX_GENERATIONS, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
