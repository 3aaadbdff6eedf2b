//! # strife-engine
//!
//! Core engine for Game of Strife: a two-player strategy game layered
//! on a variant of Conway's Game of Life. Players seed a square board
//! from token quotas; a cellular automaton then evolves it under
//! configurable birth/survival rules, augmented by seven "superpower"
//! cell behaviors that locally override standard rule evaluation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random draw (superpower spawns, Ghost
//!    and Replicator branches) goes through a seeded [`core::GameRng`]
//!    owned by the session. Settings + seed + placements replay a
//!    whole game bit-for-bit.
//!
//! 2. **Functional Snapshots**: A generation step takes an immutable
//!    board and produces a new one. Rule evaluation never observes a
//!    neighbor's already-updated next-generation state.
//!
//! 3. **Terminal States Over Errors**: Full boards, exhausted quotas,
//!    and stalemates are modeled as explicit terminal outcomes. Only
//!    configuration problems and rejected placements are `Err`s.
//!
//! ## Modules
//!
//! - `core`: Players, deterministic RNG, configuration
//! - `board`: Cells, memory flags, superpower kinds, the grid
//! - `rules`: Neighbor analysis, ownership, rule evaluation, spawns
//! - `engine`: Generation stepping, cycle detection, scoring
//! - `session`: Game lifecycle state machine, records, replay
//! - `error`: Error taxonomy
//!
//! ## Example
//!
//! ```
//! use strife_engine::{GameConfig, GameMode, GameSession, PlayerId, Stage};
//!
//! let config = GameConfig::new()
//!     .with_board_size(10)
//!     .with_tokens_per_player(3)
//!     .with_mode(GameMode::Training);
//! let mut session = GameSession::new(config, 42).unwrap();
//!
//! // A horizontal blinker.
//! session.place_token(4, 3, PlayerId::P0).unwrap();
//! session.place_token(4, 4, PlayerId::P0).unwrap();
//! session.place_token(4, 5, PlayerId::P0).unwrap();
//!
//! // The external tick drives the simulation; the oscillator is
//! // recognized as a cycle on its second generation.
//! while session.stage() == Stage::Simulation {
//!     session.advance_generation();
//! }
//! assert_eq!(session.winner(), Some(PlayerId::P0));
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameMode, GameRng, GameRngState, PlayerId, PlayerMap, RuleSet,
};

pub use crate::board::{Board, Cell, Memory, Superpower};

pub use crate::engine::{score, EndReason, GameEnd, Scores};

pub use crate::error::{ConfigError, GameError, PlacementError};

pub use crate::session::{GameOutcome, GameRecord, GameSession, Stage, TokenPlacement};
