//! Error types for the strife engine.
//!
//! Normal gameplay conditions (full board, exhausted tokens,
//! stalemate) are terminal states, not errors. Only configuration
//! problems and rejected placements surface as `Result`s; broken
//! simulation invariants are programming errors and assert instead.

use thiserror::Error;

use crate::session::Stage;

/// Rejected at session creation, before any placement is accepted.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("board size {size} is outside the supported range")]
    BoardSizeOutOfRange { size: usize },

    #[error("birth rule set is empty: no cell could ever be born")]
    EmptyBirthRules,

    #[error("survival rule set is empty: no cell could ever survive")]
    EmptySurvivalRules,

    #[error("token quota is zero: nobody could place anything")]
    ZeroTokenQuota,

    #[error("token quota {quota} per player exceeds board capacity {capacity}")]
    QuotaExceedsBoard { quota: u32, capacity: usize },

    #[error("superpower spawn chance {percent}% exceeds 100%")]
    SpawnPercentOutOfRange { percent: u8 },
}

/// A token placement the session refused.
///
/// Rejection never mutates state; the caller decides whether to
/// surface feedback to the player.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlacementError {
    #[error("tokens can only be placed during the placement stage (stage is {stage})")]
    WrongStage { stage: Stage },

    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("({row}, {col}) is already claimed")]
    Occupied { row: usize, col: usize },

    #[error("{player} placed out of turn")]
    NotYourTurn { player: crate::core::PlayerId },

    #[error("{player} has no tokens left")]
    NoTokensLeft { player: crate::core::PlayerId },
}

/// Any error the engine can surface, for callers that funnel
/// everything through one type (e.g. record replay).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}
