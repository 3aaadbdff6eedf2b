//! Persisted game records and deterministic replay.
//!
//! A `GameRecord` is what the storage and upload collaborators see:
//! the session settings, the RNG seed, every accepted placement in
//! order, and the final outcome. Settings + seed + placements fully
//! determine the simulation, so a record doubles as a compact replay
//! script for AI-training pipelines.

use serde::{Deserialize, Serialize};

use crate::board::Superpower;
use crate::core::{GameConfig, PlayerId};
use crate::engine::{EndReason, Scores};
use crate::error::GameError;
use crate::session::{GameSession, Stage};

/// One accepted token placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPlacement {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
    /// Superpower rolled at placement, if any.
    pub superpower: Option<Superpower>,
    /// Order of placement, 0-based, for strategy analysis.
    pub move_number: u32,
}

/// Final outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `None` for a draw.
    pub winner: Option<PlayerId>,
    /// Living-cell counts on the final board.
    pub final_scores: Scores,
    /// Generations elapsed before termination.
    pub generations: u32,
    /// What ended the simulation.
    pub end_reason: EndReason,
}

/// Complete persisted record of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Session configuration the game ran under.
    pub settings: GameConfig,
    /// Seed of every random draw in the run.
    pub seed: u64,
    /// Accepted placements, in order.
    pub placements: Vec<TokenPlacement>,
    /// Final outcome.
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Encode to a compact binary blob for storage or upload.
    pub fn encode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a blob produced by [`GameRecord::encode`].
    pub fn decode(bytes: &[u8]) -> bincode::Result<GameRecord> {
        bincode::deserialize(bytes)
    }

    /// Re-run the recorded game from scratch.
    ///
    /// Rebuilds a session from the recorded settings and seed,
    /// re-applies every placement, and drives the simulation to
    /// termination. Because the seed is recorded, superpower rolls
    /// and Ghost/Replicator branches repeat exactly, so the returned
    /// session's outcome matches [`GameRecord::outcome`].
    pub fn replay(&self) -> Result<GameSession, GameError> {
        let mut session = GameSession::new(self.settings.clone(), self.seed)?;
        for placement in &self.placements {
            session.place_token(placement.row, placement.col, placement.player)?;
        }

        debug_assert!(
            session.placements().eq(self.placements.iter()),
            "Replayed placements diverged from the record"
        );

        // Terminates: the generation cap forces an end at the latest.
        while session.stage() == Stage::Simulation {
            session.advance_generation();
        }
        Ok(session)
    }
}
