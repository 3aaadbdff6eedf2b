//! Game session lifecycle: placement, simulation, pause, finish.
//!
//! `GameSession` owns the board and the coarse game state machine:
//!
//! ```text
//! placement -> simulation <-> paused
//!                  |
//!                  v
//!              finished
//! ```
//!
//! Placement consumes per-player token quotas under strict turn order
//! (all of player 0's tokens, then player 1's). Exhausting every
//! quota starts the simulation. An external timer then calls
//! [`GameSession::advance_generation`] once per tick; the call is a
//! no-op outside the simulation stage, so pausing is nothing more
//! than a state transition. No engine state outlives
//! [`GameSession::reset`].

pub mod record;

use im::Vector;
use log::{debug, info};

use crate::board::{Board, Cell};
use crate::core::{GameConfig, GameMode, GameRng, PlayerId, PlayerMap};
use crate::engine::{score, step, FingerprintHistory, GameEnd, Scores};
use crate::error::{ConfigError, PlacementError};
use crate::rules::roll_superpower;

pub use record::{GameOutcome, GameRecord, TokenPlacement};

use serde::{Deserialize, Serialize};

/// Coarse game lifecycle stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Players are seeding the board from their token quotas.
    Placement,
    /// The external timer is driving generation steps.
    Simulation,
    /// Stepping suspended; the board is frozen.
    Paused,
    /// Terminal. The session is immutable apart from `reset`.
    Finished,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Stage::Placement => "placement",
            Stage::Simulation => "simulation",
            Stage::Paused => "paused",
            Stage::Finished => "finished",
        };
        f.write_str(text)
    }
}

/// A complete game run: configuration, board, lifecycle state, and
/// the deterministic RNG every random draw goes through.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    rng: GameRng,
    board: Board,
    stage: Stage,
    generation: u32,
    tokens_left: PlayerMap<u32>,
    active_player: PlayerId,
    history: FingerprintHistory,
    placements: Vector<TokenPlacement>,
    end: Option<GameEnd>,
}

impl GameSession {
    /// Create a session from a validated configuration.
    ///
    /// The seed drives every random draw of the run; record it (the
    /// produced [`GameRecord`] does) and the whole game replays
    /// exactly.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let tokens_left = PlayerMap::new(|player| match config.mode {
            GameMode::Training if player == PlayerId::P1 => 0,
            _ => config.tokens_per_player,
        });

        info!(
            "new {:?} session: board {}x{}, {} tokens per player, seed {}",
            config.mode, config.board_size, config.board_size, config.tokens_per_player, seed
        );

        Ok(Self {
            board: Board::new(config.board_size),
            seed,
            rng: GameRng::new(seed),
            stage: Stage::Placement,
            generation: 0,
            tokens_left,
            active_player: PlayerId::P0,
            history: FingerprintHistory::new(),
            placements: Vector::new(),
            end: None,
            config,
        })
    }

    // === Placement ===

    /// Place a token for `player` at (row, col).
    ///
    /// Accepted only during the placement stage, on an unclaimed
    /// cell, by the active player, while their quota lasts. An
    /// accepted placement rolls an optional superpower with the same
    /// spawn mechanism simulation births use. Rejection leaves the
    /// session untouched.
    pub fn place_token(
        &mut self,
        row: usize,
        col: usize,
        player: PlayerId,
    ) -> Result<(), PlacementError> {
        if self.stage != Stage::Placement {
            return Err(PlacementError::WrongStage { stage: self.stage });
        }
        if !self.board.in_bounds(row, col) {
            return Err(PlacementError::OutOfBounds { row, col });
        }
        if self.board.cell(row, col).owner.is_some() {
            return Err(PlacementError::Occupied { row, col });
        }
        if self.tokens_left[player] == 0 {
            return Err(PlacementError::NoTokensLeft { player });
        }
        if player != self.active_player {
            return Err(PlacementError::NotYourTurn { player });
        }

        let superpower = roll_superpower(&self.config, &mut self.rng);
        *self.board.cell_mut(row, col) = Cell::token(player, superpower);
        self.tokens_left[player] -= 1;

        let move_number = self.placements.len() as u32;
        self.placements.push_back(TokenPlacement {
            row,
            col,
            player,
            superpower,
            move_number,
        });
        debug!(
            "{} placed at ({}, {}), {} tokens left",
            player, row, col, self.tokens_left[player]
        );

        self.advance_turn();
        Ok(())
    }

    /// Hand the turn to the next player with tokens, or start the
    /// simulation once every quota is spent.
    fn advance_turn(&mut self) {
        if self.tokens_left[self.active_player] > 0 {
            return;
        }
        match PlayerId::both().find(|&p| self.tokens_left[p] > 0) {
            Some(next) => self.active_player = next,
            None => self.begin_simulation(),
        }
    }

    fn begin_simulation(&mut self) {
        self.stage = Stage::Simulation;
        self.history.clear();
        // Seeding the history with the starting position lets a
        // period-2 oscillator terminate on its second generation.
        self.history.push(self.board.fingerprint());
        info!("placement complete, simulation started");
    }

    // === Simulation ===

    /// Advance the simulation by one generation.
    ///
    /// Called by the external tick timer. A no-op unless the session
    /// is in the simulation stage, so repeated calls while paused or
    /// finished never change the board or the generation counter.
    pub fn advance_generation(&mut self) {
        if self.stage != Stage::Simulation {
            return;
        }

        let generation = self.generation + 1;
        let outcome = step(
            &self.board,
            &self.config,
            &mut self.history,
            &mut self.rng,
            generation,
        );
        self.board = outcome.board;
        self.generation = generation;

        if let Some(end) = outcome.end {
            self.end = Some(end);
            self.stage = Stage::Finished;
        }
    }

    /// Suspend stepping. A no-op unless simulating.
    pub fn pause(&mut self) {
        if self.stage == Stage::Simulation {
            self.stage = Stage::Paused;
        }
    }

    /// Resume stepping. A no-op unless paused.
    pub fn resume(&mut self) {
        if self.stage == Stage::Paused {
            self.stage = Stage::Simulation;
        }
    }

    /// Discard all run state and start a fresh placement stage from
    /// the same configuration.
    pub fn reset(&mut self, seed: u64) {
        info!("session reset with seed {}", seed);
        self.board = Board::new(self.config.board_size);
        self.seed = seed;
        self.rng = GameRng::new(seed);
        self.stage = Stage::Placement;
        self.generation = 0;
        self.tokens_left = PlayerMap::new(|player| match self.config.mode {
            GameMode::Training if player == PlayerId::P1 => 0,
            _ => self.config.tokens_per_player,
        });
        self.active_player = PlayerId::P0;
        self.history.clear();
        self.placements = Vector::new();
        self.end = None;
    }

    // === Queries ===

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed this run was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view of the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Generations simulated so far.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The winner, once the session is finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.end.and_then(|end| end.winner)
    }

    /// Terminal outcome details, once finished.
    #[must_use]
    pub fn end(&self) -> Option<&GameEnd> {
        self.end.as_ref()
    }

    /// Living-cell counts on the current board.
    #[must_use]
    pub fn scores(&self) -> Scores {
        score(&self.board)
    }

    /// Remaining token quota for a player.
    #[must_use]
    pub fn tokens_left(&self, player: PlayerId) -> u32 {
        self.tokens_left[player]
    }

    /// Whose turn it is during placement.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Accepted placements, in order.
    pub fn placements(&self) -> impl Iterator<Item = &TokenPlacement> {
        self.placements.iter()
    }

    /// The persisted record of this game. `None` until finished.
    #[must_use]
    pub fn record(&self) -> Option<GameRecord> {
        let end = match (self.stage, &self.end) {
            (Stage::Finished, Some(end)) => end,
            _ => return None,
        };
        Some(GameRecord {
            settings: self.config.clone(),
            seed: self.seed,
            placements: self.placements.iter().cloned().collect(),
            outcome: GameOutcome {
                winner: end.winner,
                final_scores: end.scores,
                generations: self.generation,
                end_reason: end.reason,
            },
        })
    }
}
