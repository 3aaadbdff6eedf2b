//! One full generation step and terminal detection.
//!
//! `step` reads the previous board only and assembles a brand-new
//! one, so neighbor counts and ownership always reflect the prior
//! generation exactly. Cells are visited in row-major order; with an
//! injected RNG that makes every step reproducible.

use log::{debug, info};

use crate::board::{Board, Cell};
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::engine::history::FingerprintHistory;
use crate::engine::scoring::{score, Scores};
use crate::rules::{evaluate, live_neighbor_count, neighbor_owners, resolve_owner, roll_superpower};

use serde::{Deserialize, Serialize};

/// Why a simulation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A generation pass flipped no cell and the board is non-empty.
    StableState,
    /// A generation pass flipped no cell and every cell is dead.
    Extinction,
    /// The board revisited a configuration from the recent history.
    Cycle,
    /// The configured generation cap was reached.
    MaxGenerations,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::StableState => "stable state",
            EndReason::Extinction => "extinction",
            EndReason::Cycle => "cycle",
            EndReason::MaxGenerations => "max generations",
        };
        f.write_str(text)
    }
}

/// Terminal outcome of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnd {
    /// What terminated the simulation.
    pub reason: EndReason,
    /// The player with strictly more living cells, if any.
    pub winner: Option<PlayerId>,
    /// Final living-cell counts.
    pub scores: Scores,
}

/// Result of stepping one generation.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// The next generation's board.
    pub board: Board,
    /// How many cells flipped between alive and dead.
    pub changes: u32,
    /// Terminal outcome, when this step ended the game.
    pub end: Option<GameEnd>,
}

/// Advance the board by one generation.
///
/// `generation` is the number of the generation being produced (the
/// session increments its counter to this value on return). The
/// history is consulted for cycle detection and updated with the new
/// board's fingerprint.
#[must_use]
pub fn step(
    prev: &Board,
    config: &GameConfig,
    history: &mut FingerprintHistory,
    rng: &mut GameRng,
    generation: u32,
) -> StepOutcome {
    let size = prev.size();
    let mut next = prev.clone();
    let mut changes = 0u32;

    for row in 0..size {
        for col in 0..size {
            let cell = prev.cell(row, col);
            let live_neighbors = live_neighbor_count(prev, row, col);
            debug_assert!(live_neighbors <= 8, "Neighbor count out of range");

            let verdict = evaluate(
                cell,
                live_neighbors,
                config.birth_rules,
                config.survival_rules,
                rng,
            );

            if verdict.should_live && !cell.alive {
                // Birth: the cell goes to whichever player dominates
                // its living neighbors. No owner means no claim, so
                // the cell stays dead.
                let owners = neighbor_owners(prev, row, col);
                if let Some(owner) = resolve_owner(&owners) {
                    // A kind already set by an override (Ghost
                    // phase-in and friends) is kept; otherwise roll.
                    let superpower = cell
                        .superpower
                        .or_else(|| roll_superpower(config, rng));
                    *next.cell_mut(row, col) = Cell {
                        owner: Some(owner),
                        alive: true,
                        superpower,
                        memory: verdict.memory,
                    };
                    changes += 1;
                }
            } else if !verdict.should_live && cell.alive {
                // Death resets the whole cell atomically.
                *next.cell_mut(row, col) = Cell::DEAD;
                changes += 1;
            } else if cell.alive {
                // Only living cells retain updated memory.
                next.cell_mut(row, col).memory = verdict.memory;
            }

            debug_assert!(
                next.cell(row, col).invariant_holds(),
                "Dead cell left with owner, superpower, or memory at ({}, {})",
                row,
                col
            );
        }
    }

    debug!("generation {}: {} cells changed", generation, changes);

    let end = detect_end(&next, config, history, changes, generation);
    if let Some(end) = &end {
        info!(
            "simulation ended at generation {}: {} ({})",
            generation, end.reason, end.scores
        );
    }

    StepOutcome {
        board: next,
        changes,
        end,
    }
}

fn detect_end(
    board: &Board,
    config: &GameConfig,
    history: &mut FingerprintHistory,
    changes: u32,
    generation: u32,
) -> Option<GameEnd> {
    let finish = |reason: EndReason| {
        let scores = score(board);
        Some(GameEnd {
            reason,
            winner: scores.winner(),
            scores,
        })
    };

    if changes == 0 {
        let reason = if board.live_count() == 0 {
            EndReason::Extinction
        } else {
            EndReason::StableState
        };
        return finish(reason);
    }

    let fingerprint = board.fingerprint();
    let cycled = history.contains(&fingerprint);
    history.push(fingerprint);
    if cycled {
        return finish(EndReason::Cycle);
    }

    if generation >= config.max_generations {
        return finish(EndReason::MaxGenerations);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Memory, Superpower};

    fn conway() -> GameConfig {
        GameConfig::new()
    }

    fn place(board: &mut Board, positions: &[(usize, usize)], player: PlayerId) {
        for &(row, col) in positions {
            *board.cell_mut(row, col) = Cell::token(player, None);
        }
    }

    #[test]
    fn test_isolated_cell_dies_and_resets() {
        let mut board = Board::new(10);
        place(&mut board, &[(5, 5)], PlayerId::P0);

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        assert_eq!(outcome.changes, 1);
        assert!(outcome.end.is_none());
        assert_eq!(*outcome.board.cell(5, 5), Cell::DEAD);
    }

    #[test]
    fn test_empty_pass_is_extinction() {
        let board = Board::new(10);
        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);

        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        assert_eq!(outcome.changes, 0);
        let end = outcome.end.expect("empty board is terminal");
        assert_eq!(end.reason, EndReason::Extinction);
        assert_eq!(end.winner, None);
        assert_eq!(end.scores.total(), 0);
    }

    #[test]
    fn test_block_is_stable() {
        let mut board = Board::new(10);
        place(&mut board, &[(4, 4), (4, 5), (5, 4), (5, 5)], PlayerId::P1);

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        assert_eq!(outcome.changes, 0);
        let end = outcome.end.expect("block is terminal");
        assert_eq!(end.reason, EndReason::StableState);
        assert_eq!(end.winner, Some(PlayerId::P1));
        assert_eq!(end.scores.get(PlayerId::P1), 4);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut board = Board::new(10);
        place(&mut board, &[(4, 3), (4, 4), (4, 5)], PlayerId::P0);

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        // Horizontal becomes vertical: ends die, top/bottom born.
        assert_eq!(outcome.changes, 4);
        assert!(outcome.board.cell(3, 4).alive);
        assert!(outcome.board.cell(4, 4).alive);
        assert!(outcome.board.cell(5, 4).alive);
        assert!(!outcome.board.cell(4, 3).alive);
        assert!(!outcome.board.cell(4, 5).alive);
    }

    #[test]
    fn test_blinker_cycle_detected_with_seeded_history() {
        let mut board = Board::new(10);
        place(&mut board, &[(4, 3), (4, 4), (4, 5)], PlayerId::P0);

        let mut history = FingerprintHistory::new();
        history.push(board.fingerprint());
        let mut rng = GameRng::new(1);
        let config = conway();

        let first = step(&board, &config, &mut history, &mut rng, 1);
        assert!(first.end.is_none());

        let second = step(&first.board, &config, &mut history, &mut rng, 2);
        let end = second.end.expect("blinker revisits its start");
        assert_eq!(end.reason, EndReason::Cycle);
        assert_eq!(end.winner, Some(PlayerId::P0));
        assert_eq!(end.scores.get(PlayerId::P0), 3);
        assert_eq!(end.scores.get(PlayerId::P1), 0);
    }

    #[test]
    fn test_birth_takes_majority_owner() {
        let mut board = Board::new(10);
        place(&mut board, &[(4, 3), (4, 4)], PlayerId::P0);
        place(&mut board, &[(4, 5)], PlayerId::P1);

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        // (3, 4) and (5, 4) see neighbors {P0, P0, P1}.
        assert_eq!(outcome.board.cell(3, 4).owner, Some(PlayerId::P0));
        assert_eq!(outcome.board.cell(5, 4).owner, Some(PlayerId::P0));
    }

    #[test]
    fn test_no_owner_means_no_birth() {
        // Three live unowned cells would trigger a standard birth at
        // (5, 5); with nobody to claim it, the cell must stay dead.
        let mut board = Board::new(10);
        for &(row, col) in &[(4, 4), (4, 5), (4, 6)] {
            *board.cell_mut(row, col) = Cell {
                owner: None,
                alive: true,
                superpower: None,
                memory: Memory::EMPTY,
            };
        }

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        assert!(!outcome.board.cell(5, 5).alive);
        assert!(!outcome.board.cell(3, 5).alive);
    }

    #[test]
    fn test_born_cells_can_roll_superpowers() {
        let mut board = Board::new(10);
        place(&mut board, &[(4, 3), (4, 4), (4, 5)], PlayerId::P0);

        let config = conway().with_superpowers(vec![Superpower::Tank], 100);
        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &config, &mut history, &mut rng, 1);

        // Both births roll at 100% with a single enabled kind.
        assert_eq!(outcome.board.cell(3, 4).superpower, Some(Superpower::Tank));
        assert_eq!(outcome.board.cell(5, 4).superpower, Some(Superpower::Tank));
        // The surviving center was not born this step: no roll.
        assert_eq!(outcome.board.cell(4, 4).superpower, None);
    }

    #[test]
    fn test_death_clears_superpower_and_memory() {
        let mut board = Board::new(10);
        *board.cell_mut(5, 5) = Cell {
            owner: Some(PlayerId::P1),
            alive: true,
            superpower: Some(Superpower::Spreader),
            memory: Memory::SPREAD,
        };

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        assert_eq!(*outcome.board.cell(5, 5), Cell::DEAD);
    }

    #[test]
    fn test_tank_pair_stabilizes_with_memory() {
        let mut board = Board::new(10);
        *board.cell_mut(4, 4) = Cell::token(PlayerId::P0, Some(Superpower::Tank));
        *board.cell_mut(4, 5) = Cell::token(PlayerId::P0, Some(Superpower::Tank));

        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &conway(), &mut history, &mut rng, 1);

        // One neighbor each: the override keeps both alive, nothing
        // else changes, so the board is already stable.
        assert_eq!(outcome.changes, 0);
        let end = outcome.end.expect("tank pair is terminal");
        assert_eq!(end.reason, EndReason::StableState);
        assert_eq!(end.winner, Some(PlayerId::P0));
        assert!(outcome
            .board
            .cell(4, 4)
            .memory
            .contains(Memory::SURVIVED_DEATH));
    }

    #[test]
    fn test_generation_cap_forces_terminal() {
        let mut board = Board::new(10);
        place(&mut board, &[(4, 3), (4, 4), (4, 5)], PlayerId::P0);

        let config = conway().with_max_generations(1);
        let mut history = FingerprintHistory::new();
        let mut rng = GameRng::new(1);
        let outcome = step(&board, &config, &mut history, &mut rng, 1);

        // The blinker is still changing, but the cap ends the game.
        let end = outcome.end.expect("cap reached");
        assert_eq!(end.reason, EndReason::MaxGenerations);
        assert_eq!(end.winner, Some(PlayerId::P0));
    }

    #[test]
    fn test_step_is_deterministic_for_a_seed() {
        let mut board = Board::new(12);
        place(&mut board, &[(4, 3), (4, 4), (4, 5), (6, 6)], PlayerId::P0);
        place(&mut board, &[(8, 8), (8, 9), (9, 8)], PlayerId::P1);

        let config = conway().with_superpowers(Superpower::ALL.to_vec(), 50);

        let run = |seed: u64| {
            let mut history = FingerprintHistory::new();
            let mut rng = GameRng::new(seed);
            let mut current = board.clone();
            for generation in 1..=5 {
                let outcome = step(&current, &config, &mut history, &mut rng, generation);
                current = outcome.board;
                if outcome.end.is_some() {
                    break;
                }
            }
            current
        };

        assert_eq!(run(99), run(99));
    }
}
