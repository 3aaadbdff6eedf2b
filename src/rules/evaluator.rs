//! Per-cell rule evaluation.
//!
//! `evaluate` decides whether a cell lives in the next generation,
//! applying either the standard birth/survival rules or the cell's
//! superpower override, and computes the cell's updated memory flags.
//!
//! Random branches (Ghost, Replicator) take one independent draw per
//! branch per cell per generation from the injected [`GameRng`], so a
//! session replayed with the same seed takes identical branches.

use crate::board::{Cell, Memory, Superpower};
use crate::core::{GameRng, RuleSet};

/// Chance that a living Ghost cell phases out despite surviving the
/// rules.
const GHOST_FADE_CHANCE: f64 = 0.05;
/// Chance that a dead Ghost cell with at least one living neighbor
/// phases in despite failing the birth rules.
const GHOST_PHASE_IN_CHANCE: f64 = 0.10;
/// Chance that a dead Replicator cell with at least two living
/// neighbors births outside the rules.
const REPLICATOR_BONUS_CHANCE: f64 = 0.30;

/// Outcome of evaluating one cell for the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Should the cell be alive next generation?
    pub should_live: bool,
    /// Updated memory; the engine commits it only if the cell lives.
    pub memory: Memory,
}

/// Decide a cell's fate from its live-neighbor count.
///
/// `live_neighbors` must come from the previous generation's board;
/// the caller guarantees it is in 0..=8.
#[must_use]
pub fn evaluate(
    cell: &Cell,
    live_neighbors: u8,
    birth: RuleSet,
    survival: RuleSet,
    rng: &mut GameRng,
) -> Verdict {
    debug_assert!(live_neighbors <= 8, "Neighbor count out of range");

    let standard_survival = survival.contains(live_neighbors);
    let standard_birth = birth.contains(live_neighbors);
    let mut memory = cell.memory;

    let should_live = match cell.superpower {
        None => {
            if cell.alive {
                standard_survival
            } else {
                standard_birth
            }
        }

        // Tank: extra durability, any living neighbor keeps it alive.
        Some(Superpower::Tank) => {
            if cell.alive {
                let lives = standard_survival || live_neighbors >= 1;
                if lives && !standard_survival {
                    memory = memory.with(Memory::SURVIVED_DEATH);
                }
                lives
            } else {
                standard_birth
            }
        }

        // Spreader: births with fewer neighbors than normal.
        Some(Superpower::Spreader) => {
            if cell.alive {
                standard_survival
            } else {
                let lives = standard_birth || live_neighbors >= 2;
                if lives && !standard_birth {
                    memory = memory.with(Memory::SPREAD);
                }
                lives
            }
        }

        // Survivor: endures isolation and overcrowding.
        Some(Superpower::Survivor) => {
            if cell.alive {
                let lives = standard_survival || live_neighbors <= 1 || live_neighbors >= 6;
                if lives && !standard_survival {
                    memory = memory.with(Memory::VETERAN);
                }
                lives
            } else {
                standard_birth
            }
        }

        // Ghost: standard rules, then a chance to phase out or in.
        Some(Superpower::Ghost) => {
            if cell.alive {
                let mut lives = standard_survival;
                if lives && rng.gen_bool(GHOST_FADE_CHANCE) {
                    lives = false;
                }
                lives
            } else {
                let mut lives = standard_birth;
                if !lives && live_neighbors > 0 && rng.gen_bool(GHOST_PHASE_IN_CHANCE) {
                    lives = true;
                }
                lives
            }
        }

        // Replicator: chance-based bonus births at two+ neighbors.
        Some(Superpower::Replicator) => {
            if cell.alive {
                standard_survival
            } else {
                standard_birth
                    || (live_neighbors >= 2 && rng.gen_bool(REPLICATOR_BONUS_CHANCE))
            }
        }

        // Destroyer: very robust survival; its cells stay scarred.
        Some(Superpower::Destroyer) => {
            if cell.alive {
                memory = memory.with(Memory::BATTLE_SCARRED);
                standard_survival || live_neighbors >= 1
            } else {
                standard_birth
            }
        }

        // Hybrid: Tank + Survivor survival, Spreader birth.
        Some(Superpower::Hybrid) => {
            if cell.alive {
                // live_neighbors >= 1 or <= 1 covers every count; a
                // Hybrid never dies to the rules.
                let lives =
                    standard_survival || live_neighbors >= 1 || live_neighbors <= 1;
                if lives && !standard_survival {
                    memory = memory.with(Memory::VETERAN | Memory::SURVIVED_DEATH);
                }
                lives
            } else {
                let lives = standard_birth || live_neighbors >= 2;
                if lives && !standard_birth {
                    memory = memory.with(Memory::SPREAD);
                }
                lives
            }
        }
    };

    Verdict {
        should_live,
        memory,
    }
}
