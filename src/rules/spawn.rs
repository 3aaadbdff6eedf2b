//! Superpower spawn rolls.

use crate::board::Superpower;
use crate::core::{GameConfig, GameRng};

/// Roll an optional superpower for a newly placed or newly born cell.
///
/// Gated by the config's spawn percentage; on success the kind is a
/// uniform pick among the enabled set. The same mechanism serves
/// token placement and simulation births.
#[must_use]
pub fn roll_superpower(config: &GameConfig, rng: &mut GameRng) -> Option<Superpower> {
    if config.enabled_superpowers.is_empty() {
        return None;
    }
    if !rng.gen_bool(f64::from(config.superpower_percent) / 100.0) {
        return None;
    }
    rng.choose(&config.enabled_superpowers).copied()
}
