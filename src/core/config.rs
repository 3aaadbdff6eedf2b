//! Session configuration: board dimensions, token quotas, automaton
//! rules, superpower settings.
//!
//! A `GameConfig` is created once at session start and never mutated
//! afterward; "play again" with different settings means a new config.
//! `GameConfig::validate` runs before any session is created, so a
//! session never observes an unusable rule table or board size.

use serde::{Deserialize, Serialize};

use crate::board::Superpower;
use crate::error::ConfigError;

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 10;
/// Largest supported board side length.
pub const MAX_BOARD_SIZE: usize = 64;
/// Generation cap applied when the simulation neither stabilizes nor
/// cycles.
pub const DEFAULT_MAX_GENERATIONS: u32 = 100;

/// A set of live-neighbor counts, in Conway rule notation.
///
/// Stored as a 9-bit mask over the counts 0..=8. `RuleSet::new([3])`
/// is the classic birth rule B3; `RuleSet::new([2, 3])` is the
/// survival rule S23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet(u16);

impl RuleSet {
    /// The empty set. Rejected by config validation but useful as a
    /// building block.
    pub const EMPTY: RuleSet = RuleSet(0);

    /// Build a rule set from neighbor counts.
    ///
    /// Panics if a count exceeds 8 (a Moore neighborhood has at most
    /// 8 cells).
    #[must_use]
    pub fn new<I: IntoIterator<Item = u8>>(counts: I) -> Self {
        let mut bits = 0u16;
        for count in counts {
            assert!(count <= 8, "Neighbor count must be 0-8");
            bits |= 1 << count;
        }
        Self(bits)
    }

    /// Classic Conway birth rule (B3).
    #[must_use]
    pub const fn conway_birth() -> Self {
        Self(1 << 3)
    }

    /// Classic Conway survival rule (S23).
    #[must_use]
    pub const fn conway_survival() -> Self {
        Self(1 << 2 | 1 << 3)
    }

    /// HighLife birth rule (B36) - has a self-replicating pattern.
    #[must_use]
    pub const fn highlife_birth() -> Self {
        Self(1 << 3 | 1 << 6)
    }

    /// Does this set contain the given neighbor count?
    #[must_use]
    pub const fn contains(self, count: u8) -> bool {
        count <= 8 && self.0 & (1 << count) != 0
    }

    /// Is the set empty?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the counts in the set, ascending.
    pub fn counts(self) -> impl Iterator<Item = u8> {
        (0u8..=8).filter(move |&c| self.contains(c))
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for count in self.counts() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", count)?;
            first = false;
        }
        Ok(())
    }
}

/// Who seeds the board during placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Both players place tokens, player 0 first.
    #[default]
    TwoPlayer,
    /// Single-player practice: only player 0 places tokens.
    Training,
}

/// Complete per-session configuration.
///
/// Built with the `with_*` methods and checked once with
/// [`GameConfig::validate`] at session creation.
///
/// ## Example
///
/// ```
/// use strife_engine::core::GameConfig;
/// use strife_engine::board::Superpower;
///
/// let config = GameConfig::new()
///     .with_board_size(20)
///     .with_tokens_per_player(12)
///     .with_superpowers(vec![Superpower::Tank, Superpower::Ghost], 25);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (the board is square).
    pub board_size: usize,

    /// Tokens each player may place during the placement stage.
    pub tokens_per_player: u32,

    /// Neighbor counts that bring a dead cell to life.
    pub birth_rules: RuleSet,

    /// Neighbor counts that keep a living cell alive.
    pub survival_rules: RuleSet,

    /// Superpower kinds that may spawn this session.
    pub enabled_superpowers: Vec<Superpower>,

    /// Chance (0-100) that a placed or born cell rolls a superpower.
    pub superpower_percent: u8,

    /// Hard cap on simulated generations.
    pub max_generations: u32,

    /// Placement mode.
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 20,
            tokens_per_player: 10,
            birth_rules: RuleSet::conway_birth(),
            survival_rules: RuleSet::conway_survival(),
            enabled_superpowers: Vec::new(),
            superpower_percent: 20,
            max_generations: DEFAULT_MAX_GENERATIONS,
            mode: GameMode::TwoPlayer,
        }
    }
}

impl GameConfig {
    /// Create a configuration with classic Conway rules and no
    /// superpowers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the per-player token quota.
    #[must_use]
    pub fn with_tokens_per_player(mut self, tokens: u32) -> Self {
        self.tokens_per_player = tokens;
        self
    }

    /// Set the birth and survival rules.
    #[must_use]
    pub fn with_rules(mut self, birth: RuleSet, survival: RuleSet) -> Self {
        self.birth_rules = birth;
        self.survival_rules = survival;
        self
    }

    /// Enable a set of superpowers with the given spawn chance (0-100).
    #[must_use]
    pub fn with_superpowers(mut self, enabled: Vec<Superpower>, percent: u8) -> Self {
        self.enabled_superpowers = enabled;
        self.superpower_percent = percent;
        self
    }

    /// Set the generation cap.
    #[must_use]
    pub fn with_max_generations(mut self, max: u32) -> Self {
        self.max_generations = max;
        self
    }

    /// Set the placement mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the configuration before a session is created.
    ///
    /// A config that passes validation can run a full session without
    /// further checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSizeOutOfRange {
                size: self.board_size,
            });
        }
        if self.birth_rules.is_empty() {
            return Err(ConfigError::EmptyBirthRules);
        }
        if self.survival_rules.is_empty() {
            return Err(ConfigError::EmptySurvivalRules);
        }
        if self.tokens_per_player == 0 {
            return Err(ConfigError::ZeroTokenQuota);
        }
        let capacity = self.board_size * self.board_size;
        let demand = self.tokens_per_player as usize * crate::core::PLAYER_COUNT;
        if demand > capacity {
            return Err(ConfigError::QuotaExceedsBoard {
                quota: self.tokens_per_player,
                capacity,
            });
        }
        if self.superpower_percent > 100 {
            return Err(ConfigError::SpawnPercentOutOfRange {
                percent: self.superpower_percent,
            });
        }
        Ok(())
    }
}
