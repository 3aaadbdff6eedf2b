//! The seven superpower kinds.
//!
//! A superpower locally overrides the standard birth/survival rule
//! evaluation for its cell. Kinds are wire-encoded as 1-7; kind 0
//! ("no superpower") is represented as `None` at the type level.

use serde::{Deserialize, Serialize};

/// Per-cell rule override, one of seven fixed variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Superpower {
    /// Extra durability: survives with any living neighbor.
    Tank,
    /// Enhanced reproduction: births with two or more neighbors.
    Spreader,
    /// Survives harsh conditions: isolation or overcrowding.
    Survivor,
    /// Randomly phases out of (and into) existence.
    Ghost,
    /// Fast multiplication: chance-based bonus births.
    Replicator,
    /// Very robust survival; its cells carry battle scars.
    Destroyer,
    /// Combines Tank, Survivor, and Spreader abilities.
    Hybrid,
}

impl Superpower {
    /// Every kind, in wire order.
    pub const ALL: [Superpower; 7] = [
        Superpower::Tank,
        Superpower::Spreader,
        Superpower::Survivor,
        Superpower::Ghost,
        Superpower::Replicator,
        Superpower::Destroyer,
        Superpower::Hybrid,
    ];

    /// Wire encoding (1-7).
    #[must_use]
    pub const fn kind(self) -> u8 {
        match self {
            Superpower::Tank => 1,
            Superpower::Spreader => 2,
            Superpower::Survivor => 3,
            Superpower::Ghost => 4,
            Superpower::Replicator => 5,
            Superpower::Destroyer => 6,
            Superpower::Hybrid => 7,
        }
    }

    /// Decode a wire kind. 0 and anything above 7 decode to `None`.
    #[must_use]
    pub const fn from_kind(kind: u8) -> Option<Superpower> {
        match kind {
            1 => Some(Superpower::Tank),
            2 => Some(Superpower::Spreader),
            3 => Some(Superpower::Survivor),
            4 => Some(Superpower::Ghost),
            5 => Some(Superpower::Replicator),
            6 => Some(Superpower::Destroyer),
            7 => Some(Superpower::Hybrid),
            _ => None,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Superpower::Tank => "Tank",
            Superpower::Spreader => "Spreader",
            Superpower::Survivor => "Survivor",
            Superpower::Ghost => "Ghost",
            Superpower::Replicator => "Replicator",
            Superpower::Destroyer => "Destroyer",
            Superpower::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for Superpower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
