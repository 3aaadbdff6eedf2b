//! A single grid position and its persistent memory flags.

use serde::{Deserialize, Serialize};

use super::Superpower;
use crate::core::PlayerId;

/// Bitset of persistent historical flags attached to a living cell.
///
/// Memory survives from generation to generation while the cell stays
/// alive and is cleared to zero the moment it dies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Memory(u8);

impl Memory {
    /// No flags set.
    pub const EMPTY: Memory = Memory(0);
    /// Survived a generation the standard rules would have killed.
    pub const SURVIVED_DEATH: Memory = Memory(1 << 0);
    /// Contributed to the birth of a neighboring cell.
    pub const CAUSED_BIRTH: Memory = Memory(1 << 1);
    /// Veteran of repeated harsh conditions.
    pub const VETERAN: Memory = Memory(1 << 2);
    /// Was born outside the standard birth rules.
    pub const SPREAD: Memory = Memory(1 << 3);
    /// Carried by Destroyer cells while they live.
    pub const BATTLE_SCARRED: Memory = Memory(1 << 4);

    /// Set the given flag(s), returning the combined memory.
    #[must_use]
    pub const fn with(self, flag: Memory) -> Memory {
        Memory(self.0 | flag.0)
    }

    /// Are all of the given flag's bits set?
    #[must_use]
    pub const fn contains(self, flag: Memory) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// Is any flag set?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits, for fingerprints and wire formats.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for Memory {
    type Output = Memory;

    fn bitor(self, rhs: Memory) -> Memory {
        self.with(rhs)
    }
}

/// One grid position.
///
/// Invariant: a dead cell has no owner, no superpower, and empty
/// memory. The engine resets all three atomically on death.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Which player claims this cell. `None` for never-claimed or
    /// cleared cells.
    pub owner: Option<PlayerId>,

    /// Does the cell currently hold a living token?
    pub alive: bool,

    /// Rule override attached to this cell, if any.
    pub superpower: Option<Superpower>,

    /// Persistent historical flags; empty unless alive.
    pub memory: Memory,
}

impl Cell {
    /// An empty dead cell.
    pub const DEAD: Cell = Cell {
        owner: None,
        alive: false,
        superpower: None,
        memory: Memory::EMPTY,
    };

    /// A freshly placed living token.
    #[must_use]
    pub const fn token(owner: PlayerId, superpower: Option<Superpower>) -> Cell {
        Cell {
            owner: Some(owner),
            alive: true,
            superpower,
            memory: Memory::EMPTY,
        }
    }

    /// Does this cell satisfy the dead-cell invariant?
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        self.alive
            || (self.owner.is_none() && self.superpower.is_none() && self.memory.is_empty())
    }
}
