//! Scoring and winner determination.
//!
//! Scores count *living* cells only, never historical or cumulative
//! counts. A dead cell contributes nothing even if it somehow still
//! carries an owner.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, PlayerMap};

/// Living-cell counts per player for one board snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    counts: PlayerMap<u32>,
}

impl Scores {
    /// A player's living-cell count.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.counts[player]
    }

    /// Total living owned cells.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, &c)| c).sum()
    }

    /// The player with strictly more living cells, or `None` on a tie
    /// (including 0-0).
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let p0 = self.counts[PlayerId::P0];
        let p1 = self.counts[PlayerId::P1];
        match p0.cmp(&p1) {
            std::cmp::Ordering::Greater => Some(PlayerId::P0),
            std::cmp::Ordering::Less => Some(PlayerId::P1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.counts[PlayerId::P0],
            self.counts[PlayerId::P1]
        )
    }
}

/// Count living cells per player on a board snapshot.
#[must_use]
pub fn score(board: &Board) -> Scores {
    let mut counts: PlayerMap<u32> = PlayerMap::with_value(0);
    for (_, _, cell) in board.iter() {
        if cell.alive {
            if let Some(owner) = cell.owner {
                counts[owner] += 1;
            }
        }
    }
    Scores { counts }
}
