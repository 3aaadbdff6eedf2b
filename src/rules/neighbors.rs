//! Neighbor analysis over the 8-connected Moore neighborhood.
//!
//! The grid is bounded: positions past an edge are simply not alive,
//! there is no wraparound. Both functions are pure and scan at most
//! eight cells.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::PlayerId;

/// Relative offsets of the Moore neighborhood.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the living cells among the 8 grid-adjacent positions.
///
/// Always in 0..=8.
#[must_use]
pub fn live_neighbor_count(board: &Board, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || c < 0 {
            continue;
        }
        if let Some(cell) = board.get(r as usize, c as usize) {
            if cell.alive {
                count += 1;
            }
        }
    }
    count
}

/// Collect the owner of each living, owned neighbor.
///
/// Duplicates are kept: the list feeds majority voting during birth
/// ownership resolution. At most 8 entries, stack-allocated.
#[must_use]
pub fn neighbor_owners(board: &Board, row: usize, col: usize) -> SmallVec<[PlayerId; 8]> {
    let mut owners = SmallVec::new();
    for (dr, dc) in OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || c < 0 {
            continue;
        }
        if let Some(cell) = board.get(r as usize, c as usize) {
            if cell.alive {
                if let Some(owner) = cell.owner {
                    owners.push(owner);
                }
            }
        }
    }
    owners
}
