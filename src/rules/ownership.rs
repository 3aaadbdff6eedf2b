//! Birth ownership resolution by neighbor majority.

use rustc_hash::FxHashMap;

use crate::core::PlayerId;

/// Decide which player claims a newly born cell.
///
/// Tallies the owners of the surrounding living cells and returns the
/// player with the strictly largest count. Ties go to the lower
/// player id. Returns `None` for an empty list; the engine treats
/// that as "the cell cannot be claimed" and skips the birth.
#[must_use]
pub fn resolve_owner(neighbor_owners: &[PlayerId]) -> Option<PlayerId> {
    if neighbor_owners.is_empty() {
        return None;
    }

    let mut tally: FxHashMap<PlayerId, u32> = FxHashMap::default();
    for &owner in neighbor_owners {
        *tally.entry(owner).or_insert(0) += 1;
    }

    // Scanning in id order makes the tie-break deterministic: a later
    // player must strictly beat the standing count to take over.
    let mut best: Option<(PlayerId, u32)> = None;
    for player in PlayerId::both() {
        if let Some(&count) = tally.get(&player) {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((player, count)),
            }
        }
    }
    best.map(|(player, _)| player)
}
