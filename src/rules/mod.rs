//! Rule logic: neighbor analysis, ownership resolution, per-cell rule
//! evaluation, and superpower spawn rolls.
//!
//! Everything here is pure over its inputs (the RNG is an explicit
//! input); the simulation engine composes these into generation steps.

pub mod evaluator;
pub mod neighbors;
pub mod ownership;
pub mod spawn;

pub use evaluator::{evaluate, Verdict};
pub use neighbors::{live_neighbor_count, neighbor_owners};
pub use ownership::resolve_owner;
pub use spawn::roll_superpower;
