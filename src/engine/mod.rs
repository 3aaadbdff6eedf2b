//! Simulation engine: generation stepping, cycle detection, scoring.

pub mod history;
pub mod scoring;
pub mod step;

pub use history::{FingerprintHistory, CYCLE_WINDOW};
pub use scoring::{score, Scores};
pub use step::{step, EndReason, GameEnd, StepOutcome};
