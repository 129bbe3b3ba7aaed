//! Shared helpers for the game-reviews test suites: log capture and
//! collision-free fixture values.

pub mod logging;
pub mod unique_helpers;
