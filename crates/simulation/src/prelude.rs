//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use investdash_simulation::prelude::*;
//! ```

// Lucky draw
pub use crate::lucky_draw::{DrawOutcome, LuckyDraw};

// Runner
pub use crate::draw_runner::{DrawRunner, DrawSummary};
