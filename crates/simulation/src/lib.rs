//! Randomized outcomes for the InvestDash demo.
//!
//! - Lucky draw selector with an injectable random source
//! - Repeated-draw runner that aggregates outcomes

/// Prelude module for convenient imports.
pub mod prelude;

/// Repeated draws and aggregation.
pub mod draw_runner;
/// Single lucky draw.
pub mod lucky_draw;
