//! Position evaluation for Othello
//!
//! A position's value for a side is a weighted sum of six positional
//! factors. The weights are configuration data, not behavior: they live on
//! the AI player and are passed into every evaluation.

pub mod heuristic;
pub mod weights;

// Re-exports
pub use heuristic::{evaluate, evaluate_detailed};
pub use weights::{ScoreBreakdown, Weights};
