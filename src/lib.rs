//! Othello (Reversi) engine with a minimax AI
//!
//! An Othello engine implementing the full game rules:
//! - Standard 8x8 board with the four-disc diagonal start
//! - Flanking capture: a move must trap at least one run of opponent
//!   discs between the placed disc and an existing friendly disc
//! - Pass when a side has no legal move; game over when neither side has one
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and adjacency queries
//! - [`rules`]: Move legality, flanking captures, positional classifiers
//! - [`eval`]: Weighted positional evaluation
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`game`]: Turn orchestration and game-over detection
//! - [`engine`]: AI player configuration (weights + search depth)
//! - [`ui`]: Native GUI (eframe/egui)
//!
//! # Quick Start
//!
//! ```
//! use othello::{AiPlayer, Game};
//!
//! let mut game = Game::new();
//! let ai = AiPlayer::default();
//!
//! // AI plays the opening move for Black
//! let side = game.side_to_move();
//! if let Some(choice) = ai.choose_move(game.board(), side) {
//!     let placed = game.place_piece(side, choice.pos).unwrap();
//!     println!("AI played {:?}, flipping {} discs", placed.pos, placed.flipped.len());
//! }
//! ```
//!
//! # Evaluation
//!
//! Positions are scored as a weighted sum of six factors: disc count,
//! mobility, stability, corner control, corner-adjacency (penalized), and
//! frontier exposure (penalized). The weights are plain configuration data
//! on [`AiPlayer`], so two AIs with different personalities are just two
//! values of the same type.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Disc, Pos, BOARD_SIZE};
pub use engine::{AiPlayer, MoveChoice, PlayerKind};
pub use eval::Weights;
pub use game::{Game, GameError, PlacedMove};
