//! AI player configuration
//!
//! The automated player is data, not behavior: a set of evaluation weights
//! plus a search depth. The GUI tags each seat with a [`PlayerKind`] and
//! asks the AI seat for a [`MoveChoice`] whenever it is on move.

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Disc, Pos};
use crate::eval::Weights;
use crate::rules::legal_moves;
use crate::search::best_move_minimax;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai(AiPlayer),
}

impl PlayerKind {
    #[inline]
    pub fn is_ai(&self) -> bool {
        matches!(self, PlayerKind::Ai(_))
    }
}

/// An automated player: evaluation weights and a search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiPlayer {
    pub weights: Weights,
    pub depth: u8,
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            depth: 3,
        }
    }
}

/// A move selected by the AI, with search diagnostics for the debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// Chosen destination cell
    pub pos: Pos,
    /// Index of the chosen move in the legal-move list
    pub index: usize,
    /// Score propagated from the chosen subtree
    pub score: i32,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall-clock time spent, in milliseconds
    pub time_ms: u64,
}

impl AiPlayer {
    pub fn new(weights: Weights, depth: u8) -> Self {
        Self { weights, depth }
    }

    /// Pick a move for `side`, or `None` when `side` must pass.
    pub fn choose_move(&self, board: &Board, side: Disc) -> Option<MoveChoice> {
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return None;
        }

        let start = Instant::now();
        let result = best_move_minimax(board, side, &moves, self.depth, &self.weights);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            ?side,
            depth = self.depth,
            index = result.best_index,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "ai move selected"
        );

        Some(MoveChoice {
            pos: moves[result.best_index],
            index: result.best_index,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_flanked;

    #[test]
    fn test_choose_move_is_legal() {
        let board = Board::standard();
        let ai = AiPlayer::default();
        let choice = ai.choose_move(&board, Disc::Black).unwrap();

        assert!(board.is_empty(choice.pos));
        assert!(is_flanked(&board, choice.pos, Disc::Black));
    }

    #[test]
    fn test_choose_move_none_when_moveless() {
        // White has no discs, so Black can flank nothing
        let mut board = Board::new();
        board.set(Pos::new(3, 3), Disc::Black);
        let ai = AiPlayer::default();
        assert!(ai.choose_move(&board, Disc::Black).is_none());
    }

    #[test]
    fn test_choose_move_deterministic() {
        let board = Board::standard();
        let ai = AiPlayer::new(Weights::default(), 2);

        let first = ai.choose_move(&board, Disc::Black).unwrap();
        for _ in 0..5 {
            let again = ai.choose_move(&board, Disc::Black).unwrap();
            assert_eq!(again.pos, first.pos);
            assert_eq!(again.index, first.index);
            assert_eq!(again.score, first.score);
        }
    }
}
