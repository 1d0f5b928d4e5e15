//! Turn orchestration and game-over detection
//!
//! [`Game`] owns the one real board, tracks whose turn it is, and applies
//! validated moves. Placement is re-validated here even though callers are
//! expected to pick from [`rules::legal_moves`]: an illegitimate placement
//! fails loudly with [`GameError::IllegalMove`] instead of silently
//! corrupting the board.

use tracing::info;

use crate::board::{Board, Disc, Pos};
use crate::rules;

/// Errors from attempting to mutate the game out of protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is not {0:?}'s turn")]
    OutOfTurn(Disc),
    #[error("cell {0:?} is already occupied")]
    Occupied(Pos),
    #[error("{0:?} is not a legal move: it flanks nothing")]
    IllegalMove(Pos),
    #[error("the game is over")]
    GameOver,
}

/// A move that has been applied to the board.
///
/// `flipped` lists the captured cells in direction-then-distance order;
/// the UI staggers the flip animation by each cell's ordinal index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedMove {
    pub pos: Pos,
    pub side: Disc,
    pub flipped: Vec<Pos>,
}

/// One Othello game: a board plus the side to move.
///
/// Tile counts are always derived from the board, never stored.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Disc,
}

impl Game {
    /// A fresh game from the standard starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Disc::Black,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board, self.side_to_move)
    }

    /// Place a disc for `side` at `pos`, flipping every flanked run, and
    /// switch the turn.
    ///
    /// Validates the full precondition: the game is live, it is `side`'s
    /// turn, `pos` is empty, and the placement flanks at least one run.
    pub fn place_piece(&mut self, side: Disc, pos: Pos) -> Result<PlacedMove, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if side != self.side_to_move {
            return Err(GameError::OutOfTurn(side));
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }
        // Empty + flanked is exactly membership in legal_moves: a flanking
        // run starts at an adjacent opponent disc, so adjacency is implied.
        if !rules::is_flanked(&self.board, pos, side) {
            return Err(GameError::IllegalMove(pos));
        }

        let flipped = rules::apply_move(&mut self.board, pos, side);
        self.side_to_move = side.opponent();

        Ok(PlacedMove { pos, side, flipped })
    }

    /// Switch the side to move without touching the board.
    ///
    /// The normal response to an empty [`Self::legal_moves`]; not an error.
    pub fn pass_turn(&mut self) {
        info!(side = ?self.side_to_move, "turn passed");
        self.side_to_move = self.side_to_move.opponent();
    }

    /// The game ends when neither side has a legal move, which can happen
    /// well before the board fills.
    pub fn is_game_over(&self) -> bool {
        rules::legal_moves(&self.board, Disc::Black).is_empty()
            && rules::legal_moves(&self.board, Disc::White).is_empty()
    }

    /// Number of discs `side` owns.
    pub fn tile_count(&self, side: Disc) -> usize {
        self.board.count(side)
    }

    /// The side with more discs, or `None` on a draw. Only meaningful once
    /// [`Self::is_game_over`] holds.
    pub fn winner(&self) -> Option<Disc> {
        let black = self.tile_count(Disc::Black);
        let white = self.tile_count(Disc::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
