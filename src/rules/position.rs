//! Positional classifiers used by the evaluation
//!
//! Corners, corner-adjacency, frontier exposure, and the approximate
//! stability test. Stability here means "no adjacent cell is currently
//! flankable by the opponent", a deliberately weaker definition than true
//! endgame stability; the evaluation weights are tuned against it.

use crate::board::{Board, Disc, Pos, BOARD_SIZE};

use super::moves::is_flanked;

const MAX: u8 = (BOARD_SIZE - 1) as u8;

/// The four extreme board positions.
const CORNERS: [(u8, u8); 4] = [(0, 0), (0, MAX), (MAX, 0), (MAX, MAX)];

/// Check if `pos` is one of the four corners.
#[inline]
pub fn is_corner(pos: Pos) -> bool {
    CORNERS.contains(&(pos.row, pos.col))
}

/// Check if `pos` is adjacent (including diagonally) to a corner without
/// being a corner itself. These cells are liabilities: occupying one often
/// hands the corner to the opponent.
pub fn is_corner_adjacent(pos: Pos) -> bool {
    if is_corner(pos) {
        return false;
    }
    CORNERS.iter().any(|&(r, c)| {
        i32::from(pos.row).abs_diff(i32::from(r)) <= 1
            && i32::from(pos.col).abs_diff(i32::from(c)) <= 1
    })
}

/// Number of empty neighbors of `pos`: how exposed the cell is to future
/// capture. A cell with no empty neighbors sits behind the frontier.
pub fn frontier_count(board: &Board, pos: Pos) -> usize {
    board
        .neighbors(pos)
        .into_iter()
        .filter(|&n| board.is_empty(n))
        .count()
}

/// Approximate stability: a `side` disc at `pos` is treated as stable when
/// no neighbor of `pos` is flankable from the opponent's perspective, i.e.
/// none of the opponent's immediate placements could overturn a disc next
/// to this one.
pub fn is_stable(board: &Board, pos: Pos, side: Disc) -> bool {
    let opponent = side.opponent();
    board
        .neighbors(pos)
        .into_iter()
        .all(|n| !is_flanked(board, n, opponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_classification() {
        assert!(is_corner(Pos::new(0, 0)));
        assert!(is_corner(Pos::new(0, 7)));
        assert!(is_corner(Pos::new(7, 0)));
        assert!(is_corner(Pos::new(7, 7)));
        assert!(!is_corner(Pos::new(4, 4)));
        assert!(!is_corner(Pos::new(0, 1)));
    }

    #[test]
    fn test_corner_adjacent_classification() {
        // The X- and C-squares around (0,0)
        assert!(is_corner_adjacent(Pos::new(0, 1)));
        assert!(is_corner_adjacent(Pos::new(1, 0)));
        assert!(is_corner_adjacent(Pos::new(1, 1)));
        assert!(is_corner_adjacent(Pos::new(6, 6)));
        // Corners themselves are not corner-adjacent
        assert!(!is_corner_adjacent(Pos::new(0, 0)));
        assert!(!is_corner_adjacent(Pos::new(4, 4)));
        assert!(!is_corner_adjacent(Pos::new(0, 2)));
    }

    #[test]
    fn test_frontier_count() {
        let board = Board::standard();
        // (3,3) touches the three other center discs; its remaining 5
        // neighbors are empty
        assert_eq!(frontier_count(&board, Pos::new(3, 3)), 5);

        let empty = Board::new();
        assert_eq!(frontier_count(&empty, Pos::new(0, 0)), 3);
        assert_eq!(frontier_count(&empty, Pos::new(4, 4)), 8);
    }

    #[test]
    fn test_center_discs_unstable_at_start() {
        // Every center disc can be overturned by the opponent's reply
        let board = Board::standard();
        assert!(!is_stable(&board, Pos::new(3, 4), Disc::Black));
        assert!(!is_stable(&board, Pos::new(3, 3), Disc::White));
    }

    #[test]
    fn test_lone_disc_is_stable() {
        // A single disc with no opponent discs anywhere cannot be flanked
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Disc::Black);
        assert!(is_stable(&board, Pos::new(0, 0), Disc::Black));
    }

    #[test]
    fn test_stability_is_neighbor_approximation() {
        // The heuristic only inspects adjacent cells: a disc whose
        // neighborhood admits no opponent flank counts as stable even if a
        // longer-range line could eventually threaten it.
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Disc::Black);
        board.set(Pos::new(0, 1), Disc::Black);
        board.set(Pos::new(7, 7), Disc::White);
        assert!(is_stable(&board, Pos::new(0, 0), Disc::Black));
    }
}
