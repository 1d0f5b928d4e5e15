//! Legal moves and flanking captures
//!
//! A move is legal only at an empty cell adjacent to an opponent disc, and
//! only if placing there flanks at least one run: a line of one or more
//! opponent discs immediately terminated by a disc of the mover's own side.

use crate::board::{Board, Disc, Pos, TOTAL_CELLS};

/// Direction vectors for flank walking, in fixed enumeration order:
/// W, E, N, S, NW, SE, NE, SW.
///
/// The order is stable across calls; capture runs are reported per
/// direction in this order, which the flip animation relies on for
/// reproducible stagger timing.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Collect the flanked run in every direction from `pos` for `side`.
///
/// Each run holds the consecutive opponent discs that would be captured in
/// that direction: one or more opponent cells immediately followed by a
/// `side`-owned cell. Running off the board, or reaching an empty cell
/// before a `side` disc, invalidates the direction and its run is empty.
///
/// Returns one run (possibly empty) per direction, indexed by [`DIRECTIONS`].
pub fn flanking_runs(board: &Board, pos: Pos, side: Disc) -> [Vec<Pos>; 8] {
    let opponent = side.opponent();
    let mut runs: [Vec<Pos>; 8] = Default::default();

    for (d, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
        let mut terminated = false;
        let mut next = pos.offset(dr, dc);

        while let Some(p) = next {
            let owner = board.get(p);
            if owner == opponent {
                runs[d].push(p);
            } else {
                // Own disc terminates the run; an empty cell voids it.
                terminated = owner == side;
                break;
            }
            next = p.offset(dr, dc);
        }

        if !terminated {
            runs[d].clear();
        }
    }

    runs
}

/// Check whether placing a `side` disc at `pos` flanks at least one run.
///
/// Cheaper than [`flanking_runs`]: stops at the first flanked direction.
pub fn is_flanked(board: &Board, pos: Pos, side: Disc) -> bool {
    let opponent = side.opponent();

    for &(dr, dc) in &DIRECTIONS {
        let mut found_opponent = false;
        let mut next = pos.offset(dr, dc);

        while let Some(p) = next {
            match board.get(p) {
                d if d == opponent => {
                    found_opponent = true;
                    next = p.offset(dr, dc);
                }
                d if d == side => {
                    if found_opponent {
                        return true;
                    }
                    break;
                }
                _ => break, // empty cell voids the direction
            }
        }
    }

    false
}

/// All legal destination cells for `side`.
///
/// Candidates are the empty neighbors of opponent-owned cells; of those,
/// only the flanked ones remain. The result is deduplicated and in
/// deterministic first-seen order (row-major scan over opponent discs),
/// so an index into it identifies a move reproducibly. An empty result is
/// the normal pass signal, not an error.
pub fn legal_moves(board: &Board, side: Disc) -> Vec<Pos> {
    let opponent = side.opponent();
    let mut seen = [false; TOTAL_CELLS];
    let mut moves = Vec::new();

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.get(pos) != opponent {
            continue;
        }
        for candidate in board.neighbors(pos) {
            if !board.is_empty(candidate) || seen[candidate.to_index()] {
                continue;
            }
            seen[candidate.to_index()] = true;
            if is_flanked(board, candidate, side) {
                moves.push(candidate);
            }
        }
    }

    moves
}

/// Place a `side` disc at `pos` and flip every flanked run.
///
/// Returns the flipped cells in direction-then-distance order (stable
/// across calls). Legality is not re-checked here; [`crate::game::Game`]
/// validates before applying, and the search only applies moves it
/// generated itself.
pub fn apply_move(board: &mut Board, pos: Pos, side: Disc) -> Vec<Pos> {
    let runs = flanking_runs(board, pos, side);
    board.set(pos, side);

    let mut flipped = Vec::new();
    for run in runs {
        for p in run {
            board.set(p, side);
            flipped.push(p);
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_black() {
        let board = Board::standard();
        let moves = legal_moves(&board, Disc::Black);
        assert_eq!(moves.len(), 4);
        for expected in [
            Pos::new(2, 3),
            Pos::new(3, 2),
            Pos::new(4, 5),
            Pos::new(5, 4),
        ] {
            assert!(moves.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_opening_moves_white() {
        let board = Board::standard();
        let moves = legal_moves(&board, Disc::White);
        assert_eq!(moves.len(), 4);
        for expected in [
            Pos::new(2, 4),
            Pos::new(4, 2),
            Pos::new(3, 5),
            Pos::new(5, 3),
        ] {
            assert!(moves.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_legal_moves_are_empty_and_flanked() {
        let board = Board::standard();
        for side in [Disc::Black, Disc::White] {
            for mov in legal_moves(&board, side) {
                assert!(board.is_empty(mov));
                let runs = flanking_runs(&board, mov, side);
                assert!(runs.iter().any(|run| !run.is_empty()));
            }
        }
    }

    #[test]
    fn test_legal_moves_deduplicated() {
        // (2,3) borders two White discs after this setup; it must appear once
        let mut board = Board::standard();
        board.set(Pos::new(2, 4), Disc::White);
        let moves = legal_moves(&board, Disc::Black);
        let occurrences = moves.iter().filter(|&&m| m == Pos::new(2, 3)).count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_flanking_runs_opening_move() {
        let board = Board::standard();
        let runs = flanking_runs(&board, Pos::new(2, 3), Disc::Black);

        let nonempty: Vec<_> = runs.iter().filter(|run| !run.is_empty()).collect();
        assert_eq!(nonempty.len(), 1);
        assert_eq!(nonempty[0].as_slice(), &[Pos::new(3, 3)]);
    }

    #[test]
    fn test_flanking_runs_stable_ordering() {
        let mut board = Board::new();
        // B W W W .  placing at (3,6) flanks the three-disc run westward
        board.set(Pos::new(3, 2), Disc::Black);
        board.set(Pos::new(3, 3), Disc::White);
        board.set(Pos::new(3, 4), Disc::White);
        board.set(Pos::new(3, 5), Disc::White);

        let first = flanking_runs(&board, Pos::new(3, 6), Disc::Black);
        let second = flanking_runs(&board, Pos::new(3, 6), Disc::Black);
        assert_eq!(first, second);

        // W is direction 0; the run walks outward, nearest disc first
        assert_eq!(
            first[0].as_slice(),
            &[Pos::new(3, 5), Pos::new(3, 4), Pos::new(3, 3)]
        );
    }

    #[test]
    fn test_run_voided_by_empty_gap() {
        let mut board = Board::new();
        // B . W B  the gap at (4,1) breaks the would-be flank from (4,0)
        board.set(Pos::new(4, 2), Disc::White);
        board.set(Pos::new(4, 3), Disc::Black);
        assert!(!is_flanked(&board, Pos::new(4, 0), Disc::Black));
    }

    #[test]
    fn test_run_voided_by_board_edge() {
        let mut board = Board::new();
        // W W at the west edge with no Black terminator beyond
        board.set(Pos::new(4, 0), Disc::White);
        board.set(Pos::new(4, 1), Disc::White);
        assert!(!is_flanked(&board, Pos::new(4, 2), Disc::Black));
    }

    #[test]
    fn test_adjacent_own_disc_is_not_a_flank() {
        let mut board = Board::new();
        // A run needs at least one opponent disc before the terminator
        board.set(Pos::new(4, 3), Disc::Black);
        assert!(!is_flanked(&board, Pos::new(4, 4), Disc::Black));
    }

    #[test]
    fn test_apply_move_flips_run() {
        let mut board = Board::standard();
        let flipped = apply_move(&mut board, Pos::new(2, 3), Disc::Black);

        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(board.get(Pos::new(2, 3)), Disc::Black);
        assert_eq!(board.get(Pos::new(3, 3)), Disc::Black);
        assert_eq!(board.count(Disc::Black), 4);
        assert_eq!(board.count(Disc::White), 1);
    }

    #[test]
    fn test_apply_move_flips_multiple_directions() {
        let mut board = Board::new();
        // Placing Black at (4,4) flanks west and north runs simultaneously
        board.set(Pos::new(4, 3), Disc::White);
        board.set(Pos::new(4, 2), Disc::Black);
        board.set(Pos::new(3, 4), Disc::White);
        board.set(Pos::new(2, 4), Disc::Black);

        let flipped = apply_move(&mut board, Pos::new(4, 4), Disc::Black);
        assert_eq!(flipped.len(), 2);
        // W (direction 0) is reported before N (direction 2)
        assert_eq!(flipped, vec![Pos::new(4, 3), Pos::new(3, 4)]);
        assert_eq!(board.count(Disc::White), 0);
    }
}
