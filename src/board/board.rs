//! Board storage and adjacency queries
//!
//! The board holds ownership only; all rules logic (legality, captures)
//! lives in [`crate::rules`].

use super::{BoardError, Disc, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Offsets of the up-to-8 orthogonal and diagonal neighbors.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 8x8 grid of cells. Plain value type: search branches copy it instead of
/// sharing mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Disc; TOTAL_CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [Disc::Empty; TOTAL_CELLS],
        }
    }

    /// The canonical starting position: White on (3,3) and (4,4),
    /// Black on (3,4) and (4,3).
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.set(Pos::new(3, 3), Disc::White);
        board.set(Pos::new(4, 4), Disc::White);
        board.set(Pos::new(3, 4), Disc::Black);
        board.set(Pos::new(4, 3), Disc::Black);
        board
    }

    /// Ownership of the cell at `pos`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        self.cells[pos.to_index()]
    }

    /// Ownership of the cell at unvalidated coordinates.
    /// Fails with [`BoardError::OutOfRange`] instead of clamping.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Disc, BoardError> {
        if Pos::is_valid(row, col) {
            Ok(self.get(Pos::new(row as u8, col as u8)))
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    /// Check if the cell at `pos` is unoccupied.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Disc::Empty
    }

    /// Set ownership of a single cell. No side effects on other cells;
    /// capture flipping is layered on top by the rules module.
    #[inline]
    pub fn set(&mut self, pos: Pos, disc: Disc) {
        self.cells[pos.to_index()] = disc;
    }

    /// The up-to-8 adjacent positions that exist on the board.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .collect()
    }

    /// Iterate over all occupied cells as `(pos, owner)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Disc)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &d)| d != Disc::Empty)
            .map(|(i, &d)| (Pos::from_index(i), d))
    }

    /// Number of cells owned by `disc`.
    pub fn count(&self, disc: Disc) -> usize {
        self.cells.iter().filter(|&&d| d == disc).count()
    }

    /// Total discs on the board.
    #[inline]
    pub fn total_discs(&self) -> usize {
        TOTAL_CELLS - self.count(Disc::Empty)
    }

    /// Check if every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.total_discs() == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Disc::Black => 'B',
                    Disc::White => 'W',
                    Disc::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
