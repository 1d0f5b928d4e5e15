use super::*;

#[test]
fn test_disc_opponent() {
    assert_eq!(Disc::Black.opponent(), Disc::White);
    assert_eq!(Disc::White.opponent(), Disc::Black);
    assert_eq!(Disc::Empty.opponent(), Disc::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 4);
    assert_eq!(pos.to_index(), 4 * 8 + 4);
    assert_eq!(pos.to_index(), 36);

    let pos2 = Pos::from_index(36);
    assert_eq!(pos2.row, 4);
    assert_eq!(pos2.col, 4);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(pos.offset(-1, 0), None);
    assert_eq!(pos.offset(0, -1), None);
    assert_eq!(Pos::new(7, 7).offset(1, 0), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_empty_board() {
    let board = Board::new();
    assert_eq!(board.total_discs(), 0);
    assert_eq!(board.count(Disc::Empty), 64);
    assert!(board.is_empty(Pos::new(3, 3)));
}

#[test]
fn test_standard_start() {
    let board = Board::standard();
    assert_eq!(board.count(Disc::Black), 2);
    assert_eq!(board.count(Disc::White), 2);
    assert_eq!(board.total_discs(), 4);
    assert_eq!(board.get(Pos::new(3, 3)), Disc::White);
    assert_eq!(board.get(Pos::new(4, 4)), Disc::White);
    assert_eq!(board.get(Pos::new(3, 4)), Disc::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Disc::Black);
}

#[test]
fn test_set_changes_only_one_cell() {
    let mut board = Board::standard();
    let before = board;
    board.set(Pos::new(0, 0), Disc::Black);

    assert_eq!(board.get(Pos::new(0, 0)), Disc::Black);
    for idx in 1..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        assert_eq!(board.get(pos), before.get(pos));
    }
}

#[test]
fn test_cell_at_rejects_out_of_range() {
    let board = Board::standard();
    assert_eq!(board.cell_at(3, 3), Ok(Disc::White));
    assert_eq!(
        board.cell_at(8, 3),
        Err(BoardError::OutOfRange { row: 8, col: 3 })
    );
    assert_eq!(
        board.cell_at(0, -1),
        Err(BoardError::OutOfRange { row: 0, col: -1 })
    );
}

#[test]
fn test_neighbor_counts() {
    let board = Board::new();
    // Corner has 3 neighbors, edge 5, interior 8
    assert_eq!(board.neighbors(Pos::new(0, 0)).len(), 3);
    assert_eq!(board.neighbors(Pos::new(0, 4)).len(), 5);
    assert_eq!(board.neighbors(Pos::new(4, 4)).len(), 8);
}

#[test]
fn test_neighbors_deduplicated() {
    let board = Board::new();
    let mut neighbors = board.neighbors(Pos::new(4, 4));
    let len = neighbors.len();
    neighbors.sort();
    neighbors.dedup();
    assert_eq!(neighbors.len(), len);
}

#[test]
fn test_occupied_iteration() {
    let board = Board::standard();
    let occupied: Vec<_> = board.occupied().collect();
    assert_eq!(occupied.len(), 4);
    assert!(occupied.contains(&(Pos::new(3, 3), Disc::White)));
    assert!(occupied.contains(&(Pos::new(4, 3), Disc::Black)));
}
