//! Board tests - collision, locking and row clearing

use tetris_sim::core::{ActivePiece, Board, EngineError};
use tetris_sim::types::{GridPoint, ShapeKind, BOARD_COLS, BOARD_ROWS};

fn fill_row(board: &mut Board, row: i8, kind: ShapeKind) {
    for col in 0..BOARD_COLS as i8 {
        board.set(row, col, Some(kind));
    }
}

fn cells(points: [(i8, i8); 4]) -> [GridPoint; 4] {
    points.map(|(row, col)| GridPoint::new(col, row))
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);

    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.cell(row, col), Some(None));
            assert!(!board.is_occupied(row, col));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_cell_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, -1), None);
    assert_eq!(board.cell(BOARD_ROWS as i8, 0), None);
    assert_eq!(board.cell(0, BOARD_COLS as i8), None);
}

#[test]
#[should_panic]
fn test_is_occupied_out_of_bounds_panics() {
    Board::new().is_occupied(BOARD_ROWS as i8, 0);
}

#[test]
fn test_valid_placement() {
    let mut board = Board::new();
    let square = cells([(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert!(board.is_valid_placement(&square));

    board.set(1, 1, Some(ShapeKind::T));
    assert!(!board.is_valid_placement(&square));
}

#[test]
fn test_placement_outside_board_is_invalid() {
    let board = Board::new();
    assert!(!board.is_valid_placement(&cells([(-1, 0), (0, 0), (1, 0), (2, 0)])));
    assert!(!board.is_valid_placement(&cells([(0, 9), (0, 10), (1, 9), (1, 10)])));
    assert!(!board.is_valid_placement(&cells([(17, 0), (18, 0), (19, 0), (20, 0)])));
    assert!(!board.is_valid_placement(&cells([(5, -1), (5, 0), (5, 1), (5, 2)])));
}

#[test]
fn test_lock_writes_kind() {
    let mut board = Board::new();
    let target = cells([(19, 0), (19, 1), (19, 2), (19, 3)]);

    assert_eq!(board.lock(&target, ShapeKind::I), Ok(()));
    for p in target {
        assert_eq!(board.cell(p.row, p.col), Some(Some(ShapeKind::I)));
    }
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_lock_into_occupied_cell_leaves_board_unchanged() {
    let mut board = Board::new();
    board.set(19, 2, Some(ShapeKind::O));
    let before = board.clone();

    let result = board.lock(&cells([(19, 0), (19, 1), (19, 2), (19, 3)]), ShapeKind::I);

    assert_eq!(result, Err(EngineError::LockOccupied { row: 19, col: 2 }));
    assert_eq!(board, before);
}

#[test]
fn test_lock_out_of_bounds_leaves_board_unchanged() {
    let mut board = Board::new();
    let result = board.lock(&cells([(18, 9), (18, 10), (19, 9), (19, 10)]), ShapeKind::O);

    assert_eq!(
        result,
        Err(EngineError::LockOutOfBounds { row: 18, col: 10 })
    );
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    fill_row(&mut board, 19, ShapeKind::I);
    assert!(board.is_row_full(19));

    board.set(19, 4, None);
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_full(BOARD_ROWS as usize));
}

#[test]
fn test_clear_single_bottom_row_shifts_everything_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, ShapeKind::I);
    board.set(18, 0, Some(ShapeKind::T));
    board.set(10, 3, Some(ShapeKind::S));
    board.set(0, 9, Some(ShapeKind::Z));

    assert_eq!(board.clear_full_rows(), 1);

    assert_eq!(board.cell(19, 0), Some(Some(ShapeKind::T)));
    assert_eq!(board.cell(11, 3), Some(Some(ShapeKind::S)));
    assert_eq!(board.cell(1, 9), Some(Some(ShapeKind::Z)));
    assert!(board.row(0).iter().all(Option::is_none));
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_clear_two_bottom_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 18, ShapeKind::J);
    fill_row(&mut board, 19, ShapeKind::L);
    board.set(17, 5, Some(ShapeKind::O));

    assert_eq!(board.clear_full_rows(), 2);

    assert_eq!(board.cell(19, 5), Some(Some(ShapeKind::O)));
    assert_eq!(board.occupied_count(), 1);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, ShapeKind::I);
    board.set(18, 0, Some(ShapeKind::T));
    fill_row(&mut board, 17, ShapeKind::I);
    board.set(16, 1, Some(ShapeKind::S));

    assert_eq!(board.clear_full_rows(), 2);

    // Survivors keep their relative order
    assert_eq!(board.cell(19, 0), Some(Some(ShapeKind::T)));
    assert_eq!(board.cell(18, 1), Some(Some(ShapeKind::S)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_full_rows_without_full_rows_is_noop() {
    let mut board = Board::new();
    board.set(19, 0, Some(ShapeKind::I));
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_row_explicit() {
    let mut board = Board::new();
    board.set(5, 2, Some(ShapeKind::J));
    board.set(4, 2, Some(ShapeKind::L));

    assert_eq!(board.clear_row(5), 1);
    assert_eq!(board.cell(5, 2), Some(Some(ShapeKind::L)));
    assert_eq!(board.cell(4, 2), Some(None));

    assert_eq!(board.clear_row(BOARD_ROWS as usize), 0);
}

#[test]
fn test_l_piece_completes_bottom_row() {
    let mut board = Board::new();
    for col in 3..BOARD_COLS as i8 {
        board.set(19, col, Some(ShapeKind::Z));
    }
    board.set(18, 7, Some(ShapeKind::T));

    // L in rotation 2 anchored at the bottom-left: row 19 cols 0..=2 plus (18, 2)
    let mut piece = ActivePiece::at(ShapeKind::L, GridPoint::new(0, 19));
    piece.rotation = 2;
    assert_eq!(
        piece.cells(),
        cells([(19, 0), (19, 1), (19, 2), (18, 2)])
    );
    assert!(piece.is_valid(&board));

    board.lock(&piece.cells(), piece.kind).unwrap();
    assert_eq!(board.clear_full_rows(), 1);

    // Former row 18 is now row 19
    assert_eq!(board.cell(19, 2), Some(Some(ShapeKind::L)));
    assert_eq!(board.cell(19, 7), Some(Some(ShapeKind::T)));
    assert_eq!(board.occupied_count(), 2);
}
