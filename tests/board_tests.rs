//! Board tests - collision, locking, row scan and clear

use blockfall::core::Board;
use blockfall::types::{CellState, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

const W: i8 = FIELD_WIDTH as i8;
const H: i8 = FIELD_HEIGHT as i8;

fn fill_interior_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 1..W - 1 {
        board.set(x, y, CellState::Settled(kind));
    }
}

#[test]
fn test_board_dimensions_and_walls() {
    let board = Board::new();
    assert_eq!(board.width(), FIELD_WIDTH);
    assert_eq!(board.height(), FIELD_HEIGHT);

    for y in 0..H {
        assert_eq!(board.get(0, y), Some(CellState::Wall));
        assert_eq!(board.get(W - 1, y), Some(CellState::Wall));
    }
    for x in 0..W {
        assert_eq!(board.get(x, H - 1), Some(CellState::Wall));
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(W, 0), None);
    assert_eq!(board.get(0, H), None);
}

#[test]
fn test_every_shape_fits_at_spawn_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in 0..4u8 {
            assert!(
                board.fits(kind, rotation, blockfall::types::SPAWN_COL, 0),
                "{} rotation {} should fit at spawn",
                kind.as_str(),
                rotation
            );
        }
    }
}

#[test]
fn test_fits_is_strict_at_the_edges() {
    let board = Board::new();

    // Vertical I occupies local column 2; its leftmost legal origin is
    // -1 (board column 1), and anything past that is rejected, never
    // wrapped or clipped.
    assert!(board.fits(PieceKind::I, 0, -1, 0));
    assert!(!board.fits(PieceKind::I, 0, -2, 0));
    assert!(!board.fits(PieceKind::I, 0, -30, 0));

    // Resting on the floor: rows 13..=16 are the lowest the vertical I
    // can reach.
    assert!(board.fits(PieceKind::I, 0, 4, 13));
    assert!(!board.fits(PieceKind::I, 0, 4, 14));

    // Overhanging the open top edge is fine.
    assert!(board.fits(PieceKind::O, 0, 4, -1));
}

#[test]
fn test_lock_piece_marks_cells_and_blocks_refit() {
    let mut board = Board::new();
    assert!(board.fits(PieceKind::T, 0, 4, 5));

    board.lock_piece(PieceKind::T, 0, 4, 5);
    assert!(!board.fits(PieceKind::T, 0, 4, 5));

    let settled = (0..H)
        .flat_map(|y| (0..W).map(move |x| (x, y)))
        .filter(|&(x, y)| board.get(x, y) == Some(CellState::Settled(PieceKind::T)))
        .count();
    assert_eq!(settled, 4);
}

#[test]
fn test_scan_and_clear_single_row() {
    let mut board = Board::new();
    fill_interior_row(&mut board, 16, PieceKind::L);
    board.set(3, 15, CellState::Settled(PieceKind::J));

    let rows = board.scan_full_rows(13);
    assert_eq!(rows.as_slice(), &[16]);
    for x in 1..W - 1 {
        assert_eq!(board.get(x, 16), Some(CellState::Clearing));
    }

    board.clear_rows(&rows);
    assert_eq!(board.get(3, 16), Some(CellState::Settled(PieceKind::J)));
    assert_eq!(board.get(3, 15), Some(CellState::Empty));
    for x in 1..W - 1 {
        assert_eq!(board.get(x, 0), Some(CellState::Empty));
    }
}

#[test]
fn test_scan_ignores_partial_rows_and_bottom_wall() {
    let mut board = Board::new();
    fill_interior_row(&mut board, 16, PieceKind::S);
    board.set(5, 16, CellState::Empty);

    assert!(board.scan_full_rows(13).is_empty());
    // Window hanging over the floor only sees wall row 17.
    assert!(board.scan_full_rows(17).is_empty());
}

#[test]
fn test_clear_preserves_order_of_surviving_rows() {
    let mut board = Board::new();
    // Survivors above and between two full rows.
    board.set(2, 12, CellState::Settled(PieceKind::Z));
    fill_interior_row(&mut board, 13, PieceKind::O);
    board.set(4, 14, CellState::Settled(PieceKind::S));
    fill_interior_row(&mut board, 15, PieceKind::O);
    board.set(6, 16, CellState::Settled(PieceKind::T));

    let rows = board.scan_full_rows(13);
    assert_eq!(rows.as_slice(), &[13, 15]);
    board.clear_rows(&rows);

    // Both full rows gone, survivors compacted in their original order.
    assert_eq!(board.get(6, 16), Some(CellState::Settled(PieceKind::T)));
    assert_eq!(board.get(4, 15), Some(CellState::Settled(PieceKind::S)));
    assert_eq!(board.get(2, 14), Some(CellState::Settled(PieceKind::Z)));
    assert_eq!(board.get(2, 12), Some(CellState::Empty));
    assert_eq!(board.get(4, 13), Some(CellState::Empty));
}
