//! Board module - manages the playfield grid
//!
//! The board is a 12x18 grid stored as a flat array in row-major order.
//! The leftmost column, rightmost column, and bottom row are permanent
//! wall cells; everything inside starts empty. Coordinates: (x, y) with
//! x growing right and y growing down, interior cells at
//! x in 1..=10, y in 0..=16.

use arrayvec::ArrayVec;

use crate::shapes::occupied_at;
use crate::types::{CellState, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// The playfield - 12 columns x 18 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellState; FIELD_SIZE],
}

impl Board {
    /// Create a board with border walls and an empty interior.
    pub fn new() -> Self {
        let mut cells = [CellState::Empty; FIELD_SIZE];
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if x == 0 || x == WIDTH - 1 || y == HEIGHT - 1 {
                    cells[y * WIDTH + x] = CellState::Wall;
                }
            }
        }
        Self { cells }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<CellState> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: CellState) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision test: can the piece occupy (col, row) at this rotation?
    ///
    /// Walks all 16 cells of the piece's bounding box. An occupied cell
    /// fails the placement when it maps outside the horizontal field
    /// range, at or below the bottom row, or onto a non-empty board cell
    /// (wall, settled, or clearing). Cells above the top edge are open so
    /// a freshly spawned piece may overhang it. Pure query, no side
    /// effects.
    pub fn fits(&self, kind: PieceKind, rotation: u8, col: i8, row: i8) -> bool {
        for py in 0..4u8 {
            for px in 0..4u8 {
                if !occupied_at(kind, rotation, px, py) {
                    continue;
                }
                let x = col + px as i8;
                let y = row + py as i8;
                if x < 0 || x >= FIELD_WIDTH as i8 {
                    return false;
                }
                if y >= FIELD_HEIGHT as i8 {
                    return false;
                }
                if y < 0 {
                    continue;
                }
                if !self.cells[(y as usize) * WIDTH + (x as usize)].is_empty() {
                    return false;
                }
            }
        }
        true
    }

    /// Lock a piece onto the board, writing a settled marker into every
    /// occupied target cell.
    ///
    /// The caller has already verified the piece is resting here (it
    /// fits at (col, row) but not one row further down).
    pub fn lock_piece(&mut self, kind: PieceKind, rotation: u8, col: i8, row: i8) {
        for py in 0..4u8 {
            for px in 0..4u8 {
                if !occupied_at(kind, rotation, px, py) {
                    continue;
                }
                if let Some(idx) = Self::index(col + px as i8, row + py as i8) {
                    self.cells[idx] = CellState::Settled(kind);
                }
            }
        }
    }

    /// Scan the up to four interior rows a locked piece can touch,
    /// starting at its origin row. A row is full iff every interior cell
    /// is non-empty. Full rows are overwritten with the clearing
    /// highlight and their indices returned in ascending order.
    pub fn scan_full_rows(&mut self, from_row: i8) -> ArrayVec<usize, 4> {
        let mut full_rows = ArrayVec::new();

        for py in 0..4i8 {
            let y = from_row + py;
            // The bottom wall row is all walls and must never count as full.
            if y < 0 || y >= FIELD_HEIGHT as i8 - 1 {
                continue;
            }
            let y = y as usize;
            let start = y * WIDTH;
            let interior = &mut self.cells[start + 1..start + WIDTH - 1];

            if interior.iter().all(|cell| !cell.is_empty()) {
                for cell in interior {
                    *cell = CellState::Clearing;
                }
                full_rows.push(y);
            }
        }

        full_rows
    }

    /// Clear the given rows, shifting everything above each one down by
    /// a row and emptying the top interior row.
    ///
    /// `rows` is a stable, precomputed snapshot in ascending order (as
    /// produced by [`Board::scan_full_rows`]): clearing top-down means
    /// every shift only moves rows that are still in their original
    /// position.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));

        for &row in rows {
            if row >= HEIGHT - 1 {
                continue;
            }
            // Shift rows above down by one. Whole-row copies are safe:
            // the wall columns are identical in every row.
            for y in (1..=row).rev() {
                let src = (y - 1) * WIDTH;
                let dst = y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, dst);
            }
            // Reset the interior of the top row.
            for cell in &mut self.cells[1..WIDTH - 1] {
                *cell = CellState::Empty;
            }
        }
    }

    /// Write the board into a u8 grid using the snapshot cell codes.
    pub fn write_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                out[y][x] = self.cells[y * WIDTH + x].code();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
