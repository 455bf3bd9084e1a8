//! Render snapshot - the read-only view handed to an external renderer.

use arrayvec::ArrayVec;

use crate::game_state::FallingPiece;
use crate::types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// The falling piece as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub col: i8,
    pub row: i8,
}

impl From<FallingPiece> for ActiveSnapshot {
    fn from(value: FallingPiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            col: value.col,
            row: value.row,
        }
    }
}

/// Read-only frame of the whole game: board cell codes, the falling
/// piece, the rows highlighted for clearing, and the terminal flags.
/// Enough for a renderer to composite a frame without touching internal
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Cell codes: 0 empty, 1..=7 settled, 8 clearing, 9 wall.
    pub board: [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Rows currently highlighted for clearing, ascending.
    pub clearing_rows: ArrayVec<usize, 4>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        self.active = None;
        self.clearing_rows.clear();
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            clearing_rows: ArrayVec::new(),
            game_over: false,
        }
    }
}
