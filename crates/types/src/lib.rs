//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Playfield dimensions, including the one-cell border wall on the
/// left, right, and bottom edges.
pub const FIELD_WIDTH: u8 = 12;
pub const FIELD_HEIGHT: u8 = 18;

/// Fixed tick length of the game loop (milliseconds).
pub const TICK_MS: u64 = 25;

/// Ticks between automatic falls (single fixed fall speed).
pub const FALL_INTERVAL_TICKS: u32 = 20;

/// Ticks the highlighted full rows stay on screen before they are
/// cleared (500 ms at the 25 ms tick).
pub const CLEAR_PAUSE_TICKS: u32 = 20;

/// Spawn origin for new pieces (top-center of the 4x4 bounding box).
pub const SPAWN_COL: i8 = (FIELD_WIDTH as i8) / 2 - 2;
pub const SPAWN_ROW: i8 = 0;

/// u8 cell codes used by the render snapshot. Settled pieces occupy
/// codes 1..=7 (piece index + 1).
pub const CELL_EMPTY: u8 = 0;
pub const CELL_CLEARING: u8 = 8;
pub const CELL_WALL: u8 = 9;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Index into the shape table (0..=6).
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]. Indices outside 0..=6 wrap.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Settled cell code for this kind (1..=7).
    pub fn cell_code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A single board cell.
///
/// The falling piece is never written to the board; it lives in the
/// game state and is composited at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Permanently locked cell from a previous piece.
    Settled(PieceKind),
    /// Full-row highlight, replaced when the row is cleared.
    Clearing,
    /// Border cell; never changes after board construction.
    Wall,
}

impl CellState {
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// u8 code for the render snapshot.
    pub fn code(self) -> u8 {
        match self {
            CellState::Empty => CELL_EMPTY,
            CellState::Settled(kind) => kind.cell_code(),
            CellState::Clearing => CELL_CLEARING,
            CellState::Wall => CELL_WALL,
        }
    }
}

/// Input events consumed by the game state machine, at most one per
/// tick. "No input" is `Option::None` at the tick call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}

impl InputEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::Rotate => "rotate",
            InputEvent::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_kind_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn cell_codes_are_distinct() {
        let mut codes = vec![CELL_EMPTY, CELL_CLEARING, CELL_WALL];
        for kind in PieceKind::ALL {
            codes.push(kind.cell_code());
        }
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn spawn_column_is_top_center() {
        assert_eq!(SPAWN_COL, 4);
        assert_eq!(SPAWN_ROW, 0);
    }
}
