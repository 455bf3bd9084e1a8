//! GameView: maps a core snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. The falling piece is
//! composited here; it never exists on the board itself.

use crossterm::style::Color;

use crate::core::shapes::occupied_at;
use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::types::{PieceKind, CELL_CLEARING, CELL_WALL, FIELD_HEIGHT, FIELD_WIDTH};

/// Character per cell code: empty, the seven piece letters, the
/// clearing highlight, and the wall.
const CELL_CHARS: [char; 10] = [' ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', '=', '#'];

/// Top-left corner of the playfield inside the frame.
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 2;

/// Renders a [`GameSnapshot`] into a framebuffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Framebuffer size needed for a full frame.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            FIELD_WIDTH as u16 + ORIGIN_X + 24,
            FIELD_HEIGHT as u16 + ORIGIN_Y + 3,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear();

        // Settled board cells, walls, and clearing highlights.
        for y in 0..FIELD_HEIGHT as u16 {
            for x in 0..FIELD_WIDTH as u16 {
                let code = snap.board[y as usize][x as usize];
                fb.put_char(
                    ORIGIN_X + x,
                    ORIGIN_Y + y,
                    cell_char(code),
                    cell_color(code),
                );
            }
        }

        // The falling piece, composited over the board.
        if let Some(active) = snap.active {
            let ch = piece_char(active.kind);
            let fg = piece_color(active.kind);
            for py in 0..4u8 {
                for px in 0..4u8 {
                    if !occupied_at(active.kind, active.rotation, px, py) {
                        continue;
                    }
                    let x = active.col + px as i8;
                    let y = active.row + py as i8;
                    if x >= 0 && y >= 0 {
                        fb.put_char(ORIGIN_X + x as u16, ORIGIN_Y + y as u16, ch, fg);
                    }
                }
            }
        }

        let hint_x = ORIGIN_X + FIELD_WIDTH as u16 + 4;
        fb.put_str(hint_x, ORIGIN_Y, "blockfall", Color::Cyan);
        fb.put_str(hint_x, ORIGIN_Y + 2, "arrows move/drop", Color::Reset);
        fb.put_str(hint_x, ORIGIN_Y + 3, "r rotates, q quits", Color::Reset);

        if snap.game_over {
            fb.put_str(
                ORIGIN_X,
                ORIGIN_Y + FIELD_HEIGHT as u16 + 1,
                "== [ GAME OVER ] ==",
                Color::Red,
            );
            fb.put_str(
                ORIGIN_X,
                ORIGIN_Y + FIELD_HEIGHT as u16 + 2,
                "Press any key to exit.",
                Color::Reset,
            );
        }
    }
}

fn cell_char(code: u8) -> char {
    CELL_CHARS[(code as usize).min(CELL_CHARS.len() - 1)]
}

fn piece_char(kind: PieceKind) -> char {
    CELL_CHARS[kind.cell_code() as usize]
}

fn cell_color(code: u8) -> Color {
    if code == CELL_WALL {
        Color::Grey
    } else if code == CELL_CLEARING {
        Color::White
    } else if code == 0 {
        Color::Reset
    } else {
        piece_color(PieceKind::from_index(code as usize - 1))
    }
}

fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
    }
}
