//! Shapes module - tetromino occupancy table and rotation transform
//!
//! Each of the seven pieces is a flat 16-character string over a 4x4
//! row-major grid ('X' occupied, '.' empty). A single string represents
//! all four orientations of a shape: rotation is an index permutation
//! of the 4x4 grid, not a second copy of the data.

use crate::types::PieceKind;

/// 4x4 occupancy masks, one per [`PieceKind`], indexed by `kind.index()`.
const SHAPES: [&str; 7] = [
    "..X...X...X...X.", // I
    ".....XX..XX.....", // O
    "..X..XX...X.....", // T
    "..X..XX..X......", // S
    ".X...XX...X.....", // Z
    "..X...X..XX.....", // J
    ".X...X...XX.....", // L
];

/// The four index permutations of the 4x4 grid, one per rotation state.
/// `ROTATION_MAPS[r][py * 4 + px]` is the local index that cell `(px, py)`
/// reads from when the piece is rotated by `r` quarter turns.
static ROTATION_MAPS: [[u8; 16]; 4] = build_rotation_maps();

/// Materialize the closed-form rotation remappings once:
/// - r=0: `py*4 + px`
/// - r=1: `12 + py - px*4`
/// - r=2: `15 - py*4 - px`
/// - r=3: `3 - py + px*4`
const fn build_rotation_maps() -> [[u8; 16]; 4] {
    let mut maps = [[0u8; 16]; 4];
    let mut py = 0i8;
    while py < 4 {
        let mut px = 0i8;
        while px < 4 {
            let cell = (py * 4 + px) as usize;
            maps[0][cell] = (py * 4 + px) as u8;
            maps[1][cell] = (12 + py - px * 4) as u8;
            maps[2][cell] = (15 - py * 4 - px) as u8;
            maps[3][cell] = (3 - py + px * 4) as u8;
            px += 1;
        }
        py += 1;
    }
    maps
}

/// Map a cell `(px, py)` of the piece's bounding box to its index in the
/// flat occupancy string for the given rotation state (taken modulo 4).
///
/// `px` and `py` must be in `0..4`.
#[inline]
pub fn rotated_index(px: u8, py: u8, rotation: u8) -> usize {
    debug_assert!(px < 4 && py < 4);
    ROTATION_MAPS[(rotation % 4) as usize][(py * 4 + px) as usize] as usize
}

/// Whether the shape occupies the given local index (0..16) of its
/// unrotated 4x4 mask.
#[inline]
pub fn occupancy(kind: PieceKind, local_index: usize) -> bool {
    SHAPES[kind.index()].as_bytes()[local_index] == b'X'
}

/// Whether the shape occupies cell `(px, py)` at the given rotation.
#[inline]
pub fn occupied_at(kind: PieceKind, rotation: u8, px: u8, py: u8) -> bool {
    occupancy(kind, rotated_index(px, py, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let cells = (0..16).filter(|&i| occupancy(kind, i)).count();
            assert_eq!(cells, 4, "shape {:?} must occupy 4 cells", kind);
        }
    }

    #[test]
    fn shapes_are_distinct() {
        for (i, a) in SHAPES.iter().enumerate() {
            for b in SHAPES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn identity_rotation_is_row_major() {
        for py in 0..4u8 {
            for px in 0..4u8 {
                assert_eq!(rotated_index(px, py, 0), (py * 4 + px) as usize);
            }
        }
    }

    #[test]
    fn rotation_maps_match_closed_forms() {
        for py in 0..4u8 {
            for px in 0..4u8 {
                let (x, y) = (px as i32, py as i32);
                assert_eq!(rotated_index(px, py, 1) as i32, 12 + y - x * 4);
                assert_eq!(rotated_index(px, py, 2) as i32, 15 - y * 4 - x);
                assert_eq!(rotated_index(px, py, 3) as i32, 3 - y + x * 4);
            }
        }
    }

    #[test]
    fn rotation_state_wraps_modulo_four() {
        for py in 0..4u8 {
            for px in 0..4u8 {
                for r in 0..4u8 {
                    assert_eq!(rotated_index(px, py, r), rotated_index(px, py, r + 4));
                }
            }
        }
    }

    #[test]
    fn each_rotation_is_a_bijection() {
        for r in 0..4u8 {
            let mut seen = [false; 16];
            for py in 0..4u8 {
                for px in 0..4u8 {
                    let idx = rotated_index(px, py, r);
                    assert!(idx < 16);
                    assert!(!seen[idx], "rotation {} collapses two cells onto {}", r, idx);
                    seen[idx] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn full_turn_preserves_cell_count() {
        // A permutation can't change how many cells a rotated shape has.
        for kind in PieceKind::ALL {
            for r in 0..4u8 {
                let cells = (0..4u8)
                    .flat_map(|py| (0..4u8).map(move |px| (px, py)))
                    .filter(|&(px, py)| occupied_at(kind, r, px, py))
                    .count();
                assert_eq!(cells, 4);
            }
        }
    }
}
