//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole engine: shape encoding, rotation,
//! collision testing, the board, and the tick-driven state machine. It
//! has zero dependencies on UI, input devices, or I/O:
//!
//! - **Deterministic**: the same seed deals the same piece sequence
//! - **Pure queries**: collision and rotation never mutate shared state
//! - **Tick-driven**: one input event and one gravity evaluation per
//!   tick; timing lives with the caller
//!
//! # Module Structure
//!
//! - [`shapes`]: 4x4 occupancy table and the rotation index transform
//! - [`board`]: 12x18 walled playfield, collision test, lock, row
//!   scan/clear
//! - [`game_state`]: the state machine sequencing everything per tick
//! - [`rng`]: seeded uniform shape selection
//! - [`snapshot`]: the read-only frame handed to a renderer
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::InputEvent;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // One tick: move right, then gravity.
//! game.tick(Some(InputEvent::MoveRight));
//! game.tick(None);
//!
//! let frame = game.snapshot();
//! assert!(!frame.game_over);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{FallingPiece, GameState};
pub use rng::{ShapeDealer, SimpleRng};
pub use shapes::{occupancy, occupied_at, rotated_index};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
