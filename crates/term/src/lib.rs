//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game view composites a
//! core snapshot into a character framebuffer, and the renderer flushes
//! that framebuffer to the terminal with crossterm. The core never sees
//! any of this; it only produces snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, FrameBuffer};
pub use game_view::GameView;
pub use renderer::{encode_full_into, TerminalRenderer};
