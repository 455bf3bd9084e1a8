//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`blockfall_types::InputEvent`] so the
//! core never sees a keyboard; the game loop delivers at most one mapped
//! event per tick.

pub mod map;

pub use blockfall_types as types;

pub use map::handle_key_event;
