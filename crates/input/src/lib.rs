//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse and key events into pointer events and
//! [`crate::types::UiAction`] values; the board engine and view layer never
//! see crossterm types.

pub mod map;

pub use tui_pegs_types as types;

pub use map::{handle_key_event, map_mouse_event, should_quit, PointerEvent};
