//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the Peg Solitaire rules and state management. It
//! has **zero dependencies** on UI, terminal I/O or timing, so it runs the
//! same under the TUI, in tests and headless.
//!
//! # Module Structure
//!
//! - [`layout`]: validated board shapes and the five built-in layouts
//! - [`peg`]: a single piece with its drag/snap-back/fade-out animation state
//! - [`board`]: move legality, capture, undo history, win/loss detection
//! - [`snapshot`]: reusable renderable state for the UI layer
//!
//! # Game Rules
//!
//! A jump moves a peg exactly two cells along one axis onto an empty hole,
//! capturing the peg on the midway cell. The game is won when one peg
//! remains, and lost when more than one remains and none has a legal jump.
//!
//! # Frame protocol
//!
//! The host loop runs at a fixed ~60 Hz tick. Each frame it forwards pointer
//! input (`begin_drag` / `update_drag` / `end_drag`), calls [`Board::tick`]
//! to advance animations, drains sound cues, and renders a snapshot.

pub mod board;
pub mod layout;
pub mod peg;
pub mod snapshot;

pub use tui_pegs_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Move};
pub use layout::{builtin, GridLayout, LayoutDef, LayoutError, BUILTIN_LAYOUT_COUNT};
pub use peg::Peg;
pub use snapshot::{BoardSnapshot, PegView};
