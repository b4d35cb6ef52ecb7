//! Terminal rendering for the solitaire board.
//!
//! Split in the usual way: [`fb`] is a plain framebuffer of styled cells,
//! [`board_view`] maps a board snapshot into it (pure, unit-testable), and
//! [`renderer`] diffs frames against the terminal.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_pegs_core as core;
pub use tui_pegs_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
