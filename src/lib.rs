//! TUI Peg Solitaire (workspace facade crate).
//!
//! This package keeps a single `tui_pegs::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub mod options;

pub use tui_pegs_core as core;
pub use tui_pegs_input as input;
pub use tui_pegs_term as term;
pub use tui_pegs_types as types;
