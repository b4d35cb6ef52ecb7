//! Renderable board state
//!
//! A reusable view of everything the UI layer needs to draw a frame: cell
//! classifications, per-peg positions/phases/alpha, highlighted destination
//! cells and the game status. Filling a snapshot does not allocate in the
//! steady state; the peg list reuses its buffer across frames.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::peg::Peg;
use crate::types::{CellKind, GameResult, GridPos, PegPhase, Vec2, MAX_BOARD_SIZE};

const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// One peg as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegView {
    pub cell: GridPos,
    /// Top-left pixel position on the board surface.
    pub pos: Vec2,
    pub phase: PegPhase,
    pub alpha: u8,
}

impl From<&Peg> for PegView {
    fn from(peg: &Peg) -> Self {
        Self {
            cell: peg.home_cell(),
            pos: peg.pos(),
            phase: peg.phase(),
            alpha: peg.alpha(),
        }
    }
}

/// Complete renderable state for one frame.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    /// Board side length in cells.
    pub size: u8,
    /// Row-major cell classification, `size * size` entries used.
    pub cells: [CellKind; MAX_CELLS],
    pub pegs: Vec<PegView>,
    /// Legal destinations for the dragged peg (empty unless hints are on and
    /// a drag is in flight).
    pub highlights: ArrayVec<GridPos, 4>,
    /// Grid cell currently under the dragged peg, for the full highlight.
    pub hover_cell: Option<GridPos>,
    pub move_count: u32,
    pub result: GameResult,
    pub can_undo: bool,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            cells: [CellKind::Solid; MAX_CELLS],
            pegs: Vec::new(),
            highlights: ArrayVec::new(),
            hover_cell: None,
            move_count: 0,
            result: GameResult::InProgress,
            can_undo: false,
        }
    }
}

impl Board {
    /// Fill `out` with the current renderable state.
    ///
    /// `show_hints` comes from the settings snapshot; destination highlights
    /// are only produced while it is set and a peg is dragged.
    pub fn snapshot_into(&self, show_hints: bool, out: &mut BoardSnapshot) {
        let size = self.layout().size();
        out.size = size;

        out.cells = [CellKind::Solid; MAX_CELLS];
        for y in 0..size as i8 {
            for x in 0..size as i8 {
                if let Some(kind) = self.layout().kind((x, y)) {
                    out.cells[(y as usize) * (size as usize) + (x as usize)] = kind;
                }
            }
        }

        out.pegs.clear();
        out.pegs.extend(self.pegs().iter().map(PegView::from));

        out.highlights.clear();
        out.hover_cell = None;
        if let Some(dragged) = self.dragged_peg() {
            out.hover_cell = Some(dragged.grid_pos(size));
            if show_hints {
                out.highlights = self.legal_destinations_from(dragged.home_cell());
            }
        }

        out.move_count = self.move_count();
        out.result = self.result();
        out.can_undo = self.can_undo();
    }

    pub fn snapshot(&self, show_hints: bool) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(show_hints, &mut snap);
        snap
    }
}

impl BoardSnapshot {
    /// Cell classification at (x, y); solid outside the used area.
    pub fn kind(&self, x: u8, y: u8) -> CellKind {
        if x >= self.size || y >= self.size {
            return CellKind::Solid;
        }
        self.cells[(y as usize) * (self.size as usize) + (x as usize)]
    }
}
