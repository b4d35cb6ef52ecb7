//! Board engine - grid, pegs, move legality, capture, undo, win/loss
//!
//! All game rules live here. The engine owns one collection of pegs tagged by
//! phase; occupancy is derived from the committed (`home_cell`) position of
//! every non-fading peg, so queries stay consistent while pieces animate.
//!
//! The host loop delivers pointer input through `begin_drag` / `update_drag` /
//! `end_drag`, calls `tick` once per frame, and drains sound-trigger requests
//! with `take_sounds`. No operation blocks; a full move commit (capture, undo
//! record, result recomputation) happens atomically inside `end_drag`.

use arrayvec::ArrayVec;

use crate::layout::GridLayout;
use crate::peg::Peg;
use crate::types::{GameResult, GridPos, PegPhase, SoundCue, Vec2, TILE_SIZE};

/// Upper bound on sound requests queued between frames.
const SOUND_QUEUE_LEN: usize = 8;

/// A fully reversible record of one committed jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from_cell: GridPos,
    pub to_cell: GridPos,
    pub captured_cell: GridPos,
}

/// The Peg Solitaire board and all of its game logic.
#[derive(Debug, Clone)]
pub struct Board {
    layout: GridLayout,
    pegs: Vec<Peg>,
    undo_stack: Vec<Move>,
    move_count: u32,
    result: GameResult,
    sounds: ArrayVec<SoundCue, SOUND_QUEUE_LEN>,
}

impl Board {
    /// Create a board from a validated layout with all pegs in place.
    pub fn new(layout: GridLayout) -> Self {
        let mut board = Self {
            layout,
            pegs: Vec::new(),
            undo_stack: Vec::new(),
            move_count: 0,
            result: GameResult::InProgress,
            sounds: ArrayVec::new(),
        };
        board.reset_pegs();
        board
    }

    /// Repopulate one peg per hole cell except the start hole; clear the undo
    /// stack, the move count and the result.
    pub fn reset_pegs(&mut self) {
        let start = self.layout.start_hole();
        self.pegs.clear();
        for cell in self.layout.holes() {
            if cell != start {
                self.pegs.push(Peg::at_cell(cell));
            }
        }
        self.undo_stack.clear();
        self.move_count = 0;
        // Fresh evaluation, without firing transition cues.
        self.result = self.evaluate_result();
    }

    /// Replace the grid and reset the board.
    pub fn load_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
        self.reset_pegs();
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Pegs still on the board, counting the dragged one, not counting
    /// captured pieces that are still fading out.
    pub fn peg_count(&self) -> usize {
        self.pegs
            .iter()
            .filter(|p| p.phase() != PegPhase::FadingOut)
            .count()
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn dragged_peg(&self) -> Option<&Peg> {
        self.pegs.iter().find(|p| p.phase() == PegPhase::Dragged)
    }

    /// Drain the sound-trigger requests accumulated since the last call.
    pub fn take_sounds(&mut self) -> ArrayVec<SoundCue, SOUND_QUEUE_LEN> {
        std::mem::take(&mut self.sounds)
    }

    /// The grid cell under a board-pixel position, or `None` outside the
    /// playing surface.
    pub fn cell_at(&self, pos: Vec2) -> Option<GridPos> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let cell = (
            (pos.x as i32 / TILE_SIZE) as i8,
            (pos.y as i32 / TILE_SIZE) as i8,
        );
        self.layout.in_bounds(cell).then_some(cell)
    }

    /// Try to pick up the peg under `cursor` (board pixels).
    ///
    /// Returns whether a pick-up occurred. Refused while another peg is
    /// already dragged, and only an idle peg can be lifted.
    pub fn begin_drag(&mut self, cursor: Vec2) -> bool {
        if self.dragged_peg().is_some() {
            return false;
        }
        let Some(cell) = self.cell_at(cursor) else {
            return false;
        };
        match self
            .pegs
            .iter_mut()
            .find(|p| p.phase() == PegPhase::Idle && p.home_cell() == cell)
        {
            Some(peg) => {
                peg.start_drag(cursor);
                true
            }
            None => false,
        }
    }

    /// Move the dragged peg with the cursor, clamped to the playing surface.
    pub fn update_drag(&mut self, cursor: Vec2) {
        let size = self.layout.size();
        if let Some(peg) = self
            .pegs
            .iter_mut()
            .find(|p| p.phase() == PegPhase::Dragged)
        {
            peg.drag_to(cursor, size);
        }
    }

    /// Resolve the drop of the dragged peg.
    ///
    /// A legal jump is committed: the jumped peg starts fading out, the mover
    /// snaps exactly onto the destination cell, a move record is pushed and a
    /// "move" cue is requested. An illegal drop snaps the peg back toward its
    /// home cell, with a "snap-back" cue only when it was dropped away from
    /// home. Either way the result is recomputed.
    ///
    /// Returns whether a move was committed.
    pub fn end_drag(&mut self) -> bool {
        let size = self.layout.size();
        let Some(idx) = self
            .pegs
            .iter()
            .position(|p| p.phase() == PegPhase::Dragged)
        else {
            return false;
        };

        let from = self.pegs[idx].home_cell();
        let dest = self.pegs[idx].grid_pos(size);

        let committed = if self.move_is_legal(from, dest) {
            let captured = midpoint(from, dest);
            self.capture_peg_at(captured);
            self.pegs[idx].settle_at(dest);
            self.undo_stack.push(Move {
                from_cell: from,
                to_cell: dest,
                captured_cell: captured,
            });
            self.move_count += 1;
            self.request_sound(SoundCue::Move);
            true
        } else {
            if dest != from {
                self.request_sound(SoundCue::SnapBack);
            }
            self.pegs[idx].begin_snap_back();
            false
        };

        self.refresh_result();
        committed
    }

    /// Revert the last committed move. No-op on an empty history, and refused
    /// while a drag is in flight.
    pub fn undo(&mut self) -> bool {
        if self.dragged_peg().is_some() {
            return false;
        }
        let Some(mv) = self.undo_stack.pop() else {
            return false;
        };

        // The reverted mover disappears outright; only captures fade.
        self.pegs
            .retain(|p| p.phase() == PegPhase::FadingOut || p.home_cell() != mv.to_cell);
        self.pegs.push(Peg::at_cell(mv.from_cell));
        self.pegs.push(Peg::at_cell(mv.captured_cell));
        self.move_count -= 1;

        // Clear any stale terminal state, then recompute.
        self.result = GameResult::InProgress;
        self.refresh_result();
        true
    }

    /// Advance per-frame animation for all pegs and drop the ones that have
    /// finished fading out. Must run every frame regardless of input.
    pub fn tick(&mut self) {
        for peg in &mut self.pegs {
            peg.tick();
        }
        self.pegs.retain(|p| !p.is_faded_out());
    }

    /// The up-to-4 cells a peg at `cell` can legally jump to right now.
    pub fn legal_destinations_from(&self, cell: GridPos) -> ArrayVec<GridPos, 4> {
        let (x, y) = cell;
        let candidates = [(x - 2, y), (x + 2, y), (x, y - 2), (x, y + 2)];
        candidates
            .into_iter()
            .filter(|&dest| self.move_is_legal(cell, dest))
            .collect()
    }

    /// All four legality rules for a prospective jump:
    /// the destination is an in-bounds hole, currently unoccupied, exactly two
    /// cells away along one axis, and the cell midway is occupied.
    fn move_is_legal(&self, from: GridPos, dest: GridPos) -> bool {
        if !self.layout.is_hole(dest) || self.is_occupied(dest) {
            return false;
        }
        let dx = dest.0 - from.0;
        let dy = dest.1 - from.1;
        let two_away = (dx.abs() == 2 && dy == 0) || (dx == 0 && dy.abs() == 2);
        two_away && self.is_occupied(midpoint(from, dest))
    }

    /// Occupancy is by committed cell: every peg that is not fading out holds
    /// its home cell, including the dragged one.
    fn is_occupied(&self, cell: GridPos) -> bool {
        self.pegs
            .iter()
            .any(|p| p.phase() != PegPhase::FadingOut && p.home_cell() == cell)
    }

    /// Start the fade-out of the peg committed to `cell`, if any.
    fn capture_peg_at(&mut self, cell: GridPos) {
        if let Some(peg) = self
            .pegs
            .iter_mut()
            .find(|p| p.phase() != PegPhase::FadingOut && p.home_cell() == cell)
        {
            peg.begin_fade_out();
        }
    }

    /// Recompute the result; only a transition into a terminal state fires
    /// its one-shot victory/defeat cue.
    fn refresh_result(&mut self) {
        let prev = self.result;
        self.result = self.evaluate_result();
        if self.result != prev {
            match self.result {
                GameResult::Won => self.request_sound(SoundCue::Victory),
                GameResult::Lost => self.request_sound(SoundCue::Defeat),
                GameResult::InProgress => {}
            }
        }
    }

    fn evaluate_result(&self) -> GameResult {
        if self.peg_count() == 1 {
            return GameResult::Won;
        }
        let any_move = self
            .pegs
            .iter()
            .filter(|p| p.phase() != PegPhase::FadingOut)
            .any(|p| !self.legal_destinations_from(p.home_cell()).is_empty());
        if any_move {
            GameResult::InProgress
        } else {
            GameResult::Lost
        }
    }

    fn request_sound(&mut self, cue: SoundCue) {
        // Dropped if the host never drains; the queue is bounded.
        if !self.sounds.is_full() {
            self.sounds.push(cue);
        }
    }
}

/// The captured cell is always the arithmetic midpoint of the jump.
fn midpoint(from: GridPos, to: GridPos) -> GridPos {
    ((from.0 + to.0) / 2, (from.1 + to.1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{english, GridLayout};

    fn line_layout() -> GridLayout {
        // Three holes in a row; start hole at the right end.
        GridLayout::from_rows("line", &["...", "oo*", "..."]).unwrap()
    }

    #[test]
    fn test_midpoint_of_jump() {
        assert_eq!(midpoint((4, 2), (4, 4)), (4, 3));
        assert_eq!(midpoint((6, 1), (4, 1)), (5, 1));
    }

    #[test]
    fn test_reset_populates_all_holes_but_start() {
        let board = Board::new(english());
        assert_eq!(board.peg_count(), 32);
        assert!(!board.can_undo());
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_cell_at_bounds() {
        let board = Board::new(english());
        assert_eq!(board.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(board.cell_at(Vec2::new(-1.0, 4.0)), None);
        let off = (9 * TILE_SIZE) as f32;
        assert_eq!(board.cell_at(Vec2::new(off, 0.0)), None);
    }

    #[test]
    fn test_legal_destinations_on_fresh_english_board() {
        let board = Board::new(english());
        // Only the four pegs two steps from the centre hole can move.
        assert_eq!(board.legal_destinations_from((4, 2)).as_slice(), [(4, 4)]);
        assert_eq!(board.legal_destinations_from((2, 4)).as_slice(), [(4, 4)]);
        // A peg with no empty destination has none.
        assert!(board.legal_destinations_from((3, 3)).is_empty());
    }

    #[test]
    fn test_second_pickup_is_refused() {
        let mut board = Board::new(line_layout());
        assert!(board.begin_drag(Vec2::from_cell((0, 1))));
        assert!(!board.begin_drag(Vec2::from_cell((1, 1))));
    }

    #[test]
    fn test_pickup_on_empty_or_solid_cell_fails() {
        let mut board = Board::new(line_layout());
        // Start hole is empty.
        assert!(!board.begin_drag(Vec2::from_cell((2, 1))));
        // Solid cell.
        assert!(!board.begin_drag(Vec2::from_cell((0, 0))));
        // Outside the surface.
        assert!(!board.begin_drag(Vec2::new(-4.0, 0.0)));
    }

    #[test]
    fn test_end_drag_without_drag_is_noop() {
        let mut board = Board::new(line_layout());
        assert!(!board.end_drag());
        assert!(board.take_sounds().is_empty());
    }

    #[test]
    fn test_undo_refused_mid_drag() {
        let mut board = Board::new(line_layout());

        // Commit the only jump, then pick the mover back up.
        assert!(board.begin_drag(Vec2::from_cell((0, 1))));
        board.update_drag(Vec2::from_cell((2, 1)));
        assert!(board.end_drag());
        assert!(board.begin_drag(Vec2::from_cell((2, 1))));

        assert!(!board.undo());
        board.end_drag();
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut board = Board::new(english());
        assert!(!board.undo());
        assert_eq!(board.move_count(), 0);
    }
}
