//! Peg - a single mobile game piece
//!
//! A peg tracks its committed grid cell (`home_cell`), a continuous pixel
//! position used while dragging and animating, and an animation phase. The
//! grid cell under the peg is always derived from the pixel position and
//! clamped to the board, so a peg dragged past the edge never produces
//! out-of-bounds cell math.

use crate::types::{
    GridPos, PegPhase, Vec2, ALPHA_OPAQUE, FADE_STEP, SNAP_BACK_SPEED, TILE_SIZE,
};

/// A peg on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Peg {
    /// Grid cell before the in-progress move; the committed position.
    home_cell: GridPos,
    /// Top-left pixel position on the board surface.
    pos: Vec2,
    phase: PegPhase,
    /// Cursor-to-piece offset captured at pick-up.
    drag_offset: Vec2,
    /// Remaining opacity while fading out.
    fade_alpha: u8,
    /// Per-tick displacement while snapping back; zero otherwise.
    velocity: Vec2,
}

impl Peg {
    /// Create an idle peg resting exactly on `cell`.
    pub fn at_cell(cell: GridPos) -> Self {
        Self {
            home_cell: cell,
            pos: Vec2::from_cell(cell),
            phase: PegPhase::Idle,
            drag_offset: Vec2::default(),
            fade_alpha: ALPHA_OPAQUE,
            velocity: Vec2::default(),
        }
    }

    pub fn home_cell(&self) -> GridPos {
        self.home_cell
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn phase(&self) -> PegPhase {
        self.phase
    }

    pub fn alpha(&self) -> u8 {
        self.fade_alpha
    }

    /// The grid cell under the peg's centre, clamped to the board bounds.
    pub fn grid_pos(&self, board_size: u8) -> GridPos {
        let max = board_size as i32 - 1;
        let cx = (self.pos.x as i32 + TILE_SIZE / 2).div_euclid(TILE_SIZE);
        let cy = (self.pos.y as i32 + TILE_SIZE / 2).div_euclid(TILE_SIZE);
        (cx.clamp(0, max) as i8, cy.clamp(0, max) as i8)
    }

    /// Pick the peg up, recording the cursor offset so the piece keeps a
    /// constant position relative to the pointer while dragged.
    pub fn start_drag(&mut self, cursor: Vec2) {
        self.phase = PegPhase::Dragged;
        self.drag_offset = self.pos - cursor;
    }

    /// Follow the cursor, keeping the piece fully inside the board surface.
    pub fn drag_to(&mut self, cursor: Vec2, board_size: u8) {
        let max = ((board_size as i32) * TILE_SIZE - TILE_SIZE) as f32;
        self.pos = (cursor + self.drag_offset).clamp(Vec2::new(0.0, 0.0), Vec2::new(max, max));
    }

    /// Commit the peg to `cell`: snap the pixel position exactly onto it and
    /// make it the new home.
    pub fn settle_at(&mut self, cell: GridPos) {
        self.home_cell = cell;
        self.pos = Vec2::from_cell(cell);
        self.phase = PegPhase::Idle;
    }

    /// Start the snap-back animation toward the home cell.
    ///
    /// If the peg was dropped exactly on its home cell there is nothing to
    /// animate and it becomes idle immediately.
    pub fn begin_snap_back(&mut self) {
        let target = Vec2::from_cell(self.home_cell);
        match (target - self.pos).normalized() {
            Some(dir) => {
                self.velocity = dir * SNAP_BACK_SPEED;
                self.phase = PegPhase::SnappingBack;
            }
            None => {
                self.phase = PegPhase::Idle;
            }
        }
    }

    /// Mark the peg as captured; it fades out and is then removed.
    pub fn begin_fade_out(&mut self) {
        self.phase = PegPhase::FadingOut;
        self.velocity = Vec2::default();
    }

    /// True once the fade-out has completed and the peg can be dropped.
    pub fn is_faded_out(&self) -> bool {
        self.phase == PegPhase::FadingOut && self.fade_alpha == 0
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        match self.phase {
            PegPhase::SnappingBack => {
                let target = Vec2::from_cell(self.home_cell);
                if self.pos.distance_to(target) < SNAP_BACK_SPEED {
                    // Never overshoot: land exactly on the home cell.
                    self.pos = target;
                    self.velocity = Vec2::default();
                    self.phase = PegPhase::Idle;
                } else {
                    self.pos += self.velocity;
                }
            }
            PegPhase::FadingOut => {
                self.fade_alpha = self.fade_alpha.saturating_sub(FADE_STEP);
            }
            PegPhase::Idle | PegPhase::Dragged => {}
        }
    }
}
