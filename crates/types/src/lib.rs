//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::ops::{Add, AddAssign, Mul, Sub};

/// Largest supported board side length, in cells.
pub const MAX_BOARD_SIZE: u8 = 9;

/// Side length of one board cell, in board pixels.
pub const TILE_SIZE: i32 = 16;

/// Fixed frame duration (milliseconds), targeting ~60 ticks/second.
pub const TICK_MS: u32 = 16;

/// Snap-back animation speed, in board pixels per tick.
pub const SNAP_BACK_SPEED: f32 = 12.0;

/// Alpha decrease per tick while a captured peg fades out.
pub const FADE_STEP: u8 = 8;

/// Fully opaque peg alpha.
pub const ALPHA_OPAQUE: u8 = 255;

/// A grid cell coordinate: (column, row), 0-indexed from the top-left.
pub type GridPos = (i8, i8);

/// Classification of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Non-playable cell; never holds a peg.
    Solid,
    /// Playable cell; either occupied by a peg or empty.
    Hole,
}

/// Animation/interaction phase of a peg.
///
/// Pegs live in a single collection tagged by phase; at most one peg is in
/// [`PegPhase::Dragged`] at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegPhase {
    /// Resting exactly on its home cell.
    Idle,
    /// Following the pointer.
    Dragged,
    /// Animating back toward its home cell after an illegal drop.
    SnappingBack,
    /// Captured; alpha decreases each tick until the peg is removed.
    FadingOut,
}

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    /// Exactly one peg remains.
    Won,
    /// More than one peg remains and none has a legal jump.
    Lost,
}

/// Sound-trigger request emitted by the board engine.
///
/// The engine only requests; whether anything is audible is the host's
/// decision (e.g. sound disabled in settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A legal jump was committed.
    Move,
    /// An illegal drop away from the origin cell.
    SnapBack,
    /// One-shot on transition into `Won`.
    Victory,
    /// One-shot on transition into `Lost`.
    Defeat,
}

/// Discrete pointer event kinds delivered by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Up,
    /// Position sample while the button may be held (drag/move).
    Move,
}

/// UI-level actions mapped from keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Undo,
    Restart,
    /// Select a built-in layout by index (0-based).
    SelectLayout(u8),
    ToggleHints,
    ToggleSound,
}

/// Immutable settings snapshot consumed by the frame loop and view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub show_hints: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hints: true,
            sound_enabled: true,
        }
    }
}

/// 2D vector in board-pixel space.
///
/// Used for continuous peg positions while dragging and animating. Idle pegs
/// always sit on exact multiples of [`TILE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pixel position of the top-left corner of a grid cell.
    pub fn from_cell(cell: GridPos) -> Self {
        Self::new(
            (cell.0 as i32 * TILE_SIZE) as f32,
            (cell.1 as i32 * TILE_SIZE) as f32,
        )
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len == 0.0 {
            None
        } else {
            Some(Vec2::new(self.x / len, self.y / len))
        }
    }

    pub fn clamp(self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cell_is_tile_multiple() {
        let v = Vec2::from_cell((3, 5));
        assert_eq!(v.x, (3 * TILE_SIZE) as f32);
        assert_eq!(v.y, (5 * TILE_SIZE) as f32);
    }

    #[test]
    fn test_normalized_unit_length() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(Vec2::new(0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn test_clamp_stays_within_bounds() {
        let v = Vec2::new(-5.0, 200.0);
        let c = v.clamp(Vec2::new(0.0, 0.0), Vec2::new(128.0, 128.0));
        assert_eq!(c, Vec2::new(0.0, 128.0));
    }
}
