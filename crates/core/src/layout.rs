//! Board layouts - static grid shape definitions
//!
//! A layout classifies each cell of a square grid as solid or hole and names
//! the hole that starts empty. Layouts are immutable once constructed and are
//! swapped wholesale when a new board shape is loaded.
//!
//! Five classic layouts ship as static data: English (33 holes), German /
//! Wiegleb (45), French / European (37), Diamond (41) and the asymmetrical
//! 3-3-2-2 board (39, on an 8x8 grid).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CellKind, GridPos, MAX_BOARD_SIZE};

/// Number of built-in layouts.
pub const BUILTIN_LAYOUT_COUNT: usize = 5;

/// Validation failure while constructing a [`GridLayout`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout '{name}': row {row} has {got} cells, expected {expected}")]
    NotSquare {
        name: String,
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("layout '{name}': board size {size} exceeds the maximum of {MAX_BOARD_SIZE}")]
    TooLarge { name: String, size: usize },
    #[error("layout '{name}': needs at least two hole cells")]
    TooFewHoles { name: String },
    #[error("layout '{name}': start cell ({x}, {y}) is out of bounds")]
    StartOutOfBounds { name: String, x: i8, y: i8 },
    #[error("layout '{name}': start cell ({x}, {y}) is not a hole")]
    StartNotHole { name: String, x: i8, y: i8 },
}

/// An immutable, validated board shape.
///
/// Coordinates are (x, y) = (column, row), 0-indexed from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    name: String,
    size: u8,
    /// Flat row-major cell classification (y * size + x).
    cells: Vec<CellKind>,
    /// The hole that starts empty.
    start_hole: GridPos,
}

impl GridLayout {
    /// Build a layout from a 0/1 matrix (0 = solid, 1 = hole) and a start
    /// cell given as (row, col), matching the persisted format.
    pub fn from_grid(
        name: &str,
        grid: &[Vec<u8>],
        start: (usize, usize),
    ) -> Result<Self, LayoutError> {
        let size = grid.len();
        if size > MAX_BOARD_SIZE as usize {
            return Err(LayoutError::TooLarge {
                name: name.to_string(),
                size,
            });
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != size {
                return Err(LayoutError::NotSquare {
                    name: name.to_string(),
                    row,
                    expected: size,
                    got: cells.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in grid {
            for &v in row {
                cells.push(if v == 0 { CellKind::Solid } else { CellKind::Hole });
            }
        }

        let (start_row, start_col) = start;
        // Reject before narrowing; a large index must not wrap into bounds.
        if start_row >= size || start_col >= size {
            return Err(LayoutError::StartOutOfBounds {
                name: name.to_string(),
                x: start_col.min(i8::MAX as usize) as i8,
                y: start_row.min(i8::MAX as usize) as i8,
            });
        }
        let start_hole = (start_col as i8, start_row as i8);

        let layout = Self {
            name: name.to_string(),
            size: size as u8,
            cells,
            start_hole,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Parse rows of `.` (solid), `o` (hole) and `*` (the start hole).
    ///
    /// This is how the built-in layouts are written down; the shapes read off
    /// the source directly.
    pub fn from_rows(name: &str, rows: &[&str]) -> Result<Self, LayoutError> {
        let size = rows.len();
        if size > MAX_BOARD_SIZE as usize {
            return Err(LayoutError::TooLarge {
                name: name.to_string(),
                size,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut start_hole: Option<GridPos> = None;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(LayoutError::NotSquare {
                    name: name.to_string(),
                    row: y,
                    expected: size,
                    got: row.chars().count(),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let kind = match ch {
                    'o' => CellKind::Hole,
                    '*' => {
                        start_hole = Some((x as i8, y as i8));
                        CellKind::Hole
                    }
                    _ => CellKind::Solid,
                };
                cells.push(kind);
            }
        }

        let start_hole = start_hole.ok_or_else(|| LayoutError::StartNotHole {
            name: name.to_string(),
            x: -1,
            y: -1,
        })?;

        let layout = Self {
            name: name.to_string(),
            size: size as u8,
            cells,
            start_hole,
        };
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let (x, y) = self.start_hole;
        if !self.in_bounds((x, y)) {
            return Err(LayoutError::StartOutOfBounds {
                name: self.name.clone(),
                x,
                y,
            });
        }
        if !self.is_hole((x, y)) {
            return Err(LayoutError::StartNotHole {
                name: self.name.clone(),
                x,
                y,
            });
        }
        if self.hole_count() < 2 {
            return Err(LayoutError::TooFewHoles {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board side length in cells.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn start_hole(&self) -> GridPos {
        self.start_hole
    }

    pub fn in_bounds(&self, cell: GridPos) -> bool {
        let (x, y) = cell;
        x >= 0 && x < self.size as i8 && y >= 0 && y < self.size as i8
    }

    /// Cell classification, or `None` out of bounds.
    pub fn kind(&self, cell: GridPos) -> Option<CellKind> {
        if !self.in_bounds(cell) {
            return None;
        }
        let (x, y) = cell;
        Some(self.cells[(y as usize) * (self.size as usize) + (x as usize)])
    }

    pub fn is_hole(&self, cell: GridPos) -> bool {
        self.kind(cell) == Some(CellKind::Hole)
    }

    pub fn hole_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&k| k == CellKind::Hole)
            .count()
    }

    /// Iterate over all hole cells in row-major order.
    pub fn holes(&self) -> impl Iterator<Item = GridPos> + '_ {
        let size = self.size as i8;
        (0..size)
            .flat_map(move |y| (0..size).map(move |x| (x, y)))
            .filter(move |&cell| self.is_hole(cell))
    }
}

/// A named board definition in the persisted layout format:
/// a size x size matrix of 0/1 (0 = solid, 1 = hole) plus a [row, col] start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDef {
    pub name: String,
    pub grid: Vec<Vec<u8>>,
    pub start: [usize; 2],
}

impl LayoutDef {
    /// Convert to a validated [`GridLayout`].
    pub fn to_layout(&self) -> Result<GridLayout, LayoutError> {
        GridLayout::from_grid(&self.name, &self.grid, (self.start[0], self.start[1]))
    }
}

/// The classic English board: a 7x7 cross padded to 9x9, 33 holes,
/// centre start.
pub fn english() -> GridLayout {
    GridLayout::from_rows(
        "English",
        &[
            ".........",
            "...ooo...",
            "...ooo...",
            ".ooooooo.",
            ".ooo*ooo.",
            ".ooooooo.",
            "...ooo...",
            "...ooo...",
            ".........",
        ],
    )
    .expect("built-in layout is valid")
}

/// Wiegleb's German board: a full 9x9 cross, 45 holes.
pub fn german() -> GridLayout {
    GridLayout::from_rows(
        "German",
        &[
            "...ooo...",
            "...ooo...",
            "...ooo...",
            "ooooooooo",
            "oooo*oooo",
            "ooooooooo",
            "...ooo...",
            "...ooo...",
            "...ooo...",
        ],
    )
    .expect("built-in layout is valid")
}

/// The French / European board: the English cross plus its four inner
/// diagonals, 37 holes.
pub fn french() -> GridLayout {
    GridLayout::from_rows(
        "French",
        &[
            ".........",
            "...ooo...",
            "..ooooo..",
            ".ooooooo.",
            ".ooo*ooo.",
            ".ooooooo.",
            "..ooooo..",
            "...ooo...",
            ".........",
        ],
    )
    .expect("built-in layout is valid")
}

/// Diamond board: 41 holes, radius-4 diamond on a 9x9 grid.
pub fn diamond() -> GridLayout {
    GridLayout::from_rows(
        "Diamond",
        &[
            "....o....",
            "...ooo...",
            "..ooooo..",
            ".ooooooo.",
            "oooo*oooo",
            ".ooooooo.",
            "..ooooo..",
            "...ooo...",
            "....o....",
        ],
    )
    .expect("built-in layout is valid")
}

/// Asymmetrical 3-3-2-2 board: 39 holes on an 8x8 grid.
pub fn asymmetrical() -> GridLayout {
    GridLayout::from_rows(
        "Asymmetrical",
        &[
            "..ooo...",
            "..ooo...",
            "..ooo...",
            "oooooooo",
            "oooo*ooo",
            "oooooooo",
            "..ooo...",
            "..ooo...",
        ],
    )
    .expect("built-in layout is valid")
}

/// Built-in layout by index (0 = English, in menu order).
pub fn builtin(index: usize) -> Option<GridLayout> {
    match index {
        0 => Some(english()),
        1 => Some(german()),
        2 => Some(french()),
        3 => Some(diamond()),
        4 => Some(asymmetrical()),
        _ => None,
    }
}
