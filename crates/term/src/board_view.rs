//! BoardView: maps a `BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse mapping from
//! terminal coordinates to board pixels, so the input path and the drawn
//! board can never disagree about where a cell is.

use crate::core::snapshot::{BoardSnapshot, PegView};
use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::types::{CellKind, GameResult, PegPhase, Vec2, TILE_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board lands on screen and at what scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Metrics {
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
    size: u16,
}

impl Metrics {
    fn board_w(&self) -> u16 {
        self.size * self.cell_w
    }

    fn board_h(&self) -> u16 {
        self.size * self.cell_h
    }
}

/// A lightweight terminal view for the solitaire board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const BOARD_BG: Rgb = Rgb::new(48, 36, 26);
const SOLID_BG: Rgb = Rgb::new(24, 20, 18);
const HOLE_FG: Rgb = Rgb::new(110, 90, 70);
const BORDER_FG: Rgb = Rgb::new(180, 180, 180);
const PEG: Rgb = Rgb::new(222, 168, 62);
const PEG_DRAGGED: Rgb = Rgb::new(250, 210, 120);
const HINT_BG: Rgb = Rgb::new(52, 96, 52);
const HINT_FULL_BG: Rgb = Rgb::new(80, 160, 80);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    fn metrics(&self, size: u8, viewport: Viewport) -> Metrics {
        let size = size as u16;
        let board_w = size * self.cell_w;
        let board_h = size * self.cell_h;
        Metrics {
            origin_x: viewport.width.saturating_sub(board_w) / 2,
            origin_y: viewport.height.saturating_sub(board_h + 3) / 2,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            size,
        }
    }

    /// Terminal coordinate of a grid cell's top-left corner.
    pub fn term_cell_origin(
        &self,
        size: u8,
        viewport: Viewport,
        cell: (i8, i8),
    ) -> (u16, u16) {
        let m = self.metrics(size, viewport);
        (
            m.origin_x + (cell.0 as u16) * m.cell_w,
            m.origin_y + (cell.1 as u16) * m.cell_h,
        )
    }

    /// Convert a terminal coordinate to a board-pixel position, or `None`
    /// outside the drawn board. This is the platform-to-engine scale factor.
    pub fn board_px(
        &self,
        size: u8,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<Vec2> {
        let m = self.metrics(size, viewport);
        if column < m.origin_x
            || row < m.origin_y
            || column >= m.origin_x + m.board_w()
            || row >= m.origin_y + m.board_h()
        {
            return None;
        }
        Some(self.board_px_unclipped(&m, column, row))
    }

    /// Like [`BoardView::board_px`] but clamps coordinates outside the board
    /// onto its edge; used for drag motion so the engine can keep clamping.
    pub fn board_px_clamped(&self, size: u8, viewport: Viewport, column: u16, row: u16) -> Vec2 {
        let m = self.metrics(size, viewport);
        let column = column.clamp(m.origin_x, m.origin_x + m.board_w().saturating_sub(1));
        let row = row.clamp(m.origin_y, m.origin_y + m.board_h().saturating_sub(1));
        self.board_px_unclipped(&m, column, row)
    }

    fn board_px_unclipped(&self, m: &Metrics, column: u16, row: u16) -> Vec2 {
        let fx = (column - m.origin_x) as f32 + 0.5;
        let fy = (row - m.origin_y) as f32 + 0.5;
        Vec2::new(
            fx / m.cell_w as f32 * TILE_SIZE as f32,
            fy / m.cell_h as f32 * TILE_SIZE as f32,
        )
    }

    /// Terminal position of a board-pixel coordinate.
    fn term_pos(&self, m: &Metrics, pos: Vec2) -> (u16, u16) {
        let tx = (pos.x / TILE_SIZE as f32 * m.cell_w as f32).round() as i32;
        let ty = (pos.y / TILE_SIZE as f32 * m.cell_h as f32).round() as i32;
        (
            (m.origin_x as i32 + tx).max(0) as u16,
            (m.origin_y as i32 + ty).max(0) as u16,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Draw order is fixed: board background, cells, highlights, static pegs,
    /// fading pegs, dragged peg, status text.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            fg: TEXT_FG,
            bg: SCREEN_BG,
        });

        let m = self.metrics(snap.size, viewport);

        self.draw_border(fb, &m);
        self.draw_cells(snap, fb, &m);
        self.draw_highlights(snap, fb, &m);

        // Static pegs first (idle and snapping-back), then fading, then the
        // dragged peg so it always sits on top.
        for peg in &snap.pegs {
            if matches!(peg.phase, PegPhase::Idle | PegPhase::SnappingBack) {
                self.draw_peg(fb, &m, peg);
            }
        }
        for peg in &snap.pegs {
            if peg.phase == PegPhase::FadingOut {
                self.draw_peg(fb, &m, peg);
            }
        }
        for peg in &snap.pegs {
            if peg.phase == PegPhase::Dragged {
                self.draw_peg(fb, &m, peg);
            }
        }

        self.draw_status(snap, fb, &m);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, m: &Metrics) {
        let x0 = m.origin_x.saturating_sub(1);
        let y0 = m.origin_y.saturating_sub(1);
        let w = m.board_w() + 2;
        let h = m.board_h() + 2;
        let edge = |ch| Cell {
            ch,
            fg: BORDER_FG,
            bg: SCREEN_BG,
        };
        for x in 0..w {
            fb.set(x0 + x, y0, edge('─'));
            fb.set(x0 + x, y0 + h - 1, edge('─'));
        }
        for y in 0..h {
            fb.set(x0, y0 + y, edge('│'));
            fb.set(x0 + w - 1, y0 + y, edge('│'));
        }
        fb.set(x0, y0, edge('┌'));
        fb.set(x0 + w - 1, y0, edge('┐'));
        fb.set(x0, y0 + h - 1, edge('└'));
        fb.set(x0 + w - 1, y0 + h - 1, edge('┘'));
    }

    fn draw_cells(&self, snap: &BoardSnapshot, fb: &mut FrameBuffer, m: &Metrics) {
        for y in 0..snap.size {
            for x in 0..snap.size {
                let (bg, ch) = match snap.kind(x, y) {
                    CellKind::Hole => (BOARD_BG, '·'),
                    CellKind::Solid => (SOLID_BG, ' '),
                };
                let tx = m.origin_x + (x as u16) * m.cell_w;
                let ty = m.origin_y + (y as u16) * m.cell_h;
                fb.fill_rect(
                    tx,
                    ty,
                    m.cell_w,
                    m.cell_h,
                    Cell {
                        ch: ' ',
                        fg: HOLE_FG,
                        bg,
                    },
                );
                if ch != ' ' {
                    fb.set(
                        tx + m.cell_w / 2,
                        ty + m.cell_h / 2,
                        Cell {
                            ch,
                            fg: HOLE_FG,
                            bg,
                        },
                    );
                }
            }
        }
    }

    fn draw_highlights(&self, snap: &BoardSnapshot, fb: &mut FrameBuffer, m: &Metrics) {
        for &(hx, hy) in &snap.highlights {
            // Full highlight when the dragged peg hovers the destination.
            let bg = if snap.hover_cell == Some((hx, hy)) {
                HINT_FULL_BG
            } else {
                HINT_BG
            };
            let tx = m.origin_x + (hx as u16) * m.cell_w;
            let ty = m.origin_y + (hy as u16) * m.cell_h;
            fb.fill_rect(
                tx,
                ty,
                m.cell_w,
                m.cell_h,
                Cell {
                    ch: ' ',
                    fg: HOLE_FG,
                    bg,
                },
            );
        }
    }

    fn draw_peg(&self, fb: &mut FrameBuffer, m: &Metrics, peg: &PegView) {
        let (tx, ty) = self.term_pos(m, peg.pos);
        let color = match peg.phase {
            PegPhase::Dragged => PEG_DRAGGED,
            PegPhase::FadingOut => PEG.blend_over(BOARD_BG, peg.alpha),
            _ => PEG,
        };
        fb.fill_rect(
            tx,
            ty,
            m.cell_w,
            m.cell_h,
            Cell {
                ch: ' ',
                fg: color,
                bg: color,
            },
        );
    }

    fn draw_status(&self, snap: &BoardSnapshot, fb: &mut FrameBuffer, m: &Metrics) {
        let y = m.origin_y + m.board_h() + 1;
        let status = match snap.result {
            GameResult::Won => format!("Moves: {}   You won!", snap.move_count),
            GameResult::Lost => format!("Moves: {}   No more moves", snap.move_count),
            GameResult::InProgress => format!("Moves: {}", snap.move_count),
        };
        fb.put_str(m.origin_x, y, &status, TEXT_FG, SCREEN_BG);

        let help = "drag: move  u: undo  r: restart  1-5: layout  h: hints  m: sound  q: quit";
        let hx = fb.width().saturating_sub(help.len() as u16) / 2;
        fb.put_str(hx, y + 1, help, HOLE_FG, SCREEN_BG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{layout::english, Board};

    fn view_and_snap() -> (BoardView, BoardSnapshot) {
        let board = Board::new(english());
        (BoardView::default(), board.snapshot(true))
    }

    #[test]
    fn test_render_fills_viewport() {
        let (view, snap) = view_and_snap();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        assert_eq!((fb.width(), fb.height()), (80, 24));
    }

    #[test]
    fn test_board_px_round_trips_through_cells() {
        let (view, snap) = view_and_snap();
        let viewport = Viewport::new(80, 24);

        // Every board cell maps back to itself through the screen.
        let board = Board::new(english());
        let m_size = snap.size;
        for y in 0..m_size as i8 {
            for x in 0..m_size as i8 {
                let m = view.metrics(m_size, viewport);
                let col = m.origin_x + (x as u16) * m.cell_w;
                let row = m.origin_y + (y as u16) * m.cell_h;
                let px = view.board_px(m_size, viewport, col, row).unwrap();
                assert_eq!(board.cell_at(px), Some((x, y)));
            }
        }
    }

    #[test]
    fn test_board_px_outside_is_none_but_clamped_is_inside() {
        let (view, snap) = view_and_snap();
        let viewport = Viewport::new(80, 24);
        assert_eq!(view.board_px(snap.size, viewport, 0, 0), None);

        let clamped = view.board_px_clamped(snap.size, viewport, 0, 0);
        let board = Board::new(english());
        assert!(board.cell_at(clamped).is_some());
    }

    #[test]
    fn test_render_draws_pegs_over_holes() {
        let (view, snap) = view_and_snap();
        let viewport = Viewport::new(80, 24);
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&snap, viewport, &mut fb);

        let m = view.metrics(snap.size, viewport);
        // A peg cell is painted in the peg color.
        let peg_cell = fb
            .get(m.origin_x + 3 * m.cell_w, m.origin_y + 3 * m.cell_h)
            .unwrap();
        assert_eq!(peg_cell.bg, PEG);
        // The empty start hole keeps the board background.
        let hole_cell = fb
            .get(m.origin_x + 4 * m.cell_w, m.origin_y + 4 * m.cell_h)
            .unwrap();
        assert_eq!(hole_cell.bg, BOARD_BG);
    }
}
