//! End-to-end drag / animation / snapshot flow through the public API

use tui_pegs::core::{builtin, Board, BoardSnapshot};
use tui_pegs::term::{BoardView, Viewport};
use tui_pegs::types::{GridPos, PegPhase, Vec2, TILE_SIZE};

fn center(cell: GridPos) -> Vec2 {
    Vec2::new(
        (cell.0 as i32 * TILE_SIZE + TILE_SIZE / 2) as f32,
        (cell.1 as i32 * TILE_SIZE + TILE_SIZE / 2) as f32,
    )
}

#[test]
fn test_drag_phase_lifecycle() {
    let mut board = Board::new(builtin(0).unwrap());

    assert!(board.dragged_peg().is_none());
    assert!(board.begin_drag(center((4, 2))));
    let dragged = board.dragged_peg().unwrap();
    assert_eq!(dragged.phase(), PegPhase::Dragged);
    assert_eq!(dragged.home_cell(), (4, 2));

    // A second pick-up is silently refused while one drag is active.
    assert!(!board.begin_drag(center((2, 4))));

    board.update_drag(center((4, 4)));
    assert!(board.end_drag());
    assert!(board.dragged_peg().is_none());

    // The mover is idle exactly on the destination cell.
    let mover = board
        .pegs()
        .iter()
        .find(|p| p.home_cell() == (4, 4))
        .unwrap();
    assert_eq!(mover.phase(), PegPhase::Idle);
    assert_eq!(mover.pos(), Vec2::from_cell((4, 4)));
}

#[test]
fn test_captured_peg_fades_and_disappears() {
    let mut board = Board::new(builtin(0).unwrap());
    assert!(board.begin_drag(center((4, 2))));
    board.update_drag(center((4, 4)));
    assert!(board.end_drag());

    let fading = board
        .pegs()
        .iter()
        .filter(|p| p.phase() == PegPhase::FadingOut)
        .count();
    assert_eq!(fading, 1);
    let total_before = board.pegs().len();

    // Fade step 8 from 255: gone after 32 ticks, not before.
    for _ in 0..31 {
        board.tick();
    }
    assert_eq!(board.pegs().len(), total_before);
    board.tick();
    assert_eq!(board.pegs().len(), total_before - 1);
    assert!(board
        .pegs()
        .iter()
        .all(|p| p.phase() != PegPhase::FadingOut));
}

#[test]
fn test_illegal_drop_snaps_back_to_origin() {
    let mut board = Board::new(builtin(0).unwrap());
    assert!(board.begin_drag(center((4, 2))));
    // Drop on a faraway solid cell.
    board.update_drag(center((0, 0)));
    assert!(!board.end_drag());

    let peg = board
        .pegs()
        .iter()
        .find(|p| p.home_cell() == (4, 2))
        .unwrap();
    assert_eq!(peg.phase(), PegPhase::SnappingBack);

    // The animation lands exactly on the home cell, never past it.
    let home = Vec2::from_cell((4, 2));
    for _ in 0..128 {
        board.tick();
    }
    let peg = board
        .pegs()
        .iter()
        .find(|p| p.home_cell() == (4, 2))
        .unwrap();
    assert_eq!(peg.phase(), PegPhase::Idle);
    assert_eq!(peg.pos(), home);
}

#[test]
fn test_drop_resolves_at_release_coordinates() {
    // Button down over (4,2), button up over (4,4), with no motion samples
    // in between; the drop must resolve at the release coordinates, not at
    // the pick-up point.
    let mut board = Board::new(builtin(0).unwrap());
    let view = BoardView::default();
    let viewport = Viewport::new(80, 24);
    let size = board.layout().size();

    let down = view.term_cell_origin(size, viewport, (4, 2));
    let px = view.board_px(size, viewport, down.0, down.1).unwrap();
    assert!(board.begin_drag(px));

    let up = view.term_cell_origin(size, viewport, (4, 4));
    let px = view.board_px_clamped(size, viewport, up.0, up.1);
    board.update_drag(px);
    assert!(board.end_drag());

    let mover = board
        .pegs()
        .iter()
        .find(|p| p.home_cell() == (4, 4))
        .unwrap();
    assert_eq!(mover.phase(), PegPhase::Idle);
}

#[test]
fn test_drag_outside_surface_stays_clamped() {
    let mut board = Board::new(builtin(0).unwrap());
    assert!(board.begin_drag(center((4, 2))));
    board.update_drag(Vec2::new(-1000.0, 1000.0));

    let peg = board.dragged_peg().unwrap();
    let max = (9 * TILE_SIZE - TILE_SIZE) as f32;
    assert!(peg.pos().x >= 0.0 && peg.pos().y <= max);
    // The derived cell is still a valid board cell.
    let cell = peg.grid_pos(9);
    assert!((0..9).contains(&cell.0) && (0..9).contains(&cell.1));

    board.end_drag();
}

#[test]
fn test_snapshot_tracks_drag_and_hints() {
    let mut board = Board::new(builtin(0).unwrap());
    let mut snap = BoardSnapshot::default();

    board.snapshot_into(true, &mut snap);
    assert_eq!(snap.pegs.len(), 32);
    assert!(snap.highlights.is_empty());

    assert!(board.begin_drag(center((4, 2))));
    board.update_drag(center((4, 4)));
    board.snapshot_into(true, &mut snap);
    assert_eq!(snap.highlights.as_slice(), [(4, 4)]);
    assert_eq!(snap.hover_cell, Some((4, 4)));

    // Hints off: highlight set is empty even mid-drag.
    board.snapshot_into(false, &mut snap);
    assert!(snap.highlights.is_empty());

    board.end_drag();
    board.snapshot_into(true, &mut snap);
    assert_eq!(snap.move_count, 1);
    assert!(snap.can_undo);
    assert_eq!(snap.hover_cell, None);
}
