//! Terminal Peg Solitaire runner.
//!
//! Fixed-rate frame loop: gather pointer/key events, deliver them to the
//! board engine, advance animations with `tick()`, drain sound cues, redraw.
//! All rule evaluation lives in the engine; this file is plumbing.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pegs::core::{builtin, Board, BoardSnapshot, BUILTIN_LAYOUT_COUNT};
use tui_pegs::input::{handle_key_event, map_mouse_event, should_quit};
use tui_pegs::options::Options;
use tui_pegs::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_pegs::types::{PointerEventKind, SoundCue, UiAction, Vec2, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "tui-pegs", about = "Terminal Peg Solitaire")]
struct Args {
    /// Built-in layout to start with (1 = English, 2 = German, 3 = French,
    /// 4 = Diamond, 5 = Asymmetrical).
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    layout: u8,

    /// Path of the persisted options file.
    #[arg(short, long, default_value = "options.json")]
    options: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let layout = builtin(args.layout as usize - 1)
        .ok_or_else(|| anyhow!("no built-in layout {}", args.layout))?;
    let mut board = Board::new(layout);
    let mut options = Options::load(&args.options);

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = BoardSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    // Last sampled pointer position, in board pixels.
    let mut cursor = Vec2::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        board.snapshot_into(options.settings.show_hints, &mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(action, &mut board, &mut options);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(ev) = map_mouse_event(mouse) {
                        let size = board.layout().size();
                        match ev.kind {
                            PointerEventKind::Down => {
                                if let Some(px) =
                                    view.board_px(size, viewport, ev.column, ev.row)
                                {
                                    cursor = px;
                                    board.begin_drag(px);
                                }
                            }
                            PointerEventKind::Move => {
                                cursor =
                                    view.board_px_clamped(size, viewport, ev.column, ev.row);
                                board.update_drag(cursor);
                            }
                            PointerEventKind::Up => {
                                cursor =
                                    view.board_px_clamped(size, viewport, ev.column, ev.row);
                                board.update_drag(cursor);
                                board.end_drag();
                            }
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            board.tick();

            for cue in board.take_sounds() {
                play_sound(term, cue, options.settings.sound_enabled)?;
            }
        }
    }
}

fn apply_action(action: UiAction, board: &mut Board, options: &mut Options) {
    match action {
        UiAction::Undo => {
            board.undo();
        }
        UiAction::Restart => {
            board.reset_pegs();
        }
        UiAction::SelectLayout(index) => {
            if (index as usize) < BUILTIN_LAYOUT_COUNT {
                if let Some(layout) = builtin(index as usize) {
                    board.load_layout(layout);
                }
            }
        }
        UiAction::ToggleHints => {
            options.settings.show_hints = !options.settings.show_hints;
            let _ = options.save();
        }
        UiAction::ToggleSound => {
            options.settings.sound_enabled = !options.settings.sound_enabled;
            let _ = options.save();
        }
    }
}

/// The one-channel terminal "mixer": each cue rings the bell when sound is
/// enabled. The engine always emits requests; muting is decided here.
fn play_sound(term: &mut TerminalRenderer, cue: SoundCue, enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    match cue {
        SoundCue::Move | SoundCue::SnapBack | SoundCue::Victory | SoundCue::Defeat => term.bell(),
    }
}
