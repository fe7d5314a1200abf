//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_memory::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::info;

use tui_memory::core::GameState;
use tui_memory::input::{handle_key_event, should_quit, Cursor, InputAction};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, TICK_MS};
use tui_memory::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(size = config.size, seed = config.seed, "starting");

    let mut game = GameState::with_config(config.game_config())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new(game.size());
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        cursor.sync_size(game.size());

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = game.snapshot();
        view.render_into_with_cursor(&snap, Some(cursor.index()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputAction::Cursor(dir)) => cursor.step(dir),
                        Some(InputAction::Flip) => game.apply_action(cursor.flip_action(snap.won)),
                        Some(InputAction::Game(action)) => game.apply_action(action),
                        None => {}
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let on_modal = view
                        .win_modal_rect(&snap, viewport)
                        .is_some_and(|r| r.contains(column, row));
                    if on_modal {
                        game.apply_action(GameAction::PlayAgain);
                    } else if let Some(index) = view.tile_at(snap.size, viewport, column, row) {
                        cursor.set_index(index);
                        game.apply_action(GameAction::Select(index));
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time, carrying sub-millisecond remainders.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last_tick += Duration::from_millis(ms as u64);
            game.tick(ms);
        }
    }
}
