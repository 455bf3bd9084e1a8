//! Terminal blockfall runner (default binary).
//!
//! Drives the core at a fixed 25 ms tick: poll the keyboard until the
//! tick boundary, hand the core at most one mapped input event, tick,
//! and redraw. Timing and I/O live here; the core stays pure.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::handle_key_event;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer};
use blockfall::types::{InputEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    let mut game = GameState::new(seed);
    game.start();

    let view = GameView;
    let (fb_w, fb_h) = view.frame_size();
    let mut fb = FrameBuffer::new(fb_w, fb_h);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    while game.running() {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, &mut fb);
        term.draw(&fb)?;

        // Collect at most one input event before the tick boundary.
        let mut pending: Option<InputEvent> = None;
        loop {
            let timeout = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && pending.is_none() {
                    pending = handle_key_event(key);
                }
            }
        }

        last_tick = Instant::now();
        game.tick(pending);
    }

    if game.game_over() {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, &mut fb);
        term.draw(&fb)?;
        wait_for_key()?;
    }

    Ok(())
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
