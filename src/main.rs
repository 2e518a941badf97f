//! Terminal catch game runner (default binary).
//!
//! Opens straight onto the game screen. The paddle is driven with the arrow
//! keys or by clicking the on-screen buttons; `q` leaves the screen.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_catch::core::{GameConfig, GameSnapshot};
use tui_catch::engine::{Session, SessionSummary};
use tui_catch::input::{handle_key_event_kind, handle_mouse_event, should_quit};
use tui_catch::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

/// Poll timeout while stopped; nothing changes until the next input.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Redraw interval for a static screen.
const STATIC_REFRESH_MS: u64 = 1_000;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, config));

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    println!("final score: {}", summary.score);
    Ok(())
}

/// Logs go to a file, never to the terminal the game is drawn on.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {path}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<SessionSummary> {
    let mut session = Session::new(config);
    let view = GameView::new();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let started = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), snap.is_static()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = session
            .time_until_tick(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(session.close());
                    }
                    if let Some(action) = handle_key_event_kind(key) {
                        session.apply(action, Instant::now());
                    }
                }
                Event::Mouse(mouse) => {
                    let regions = view.hit_regions(viewport);
                    if let Some(action) = handle_mouse_event(mouse, &regions) {
                        session.apply(action, Instant::now());
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        session.advance(Instant::now());
    }
}
