use std::time::{Duration, Instant};

use tui_catch::core::GameConfig;
use tui_catch::engine::Session;
use tui_catch::types::{GameAction, InputSource};

const MS: Duration = Duration::from_millis(1);

fn quiet_config() -> GameConfig {
    GameConfig {
        spawn_chance: 0.0,
        seed: Some(3),
        ..GameConfig::default()
    }
}

/// Drive the session the way the main loop does: sleep until the next tick
/// (or until `until`), then advance.
fn run_until(s: &mut Session, now: &mut Instant, until: Instant) -> u32 {
    let mut ticks = 0;
    while *now < until {
        let wait = s.time_until_tick(*now).unwrap_or(until - *now);
        *now = (*now + wait).min(until);
        if s.advance(*now) {
            ticks += 1;
        }
    }
    ticks
}

#[test]
fn session_ticks_once_per_period_while_running() {
    let t0 = Instant::now();
    let mut now = t0;
    let mut s = Session::new(quiet_config());
    s.apply(GameAction::Start, now);

    let ticks = run_until(&mut s, &mut now, t0 + 1_000 * MS);
    assert_eq!(ticks, 20);
    assert_eq!(s.state().tick_count(), 20);
}

#[test]
fn session_stays_idle_while_stopped() {
    let t0 = Instant::now();
    let mut now = t0;
    let mut s = Session::new(quiet_config());
    s.apply(GameAction::MoveRight(InputSource::Keyboard), now);

    assert_eq!(run_until(&mut s, &mut now, t0 + 1_000 * MS), 0);
    assert!(!s.timer_armed());
}

#[test]
fn session_pause_resume_cycle() {
    let t0 = Instant::now();
    let mut now = t0;
    let mut s = Session::new(quiet_config());

    s.apply(GameAction::ToggleRunning, now);
    assert_eq!(run_until(&mut s, &mut now, t0 + 200 * MS), 4);

    s.apply(GameAction::ToggleRunning, now);
    assert!(!s.timer_armed());
    assert_eq!(run_until(&mut s, &mut now, t0 + 700 * MS), 0);

    s.apply(GameAction::ToggleRunning, now);
    assert_eq!(run_until(&mut s, &mut now, t0 + 900 * MS), 4);
    assert_eq!(s.state().tick_count(), 8);
}

#[test]
fn session_close_reports_run() {
    let t0 = Instant::now();
    let mut now = t0;
    let mut s = Session::new(quiet_config());
    s.apply(GameAction::Start, now);
    run_until(&mut s, &mut now, t0 + 500 * MS);

    let summary = s.close();
    assert_eq!(summary.ticks, 10);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.seed, 3);
}
