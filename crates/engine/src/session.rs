//! One visit to the game screen.
//!
//! A `Session` pairs a [`GameState`] with the single [`Ticker`] that drives
//! it. The ticker is armed exactly while the game is running; every input
//! goes through [`Session::apply`] so the two never drift apart. Closing the
//! session consumes it, which is the only way to leave the game screen.

use std::time::{Duration, Instant};

use crate::core::{GameConfig, GameSnapshot, GameState};
use crate::ticker::Ticker;
use crate::types::GameAction;

/// Final numbers of a closed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub ticks: u64,
    pub seed: u64,
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    ticker: Ticker,
}

impl Session {
    /// Enter the game screen with a fresh, stopped game.
    pub fn new(config: GameConfig) -> Self {
        let ticker = Ticker::from_millis(config.tick_ms);
        let state = GameState::with_config(config);
        log::info!("session opened (seed {})", state.seed());
        Self { state, ticker }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn timer_armed(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Apply an input and bring the timer in line with the run state.
    pub fn apply(&mut self, action: GameAction, now: Instant) -> bool {
        let changed = self.state.apply_action(action);
        if changed {
            log::debug!("applied {}", action.as_str());
        }
        self.sync_timer(now);
        changed
    }

    /// Run the tick if the timer is due. Returns whether a tick ran.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.state.running() {
            self.ticker.disarm();
            return false;
        }
        if self.ticker.poll(now) {
            return self.state.tick();
        }
        false
    }

    /// How long the caller may wait for input before the next tick.
    ///
    /// `None` while stopped: nothing happens until the next input.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until(now)
    }

    /// Leave the game screen. The timer is released with the session.
    pub fn close(mut self) -> SessionSummary {
        self.ticker.disarm();
        let summary = SessionSummary {
            score: self.state.score(),
            ticks: self.state.tick_count(),
            seed: self.state.seed(),
        };
        log::info!(
            "session closed: score {} after {} ticks",
            summary.score,
            summary.ticks
        );
        summary
    }

    fn sync_timer(&mut self, now: Instant) {
        if self.state.running() {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockColor, InputSource};

    const MS: Duration = Duration::from_millis(1);

    fn quiet_config() -> GameConfig {
        GameConfig {
            spawn_chance: 0.0,
            seed: Some(7),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_new_session_is_stopped_and_unarmed() {
        let s = Session::new(quiet_config());
        assert!(!s.state().running());
        assert!(!s.timer_armed());
        assert_eq!(s.time_until_tick(Instant::now()), None);
    }

    #[test]
    fn test_start_arms_and_ticks_on_period() {
        let t0 = Instant::now();
        let mut s = Session::new(quiet_config());
        assert!(s.apply(GameAction::Start, t0));
        assert!(s.timer_armed());

        assert!(!s.advance(t0 + 10 * MS));
        assert!(s.advance(t0 + 50 * MS));
        assert_eq!(s.state().tick_count(), 1);
    }

    #[test]
    fn test_pause_disarms_and_blocks_late_ticks() {
        let t0 = Instant::now();
        let mut s = Session::new(quiet_config());
        s.apply(GameAction::Start, t0);
        s.apply(GameAction::ToggleRunning, t0 + 20 * MS);
        assert!(!s.timer_armed());

        // The firing scheduled before the pause must not land.
        assert!(!s.advance(t0 + 50 * MS));
        assert!(!s.advance(t0 + 500 * MS));
        assert_eq!(s.state().tick_count(), 0);
    }

    #[test]
    fn test_resume_schedules_from_resume_time() {
        let t0 = Instant::now();
        let mut s = Session::new(quiet_config());
        s.apply(GameAction::Start, t0);
        s.apply(GameAction::Pause, t0 + 10 * MS);
        s.apply(GameAction::Start, t0 + 100 * MS);

        assert!(!s.advance(t0 + 140 * MS));
        assert!(s.advance(t0 + 150 * MS));
    }

    #[test]
    fn test_moves_do_not_touch_timer() {
        let t0 = Instant::now();
        let mut s = Session::new(quiet_config());
        s.apply(GameAction::MoveLeft(InputSource::Keyboard), t0);
        assert!(!s.timer_armed());

        s.apply(GameAction::Start, t0);
        s.apply(GameAction::MoveRight(InputSource::Button), t0 + 30 * MS);
        assert!(s.advance(t0 + 50 * MS));
    }

    #[test]
    fn test_close_reports_and_releases() {
        let t0 = Instant::now();
        let mut s = Session::new(quiet_config());
        s.state.set_player_x(48.0);
        s.state.place_block(50.0, 84.0, BlockColor::Dark);
        s.apply(GameAction::Start, t0);
        s.advance(t0 + 50 * MS);

        let summary = s.close();
        assert_eq!(summary.score, 10);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.seed, 7);
    }
}
