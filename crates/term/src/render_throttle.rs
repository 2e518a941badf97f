//! Frame skipping for the main loop.

/// Decides whether a new frame is worth drawing.
///
/// While the game runs every frame is drawn. While it is paused nothing moves
/// on its own, so a frame is drawn only when the visible state changed, plus
/// an occasional refresh so a resized or scribbled-over terminal recovers.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let due = match self.last_fingerprint {
            None => true,
            Some(_) if !is_static => true,
            Some(prev) if prev != fingerprint => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        due
    }

    /// Forget the last frame; the next call always renders.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_forces_next_render() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 5, true));
        assert!(!t.should_render(1, 5, true));
        t.reset();
        assert!(t.should_render(2, 5, true));
    }
}
