//! Game state module - the falling-block game loop
//!
//! Owns the live blocks, the paddle and the score, and implements the three
//! rule operations: the timed tick, the catch check, and paddle movement.
//! The catch check is re-run synchronously at the end of every operation
//! that changes a block or the paddle, so callers never observe a state in
//! which a catchable block is still live.

use crate::block::{Block, BlockId};
use crate::config::GameConfig;
use crate::rng::SpawnRng;
use crate::snapshot::{BlockSnapshot, GameSnapshot};
use crate::types::*;

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    blocks: Vec<Block>,
    player_x: f32,
    score: u32,
    run_state: RunState,
    /// Next id handed to a new block.
    next_block_id: u64,
    /// Ticks executed so far (only advances while running).
    tick_count: u64,
    rng: SpawnRng,
}

impl GameState {
    /// Create a stopped session with the default rules and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    /// Create a stopped session from a config.
    ///
    /// Without a configured seed a random one is drawn.
    pub fn with_config(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            blocks: Vec::new(),
            player_x: PLAYER_START_X,
            score: 0,
            run_state: RunState::Stopped,
            next_block_id: 1,
            tick_count: 0,
            rng: SpawnRng::new(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.blocks.clear();
        out.blocks.extend(self.blocks.iter().map(BlockSnapshot::from));
        out.player_x = self.player_x;
        out.score = self.score;
        out.running = self.running();
        out.tick = self.tick_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Enter the running state
    pub fn start(&mut self) -> bool {
        self.set_run_state(RunState::Running)
    }

    /// Enter the stopped state
    pub fn pause(&mut self) -> bool {
        self.set_run_state(RunState::Stopped)
    }

    /// Flip the running flag. Score, blocks and paddle are untouched.
    pub fn toggle_running(&mut self) -> bool {
        self.set_run_state(self.run_state.toggled())
    }

    fn set_run_state(&mut self, next: RunState) -> bool {
        if self.run_state == next {
            return false;
        }
        self.run_state = next;
        log::info!(
            "run state -> {:?} (score {}, {} blocks)",
            next,
            self.score,
            self.blocks.len()
        );
        true
    }

    /// One step of the game loop.
    ///
    /// Does nothing and returns `false` while stopped. Otherwise: every block
    /// descends, blocks past the bottom are dropped, at most one block
    /// spawns, and the catch check runs against the new positions.
    pub fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        self.tick_count = self.tick_count.wrapping_add(1);

        let step = self.config.fall_step;
        for block in &mut self.blocks {
            block.descend(step);
        }
        self.blocks.retain(|b| !b.has_exited());

        // Spawn only after the existing blocks have settled for this tick.
        if self.rng.should_spawn(self.config.spawn_chance) {
            let x = self.rng.spawn_x();
            let color = self.rng.color();
            let id = self.spawn_block(x, color);
            log::debug!("spawned block {} at x={:.1} ({})", id.0, x, color.as_str());
        }

        self.resolve_catches();
        true
    }

    /// Remove every block the paddle currently catches and credit the score.
    ///
    /// Returns the number of blocks caught. Runs regardless of run state.
    pub fn resolve_catches(&mut self) -> u32 {
        let player_x = self.player_x;
        let line = self.config.capture_line;
        let radius = self.config.capture_radius;

        let before = self.blocks.len();
        self.blocks
            .retain(|b| !b.is_caught_by(player_x, line, radius));
        let caught = (before - self.blocks.len()) as u32;

        if caught > 0 {
            self.score = self
                .score
                .saturating_add(caught.saturating_mul(self.config.catch_reward));
            log::debug!("caught {} block(s), score {}", caught, self.score);
        }
        caught
    }

    /// Move the paddle by `delta`, clamped to the field.
    ///
    /// Returns whether the paddle actually moved. The catch check runs either way.
    pub fn move_player(&mut self, delta: f32) -> bool {
        let target = self.player_x + delta;
        self.set_player_x(target)
    }

    /// Place the paddle at `x`, clamped to `[0, 90]`.
    pub fn set_player_x(&mut self, x: f32) -> bool {
        let clamped = clamp_player_x(x);
        let moved = clamped != self.player_x;
        self.player_x = clamped;
        self.resolve_catches();
        moved
    }

    /// Insert a block at an arbitrary position.
    ///
    /// `x` is clamped to `[0, 100]` and `y` to `[0, 100)`. Returns the new id,
    /// or `None` when the block was caught on the spot.
    pub fn place_block(&mut self, x: f32, y: f32, color: BlockColor) -> Option<BlockId> {
        let id = self.spawn_block(clamp_block_x(x), color);
        if let Some(block) = self.blocks.last_mut() {
            block.y = clamp_block_y(y);
        }
        self.resolve_catches();
        self.blocks.iter().any(|b| b.id == id).then_some(id)
    }

    fn spawn_block(&mut self, x: f32, color: BlockColor) -> BlockId {
        let id = BlockId(self.next_block_id);
        self.next_block_id = self.next_block_id.wrapping_add(1);
        self.blocks.push(Block::spawn(id, x, color));
        id
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft(source) => self.move_player(-self.config.step_for(source)),
            GameAction::MoveRight(source) => self.move_player(self.config.step_for(source)),
            GameAction::ToggleRunning => self.toggle_running(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

fn clamp_player_x(x: f32) -> f32 {
    if x.is_nan() {
        return PLAYER_MIN_X;
    }
    x.clamp(PLAYER_MIN_X, PLAYER_MAX_X)
}

fn clamp_block_x(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, FIELD_EXTENT)
}

fn clamp_block_y(y: f32) -> f32 {
    if y.is_nan() {
        return 0.0;
    }
    // Largest representable value strictly below the bottom bound.
    y.clamp(0.0, f32::from_bits(FIELD_EXTENT.to_bits() - 1))
}
