//! Shared types module - rule constants and plain data enums
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used from the game core, the input mapping and the terminal view alike.
//!
//! # Field Coordinates
//!
//! The playfield is a percentage space:
//!
//! - **x**: 0 (left edge) to 100 (right edge)
//! - **y**: 0 (top) to 100 (bottom); a block whose `y` reaches 100 has left the field
//! - **Player**: a paddle at the bottom whose left edge is in `[0, 90]`
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Timer period of the game loop |
//! | `FALL_STEP` | 2 | Units a block descends per tick |
//! | `SPAWN_CHANCE` | 0.02 | Probability of one spawn per tick |
//! | `CAPTURE_LINE` | 85 | Blocks must be strictly below this `y` to be caught |
//! | `CAPTURE_RADIUS` | 8 | Maximum horizontal distance for a catch (exclusive) |
//! | `CATCH_REWARD` | 10 | Score per caught block |
//! | `KEY_STEP` | 5 | Paddle step for keyboard input |
//! | `BUTTON_STEP` | 10 | Paddle step for on-screen buttons |
//!
//! # Examples
//!
//! ```
//! use tui_catch_types::{BlockColor, GameAction, InputSource, PLAYER_MAX_X};
//!
//! assert_eq!(BlockColor::from_str("dark"), Some(BlockColor::Dark));
//! assert_eq!(InputSource::Button.step(), 10.0);
//! assert_eq!(GameAction::MoveLeft(InputSource::Keyboard).as_str(), "moveLeft");
//! assert_eq!(PLAYER_MAX_X, 90.0);
//! ```

/// Right/bottom bound of the percentage field.
pub const FIELD_EXTENT: f32 = 100.0;

/// Width of the paddle in field units.
pub const PADDLE_WIDTH: f32 = 10.0;

/// Leftmost paddle position.
pub const PLAYER_MIN_X: f32 = 0.0;

/// Rightmost paddle position (the paddle still fits inside the field).
pub const PLAYER_MAX_X: f32 = FIELD_EXTENT - PADDLE_WIDTH;

/// Paddle position at the start of a session (centred).
pub const PLAYER_START_X: f32 = (FIELD_EXTENT - PADDLE_WIDTH) / 2.0;

/// Game loop timer period in milliseconds.
pub const TICK_MS: u32 = 50;

/// Vertical descent per tick.
pub const FALL_STEP: f32 = 2.0;

/// Probability that a tick spawns a block.
pub const SPAWN_CHANCE: f64 = 0.02;

/// Spawn range for the horizontal position, `[SPAWN_MIN_X, SPAWN_MAX_X)`.
pub const SPAWN_MIN_X: f32 = 10.0;
pub const SPAWN_MAX_X: f32 = 90.0;

/// Catches only count for blocks with `y > CAPTURE_LINE`.
pub const CAPTURE_LINE: f32 = 85.0;

/// Catches only count when `|block.x - player.x| < CAPTURE_RADIUS`.
pub const CAPTURE_RADIUS: f32 = 8.0;

/// Score awarded per caught block.
pub const CATCH_REWARD: u32 = 10;

/// Paddle step for keyboard input.
pub const KEY_STEP: f32 = 5.0;

/// Paddle step for on-screen button input.
pub const BUTTON_STEP: f32 = 10.0;


/// The two block colors
///
/// Chosen uniformly at spawn. Purely cosmetic: colors never affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Dark,
    Light,
}

impl BlockColor {
    /// The whole palette, in draw order.
    pub const ALL: [BlockColor; 2] = [BlockColor::Dark, BlockColor::Light];

    /// Parse a color name (case-insensitive)
    ///
    /// ```
    /// use tui_catch_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("LIGHT"), Some(BlockColor::Light));
    /// assert_eq!(BlockColor::from_str("red"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(BlockColor::Dark),
            "light" => Some(BlockColor::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Dark => "dark",
            BlockColor::Light => "light",
        }
    }
}

/// Where a movement command came from
///
/// The source only decides the step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Arrow keys: small steps.
    Keyboard,
    /// On-screen buttons: large steps.
    Button,
}

impl InputSource {
    /// Default step in field units for this source.
    pub fn step(&self) -> f32 {
        match self {
            InputSource::Keyboard => KEY_STEP,
            InputSource::Button => BUTTON_STEP,
        }
    }
}

/// Run state of a game session
///
/// `Stopped` is the initial state; the tick loop only runs in `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn toggled(&self) -> Self {
        match self {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        }
    }
}

/// Inputs that modify a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the paddle left by the source's step
    MoveLeft(InputSource),
    /// Move the paddle right by the source's step
    MoveRight(InputSource),
    /// Flip between running and stopped
    ToggleRunning,
    /// Enter the running state (no-op when already running)
    Start,
    /// Enter the stopped state (no-op when already stopped)
    Pause,
}

impl GameAction {
    /// Parse a camelCase action name
    ///
    /// Movement names carry the source as a suffix: `moveLeft` is a keyboard
    /// move, `moveLeftButton` a button move.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft(InputSource::Keyboard)),
            "moveright" => Some(GameAction::MoveRight(InputSource::Keyboard)),
            "moveleftbutton" => Some(GameAction::MoveLeft(InputSource::Button)),
            "moverightbutton" => Some(GameAction::MoveRight(InputSource::Button)),
            "togglerunning" | "toggle" => Some(GameAction::ToggleRunning),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft(InputSource::Keyboard) => "moveLeft",
            GameAction::MoveRight(InputSource::Keyboard) => "moveRight",
            GameAction::MoveLeft(InputSource::Button) => "moveLeftButton",
            GameAction::MoveRight(InputSource::Button) => "moveRightButton",
            GameAction::ToggleRunning => "toggleRunning",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
        }
    }
}

/// A clickable screen rectangle bound to an action.
///
/// Coordinates are terminal cells; the rectangle is `[x, x + w) x [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    pub action: GameAction,
}

impl HitRegion {
    pub const fn new(x: u16, y: u16, w: u16, h: u16, action: GameAction) -> Self {
        Self { x, y, w, h, action }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col - self.x) < self.w
            && (row - self.y) < self.h
    }
}
