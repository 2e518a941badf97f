//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the falling-block game loop and nothing else. It has no
//! dependencies on terminals, timers or input devices, which makes it:
//!
//! - **Deterministic**: the same seed replays the same spawns
//! - **Testable**: every rule is a plain method call
//! - **Portable**: any display layer can drive it and read its snapshot
//!
//! # Module Structure
//!
//! - [`block`]: a falling block and its exit/catch predicates
//! - [`config`]: rule values and environment overrides
//! - [`game_state`]: the session state, tick, catch check and paddle movement
//! - [`rng`]: seeded spawn draws
//! - [`snapshot`]: the read-only view handed to the display layer
//!
//! # Game Rules
//!
//! - Every tick each block falls 2 units; blocks reaching `y >= 100` vanish
//! - With 2% probability per tick a block spawns at the top, `x` in `[10, 90)`
//! - A block with `y > 85` within 8 units of the paddle is caught for 10 points
//! - Missing a block costs nothing
//! - The paddle moves 5 units per key press, 10 per button press, within `[0, 90]`
//!
//! # Example
//!
//! ```
//! use tui_catch_core::GameState;
//! use tui_catch_types::{BlockColor, GameAction, InputSource};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Start);
//!
//! // A block falling right above the paddle is caught as soon as it crosses the line.
//! game.place_block(game.player_x(), 84.0, BlockColor::Dark);
//! game.tick();
//! assert_eq!(game.score(), 10);
//!
//! game.apply_action(GameAction::MoveRight(InputSource::Button));
//! assert_eq!(game.player_x(), 55.0);
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`] is one step; it knows nothing about wall-clock time.
//! The caller decides when to tick (every 50 ms by default, and only while
//! running).

pub mod block;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_catch_types as types;

pub use block::{Block, BlockId};
pub use config::GameConfig;
pub use game_state::GameState;
pub use rng::SpawnRng;
pub use snapshot::{BlockSnapshot, GameSnapshot};
