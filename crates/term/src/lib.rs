//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! plain framebuffer, and the renderer flushes only the changed cells to the
//! terminal. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layouts can be asserted on in tests
//! - Expose the on-screen buttons as hit regions for mouse input

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_catch_core as core;
pub use tui_catch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameLayout, GameView, Viewport, FIELD_COLS, FIELD_ROWS};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
