//! Session driver: the timer half of the game loop.
//!
//! `tui-catch-core` knows what a tick does; this crate decides when ticks
//! happen. It owns the single periodic timer of a game screen and keeps it
//! armed only while the game runs. Time is always passed in, so everything
//! here is testable without sleeping.

pub mod session;
pub mod ticker;

pub use tui_catch_core as core;
pub use tui_catch_types as types;

pub use session::{Session, SessionSummary};
pub use ticker::Ticker;
