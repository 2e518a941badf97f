//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! Arrow keys give the small keyboard step; clicks on the on-screen buttons
//! give the large button step. The clickable areas are supplied by the view
//! as [`crate::types::HitRegion`]s, so this crate stays layout-agnostic.

pub mod map;

pub use tui_catch_types as types;

pub use map::{handle_key_event, handle_key_event_kind, handle_mouse_event, should_quit};
