//! TUI Catch (workspace facade crate).
//!
//! Exposes the workspace as `tui_catch::{core,engine,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_catch_core as core;
pub use tui_catch_engine as engine;
pub use tui_catch_input as input;
pub use tui_catch_term as term;
pub use tui_catch_types as types;
