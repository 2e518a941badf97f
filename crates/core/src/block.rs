//! Falling block type and its per-block rules.

use serde::Serialize;

use crate::types::{BlockColor, FIELD_EXTENT};

/// Unique block identity within a session.
///
/// Ids are handed out in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

/// A falling block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub id: BlockId,
    /// Percent of field width, `[0, 100]`.
    pub x: f32,
    /// Percent of field height, `[0, 100)` while live; 0 is the top.
    pub y: f32,
    pub color: BlockColor,
}

impl Block {
    /// Create a block at the top of the field.
    pub fn spawn(id: BlockId, x: f32, color: BlockColor) -> Self {
        Self {
            id,
            x,
            y: 0.0,
            color,
        }
    }

    /// Move the block down by `step`.
    pub fn descend(&mut self, step: f32) {
        self.y += step;
    }

    /// The block has scrolled past the bottom bound.
    pub fn has_exited(&self) -> bool {
        self.y >= FIELD_EXTENT
    }

    /// Whether a paddle at `player_x` catches this block.
    ///
    /// Both comparisons are strict: a block exactly on the capture line, or
    /// exactly `radius` away, is not caught.
    pub fn is_caught_by(&self, player_x: f32, capture_line: f32, radius: f32) -> bool {
        self.y > capture_line && (self.x - player_x).abs() < radius
    }
}
