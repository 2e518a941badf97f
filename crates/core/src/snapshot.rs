use serde::Serialize;

use crate::block::{Block, BlockId};
use crate::types::BlockColor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockSnapshot {
    pub id: BlockId,
    pub x: f32,
    pub y: f32,
    #[serde(serialize_with = "serialize_color")]
    pub color: BlockColor,
}

impl From<&Block> for BlockSnapshot {
    fn from(value: &Block) -> Self {
        Self {
            id: value.id,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

/// Everything the display layer reads from a session.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GameSnapshot {
    pub blocks: Vec<BlockSnapshot>,
    pub player_x: f32,
    pub score: u32,
    pub running: bool,
    pub tick: u64,
}

impl GameSnapshot {
    /// Paused with nothing that could still change on its own.
    pub fn is_static(&self) -> bool {
        !self.running
    }

    /// FNV-1a 64-bit hash of the visible state.
    ///
    /// Equal snapshots hash equally; used to skip redrawing unchanged frames.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv64::new();
        h.write(&self.player_x.to_bits().to_le_bytes());
        h.write(&self.score.to_le_bytes());
        h.write(&[self.running as u8]);
        h.write(&(self.blocks.len() as u64).to_le_bytes());
        for b in &self.blocks {
            h.write(&b.id.0.to_le_bytes());
            h.write(&b.x.to_bits().to_le_bytes());
            h.write(&b.y.to_bits().to_le_bytes());
            h.write(&[b.color as u8]);
        }
        h.finish()
    }
}

fn serialize_color<S: serde::Serializer>(color: &BlockColor, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(color.as_str())
}

struct Fnv64 {
    state: u64,
}

impl Fnv64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001B3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
