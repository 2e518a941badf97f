//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!  SCORE 120                       [ PAUSE ]
//! ┌────────────────────────────────────────┐
//! │            ██                          │
//! │                      ██                │
//! │                 ▀▀▀▀                   │
//! └────────────────────────────────────────┘
//!
//!               [  <  ]    [  >  ]
//!      </> move   space play/pause   q quit
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, GameAction, HitRegion, InputSource, FIELD_EXTENT, PADDLE_WIDTH};

/// Playfield width in terminal columns (each column is 2.5 field units).
pub const FIELD_COLS: u16 = 40;

/// Playfield height in terminal rows (each row is 5 field units).
pub const FIELD_ROWS: u16 = 20;

/// Columns a block occupies.
const BLOCK_COLS: u16 = 2;

const LEFT_LABEL: &str = "[  <  ]";
const RIGHT_LABEL: &str = "[  >  ]";
const PAUSE_LABEL: &str = "[ PAUSE ]";
const PLAY_LABEL: &str = "[ PLAY  ]";
const HELP_TEXT: &str = "</> move   space play/pause   q quit";

const INK: Rgb = Rgb::new(20, 20, 20);
const PAPER: Rgb = Rgb::new(255, 255, 255);
const FIELD_BG: Rgb = Rgb::new(245, 245, 245);
const MUTED: Rgb = Rgb::new(110, 110, 110);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where everything goes for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Top-left corner of the field border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub hud_y: u16,
    pub buttons_y: u16,
    pub help_y: u16,
    pub left_button_x: u16,
    pub right_button_x: u16,
    pub toggle_button_x: u16,
}

impl GameLayout {
    pub const FRAME_W: u16 = FIELD_COLS + 2;
    pub const FRAME_H: u16 = FIELD_ROWS + 2;
    /// HUD + frame + spacer + buttons + help.
    pub const TOTAL_H: u16 = 1 + Self::FRAME_H + 1 + 1 + 1;

    pub fn compute(viewport: Viewport) -> Self {
        let frame_x = viewport.width.saturating_sub(Self::FRAME_W) / 2;
        let hud_y = viewport.height.saturating_sub(Self::TOTAL_H) / 2;
        let frame_y = hud_y + 1;
        let buttons_y = frame_y + Self::FRAME_H + 1;

        let buttons_w = LEFT_LABEL.len() as u16 + 4 + RIGHT_LABEL.len() as u16;
        let left_button_x = frame_x + Self::FRAME_W.saturating_sub(buttons_w) / 2;
        let right_button_x = left_button_x + LEFT_LABEL.len() as u16 + 4;
        let toggle_button_x = frame_x + Self::FRAME_W - PAUSE_LABEL.len() as u16;

        Self {
            frame_x,
            frame_y,
            hud_y,
            buttons_y,
            help_y: buttons_y + 1,
            left_button_x,
            right_button_x,
            toggle_button_x,
        }
    }

    /// Clickable regions: move left, move right, play/pause.
    pub fn hit_regions(&self) -> [HitRegion; 3] {
        [
            HitRegion::new(
                self.left_button_x,
                self.buttons_y,
                LEFT_LABEL.len() as u16,
                1,
                GameAction::MoveLeft(InputSource::Button),
            ),
            HitRegion::new(
                self.right_button_x,
                self.buttons_y,
                RIGHT_LABEL.len() as u16,
                1,
                GameAction::MoveRight(InputSource::Button),
            ),
            HitRegion::new(
                self.toggle_button_x,
                self.hud_y,
                PAUSE_LABEL.len() as u16,
                1,
                GameAction::ToggleRunning,
            ),
        ]
    }

    /// Screen cell of a field position (column of the left edge, row).
    pub fn field_cell(&self, x: f32, y: f32, cols_wide: u16) -> (u16, u16) {
        let col = scale(x, FIELD_COLS).min(FIELD_COLS.saturating_sub(cols_wide));
        let row = scale(y, FIELD_ROWS).min(FIELD_ROWS - 1);
        (self.frame_x + 1 + col, self.frame_y + 1 + row)
    }
}

/// Map a `[0, 100]` coordinate onto `[0, cells)`.
fn scale(v: f32, cells: u16) -> u16 {
    if !(v > 0.0) {
        return 0;
    }
    ((v / FIELD_EXTENT) * cells as f32) as u16
}

/// A lightweight terminal renderer for the game screen.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Clickable regions for the current viewport.
    pub fn hit_regions(&self, viewport: Viewport) -> [HitRegion; 3] {
        GameLayout::compute(viewport).hit_regions()
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = GameLayout::compute(viewport);
        let ink = CellStyle::new(INK, PAPER);
        let field = CellStyle::new(INK, FIELD_BG);

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            FIELD_COLS,
            FIELD_ROWS,
            ' ',
            field,
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            GameLayout::FRAME_W,
            GameLayout::FRAME_H,
            ink.bold(),
        );

        self.draw_hud(fb, snap, &layout);

        // Paddle first so a block sitting on it stays visible.
        let paddle_cols = (PADDLE_WIDTH * FIELD_COLS as f32 / FIELD_EXTENT) as u16;
        let (px, _) = layout.field_cell(snap.player_x, 0.0, paddle_cols);
        let paddle_y = layout.frame_y + FIELD_ROWS;
        fb.fill_rect(px, paddle_y, paddle_cols, 1, '▀', field.bold());

        for block in &snap.blocks {
            let (bx, by) = layout.field_cell(block.x, block.y, BLOCK_COLS);
            fb.fill_rect(bx, by, BLOCK_COLS, 1, '█', block_style(block.color));
        }

        if !snap.running {
            let text = if snap.tick == 0 && snap.score == 0 {
                "SPACE TO START"
            } else {
                "PAUSED"
            };
            let mid_y = layout.frame_y + GameLayout::FRAME_H / 2;
            fb.put_str_centered(layout.frame_x, mid_y, GameLayout::FRAME_W, text, ink.bold());
        }

        let button = CellStyle::new(PAPER, INK).bold();
        fb.put_str(layout.left_button_x, layout.buttons_y, LEFT_LABEL, button);
        fb.put_str(layout.right_button_x, layout.buttons_y, RIGHT_LABEL, button);
        fb.put_str_centered(
            layout.frame_x,
            layout.help_y,
            GameLayout::FRAME_W,
            HELP_TEXT,
            CellStyle::new(MUTED, PAPER),
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &GameLayout) {
        let label = CellStyle::new(MUTED, PAPER);
        let value = CellStyle::new(INK, PAPER).bold();

        let x = fb.put_str(layout.frame_x + 1, layout.hud_y, "SCORE ", label);
        let x = fb.put_u32(x, layout.hud_y, snap.score, value);
        let x = fb.put_str(x + 2, layout.hud_y, "BLOCKS ", label);
        fb.put_u32(x, layout.hud_y, snap.blocks.len() as u32, label);

        let toggle = if snap.running { PAUSE_LABEL } else { PLAY_LABEL };
        fb.put_str(
            layout.toggle_button_x,
            layout.hud_y,
            toggle,
            CellStyle::new(PAPER, INK).bold(),
        );
    }
}

fn block_style(color: BlockColor) -> CellStyle {
    let fg = match color {
        BlockColor::Dark => INK,
        BlockColor::Light => Rgb::new(150, 150, 150),
    };
    CellStyle::new(fg, FIELD_BG)
}
