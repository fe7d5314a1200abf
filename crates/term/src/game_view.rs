//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!            FIND THE PAIR
//!   SIZE  2×2 [4×4] 6×6    R RESTART
//!   MOVES 3   PAIRS 1/8   TIME 00:42
//!
//!   ┌──────────────────────────────┐
//!   │ ░░░░░░ ░░░░░░ ░░░░░░ ░░░░░░ │
//!   │ ...                          │
//!   └──────────────────────────────┘
//!   ARROWS move  SPACE flip  Q quit
//! ```
//!
//! The same layout drives [`GameView::tile_at`] so mouse clicks land on the
//! tile that is drawn under the pointer.

use crate::core::{GameSnapshot, Tile};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{format_clock, SUPPORTED_SIZES};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.w && y - self.y < self.h
    }
}

/// Rows above the board frame: title, controls, stats, blank.
const HEADER_ROWS: u16 = 4;
/// Rows below the board frame: footer.
const FOOTER_ROWS: u16 = 1;

const TITLE: &str = "FIND THE PAIR";
const FOOTER: &str = "ARROWS move  SPACE flip  CLICK flip  TAB size  Q quit";

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const TILE_BACK: Rgb = Rgb::new(55, 55, 75);

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Columns between neighbouring tiles.
    gap_x: u16,
    /// Rows between neighbouring tiles.
    gap_y: u16,
    /// Columns between the frame and the outer tiles.
    pad_x: u16,
    /// Rows between the frame and the outer tiles.
    pad_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Wider than tall to compensate for terminal glyph aspect ratio.
        Self {
            cell_w: 6,
            cell_h: 2,
            gap_x: 1,
            gap_y: 1,
            pad_x: 1,
            pad_y: 0,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Resolved screen positions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    size: u16,
    top_y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, size: u8, viewport: Viewport) -> Layout {
        let n = size as u16;
        let gaps = n.saturating_sub(1);
        let frame_w = n * self.cell_w + gaps * self.gap_x + 2 * self.pad_x + 2;
        let frame_h = n * self.cell_h + gaps * self.gap_y + 2 * self.pad_y + 2;
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;

        let top_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            size: n,
            top_y,
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: top_y + HEADER_ROWS,
            frame_w,
            frame_h,
        }
    }

    /// Top-left screen cell of tile `index`.
    pub fn tile_origin(&self, size: u8, viewport: Viewport, index: usize) -> Option<(u16, u16)> {
        let layout = self.layout(size, viewport);
        let n = layout.size as usize;
        if n == 0 || index >= n * n {
            return None;
        }
        let col = (index % n) as u16;
        let row = (index / n) as u16;
        let x = layout.frame_x + 1 + self.pad_x + col * (self.cell_w + self.gap_x);
        let y = layout.frame_y + 1 + self.pad_y + row * (self.cell_h + self.gap_y);
        Some((x, y))
    }

    /// Index of the tile drawn at screen cell `(x, y)`, if any.
    ///
    /// Gaps between tiles and the frame itself do not hit anything.
    pub fn tile_at(&self, size: u8, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(size, viewport);
        let origin_x = layout.frame_x + 1 + self.pad_x;
        let origin_y = layout.frame_y + 1 + self.pad_y;
        if x < origin_x || y < origin_y {
            return None;
        }

        let pitch_x = self.cell_w + self.gap_x;
        let pitch_y = self.cell_h + self.gap_y;
        let (dx, dy) = (x - origin_x, y - origin_y);
        let (col, row) = (dx / pitch_x, dy / pitch_y);
        if col >= layout.size || row >= layout.size {
            return None;
        }
        if dx % pitch_x >= self.cell_w || dy % pitch_y >= self.cell_h {
            return None;
        }
        Some((row as usize) * (layout.size as usize) + col as usize)
    }

    /// Screen rectangle of the win summary, or `None` while the game is on.
    pub fn win_modal_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<Rect> {
        if !snap.won {
            return None;
        }
        let layout = self.layout(snap.size, viewport);
        Some(modal_rect(&win_lines(snap), layout))
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG),
        });

        let layout = self.layout(snap.size, viewport);

        self.draw_header(fb, snap, viewport, layout.top_y);

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_box(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for (i, tile) in snap.board.iter().enumerate() {
            if let Some((x, y)) = self.tile_origin(snap.size, viewport, i) {
                self.draw_tile(fb, x, y, tile, snap.input_locked);
            }
        }

        if let Some(idx) = cursor.filter(|_| !snap.won) {
            if let Some((x, y)) = self.tile_origin(snap.size, viewport, idx) {
                self.draw_cursor(fb, x, y);
            }
        }

        let footer_style = CellStyle::new(Rgb::new(140, 140, 150), SCREEN_BG).dim();
        put_centered(
            fb,
            viewport.width,
            layout.frame_y + layout.frame_h,
            FOOTER,
            footer_style,
        );

        if snap.won {
            draw_win_modal(fb, &win_lines(snap), layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_cursor(snap, None, viewport)
    }

    pub fn render_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_cursor(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let selected = CellStyle::new(Rgb::new(255, 210, 80), SCREEN_BG).bold();
        let muted = CellStyle::new(Rgb::new(120, 120, 130), SCREEN_BG);

        put_centered(fb, viewport.width, y, TITLE, label);

        // Controls: size selector and restart.
        let controls_w = 5 + SUPPORTED_SIZES.len() as u16 * 6 + 12;
        let mut x = viewport.width.saturating_sub(controls_w) / 2;
        let cy = y + 1;
        x = fb.put_str(x, cy, "SIZE ", label);
        for size in SUPPORTED_SIZES {
            let (open, close, style) = if size == snap.size {
                ('[', ']', selected)
            } else {
                (' ', ' ', muted)
            };
            fb.put_char(x, cy, open, style);
            x = fb.put_u32(x + 1, cy, size as u32, style);
            fb.put_char(x, cy, '×', style);
            x = fb.put_u32(x + 1, cy, size as u32, style);
            fb.put_char(x, cy, close, style);
            x += 2;
        }
        x += 2;
        x = fb.put_str(x, cy, "R ", label);
        fb.put_str(x, cy, "RESTART", value);

        // Stats.
        let clock = format_clock(snap.elapsed_secs);
        let sy = y + 2;
        let stats_w = 6 + digits(snap.moves) + 3 + 6 + digits(snap.pairs_found) + 1
            + digits(snap.total_pairs)
            + 3
            + 5
            + clock.len() as u16;
        let mut x = viewport.width.saturating_sub(stats_w) / 2;
        x = fb.put_str(x, sy, "MOVES ", label);
        x = fb.put_u32(x, sy, snap.moves, value);
        x = fb.put_str(x + 3, sy, "PAIRS ", label);
        x = fb.put_u32(x, sy, snap.pairs_found, value);
        x = fb.put_str(x, sy, "/", value);
        x = fb.put_u32(x, sy, snap.total_pairs, value);
        x = fb.put_str(x + 3, sy, "TIME ", label);
        fb.put_str(x, sy, &clock, value);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: &Tile, locked: bool) {
        if !tile.is_face_up() {
            let mut style = CellStyle::new(Rgb::new(95, 95, 120), TILE_BACK);
            if locked {
                style = style.dim();
            }
            fb.fill_rect(x, y, self.cell_w, self.cell_h, '░', style);
            return;
        }

        let color = Rgb::from_tuple(tile.face.rgb());
        let bg = if tile.matched { color.scaled(55) } else { color };
        let fg = if bg.luma() > 140 {
            Rgb::new(10, 10, 10)
        } else {
            Rgb::new(245, 245, 245)
        };
        let mut style = CellStyle::new(fg, bg).bold();
        if tile.matched {
            style.bold = false;
            style.dim = true;
        }
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let gx = x + (self.cell_w.saturating_sub(1)) / 2;
        let gy = y + (self.cell_h.saturating_sub(1)) / 2;
        fb.put_char(gx, gy, tile.face.glyph(), style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(255, 210, 80), BOARD_BG).bold();
        for dy in 0..self.cell_h {
            if let Some(left) = x.checked_sub(1) {
                fb.put_char(left, y + dy, '▐', style);
            }
            fb.put_char(x + self.cell_w, y + dy, '▌', style);
        }
    }
}

/// Text lines of the win summary, top to bottom.
fn win_lines(snap: &GameSnapshot) -> [String; 3] {
    let clock = format_clock(snap.elapsed_secs);
    [
        "YOU WIN!".to_string(),
        format!("{} moves in {}", snap.moves, clock),
        "ENTER / CLICK play again".to_string(),
    ]
}

fn modal_rect(lines: &[String], layout: Layout) -> Rect {
    let text_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let w = text_w + 6;
    let h = lines.len() as u16 + 4;
    Rect {
        x: layout.frame_x + layout.frame_w.saturating_sub(w) / 2,
        y: layout.frame_y + layout.frame_h.saturating_sub(h) / 2,
        w,
        h,
    }
}

fn draw_win_modal(fb: &mut FrameBuffer, lines: &[String], layout: Layout) {
    let Rect { x, y, w, h } = modal_rect(lines, layout);

    let card = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(20, 20, 28));
    fb.fill_rect(x, y, w, h, ' ', card);
    draw_box(fb, x, y, w, h, CellStyle::new(Rgb::new(255, 210, 80), card.bg).bold());

    let title = CellStyle::new(Rgb::new(255, 210, 80), card.bg).bold();
    let hint = CellStyle { dim: true, ..card };
    for (i, line) in lines.iter().enumerate() {
        let style = match i {
            0 => title,
            2 => hint,
            _ => card,
        };
        let lw = line.chars().count() as u16;
        fb.put_str(x + (w - lw) / 2, y + 2 + i as u16, line, style);
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    fb.put_str(width.saturating_sub(w) / 2, y, text, style);
}

fn digits(v: u32) -> u16 {
    let mut n = 1;
    let mut v = v / 10;
    while v > 0 {
        n += 1;
        v /= 10;
    }
    n
}
