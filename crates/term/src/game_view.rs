//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Grid, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

/// Controls screen, shown before play starts and while paused.
pub const HELP_LINES: [&str; 13] = [
    "CONTROLS",
    "",
    "Left / Right   move",
    "Down           soft drop",
    "Z / Up         rotate cw",
    "X              rotate ccw",
    "C / Space      drop instantly",
    "V              store",
    "Esc            pause",
    "R              reset high score",
    "Q              quit",
    "",
    "Press any key to start playing",
];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Screen rectangle of the bordered board.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame_for(&snap.grid, viewport);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', CellStyle::new(BOARD_BG, BOARD_BG));
        draw_border(fb, frame, CellStyle::default());

        if snap.show_help {
            self.draw_help(fb, frame);
        } else {
            self.draw_grid(fb, frame, &snap.grid);
            if let Some(active) = &snap.active {
                self.draw_piece(fb, frame, &snap.grid, &active.shape, active.color, active.x, active.y);
            }
            if let Some(held) = &snap.held {
                self.draw_held(fb, frame, &snap.grid, &held.shape, held.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, grid: &Grid, viewport: Viewport) -> Frame {
        let w = (grid.width() as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (grid.height() as u16).saturating_mul(self.cell_h).saturating_add(2);
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        }
    }

    /// Locked cells, with a faint dot on empty ones.
    fn draw_grid(&self, fb: &mut FrameBuffer, frame: Frame, grid: &Grid) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for (row, cells) in grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (ch, style) = if cell.filled {
                    ('█', block_style(cell.color))
                } else {
                    ('·', empty)
                };
                self.fill_cell_rect(fb, frame, col as u16, row as u16, ch, style);
            }
        }
    }

    /// Occupied cells of `shape` with its top-left at grid `(x, y)`.
    ///
    /// Cells outside the grid are skipped.
    #[allow(clippy::too_many_arguments)]
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        grid: &Grid,
        shape: &Shape,
        color: Color,
        x: i32,
        y: i32,
    ) {
        let style = block_style(color);
        for (r, c) in shape.occupied() {
            let (col, row) = (x + c as i32, y + r as i32);
            if grid.get(row, col).is_some() {
                self.fill_cell_rect(fb, frame, col as u16, row as u16, '█', style);
            }
        }
    }

    /// "stored:" label in the board's top-left with the held shape below it.
    fn draw_held(&self, fb: &mut FrameBuffer, frame: Frame, grid: &Grid, shape: &Shape, color: Color) {
        let label = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        fb.put_str(frame.x + 1, frame.y + 1, "stored:", label);
        // Grid row 0 holds the label.
        let top = 1;
        let style = block_style(color).dim();
        for (r, c) in shape.occupied() {
            let (col, row) = (c as i32, top + r as i32);
            if grid.get(row, col).is_some() {
                self.fill_cell_rect(fb, frame, col as u16, row as u16, '▒', style);
            }
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, frame: Frame) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        let text = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        let inner_w = frame.w.saturating_sub(2);
        let top = frame.y + 1 + frame.h.saturating_sub(2 + HELP_LINES.len() as u16) / 2;

        for (i, line) in HELP_LINES.iter().enumerate() {
            let y = top + i as u16;
            if y + 1 >= frame.y + frame.h {
                break;
            }
            let len = line.chars().count() as u16;
            let (x, style) = if i == 0 || i == HELP_LINES.len() - 1 {
                (frame.x + 1 + inner_w.saturating_sub(len) / 2, title)
            } else {
                (frame.x + 2, text)
            };
            fb.put_str(x, y, line, style);
        }
    }

    fn fill_cell_rect(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "Score: ", label);
        fb.put_u32(panel_x + 7, y, snap.score, value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "High Score: ", label);
        fb.put_u32(panel_x + 12, y, snap.high_score, value);

        if snap.combo > 0 {
            y = y.saturating_add(2);
            fb.put_str(panel_x, y, "Combo: ", label);
            fb.put_u32(panel_x + 7, y, snap.combo, value);
        }
    }
}

fn block_style(color: Color) -> CellStyle {
    CellStyle::new(Rgb::from(color), BOARD_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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
