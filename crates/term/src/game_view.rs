//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top-left anchored. Text goes above the board so it stays visible
//! when a short terminal clips the bottom of the board:
//!
//! ```text
//! Tree collision-damage!                  <- last message, if any
//! Moving using WASD keys (Q to quit):     <- prompt
//! ┌────────────┐
//! │. C . . T . │   one row per grid row, `cell_w` columns per cell
//! │. . B B B . │
//! └────────────┘
//! ```
//!
//! When the framebuffer is smaller than [`GameView::required_viewport`], its
//! last row is replaced by a notice asking for a larger terminal.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{EntityKind, PROMPT};

/// Rows above the board: message, then prompt.
const HEADER_ROWS: u16 = 2;

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

/// Draws the board, the collision message and the prompt.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns (symbol plus padding).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // "C " per cell, the same spacing as a plain console print.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    /// Size of the bordered board in terminal cells.
    pub fn board_frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_add(2);
        (w, h)
    }

    /// Smallest viewport that shows everything (message, prompt, board).
    pub fn required_viewport(&self, snap: &GameSnapshot) -> Viewport {
        let (w, h) = self.board_frame_size(snap);
        let text_w = PROMPT
            .chars()
            .count()
            .max(snap.message.map(|m| m.chars().count()).unwrap_or(0)) as u16;
        Viewport::new(w.max(text_w), h.saturating_add(HEADER_ROWS))
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render into a framebuffer; anything past its edges is clipped.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let (frame_w, frame_h) = self.board_frame_size(snap);

        if let Some(message) = snap.message {
            let style = if snap.game_over {
                CellStyle::fg(Rgb::new(240, 90, 90)).bold()
            } else {
                CellStyle::fg(Rgb::new(240, 210, 120))
            };
            fb.put_str(0, 0, message, style);
        }
        if !snap.game_over {
            fb.put_str(0, 1, PROMPT, CellStyle::default());
        }

        self.draw_border(fb, HEADER_ROWS, frame_w, frame_h);

        for (x, row) in snap.rows().enumerate() {
            let py = HEADER_ROWS + 1 + x as u16;
            for (y, &ch) in row.iter().enumerate() {
                let px = 1 + (y as u16) * self.cell_w;
                fb.put_char(px, py, ch, symbol_style(ch));
            }
        }

        if snap.game_over {
            self.draw_overlay_text(fb, frame_w, frame_h, "GAME OVER");
        }

        let need = self.required_viewport(snap);
        if fb.width() < need.width || fb.height() < need.height {
            draw_resize_notice(fb, need);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, top: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let bottom = top + h - 1;

        fb.put_char(0, top, '┌', style);
        fb.put_char(w - 1, top, '┐', style);
        fb.put_char(0, bottom, '└', style);
        fb.put_char(w - 1, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(dx, top, '─', style);
            fb.put_char(dx, bottom, '─', style);
        }
        for dy in top + 1..bottom {
            fb.put_char(0, dy, '│', style);
            fb.put_char(w - 1, dy, '│', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame_w: u16, frame_h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame_w.saturating_sub(text_w) / 2;
        let y = HEADER_ROWS + frame_h / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 20, 20),
            bold: true,
            dim: false,
        };
        fb.put_str(x, y, text, style);
    }
}

/// Overwrite the bottom row with the size the view needs.
fn draw_resize_notice(fb: &mut FrameBuffer, need: Viewport) {
    let Some(y) = fb.height().checked_sub(1) else {
        return;
    };
    let style = CellStyle {
        fg: Rgb::new(20, 20, 20),
        bg: Rgb::new(240, 210, 120),
        bold: true,
        dim: false,
    };
    for x in 0..fb.width() {
        fb.put_char(x, y, ' ', style);
    }
    let notice = format!(
        "Terminal too small: resize to {}x{} (now {}x{})",
        need.width,
        need.height,
        fb.width(),
        fb.height()
    );
    fb.put_str(0, y, &notice, style);
}

fn symbol_style(ch: char) -> CellStyle {
    match EntityKind::from_symbol(ch) {
        Some(EntityKind::Player) => CellStyle::fg(Rgb::new(250, 220, 60)).bold(),
        Some(EntityKind::Building) => CellStyle::fg(Rgb::new(200, 110, 90)),
        Some(EntityKind::Tree) => CellStyle::fg(Rgb::new(100, 200, 110)),
        Some(EntityKind::FuelStation) => CellStyle::fg(Rgb::new(80, 200, 230)).bold(),
        None => CellStyle::fg(Rgb::new(90, 90, 100)).dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_styles_differ_per_kind() {
        assert_ne!(symbol_style('C'), symbol_style('B'));
        assert_ne!(symbol_style('T'), symbol_style('F'));
        assert!(symbol_style('.').dim);
    }

    #[test]
    fn resize_notice_fills_last_row() {
        let mut fb = FrameBuffer::new(60, 3);
        draw_resize_notice(&mut fb, Viewport::new(62, 34));
        assert!(fb.row_text(2).starts_with("Terminal too small: resize to 62x34 (now 60x3)"));
        assert!(fb.row_text(0).trim().is_empty());
    }

    #[test]
    fn resize_notice_on_empty_buffer_is_noop() {
        let mut fb = FrameBuffer::new(0, 0);
        draw_resize_notice(&mut fb, Viewport::new(62, 34));
        assert_eq!(fb.height(), 0);
    }

    #[test]
    fn cell_width_is_at_least_one() {
        assert_eq!(GameView::new(0).cell_width(), 1);
    }
}
