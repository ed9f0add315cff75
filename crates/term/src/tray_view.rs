//! TrayView: maps a `core::TraySnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{TransferError, TraySnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Piece, PieceKind, TrayEvent, QUEUE_CAPACITY, STACK_CAPACITY};

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

/// What the status line below the tray shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    /// Nothing has happened yet.
    Idle,
    /// Result of the last tray operation.
    Outcome(Result<TrayEvent, TransferError>),
    /// A key arrived that maps to no command.
    UnknownKey(char),
}

/// Fixed size of the rendered tray block, borders included.
const CONTENT_W: u16 = 46;
const CONTENT_H: u16 = 18;

/// Terminal columns reserved per queue slot chip.
const SLOT_W: u16 = 9;

/// A lightweight terminal renderer for the piece tray.
pub struct TrayView {
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for TrayView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl TrayView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the tray into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &TraySnapshot,
        status: &StatusLine,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let start_x = viewport.width.saturating_sub(CONTENT_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CONTENT_H) / 2,
            AnchorY::Top => 0,
        };

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.put_str(start_x, start_y, "PIECE TRAY", label);

        // Upcoming queue, front first.
        let queue_y = start_y + 2;
        let next = fb.put_str(start_x, queue_y, "NEXT", label);
        fb.put_str(next + 2, queue_y, "(front first)", dim);

        let row_y = queue_y + 2;
        for slot in 0..QUEUE_CAPACITY as u16 {
            let x = start_x + 1 + slot * SLOT_W;
            match snap.upcoming.get(slot as usize) {
                Some(piece) => {
                    draw_piece_ref(fb, x, row_y, *piece, value);
                }
                None => {
                    fb.put_char(x, row_y, '·', dim);
                }
            }
        }
        draw_border(fb, start_x, queue_y + 1, CONTENT_W, 3, border);

        // Reserve stack, top first.
        let stack_y = start_y + 7;
        let next = fb.put_str(start_x, stack_y, "RESERVE", label);
        fb.put_str(next + 2, stack_y, "(top first)", dim);

        for depth in 0..STACK_CAPACITY as u16 {
            let y = stack_y + 2 + depth;
            match snap.reserved.get(depth as usize) {
                Some(piece) => {
                    draw_piece_ref(fb, start_x + 2, y, *piece, value);
                }
                None => {
                    fb.put_char(start_x + 2, y, '·', dim);
                }
            }
        }
        draw_border(fb, start_x, stack_y + 1, 14, 5, border);

        self.draw_status(fb, start_x, start_y + 14, status, value);
        self.draw_menu(fb, snap, start_x, start_y + 16, value, dim);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &TraySnapshot, status: &StatusLine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        status: &StatusLine,
        value: CellStyle,
    ) {
        let error = CellStyle {
            fg: Rgb::new(220, 80, 80),
            ..value
        };
        match status {
            StatusLine::Idle => {
                fb.put_str(x, y, "ready", value);
            }
            StatusLine::Outcome(Ok(event)) => match event {
                TrayEvent::Played(piece) => {
                    let next = fb.put_str(x, y, "played ", value);
                    draw_piece_ref(fb, next, y, *piece, value);
                }
                TrayEvent::Reserved(piece) => {
                    let next = fb.put_str(x, y, "reserved ", value);
                    draw_piece_ref(fb, next, y, *piece, value);
                }
                TrayEvent::Recalled(piece) => {
                    let next = fb.put_str(x, y, "recalled ", value);
                    draw_piece_ref(fb, next, y, *piece, value);
                }
                TrayEvent::SwappedFrontTop => {
                    fb.put_str(x, y, "swapped front and top", value);
                }
                TrayEvent::SwappedThree => {
                    fb.put_str(x, y, "swapped three pairs", value);
                }
            },
            StatusLine::Outcome(Err(err)) => {
                let next = fb.put_str(x, y, "error: ", error);
                fb.put_str(next, y, err.as_str(), error);
            }
            StatusLine::UnknownKey(ch) => {
                let next = fb.put_str(x, y, "unknown key '", error);
                fb.put_char(next, y, *ch, error);
                fb.put_char(next + 1, y, '\'', error);
            }
        }
    }

    fn draw_menu(
        &self,
        fb: &mut FrameBuffer,
        snap: &TraySnapshot,
        x: u16,
        y: u16,
        value: CellStyle,
        dim: CellStyle,
    ) {
        let rows: [&[(&str, bool)]; 2] = [
            &[
                ("[1] play", snap.can_take_front()),
                ("[2] reserve", snap.can_take_front()),
                ("[3] recall", snap.can_recall()),
            ],
            &[
                ("[4] swap front/top", snap.can_swap_front_top()),
                ("[5] swap three", snap.can_swap_three()),
                ("[0] quit", true),
            ],
        ];
        for (dy, row) in rows.iter().enumerate() {
            let mut col = x;
            for (text, enabled) in row.iter() {
                let style = if *enabled { value } else { dim };
                col = fb.put_str(col, y + dy as u16, text, style) + 2;
            }
        }
    }
}

/// Draw `K #id` at the given position and return the next free column.
fn draw_piece_ref(fb: &mut FrameBuffer, x: u16, y: u16, piece: Piece, value: CellStyle) -> u16 {
    let letter = CellStyle {
        fg: kind_color(piece.kind()),
        bold: true,
        ..value
    };
    let hash = CellStyle { dim: true, ..value };
    let next = fb.put_str(x, y, piece_letter(piece.kind()), letter);
    let next = fb.put_str(next + 1, y, "#", hash);
    fb.put_u32(next, y, piece.id(), value)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::L => "L",
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
