//! SessionView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Outcome, SessionSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Command, Piece, PieceKind, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Width of one piece box, border included.
pub const PIECE_BOX_W: u16 = 9;
/// Height of one piece box, border included.
pub const PIECE_BOX_H: u16 = 3;

const GAP: u16 = 1;
const QUEUE_W: u16 = QUEUE_CAPACITY as u16 * (PIECE_BOX_W + GAP) - GAP;
const RESERVE_GAP: u16 = 4;
/// Total width of the laid-out view.
pub const LAYOUT_W: u16 = QUEUE_W + RESERVE_GAP + PIECE_BOX_W + 6;
/// Total height of the laid-out view.
pub const LAYOUT_H: u16 = 21;

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

/// The line under the menu, echoing the last command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub text: &'a str,
    pub is_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal view of one session.
#[derive(Debug, Clone, Copy)]
pub struct SessionView {
    anchor_y: AnchorY,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

const TITLE: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const FRAME: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130));
const EMPTY: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100)).dim();
const OK: CellStyle = CellStyle::fg(Rgb::new(120, 220, 120));
const ERROR: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90)).bold();

impl SessionView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reuses the framebuffer allocation across frames.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        status: Option<StatusLine<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let x0 = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(LAYOUT_H) / 2,
            AnchorY::Top => 0,
        };

        fb.put_str(x0, y0, "TETRIS RESERVE", TITLE);

        // Queue, front on the left.
        let qy = y0 + 2;
        let used = fb.put_str(x0, qy, "QUEUE ", LABEL);
        fb.put_str(x0 + used, qy, "front → back", EMPTY);
        for slot in 0..QUEUE_CAPACITY {
            let x = x0 + slot as u16 * (PIECE_BOX_W + GAP);
            draw_piece_box(fb, x, qy + 1, snap.queue.get(slot).copied(), slot == 0);
        }

        // Reserve, top first, as a column right of the queue.
        let rx = x0 + QUEUE_W + RESERVE_GAP;
        let used = fb.put_str(rx, qy, "RESERVE ", LABEL);
        fb.put_str(rx + used, qy, "top", EMPTY);
        for depth in 0..RESERVE_CAPACITY {
            let y = qy + 1 + depth as u16 * PIECE_BOX_H;
            draw_piece_box(fb, rx, y, snap.reserve.get(depth).copied(), depth == 0);
        }
        let bottom_y = qy + 1 + RESERVE_CAPACITY as u16 * PIECE_BOX_H;
        fb.put_str(rx, bottom_y, "bottom", EMPTY);

        // Counters under the queue.
        let mut y = qy + 1 + PIECE_BOX_H + 1;
        for (label, value) in [
            ("PLAYED ", snap.played),
            ("USED   ", snap.used),
            ("NEXT ID", snap.next_id),
        ] {
            let used = fb.put_str(x0, y, label, LABEL);
            fb.put_u64(x0 + used + 1, y, value, VALUE);
            y += 1;
        }

        // Menu; unavailable entries are dimmed.
        y += 1;
        for command in Command::ALL {
            let style = if available(snap, command) { VALUE } else { EMPTY };
            fb.put_char(x0, y, '[', style);
            fb.put_char(x0 + 1, y, command.menu_digit(), style);
            fb.put_char(x0 + 2, y, ']', style);
            fb.put_str(x0 + 4, y, command.label(), style);
            y += 1;
        }
        fb.put_str(x0, y, "[0] Quit", VALUE);
        y += 2;

        if let Some(status) = status {
            let style = if status.is_error { ERROR } else { OK };
            fb.put_str(x0, y, status.text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        status: Option<StatusLine<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }
}

/// Whether a command would currently succeed.
pub fn available(snap: &SessionSnapshot, command: Command) -> bool {
    match command {
        Command::Play => !snap.queue.is_empty(),
        Command::Reserve => !snap.queue.is_empty() && !snap.reserve.is_full(),
        Command::UseReserved => !snap.reserve.is_empty(),
        Command::SwapFrontTop => snap.can_swap(),
        Command::SwapThree => snap.can_swap_three(),
    }
}

/// One-line description of a command result for the status line.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Played { piece, refill } => with_refill(format!("Played {piece}"), *refill),
        Outcome::Reserved { piece, refill } => with_refill(format!("Reserved {piece}"), *refill),
        Outcome::UsedReserved { piece } => format!("Used reserved {piece}"),
        Outcome::Swapped { to_queue, to_stack } => {
            format!("Swapped {to_stack} to reserve, {to_queue} to queue")
        }
        Outcome::BlockSwapped { to_queue, to_stack } => format!(
            "Swapped three: queue {}{}{}, reserve {}{}{}",
            to_queue[0], to_queue[1], to_queue[2], to_stack[0], to_stack[1], to_stack[2]
        ),
    }
}

fn with_refill(mut text: String, refill: Option<Piece>) -> String {
    if let Some(piece) = refill {
        text.push_str(&format!(", queued {piece}"));
    }
    text
}

fn draw_piece_box(fb: &mut FrameBuffer, x: u16, y: u16, piece: Option<Piece>, lead: bool) {
    let Some(piece) = piece else {
        fb.draw_box(x, y, PIECE_BOX_W, PIECE_BOX_H, EMPTY);
        fb.put_char(x + PIECE_BOX_W / 2, y + 1, '·', EMPTY);
        return;
    };

    let color = kind_style(piece.kind);
    let frame = if lead { color.bold() } else { FRAME };
    fb.draw_box(x, y, PIECE_BOX_W, PIECE_BOX_H, frame);
    fb.put_char(x + 2, y + 1, piece.kind.as_char(), color.bold());
    fb.put_u64(x + 4, y + 1, piece.id, VALUE);
}

fn kind_style(kind: PieceKind) -> CellStyle {
    match kind {
        PieceKind::I => CellStyle::fg(Rgb::new(80, 220, 220)),
        PieceKind::O => CellStyle::fg(Rgb::new(240, 220, 80)),
        PieceKind::T => CellStyle::fg(Rgb::new(200, 120, 220)),
        PieceKind::L => CellStyle::fg(Rgb::new(255, 165, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_common_terminal() {
        assert!(LAYOUT_W <= 80);
        assert!(LAYOUT_H <= 24);
    }

    #[test]
    fn test_describe_outcome() {
        let t0 = Piece::new(PieceKind::T, 0);
        let o5 = Piece::new(PieceKind::O, 5);
        assert_eq!(
            describe_outcome(&Outcome::Played {
                piece: t0,
                refill: Some(o5)
            }),
            "Played [T 0], queued [O 5]"
        );
        assert_eq!(
            describe_outcome(&Outcome::Swapped {
                to_queue: o5,
                to_stack: t0
            }),
            "Swapped [T 0] to reserve, [O 5] to queue"
        );
    }

    #[test]
    fn test_empty_snapshot_disables_every_command() {
        let snap = SessionSnapshot::default();
        for command in Command::ALL {
            assert!(!available(&snap, command), "{:?}", command);
        }
    }
}
