//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain `Copy` data with no behaviour beyond parsing and
//! formatting, making them usable in any context (core logic, terminal
//! rendering, line-mode scripting).
//!
//! # Containers
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Pieces waiting in the circular production queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces held in the reserve stack |
//! | `BLOCK_LEN` | 3 | Pieces moved by a block exchange |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{Command, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(Command::from_str("reserve"), Some(Command::Reserve));
//! assert_eq!(Command::from_menu_digit('5'), Some(Command::SwapThree));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

use serde::Serialize;

/// Capacity of the circular production queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces moved in each direction by a block exchange.
pub const BLOCK_LEN: usize = 3;

/// The piece kinds a factory can produce.
///
/// Pieces are opaque tokens here; the letter is only a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in a fixed order used for uniform selection.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single piece token.
///
/// `id` is assigned once by the factory and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Session commands a caller can issue.
///
/// Quitting is not a command: it belongs to whoever drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Play the front piece of the queue and refill it
    Play,
    /// Move the front piece of the queue onto the reserve stack
    Reserve,
    /// Consume the top piece of the reserve stack
    UseReserved,
    /// Exchange the queue front with the stack top
    SwapFrontTop,
    /// Exchange the first three queued pieces with the three reserved ones
    SwapThree,
}

impl Command {
    /// Every command in menu order (menu digit = index + 1).
    pub const ALL: [Command; 5] = [
        Command::Play,
        Command::Reserve,
        Command::UseReserved,
        Command::SwapFrontTop,
        Command::SwapThree,
    ];

    /// Parse command from its name (case-insensitive)
    ///
    /// ```
    /// use tetris_reserve_types::Command;
    ///
    /// assert_eq!(Command::from_str("Play"), Some(Command::Play));
    /// assert_eq!(Command::from_str("swap3"), Some(Command::SwapThree));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(Command::Play),
            "reserve" => Some(Command::Reserve),
            "use" | "usereserved" => Some(Command::UseReserved),
            "swap" | "swapfronttop" => Some(Command::SwapFrontTop),
            "swap3" | "swapthree" => Some(Command::SwapThree),
            _ => None,
        }
    }

    /// Map a numbered menu entry (`'1'..='5'`) to its command.
    pub fn from_menu_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn menu_digit(&self) -> char {
        match self {
            Command::Play => '1',
            Command::Reserve => '2',
            Command::UseReserved => '3',
            Command::SwapFrontTop => '4',
            Command::SwapThree => '5',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserved => "use",
            Command::SwapFrontTop => "swap",
            Command::SwapThree => "swap3",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Play => "Play piece",
            Command::Reserve => "Reserve piece",
            Command::UseReserved => "Use reserved piece",
            Command::SwapFrontTop => "Swap front with top",
            Command::SwapThree => "Swap three with reserve",
        }
    }
}
