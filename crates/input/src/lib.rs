//! Input module (caller-facing).
//!
//! Turns raw caller input into [`crate::types::Command`]s: terminal key
//! events in [`map`], numbered-menu lines in [`menu`]. Quitting is reported
//! separately since it is not a session command.

pub mod map;
pub mod menu;

pub use tetris_reserve_types as types;

pub use map::{handle_key_event, should_quit};
pub use menu::{parse_menu_line, MenuChoice};
