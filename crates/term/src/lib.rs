//! Terminal rendering for a session.
//!
//! Renders [`core::SessionSnapshot`]s into a simple framebuffer that is then
//! flushed to a terminal backend. Nothing here mutates the session.
//!
//! - [`fb`]: framebuffer and styles
//! - [`session_view`]: queue, reserve, counters and menu layout (pure)
//! - [`renderer`]: crossterm output with row-level diffing

pub mod fb;
pub mod renderer;
pub mod session_view;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
pub use session_view::{available, describe_outcome, AnchorY, SessionView, StatusLine, Viewport};
