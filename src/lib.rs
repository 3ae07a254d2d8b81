//! Tetris Reserve (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces the
//! binary needs around the core: environment configuration, logging setup and
//! the line-mode script runner.

pub use tetris_reserve_core as core;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;

pub mod config;
pub mod logging;
pub mod script;

pub use config::{AppConfig, Mode};
