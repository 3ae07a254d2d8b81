//! Core piece logic - pure, deterministic, and testable
//!
//! This crate holds the production queue, the reserve stack and the moves
//! between them. It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: same seed (or the same scripted kinds) gives the same session
//! - **Allocation-free**: both containers are fixed-size inline storage
//! - **Recoverable**: every failure is a [`CoreError`] and leaves state untouched
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG and the [`KindSource`] seam for scripted kinds
//! - [`factory`]: id assignment for new pieces
//! - [`queue`]: 5-slot circular FIFO
//! - [`stack`]: 3-slot reserve LIFO
//! - [`exchange`]: single swap and 3-for-3 block exchange
//! - [`session`]: command dispatch over the above
//! - [`snapshot`]: read-only state copies for rendering
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::{Outcome, Session};
//! use tetris_reserve_types::Command;
//!
//! let mut session = Session::new(12345);
//! session.start();
//! assert_eq!(session.queue().len(), 5);
//!
//! for _ in 0..3 {
//!     session.apply(Command::Reserve).unwrap();
//! }
//! assert!(session.reserve_stack().is_full());
//!
//! let outcome = session.apply(Command::SwapThree).unwrap();
//! assert!(matches!(outcome, Outcome::BlockSwapped { .. }));
//! ```

pub mod error;
pub mod exchange;
pub mod factory;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use error::{CoreError, CoreResult, Exchange};
pub use exchange::{block_exchange, single_swap, BlockSwapped, Swapped};
pub use factory::PieceFactory;
pub use queue::CircularQueue;
pub use rng::{KindSource, ScriptedKinds, SimpleRng};
pub use session::{Outcome, Session};
pub use snapshot::SessionSnapshot;
pub use stack::ReserveStack;
