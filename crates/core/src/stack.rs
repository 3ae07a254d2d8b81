//! Reserve stack.

use arrayvec::ArrayVec;

use crate::error::{CoreError, CoreResult};
use crate::types::{Piece, RESERVE_CAPACITY};

/// LIFO stack holding at most [`RESERVE_CAPACITY`] pieces.
///
/// Storage is bottom-first; the top is the last element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveStack {
    items: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, piece: Piece) -> CoreResult<()> {
        self.items.try_push(piece).map_err(|_| CoreError::StackFull)
    }

    pub fn pop(&mut self) -> Option<Piece> {
        self.items.pop()
    }

    pub fn peek_top(&self) -> Option<Piece> {
        self.items.last().copied()
    }

    /// Top-to-bottom iteration.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.items.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub const fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    /// Mutable access counting down from the top (0 = top).
    pub(crate) fn slot_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let index = self.items.len().checked_sub(depth + 1)?;
        self.items.get_mut(index)
    }
}
