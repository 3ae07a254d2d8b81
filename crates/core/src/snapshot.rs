//! Read-only session snapshots for rendering and line-mode output.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Read-only copy of a session, for rendering and line-mode output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to bottom.
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
    pub next_id: u64,
    pub played: u64,
    pub used: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
        self.played = 0;
        self.used = 0;
    }

    pub fn can_swap(&self) -> bool {
        !self.queue.is_empty() && !self.reserve.is_empty()
    }

    pub fn can_swap_three(&self) -> bool {
        self.queue.len() >= 3 && self.reserve.is_full()
    }
}
