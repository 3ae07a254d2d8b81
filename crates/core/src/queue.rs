//! Circular production queue.
//!
//! Pieces live in a fixed array and are addressed through a front offset and
//! a count. Logical position `i` (0 = front) sits at physical slot
//! `(front + i) % QUEUE_CAPACITY`; that mapping never leaves this module.

use crate::error::{CoreError, CoreResult};
use crate::types::{Piece, QUEUE_CAPACITY};

/// FIFO queue holding at most [`QUEUE_CAPACITY`] pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircularQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl CircularQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a piece at the back.
    pub fn enqueue(&mut self, piece: Piece) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::QueueFull);
        }
        let back = self.physical(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        piece
    }

    pub fn peek_front(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece at logical position `index` (0 = front).
    pub fn get(&self, index: usize) -> Option<Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)]
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.physical(i)])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    pub const fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    /// Mutable access to an occupied logical slot, for in-place exchanges.
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Piece> {
        if index >= self.len {
            return None;
        }
        let at = self.physical(index);
        self.slots[at].as_mut()
    }

    fn physical(&self, index: usize) -> usize {
        (self.front + index) % QUEUE_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u64) -> Piece {
        Piece::new(PieceKind::ALL[id as usize % 4], id)
    }

    fn ids(queue: &CircularQueue) -> Vec<u64> {
        queue.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = CircularQueue::new();
        for id in 1..=3 {
            queue.enqueue(piece(id)).unwrap();
        }

        assert_eq!(queue.dequeue(), Some(piece(1)));
        assert_eq!(queue.dequeue(), Some(piece(2)));
        assert_eq!(queue.dequeue(), Some(piece(3)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_enqueue_on_full_queue_is_rejected() {
        let mut queue = CircularQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id)).unwrap();
        }
        let before = queue.clone();

        assert_eq!(queue.enqueue(piece(99)), Err(CoreError::QueueFull));
        assert_eq!(queue, before);
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn test_dequeue_on_empty_queue_is_noop() {
        let mut queue = CircularQueue::new();
        let before = queue.clone();

        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek_front(), None);
        assert_eq!(queue, before);
    }

    #[test]
    fn test_wraps_around_storage() {
        let mut queue = CircularQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id)).unwrap();
        }
        // Cycle the front offset past the end of the array twice.
        for id in 5..13 {
            queue.dequeue().unwrap();
            queue.enqueue(piece(id)).unwrap();
        }

        assert_eq!(ids(&queue), vec![8, 9, 10, 11, 12]);
        assert_eq!(queue.peek_front(), Some(piece(8)));
        assert_eq!(queue.get(4), Some(piece(12)));
        assert_eq!(queue.get(5), None);
    }

    #[test]
    fn test_slot_mut_uses_logical_positions() {
        let mut queue = CircularQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id)).unwrap();
        }
        queue.dequeue();
        queue.dequeue();
        queue.enqueue(piece(5)).unwrap();

        *queue.slot_mut(0).unwrap() = piece(42);
        assert_eq!(ids(&queue), vec![42, 3, 4, 5]);
        assert!(queue.slot_mut(4).is_none());
    }
}
