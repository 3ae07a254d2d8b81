//! Exchange moves between the production queue and the reserve stack.
//!
//! Both moves rewrite slots in place: neither container changes size and
//! pieces outside the exchanged positions keep their place.
//!
//! # Block exchange mapping
//!
//! With the queue's first three pieces `q0, q1, q2` (front first) and the
//! reserve `s0, s1, s2` (top first):
//!
//! ```text
//! queue:  [q0 q1 q2 ..]   ->  [s0 s1 s2 ..]
//! stack:  top s0 s1 s2    ->  top q2 q1 q0
//! ```
//!
//! The queue takes the reserve in its top-to-bottom order while the reserve
//! takes the queue's block reversed, so the old queue front ends up at the
//! bottom of the stack. This asymmetry is the established behaviour of the
//! move and is kept as is.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::{CoreError, CoreResult, Exchange};
use crate::queue::CircularQueue;
use crate::stack::ReserveStack;
use crate::types::{Piece, BLOCK_LEN};

/// Pieces moved by a single swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swapped {
    /// New queue front (the old stack top).
    pub to_queue: Piece,
    /// New stack top (the old queue front).
    pub to_stack: Piece,
}

/// Pieces moved by a block exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSwapped {
    /// New queue positions 0..3, front first.
    pub to_queue: [Piece; BLOCK_LEN],
    /// New stack contents, top first.
    pub to_stack: [Piece; BLOCK_LEN],
}

fn unmet(
    operation: Exchange,
    required: usize,
    queue: &CircularQueue,
    stack: &ReserveStack,
) -> CoreError {
    CoreError::ExchangePrecondition {
        operation,
        required,
        queue_len: queue.len(),
        stack_len: stack.len(),
    }
}

/// Exchange the queue front with the stack top.
///
/// Applying it twice restores both containers.
pub fn single_swap(queue: &mut CircularQueue, stack: &mut ReserveStack) -> CoreResult<Swapped> {
    let err = unmet(Exchange::Single, 1, queue, stack);
    let (Some(front), Some(top)) = (queue.slot_mut(0), stack.slot_mut(0)) else {
        return Err(err);
    };
    std::mem::swap(front, top);

    let swapped = Swapped {
        to_queue: *front,
        to_stack: *top,
    };
    debug!(
        to_queue = swapped.to_queue.id,
        to_stack = swapped.to_stack.id,
        "swapped queue front with reserve top"
    );
    Ok(swapped)
}

/// Exchange the first three queued pieces with the whole reserve.
///
/// Requires at least three queued pieces and a full reserve.
pub fn block_exchange(
    queue: &mut CircularQueue,
    stack: &mut ReserveStack,
) -> CoreResult<BlockSwapped> {
    let old_queue: ArrayVec<Piece, BLOCK_LEN> = queue.iter().take(BLOCK_LEN).collect();
    let old_stack: ArrayVec<Piece, BLOCK_LEN> = stack.iter().take(BLOCK_LEN).collect();
    let (Ok(old_queue), Ok(old_stack)) = (old_queue.into_inner(), old_stack.into_inner()) else {
        return Err(unmet(Exchange::Block, BLOCK_LEN, queue, stack));
    };

    for (i, piece) in old_stack.iter().enumerate() {
        if let Some(slot) = queue.slot_mut(i) {
            *slot = *piece;
        }
    }
    // Top of the stack gets the last of the block, bottom gets the old front.
    for (depth, piece) in old_queue.iter().rev().enumerate() {
        if let Some(slot) = stack.slot_mut(depth) {
            *slot = *piece;
        }
    }

    let mut to_stack = old_queue;
    to_stack.reverse();
    debug!(
        to_queue = ?old_stack.map(|p| p.id),
        to_stack = ?to_stack.map(|p| p.id),
        "exchanged block with reserve"
    );
    Ok(BlockSwapped {
        to_queue: old_stack,
        to_stack,
    })
}
