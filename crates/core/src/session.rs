//! Session: owns the queue, the reserve and the factory, and runs commands.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::exchange::{self, BlockSwapped, Swapped};
use crate::factory::PieceFactory;
use crate::queue::CircularQueue;
use crate::rng::{KindSource, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::stack::ReserveStack;
use crate::types::{Command, Piece, BLOCK_LEN};

/// What a successful command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The front piece left the game; `refill` is the piece queued in its place.
    Played { piece: Piece, refill: Option<Piece> },
    /// The front piece moved onto the reserve.
    Reserved { piece: Piece, refill: Option<Piece> },
    /// The top reserved piece left the game.
    UsedReserved { piece: Piece },
    /// Queue front and reserve top traded places.
    Swapped { to_queue: Piece, to_stack: Piece },
    /// Three queued pieces traded places with the reserve.
    BlockSwapped {
        to_queue: [Piece; BLOCK_LEN],
        to_stack: [Piece; BLOCK_LEN],
    },
}

impl From<Swapped> for Outcome {
    fn from(value: Swapped) -> Self {
        Outcome::Swapped {
            to_queue: value.to_queue,
            to_stack: value.to_stack,
        }
    }
}

impl From<BlockSwapped> for Outcome {
    fn from(value: BlockSwapped) -> Self {
        Outcome::BlockSwapped {
            to_queue: value.to_queue,
            to_stack: value.to_stack,
        }
    }
}

/// One interactive session.
///
/// A fresh session has both containers empty; call [`Session::start`] to fill
/// the queue.
#[derive(Debug, Clone)]
pub struct Session<S = SimpleRng> {
    queue: CircularQueue,
    reserve: ReserveStack,
    factory: PieceFactory<S>,
    played: u64,
    used: u64,
}

impl Session<SimpleRng> {
    /// Create a session whose piece kinds come from a seeded LCG.
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: KindSource> Session<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            queue: CircularQueue::new(),
            reserve: ReserveStack::new(),
            factory: PieceFactory::new(source),
            played: 0,
            used: 0,
        }
    }

    /// Fill the queue up to capacity with new pieces.
    pub fn start(&mut self) {
        while !self.queue.is_full() {
            let piece = self.factory.produce();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
        debug!(next_id = self.factory.next_id(), "queue filled");
    }

    pub fn queue(&self) -> &CircularQueue {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn next_id(&self) -> u64 {
        self.factory.next_id()
    }

    /// Pieces that left the game through play.
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Pieces that left the game through the reserve.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Run a command.
    pub fn apply(&mut self, command: Command) -> CoreResult<Outcome> {
        match command {
            Command::Play => self.draw(),
            Command::Reserve => self.reserve(),
            Command::UseReserved => self.use_reserved(),
            Command::SwapFrontTop => self.swap_front_top(),
            Command::SwapThree => self.swap_three(),
        }
    }

    /// Play the front piece and queue a replacement.
    pub fn draw(&mut self) -> CoreResult<Outcome> {
        let piece = self.queue.dequeue().ok_or(CoreError::QueueEmpty)?;
        self.played += 1;
        let refill = self.refill();
        debug!(piece = piece.id, refill = ?refill.map(|p| p.id), "played");
        Ok(Outcome::Played { piece, refill })
    }

    /// Move the front piece onto the reserve and queue a replacement.
    ///
    /// A full reserve is rejected before anything leaves the queue.
    pub fn reserve(&mut self) -> CoreResult<Outcome> {
        if self.reserve.is_full() {
            return Err(CoreError::StackFull);
        }
        let piece = self.queue.dequeue().ok_or(CoreError::QueueEmpty)?;
        self.stash(piece)?;

        let refill = self.refill();
        debug!(piece = piece.id, refill = ?refill.map(|p| p.id), "reserved");
        Ok(Outcome::Reserved { piece, refill })
    }

    /// Consume the top reserved piece.
    pub fn use_reserved(&mut self) -> CoreResult<Outcome> {
        let piece = self.reserve.pop().ok_or(CoreError::StackEmpty)?;
        self.used += 1;
        debug!(piece = piece.id, "used reserved piece");
        Ok(Outcome::UsedReserved { piece })
    }

    pub fn swap_front_top(&mut self) -> CoreResult<Outcome> {
        exchange::single_swap(&mut self.queue, &mut self.reserve).map(Outcome::from)
    }

    pub fn swap_three(&mut self) -> CoreResult<Outcome> {
        exchange::block_exchange(&mut self.queue, &mut self.reserve).map(Outcome::from)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Write the current state into an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter());
        out.reserve.extend(self.reserve.iter());
        out.next_id = self.factory.next_id();
        out.played = self.played;
        out.used = self.used;
    }

    /// Push a piece that already left the queue onto the reserve.
    ///
    /// On rejection the piece rejoins the queue at the back and the push error
    /// is returned.
    fn stash(&mut self, piece: Piece) -> CoreResult<()> {
        let Err(err) = self.reserve.push(piece) else {
            return Ok(());
        };
        warn!(piece = piece.id, %err, "reserve rejected piece, requeueing");
        if let Err(requeue) = self.queue.enqueue(piece) {
            warn!(piece = piece.id, %requeue, "requeue failed");
        }
        Err(err)
    }

    /// Queue a new piece. A rejected refill is reported but not fatal.
    fn refill(&mut self) -> Option<Piece> {
        let piece = self.factory.produce();
        match self.queue.enqueue(piece) {
            Ok(()) => Some(piece),
            Err(err) => {
                warn!(piece = piece.id, %err, "refill rejected");
                None
            }
        }
    }
}
