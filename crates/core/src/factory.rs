//! Piece factory: assigns ids and kinds to new pieces.

use crate::rng::{KindSource, SimpleRng};
use crate::types::Piece;

/// Produces pieces with strictly increasing ids.
///
/// The id counter starts at 0 and only ever moves forward; ids are never
/// handed out twice within one factory.
#[derive(Debug, Clone)]
pub struct PieceFactory<S = SimpleRng> {
    source: S,
    next_id: u64,
}

impl PieceFactory<SimpleRng> {
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<S: KindSource> PieceFactory<S> {
    pub fn new(source: S) -> Self {
        Self { source, next_id: 0 }
    }

    /// Create the next piece.
    pub fn produce(&mut self) -> Piece {
        let piece = Piece::new(self.source.next_kind(), self.next_id);
        self.next_id += 1;
        piece
    }

    /// Id the next produced piece will get (equals the number produced so far).
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedKinds;
    use crate::types::PieceKind;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut factory = PieceFactory::seeded(42);
        assert_eq!(factory.next_id(), 0);

        let ids: Vec<u64> = (0..6).map(|_| factory.produce().id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(factory.next_id(), 6);
    }

    #[test]
    fn test_kinds_come_from_source() {
        let mut factory = PieceFactory::new(ScriptedKinds::new([PieceKind::O, PieceKind::L]));
        assert_eq!(factory.produce(), Piece::new(PieceKind::O, 0));
        assert_eq!(factory.produce(), Piece::new(PieceKind::L, 1));
        assert_eq!(factory.produce(), Piece::new(PieceKind::O, 2));
    }

    #[test]
    fn test_ids_keep_increasing_past_u32_range() {
        let mut factory = PieceFactory {
            source: ScriptedKinds::new([PieceKind::T]),
            next_id: u64::from(u32::MAX),
        };
        assert_eq!(factory.produce().id, u64::from(u32::MAX));
        assert_eq!(factory.produce().id, u64::from(u32::MAX) + 1);
        assert_eq!(factory.next_id(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = PieceFactory::seeded(9);
        let mut b = PieceFactory::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.produce(), b.produce());
        }
    }
}
