//! Integration tests for whole-session scenarios

use tetris_reserve::core::{CoreError, Outcome, ScriptedKinds, Session};
use tetris_reserve::types::{Command, Piece, PieceKind, QUEUE_CAPACITY, RESERVE_CAPACITY};

fn queue_ids<S: tetris_reserve::core::KindSource>(s: &Session<S>) -> Vec<u64> {
    s.queue().iter().map(|p| p.id).collect()
}

fn reserve_ids<S: tetris_reserve::core::KindSource>(s: &Session<S>) -> Vec<u64> {
    s.reserve_stack().iter().map(|p| p.id).collect()
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new(12345);
    assert!(session.queue().is_empty());

    session.start();
    assert_eq!(session.queue().len(), QUEUE_CAPACITY);
    assert_eq!(queue_ids(&session), vec![0, 1, 2, 3, 4]);
    assert!(session.reserve_stack().is_empty());
}

#[test]
fn test_reserve_three_then_block_exchange() {
    let mut session = Session::new(7);
    session.start();

    for _ in 0..RESERVE_CAPACITY {
        session.reserve().unwrap();
    }
    assert_eq!(reserve_ids(&session), vec![2, 1, 0]);
    assert_eq!(queue_ids(&session), vec![3, 4, 5, 6, 7]);

    let outcome = session.swap_three().unwrap();
    assert!(matches!(outcome, Outcome::BlockSwapped { .. }));
    assert_eq!(queue_ids(&session), vec![2, 1, 0, 6, 7]);
    assert_eq!(reserve_ids(&session), vec![5, 4, 3]);
    assert_eq!(session.queue().len(), 5);
    assert_eq!(session.reserve_stack().len(), 3);
}

#[test]
fn test_block_exchange_keeps_kinds_with_ids() {
    let mut session = Session::with_source(ScriptedKinds::new([
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
    ]));
    session.start();
    for _ in 0..3 {
        session.reserve().unwrap();
    }
    // queue 3L 4I 5O 6T 7L, reserve 2T 1O 0I
    session.swap_three().unwrap();

    let queue: Vec<Piece> = session.queue().iter().collect();
    assert_eq!(
        &queue[..3],
        &[
            Piece::new(PieceKind::T, 2),
            Piece::new(PieceKind::O, 1),
            Piece::new(PieceKind::I, 0),
        ]
    );
    let reserve: Vec<Piece> = session.reserve_stack().iter().collect();
    assert_eq!(
        reserve,
        vec![
            Piece::new(PieceKind::O, 5),
            Piece::new(PieceKind::I, 4),
            Piece::new(PieceKind::L, 3),
        ]
    );
}

#[test]
fn test_failed_commands_do_not_change_state() {
    let mut session = Session::new(3);
    session.start();

    let before = session.snapshot();
    assert_eq!(session.apply(Command::UseReserved), Err(CoreError::StackEmpty));
    assert!(session.apply(Command::SwapFrontTop).is_err());
    assert!(session.apply(Command::SwapThree).is_err());
    assert_eq!(session.snapshot(), before);

    for _ in 0..3 {
        session.apply(Command::Reserve).unwrap();
    }
    let before = session.snapshot();
    assert_eq!(session.apply(Command::Reserve), Err(CoreError::StackFull));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_swap_front_top_twice_restores() {
    let mut session = Session::new(99);
    session.start();
    session.reserve().unwrap();
    session.reserve().unwrap();

    let before = session.snapshot();
    session.swap_front_top().unwrap();
    assert_ne!(session.snapshot(), before);
    session.swap_front_top().unwrap();
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_played_and_used_pieces_leave_the_system() {
    let mut session = Session::new(5);
    session.start();

    let Outcome::Played { piece, .. } = session.draw().unwrap() else {
        panic!("expected a played outcome");
    };
    assert_eq!(piece.id, 0);
    assert!(session.queue().iter().all(|p| p.id != 0));

    session.reserve().unwrap();
    let Outcome::UsedReserved { piece } = session.use_reserved().unwrap() else {
        panic!("expected a used outcome");
    };
    assert_eq!(piece.id, 1);
    assert!(session.queue().iter().all(|p| p.id != 1));
    assert!(session.reserve_stack().is_empty());

    let snap = session.snapshot();
    assert_eq!(snap.played, 1);
    assert_eq!(snap.used, 1);
    assert_eq!(snap.next_id, 7);
}

#[test]
fn test_same_seed_same_session() {
    let mut a = Session::new(2024);
    let mut b = Session::new(2024);
    a.start();
    b.start();
    for command in [Command::Play, Command::Reserve, Command::SwapFrontTop, Command::Play] {
        assert_eq!(a.apply(command), b.apply(command));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
