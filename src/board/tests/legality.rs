//! Highlight filtering: pins, king safety, en passant exposure and turns.

use super::{id_at, sorted, sq, squares};
use crate::board::{Board, BoardBuilder, Color, MoveError, PieceId, PieceKind, RulesConfig};

#[test]
fn test_pinned_bishop_on_file_is_frozen() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(5, 2), Color::White, PieceKind::Bishop)
        .piece(sq(1, 8), Color::Black, PieceKind::King)
        .piece(sq(5, 8), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();
    let bishop = id_at(&board, 5, 2);

    let line = board.pin_line(bishop).unwrap();
    assert!(line.contains(&sq(5, 8)));
    assert!(line.contains(&sq(5, 2)));
    assert!(board.on_drag_start(bishop).is_empty());
}

#[test]
fn test_pinned_rook_slides_along_the_pin() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(5, 3), Color::White, PieceKind::Rook)
        .piece(sq(1, 8), Color::Black, PieceKind::King)
        .piece(sq(5, 7), Color::Black, PieceKind::Queen)
        .build()
        .unwrap();
    let rook = id_at(&board, 5, 3);

    assert_eq!(
        sorted(board.on_drag_start(rook)),
        squares(&[(5, 2), (5, 4), (5, 5), (5, 6), (5, 7)])
    );
}

#[test]
fn test_pinned_bishop_on_diagonal() {
    let board = BoardBuilder::new()
        .piece(sq(1, 1), Color::White, PieceKind::King)
        .piece(sq(3, 3), Color::White, PieceKind::Bishop)
        .piece(sq(8, 1), Color::Black, PieceKind::King)
        .piece(sq(6, 6), Color::Black, PieceKind::Bishop)
        .build()
        .unwrap();
    let bishop = id_at(&board, 3, 3);

    assert_eq!(
        sorted(board.on_drag_start(bishop)),
        squares(&[(2, 2), (4, 4), (5, 5), (6, 6)])
    );
}

#[test]
fn test_no_pin_with_two_blockers() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(5, 2), Color::White, PieceKind::Knight)
        .piece(sq(5, 3), Color::White, PieceKind::Bishop)
        .piece(sq(1, 8), Color::Black, PieceKind::King)
        .piece(sq(5, 8), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();

    assert_eq!(board.pin_line(id_at(&board, 5, 2)), None);
    assert_eq!(board.pin_line(id_at(&board, 5, 3)), None);
    assert!(!board.on_drag_start(id_at(&board, 5, 3)).is_empty());
}

#[test]
fn test_pinned_knight_has_no_moves() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(4, 2), Color::White, PieceKind::Knight)
        .piece(sq(8, 8), Color::Black, PieceKind::King)
        .piece(sq(1, 5), Color::Black, PieceKind::Bishop)
        .build()
        .unwrap();

    assert!(board.on_drag_start(id_at(&board, 4, 2)).is_empty());
}

#[test]
fn test_king_avoids_attacked_squares() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(8, 8), Color::Black, PieceKind::King)
        .piece(sq(4, 8), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();

    assert_eq!(
        sorted(board.on_drag_start(id_at(&board, 5, 1))),
        squares(&[(6, 1), (5, 2), (6, 2)])
    );
}

#[test]
fn test_king_avoids_pawn_and_king_attacks() {
    let board = BoardBuilder::new()
        .piece(sq(5, 4), Color::White, PieceKind::King)
        .piece(sq(5, 6), Color::Black, PieceKind::King)
        .piece(sq(2, 4), Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();

    // d5, e5 and f5 touch the black king
    let highlights = board.on_drag_start(id_at(&board, 5, 4));
    assert_eq!(
        sorted(highlights),
        squares(&[(4, 3), (5, 3), (6, 3), (4, 4), (6, 4)])
    );
}

#[test]
fn test_en_passant_rank_pin() {
    let board = BoardBuilder::new()
        .piece(sq(1, 5), Color::White, PieceKind::King)
        .piece(sq(4, 5), Color::White, PieceKind::Pawn)
        .piece(sq(8, 8), Color::Black, PieceKind::King)
        .piece(sq(5, 5), Color::Black, PieceKind::Pawn)
        .piece(sq(8, 5), Color::Black, PieceKind::Rook)
        .just_double_advanced(sq(5, 5))
        .build()
        .unwrap();
    let pawn = id_at(&board, 4, 5);

    assert!(board.en_passant(pawn).is_some());
    assert_eq!(board.on_drag_start(pawn), vec![sq(4, 6)]);
}

#[test]
fn test_en_passant_captures_checking_pawn() {
    let board = BoardBuilder::new()
        .piece(sq(4, 4), Color::White, PieceKind::King)
        .piece(sq(6, 5), Color::White, PieceKind::Pawn)
        .piece(sq(8, 8), Color::Black, PieceKind::King)
        .piece(sq(5, 5), Color::Black, PieceKind::Pawn)
        .just_double_advanced(sq(5, 5))
        .build()
        .unwrap();
    let pawn = id_at(&board, 6, 5);

    assert!(board.is_in_check(Color::White));
    assert_eq!(board.on_drag_start(pawn), vec![sq(5, 6)]);
}

#[test]
fn test_turn_order() {
    let mut board = Board::new();
    let black_pawn = id_at(&board, 5, 7);
    assert!(board.on_drag_start(black_pawn).is_empty());
    assert_eq!(board.legal_destinations(black_pawn).len(), 2);

    assert_eq!(
        board.try_move(black_pawn, sq(5, 5)),
        Err(MoveError::NotYourTurn {
            id: black_pawn,
            side_to_move: Color::White
        })
    );
}

#[test]
fn test_sandbox_ignores_turn_order() {
    let mut board = Board::with_config(RulesConfig::sandbox());
    let black_pawn = id_at(&board, 5, 7);
    assert_eq!(board.on_drag_start(black_pawn).len(), 2);
    assert!(board.on_drop(black_pawn, sq(5, 5)).applied);
}

#[test]
fn test_rejected_drop_changes_nothing() {
    let mut board = Board::new();
    let before = board.clone();
    let pawn = id_at(&board, 5, 2);

    let outcome = board.on_drop(pawn, sq(5, 5));
    assert!(!outcome.applied);
    assert_eq!(outcome.record, None);
    assert_eq!(board, before);

    assert_eq!(
        board.try_move(pawn, sq(5, 5)),
        Err(MoveError::IllegalDestination {
            id: pawn,
            notation: "e5".to_string()
        })
    );
    assert_eq!(
        board.try_move(PieceId(77), sq(5, 3)),
        Err(MoveError::UnknownPiece { id: PieceId(77) })
    );
}

#[test]
fn test_captured_piece_cannot_be_dragged() {
    let mut board = Board::new();
    super::play(&mut board, (5, 2), (5, 4));
    super::play(&mut board, (4, 7), (4, 5));
    let victim = id_at(&board, 4, 5);
    super::play(&mut board, (5, 4), (4, 5));
    super::play(&mut board, (8, 7), (8, 6));

    assert!(board.on_drag_start(victim).is_empty());
    assert_eq!(
        board.try_move(victim, sq(4, 4)),
        Err(MoveError::PieceCaptured { id: victim })
    );
}

#[test]
fn test_highlights_are_unique() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(8, 1), Color::White, PieceKind::Rook)
        .piece(sq(5, 8), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let king = id_at(&board, 5, 1);

    let highlights = board.on_drag_start(king);
    let mut deduped = sorted(highlights.clone());
    deduped.dedup();
    assert_eq!(deduped.len(), highlights.len());
}

#[test]
fn test_free_play_never_captures_a_king() {
    let board = BoardBuilder::new()
        .piece(sq(5, 1), Color::White, PieceKind::King)
        .piece(sq(4, 1), Color::White, PieceKind::Rook)
        .piece(sq(4, 8), Color::Black, PieceKind::King)
        .config(RulesConfig::sandbox())
        .build()
        .unwrap();
    let rook = id_at(&board, 4, 1);

    assert!(board.is_in_check(Color::Black));
    let highlights = board.on_drag_start(rook);
    assert!(highlights.contains(&sq(4, 7)));
    assert!(!highlights.contains(&sq(4, 8)));
}
