//! Game Flow Integration Tests
//!
//! Tests for full games on the local board:
//! - Drop handling and legality
//! - History, captures and the check indicator
//! - Reset
//! - Game end

use llmchess::game::rules::{GameOutcome, RulesEngine, ShakmatyRules};
use llmchess::game::types::{parse_square, BoardPiece, BoardSquare, PieceColor, PieceType};
use llmchess::game::LocalBoard;

fn sq(name: &str) -> BoardSquare {
    parse_square(name).unwrap()
}

/// Play `moves` as (from, to) drops, asserting each one is accepted
fn play(board: &mut LocalBoard, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        assert!(
            board.on_drop(sq(from), sq(to)).is_some(),
            "drop {} -> {} was rejected",
            from,
            to
        );
    }
}

// ============================================================================
// Drop Handling
// ============================================================================

#[test]
fn test_drop_from_empty_square_is_noop() {
    //! Dragging from an empty square changes nothing

    let mut board: LocalBoard = LocalBoard::default();
    let before = *board.snapshot();

    for from in ["e4", "d5", "h3", "a6"] {
        for to in BoardSquare::all() {
            assert!(board.on_drop(sq(from), to).is_none());
        }
    }

    assert_eq!(*board.snapshot(), before);
    assert!(board.history().is_empty());
    assert_eq!(board.turn(), PieceColor::White);
}

#[test]
fn test_illegal_drops_ignored() {
    //! Wrong-side, blocked and impossible moves are ignored silently

    let mut board: LocalBoard = LocalBoard::default();

    assert!(board.on_drop(sq("e7"), sq("e5")).is_none());
    assert!(board.on_drop(sq("d1"), sq("d4")).is_none());
    assert!(board.on_drop(sq("e2"), sq("e5")).is_none());
    assert!(board.on_drop(sq("e2"), sq("e2")).is_none());

    assert!(board.history().is_empty());
}

#[test]
fn test_every_opening_move_grows_history_by_one() {
    //! Each legal first move adds exactly one entry and the snapshot matches
    //! the engine afterwards

    let template: LocalBoard = LocalBoard::default();
    let moves = template.legal_moves();
    assert_eq!(moves.len(), 20);

    for mv in moves {
        let mut board = template.clone();
        let applied = board.on_drop(mv.from, mv.to).unwrap();

        assert_eq!(applied.san, mv.san);
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.history().last_move(), Some(mv.san.as_str()));
        assert_eq!(*board.snapshot(), board.engine().board());
        assert_eq!(board.turn(), PieceColor::Black);
    }
}

#[test]
fn test_every_reply_after_e4_grows_history_by_one() {
    //! Same property one ply deeper, for Black

    let mut template: LocalBoard = LocalBoard::default();
    play(&mut template, &[("e2", "e4")]);

    for mv in template.legal_moves() {
        let mut board = template.clone();
        board.on_drop(mv.from, mv.to).unwrap();

        assert_eq!(board.history().len(), 2);
        assert_eq!(*board.snapshot(), board.engine().board());
    }
}

// ============================================================================
// Captures
// ============================================================================

#[test]
fn test_capture_appends_one_entry() {
    //! exd5 records one captured black pawn

    let mut board: LocalBoard = LocalBoard::default();
    play(&mut board, &[("e2", "e4"), ("d7", "d5")]);
    assert!(board.captured().is_empty());

    let mv = board.on_drop(sq("e4"), sq("d5")).unwrap();

    assert_eq!(mv.san, "exd5");
    assert_eq!(mv.captured, Some(PieceType::Pawn));
    assert_eq!(
        board.captured().pieces(),
        [BoardPiece::new(PieceType::Pawn, PieceColor::Black)]
    );
    assert_eq!(board.captured().material_advantage(), 1);
}

#[test]
fn test_captures_accumulate_for_both_sides() {
    //! Captures by both sides are recorded in order

    let mut board: LocalBoard = LocalBoard::default();
    play(
        &mut board,
        &[
            ("e2", "e4"),
            ("d7", "d5"),
            ("e4", "d5"),
            ("d8", "d5"),
            ("b1", "c3"),
            ("d5", "a2"),
            ("a1", "a2"),
        ],
    );

    let taken_white: Vec<_> = board.captured().taken_from(PieceColor::White).collect();
    let taken_black: Vec<_> = board.captured().taken_from(PieceColor::Black).collect();
    assert_eq!(taken_white, [PieceType::Pawn, PieceType::Pawn]);
    assert_eq!(taken_black, [PieceType::Pawn, PieceType::Queen]);
    assert_eq!(board.captured().material_advantage(), 8);
}

#[test]
fn test_en_passant_capture_recorded() {
    //! En passant removes the passed pawn and records it

    let mut board: LocalBoard = LocalBoard::default();
    play(
        &mut board,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );

    let mv = board.on_drop(sq("e5"), sq("d6")).unwrap();

    assert_eq!(mv.san, "exd6");
    assert_eq!(board.captured().len(), 1);
    assert_eq!(board.snapshot().piece_at(sq("d5")), None);
}

// ============================================================================
// Check Indicator
// ============================================================================

#[test]
fn test_check_highlight_follows_king() {
    //! 1.e4 f5 2.Qh5+ puts the black king on e8 in check; g6 resolves it

    let mut board: LocalBoard = LocalBoard::default();
    play(&mut board, &[("e2", "e4"), ("f7", "f5")]);
    assert_eq!(board.check_square(), None);

    let mv = board.on_drop(sq("d1"), sq("h5")).unwrap();
    assert_eq!(mv.san, "Qh5+");
    assert_eq!(board.check_square(), Some(sq("e8")));

    board.on_drop(sq("g7"), sq("g6")).unwrap();
    assert_eq!(board.check_square(), None);
}

#[test]
fn test_check_resolved_by_king_move() {
    //! The indicator clears when the king steps out of check

    let mut board = LocalBoard::new(
        ShakmatyRules::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap(),
    );
    board.on_drop(sq("a1"), sq("a8")).unwrap();
    assert_eq!(board.check_square(), Some(sq("e8")));

    board.on_drop(sq("e8"), sq("e7")).unwrap();
    assert_eq!(board.check_square(), None);
}

// ============================================================================
// Special Moves
// ============================================================================

#[test]
fn test_castling_by_king_drop() {
    //! Dropping the king two files over castles

    let mut board = LocalBoard::new(
        ShakmatyRules::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap(),
    );

    let mv = board.on_drop(sq("e1"), sq("g1")).unwrap();
    assert_eq!(mv.san, "O-O");
    assert_eq!(
        board.snapshot().piece_at(sq("f1")),
        Some(BoardPiece::new(PieceType::Rook, PieceColor::White))
    );

    let mv = board.on_drop(sq("e8"), sq("c8")).unwrap();
    assert_eq!(mv.san, "O-O-O");
    assert_eq!(
        board.snapshot().piece_at(sq("d8")),
        Some(BoardPiece::new(PieceType::Rook, PieceColor::Black))
    );
}

#[test]
fn test_promotion_defaults_to_queen() {
    //! A pawn dropped on the last rank becomes a queen

    let mut board = LocalBoard::new(ShakmatyRules::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap());

    let mv = board.on_drop(sq("a7"), sq("a8")).unwrap();

    assert_eq!(mv.promotion, Some(PieceType::Queen));
    assert_eq!(
        board.snapshot().piece_at(sq("a8")),
        Some(BoardPiece::new(PieceType::Queen, PieceColor::White))
    );
}

// ============================================================================
// Reset and Game End
// ============================================================================

#[test]
fn test_reset_restores_initial_state() {
    //! Reset empties history and captures, clears check, White to move

    let mut board: LocalBoard = LocalBoard::default();
    let initial = *board.snapshot();
    play(
        &mut board,
        &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("f7", "f5"), ("d1", "h5")],
    );
    assert_eq!(board.history().len(), 5);
    assert_eq!(board.captured().len(), 1);
    assert_eq!(board.check_square(), Some(sq("e8")));

    board.reset();

    assert!(board.history().is_empty());
    assert!(board.captured().is_empty());
    assert_eq!(board.check_square(), None);
    assert_eq!(*board.snapshot(), initial);
    assert_eq!(board.turn(), PieceColor::White);
}

#[test]
fn test_reset_returns_to_custom_start() {
    //! A board created from a position resets to that position

    let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
    let mut board = LocalBoard::new(ShakmatyRules::from_fen(fen).unwrap());
    play(&mut board, &[("e2", "e4")]);

    board.reset();

    assert_eq!(board.fen(), fen);
}

#[test]
fn test_fools_mate_ends_game() {
    //! Checkmate ends the game and blocks further drops

    let mut board: LocalBoard = LocalBoard::default();
    play(
        &mut board,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    assert_eq!(board.history().last_move(), Some("Qh4#"));
    assert_eq!(
        board.outcome(),
        Some(GameOutcome::Checkmate {
            winner: PieceColor::Black
        })
    );
    assert_eq!(board.check_square(), Some(sq("e1")));
    assert!(board.legal_moves().is_empty());
    assert!(board.on_drop(sq("e1"), sq("f2")).is_none());
}

#[test]
fn test_history_rows_pair_moves() {
    //! History renders as numbered White/Black pairs

    let mut board: LocalBoard = LocalBoard::default();
    play(&mut board, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);

    let rows: Vec<_> = board
        .history()
        .rows()
        .map(|row| (row.number, row.white.to_string(), row.black.map(str::to_string)))
        .collect();

    assert_eq!(
        rows,
        [
            (1, "e4".to_string(), Some("e5".to_string())),
            (2, "Nf3".to_string(), None),
        ]
    );
}
