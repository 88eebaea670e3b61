//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation
//! - En passant lifetime
//! - Board immutability and sharing
//! - Win conditions

use chess_rules::{Alliance, Board, GameOutcome, MoveStatus, PieceKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play `from -> to` for the side to move and return the resulting board
fn play(board: &Board, from: u8, to: u8) -> Board {
    let mv = board
        .find_move(from, to)
        .unwrap_or_else(|| panic!("no legal move {} -> {}", from, to));
    let transition = board.current_player().make_move(&mv).unwrap();
    assert_eq!(
        transition.status(),
        MoveStatus::Done,
        "move {} should complete",
        mv
    );
    transition.into_board()
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    init_tracing();
    let board = Board::standard();

    assert_eq!(board.current_player().alliance(), Alliance::White);
    assert_eq!(
        board.current_player().legal_moves().len(),
        20,
        "White should have 20 moves"
    );
}

#[test]
fn test_opening_moves_by_kind() {
    //! 16 pawn moves (8 of them jumps) and 4 knight moves
    let board = Board::standard();
    let moves = board.current_player().legal_moves();

    let pawn_moves = moves
        .iter()
        .filter(|mv| mv.moved_piece().kind() == PieceKind::Pawn)
        .count();
    let jumps = moves.iter().filter(|mv| mv.is_pawn_jump()).count();
    let knight_moves = moves
        .iter()
        .filter(|mv| mv.moved_piece().kind() == PieceKind::Knight)
        .count();

    assert_eq!(pawn_moves, 16);
    assert_eq!(jumps, 8);
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_turns_alternate() {
    let board = Board::standard();
    let after_white = play(&board, 52, 36);
    assert_eq!(after_white.next_move_maker(), Alliance::Black);

    let after_black = play(&after_white, 12, 28);
    assert_eq!(after_black.next_move_maker(), Alliance::White);
}

#[test]
fn test_moving_out_of_turn_is_illegal() {
    let board = Board::standard();
    let black_jump = board
        .black_player()
        .legal_moves()
        .iter()
        .find(|mv| mv.current_coordinate() == 12 && mv.destination() == 28)
        .cloned()
        .unwrap();

    let transition = board.current_player().make_move(&black_jump).unwrap();
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert!(transition.transition_board().ptr_eq(&board));
}

// ============================================================================
// En Passant Tests
// ============================================================================

#[test]
fn test_en_passant_pawn_lasts_one_ply() {
    //! Set by a jump, cleared by any other move
    let board = Board::standard();

    let after_jump = play(&board, 52, 36);
    assert_eq!(after_jump.en_passant_pawn().map(|p| p.position()), Some(36));

    let after_reply = play(&after_jump, 1, 18);
    assert!(after_reply.en_passant_pawn().is_none());

    let after_single = play(&after_reply, 51, 43);
    assert!(after_single.en_passant_pawn().is_none());
}

#[test]
fn test_en_passant_capture_in_game() {
    //! 1. e4 a6 2. e5 d5 3. exd6
    let mut board = Board::standard();
    for (from, to) in [(52, 36), (8, 16), (36, 28), (11, 27)] {
        board = play(&board, from, to);
    }

    let capture = board.find_move(28, 19).unwrap();
    assert!(capture.is_en_passant());
    let board = play(&board, 28, 19);

    assert!(board.piece_at(27).is_none(), "captured pawn should be removed");
    assert_eq!(board.black_pieces().len(), 15);
}

#[test]
fn test_en_passant_expires_if_not_taken() {
    //! 1. e4 a6 2. e5 d5 3. h3 h6 and the capture is gone
    let mut board = Board::standard();
    for (from, to) in [(52, 36), (8, 16), (36, 28), (11, 27), (55, 47), (15, 23)] {
        board = play(&board, from, to);
    }

    assert!(board.find_move(28, 19).is_none());
}

// ============================================================================
// Immutability Tests
// ============================================================================

#[test]
fn test_source_board_is_never_modified() {
    //! Two different moves from one board both start from the same position
    let board = Board::standard();
    let white_before = board.white_pieces().to_vec();
    let black_before = board.black_pieces().to_vec();
    let dump_before = board.to_string();

    let a = play(&board, 52, 36);
    let b = play(&board, 51, 35);

    assert_eq!(board.white_pieces(), white_before.as_slice());
    assert_eq!(board.black_pieces(), black_before.as_slice());
    assert_eq!(board.to_string(), dump_before);
    assert!(board.en_passant_pawn().is_none());
    assert!(a.piece_at(36).is_some() && a.piece_at(35).is_none());
    assert!(b.piece_at(35).is_some() && b.piece_at(36).is_none());
    assert_ne!(a, b);
}

#[test]
fn test_board_shared_across_threads() {
    let board = Board::standard();

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| board.current_player().legal_moves().len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(counts.iter().all(|&n| n == 20));
}

// ============================================================================
// Win Condition Tests
// ============================================================================

#[test]
fn test_fools_mate() {
    init_tracing();
    let mut board = Board::standard();
    for (from, to) in [(53, 45), (12, 28), (54, 38), (3, 39)] {
        assert_eq!(board.outcome(), GameOutcome::Playing);
        board = play(&board, from, to);
    }

    let outcome = board.outcome();
    assert!(board.current_player().is_in_check());
    assert_eq!(
        outcome,
        GameOutcome::Checkmate {
            winner: Alliance::Black
        }
    );
    assert!(outcome.is_game_over());
    assert_eq!(outcome.message(), "Black wins by checkmate!");
}

#[test]
fn test_scholars_mate() {
    //! 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7#
    let mut board = Board::standard();
    for (from, to) in [
        (52, 36),
        (12, 28),
        (61, 34),
        (1, 18),
        (59, 31),
        (6, 21),
        (31, 13),
    ] {
        board = play(&board, from, to);
    }

    assert_eq!(board.outcome().winner(), Some(Alliance::White));
}
