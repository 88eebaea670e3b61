//! Board construction and accessor tests

use super::*;

fn create_test_board(pieces: &[Piece], to_move: Alliance) -> BoardResult<Board> {
    pieces
        .iter()
        .fold(Board::builder(), |builder, piece| builder.set_piece(*piece))
        .set_move_maker(to_move)
        .build()
}

// ============================================================================
// Standard Position
// ============================================================================

#[test]
fn test_standard_board_layout() {
    //! 16 pieces each, kings on e1/e8, White to move, nothing en passant
    let board = Board::standard();

    assert_eq!(board.white_pieces().len(), 16);
    assert_eq!(board.black_pieces().len(), 16);
    assert_eq!(board.white_player().king().position(), WHITE_KING_START);
    assert_eq!(board.black_player().king().position(), BLACK_KING_START);
    assert_eq!(board.next_move_maker(), Alliance::White);
    assert!(board.en_passant_pawn().is_none());

    for square in 16..48 {
        assert!(!board.tile(square).is_occupied(), "square {} should be empty", square);
    }
    assert_eq!(board.piece_at(3).map(Piece::kind), Some(PieceKind::Queen));
    assert_eq!(board.piece_at(59).map(Piece::kind), Some(PieceKind::Queen));
}

#[test]
fn test_standard_board_nobody_in_check() {
    let board = Board::standard();

    assert!(!board.white_player().is_in_check());
    assert!(!board.black_player().is_in_check());
    assert_eq!(board.current_player().alliance(), Alliance::White);
}

#[test]
fn test_standard_board_display() {
    //! Each tile right-aligned in three columns, one line per row
    let dump = Board::standard().to_string();
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "  r  n  b  q  k  b  n  r");
    assert_eq!(lines[1], "  p  p  p  p  p  p  p  p");
    assert_eq!(lines[4], "  -  -  -  -  -  -  -  -");
    assert_eq!(lines[7], "  R  N  B  Q  K  B  N  R");
}

// ============================================================================
// Builder Validation
// ============================================================================

#[test]
fn test_missing_king_rejected() {
    let result = create_test_board(&[Piece::king(Alliance::White, 60)], Alliance::White);

    assert_eq!(
        result.unwrap_err(),
        BoardError::MissingKing {
            alliance: Alliance::Black
        }
    );
}

#[test]
fn test_multiple_kings_rejected() {
    let result = create_test_board(
        &[
            Piece::king(Alliance::White, 60),
            Piece::king(Alliance::White, 62),
            Piece::king(Alliance::Black, 4),
        ],
        Alliance::White,
    );

    assert_eq!(
        result.unwrap_err(),
        BoardError::MultipleKings {
            alliance: Alliance::White,
            count: 2
        }
    );
}

#[test]
fn test_missing_move_maker_rejected() {
    let result = Board::builder()
        .set_piece(Piece::king(Alliance::White, 60))
        .set_piece(Piece::king(Alliance::Black, 4))
        .build();

    assert_eq!(result.unwrap_err(), BoardError::MissingMoveMaker);
}

#[test]
fn test_out_of_range_square_rejected() {
    let result = create_test_board(
        &[
            Piece::king(Alliance::White, 60),
            Piece::king(Alliance::Black, 4),
            Piece::rook(Alliance::White, 64),
        ],
        Alliance::White,
    );

    assert_eq!(result.unwrap_err(), BoardError::InvalidSquare { square: 64 });
}

#[test]
fn test_en_passant_pawn_must_be_on_board() {
    let result = Board::builder()
        .set_piece(Piece::king(Alliance::White, 60))
        .set_piece(Piece::king(Alliance::Black, 4))
        .set_en_passant_pawn(Piece::pawn(Alliance::Black, 27))
        .set_move_maker(Alliance::White)
        .build();

    assert_eq!(
        result.unwrap_err(),
        BoardError::InvalidEnPassantPawn { square: 27 }
    );
}

#[test]
fn test_invalid_promotion_config_rejected() {
    //! A king promotion would put two kings on the board after a legal push
    let config = RulesConfig {
        promotion_piece: PieceKind::King,
        underpromotions: false,
    };
    let result = Board::builder()
        .with_config(config)
        .set_piece(Piece::king(Alliance::White, 60))
        .set_piece(Piece::king(Alliance::Black, 7))
        .set_piece(Piece::pawn(Alliance::White, 8))
        .set_move_maker(Alliance::White)
        .build();

    assert!(
        matches!(result, Err(BoardError::InvalidConfig { .. })),
        "builder should reject a king promotion config"
    );
    assert!(Board::standard_with_config(config).is_err());
}

#[test]
fn test_valid_config_accepted_by_standard_board() {
    let config = RulesConfig {
        promotion_piece: PieceKind::Rook,
        underpromotions: true,
    };
    let board = Board::standard_with_config(config).unwrap();

    assert_eq!(board.config(), &config);
}

#[test]
fn test_builder_last_write_wins() {
    //! A second placement on the same square replaces the first
    let board = create_test_board(
        &[
            Piece::king(Alliance::White, 60),
            Piece::king(Alliance::Black, 4),
            Piece::knight(Alliance::White, 36),
            Piece::bishop(Alliance::Black, 36),
        ],
        Alliance::White,
    )
    .unwrap();

    let occupant = board.piece_at(36).unwrap();
    assert_eq!(occupant.kind(), PieceKind::Bishop);
    assert_eq!(occupant.alliance(), Alliance::Black);
    assert_eq!(board.white_pieces().len(), 1);
}

// ============================================================================
// Sharing and Equality
// ============================================================================

#[test]
fn test_clone_shares_snapshot() {
    let board = Board::standard();
    let clone = board.clone();

    assert!(board.ptr_eq(&clone));
    assert_eq!(board, clone);
}

#[test]
fn test_separately_built_boards_compare_equal() {
    //! Equality is by contents even when the snapshots are distinct
    let a = Board::standard();
    let b = Board::standard();

    assert!(!a.ptr_eq(&b));
    assert_eq!(a, b);
}

#[test]
fn test_piece_at_out_of_range_is_none() {
    assert!(Board::standard().piece_at(200).is_none());
    assert!(!Board::standard().is_attacked(64, Alliance::White));
}

#[test]
fn test_all_legal_moves_white_first() {
    let board = Board::standard();
    let moves: Vec<&Move> = board.all_legal_moves().collect();

    assert_eq!(moves.len(), 40);
    assert!(moves[..20]
        .iter()
        .all(|mv| mv.moved_piece().alliance() == Alliance::White));
    assert!(moves[20..]
        .iter()
        .all(|mv| mv.moved_piece().alliance() == Alliance::Black));
}

#[test]
fn test_find_move_prefers_configured_promotion() {
    let config = RulesConfig {
        promotion_piece: PieceKind::Knight,
        underpromotions: true,
    };
    let board = Board::builder()
        .with_config(config)
        .set_piece(Piece::king(Alliance::White, 63))
        .set_piece(Piece::king(Alliance::Black, 0))
        .set_piece(Piece::pawn(Alliance::White, 12))
        .set_move_maker(Alliance::White)
        .build()
        .unwrap();

    let mv = board.find_move(12, 4).unwrap();
    assert_eq!(mv.promoted_kind(), Some(PieceKind::Knight));
    assert!(board.find_move(12, 5).is_none());
}
