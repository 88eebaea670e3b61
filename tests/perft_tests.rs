//! Perft Integration Tests
//!
//! Leaf counts against published values for well-known positions. Any missing
//! or extra move anywhere in the tree changes the totals.

use chess_rules::{perft, perft_divide, Alliance, Board, BoardError, Piece, PieceKind};

/// Board from eight rank strings, rank 8 first
///
/// Upper case is White, lower case Black, '.' is empty. Every piece starts
/// with its first-move flag set.
fn diagram(rows: [&str; 8], to_move: Alliance) -> Board {
    let mut builder = Board::builder().set_move_maker(to_move);
    for (row, line) in rows.iter().enumerate() {
        for (file, symbol) in line.chars().enumerate() {
            if symbol == '.' {
                continue;
            }
            let alliance = if symbol.is_ascii_uppercase() {
                Alliance::White
            } else {
                Alliance::Black
            };
            let kind = match symbol.to_ascii_uppercase() {
                'K' => PieceKind::King,
                'Q' => PieceKind::Queen,
                'R' => PieceKind::Rook,
                'B' => PieceKind::Bishop,
                'N' => PieceKind::Knight,
                'P' => PieceKind::Pawn,
                other => panic!("unknown piece symbol {}", other),
            };
            let square = (row * 8 + file) as u8;
            builder = builder.set_piece(Piece::new(kind, alliance, square));
        }
    }
    builder.build().unwrap()
}

// ============================================================================
// Starting Position
// ============================================================================

#[test]
fn test_perft_start_position() {
    let board = Board::standard();

    assert_eq!(perft(&board, 0).unwrap(), 1);
    assert_eq!(perft(&board, 1).unwrap(), 20);
    assert_eq!(perft(&board, 2).unwrap(), 400);
    assert_eq!(perft(&board, 3).unwrap(), 8902);
}

#[test]
fn test_perft_divide_sums_to_perft() {
    let board = Board::standard();
    let divide = perft_divide(&board, 2).unwrap();

    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
    assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    assert!(divide.iter().any(|(mv, _)| mv == "Pe2-e4"));
}

#[test]
fn test_diagram_matches_standard_board() {
    let board = diagram(
        [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
        Alliance::White,
    );

    assert_eq!(board, Board::standard());
}

// ============================================================================
// Tactical Positions
// ============================================================================

#[test]
fn test_perft_kiwipete() {
    //! Castling both ways, pins, en passant at depth 2
    let board = diagram(
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        Alliance::White,
    );

    assert_eq!(perft(&board, 1).unwrap(), 48);
    assert_eq!(perft(&board, 2).unwrap(), 2039);
}

#[test]
fn test_perft_rook_and_pawns_endgame() {
    //! Horizontal pins through en passant show up at depth 3
    let board = diagram(
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        Alliance::White,
    );

    assert_eq!(perft(&board, 1).unwrap(), 14);
    assert_eq!(perft(&board, 2).unwrap(), 191);
    assert_eq!(perft(&board, 3).unwrap(), 2812);
}

// ============================================================================
// Malformed Positions
// ============================================================================

#[test]
fn test_perft_reports_king_capture() {
    //! Black is already in check with White to move, so Rxe8 removes a king
    let board = diagram(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "K...R...",
        ],
        Alliance::White,
    );

    assert_eq!(
        perft(&board, 1),
        Err(BoardError::MissingKing {
            alliance: Alliance::Black
        })
    );
    assert!(perft_divide(&board, 1).is_err());
    assert_eq!(perft(&board, 0), Ok(1));
}
