//! Pseudo-legal move generation
//!
//! Each piece kind has its own generator; [`generate_piece_moves`] dispatches
//! with one `match`. Generators never ask whether a move leaves the own King
//! attacked. That filter runs later in [`crate::player::Player::make_move`].
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double pushes, captures, en passant, promotion wrapping
//! - `knight` / `king` - fixed offset sets
//! - `sliding` - shared ray walk for `bishop`, `rook` and `queen`
//! - `attack` - per-side attack bitboards
//!
//! ## Edge wraparound
//!
//! Tiles are a flat 0..64 array, so an offset like `+1` from the h-file lands
//! on the a-file of the next row. Every generator checks the file tables in
//! [`crate::constants`] before applying an offset that could wrap.

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;


pub(crate) use attack::attack_map;

use crate::board::Snapshot;
use crate::moves::Move;
use crate::pieces::{Piece, PieceKind};

/// Append the pseudo-legal moves of `piece` to `moves`
///
/// Dispatches on [`PieceKind`]. Castles are never produced here.
///
/// # Arguments
///
/// * `snapshot` - Tiles, en passant pawn and rules config of the board being built
/// * `piece` - The piece to generate for; its position must hold it in `snapshot`
/// * `moves` - Output vector to append moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// let board = Board::standard();
/// generate_piece_moves(board.snapshot(), &Piece::knight(Alliance::White, 57), &mut moves);
/// // b1 knight in the starting position: a3 and c3
/// assert_eq!(moves.len(), 2);
/// ```
pub(crate) fn generate_piece_moves(snapshot: &Snapshot, piece: &Piece, moves: &mut Vec<Move>) {
    match piece.kind() {
        PieceKind::Pawn => pawn::generate_pawn_moves(snapshot, piece, moves),
        PieceKind::Knight => knight::generate_knight_moves(snapshot, piece, moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(snapshot, piece, moves),
        PieceKind::Rook => rook::generate_rook_moves(snapshot, piece, moves),
        PieceKind::Queen => queen::generate_queen_moves(snapshot, piece, moves),
        PieceKind::King => king::generate_king_moves(snapshot, piece, moves),
    }
}

/// Pseudo-legal moves of every piece in `pieces`
///
/// # Arguments
///
/// * `snapshot` - Board being built
/// * `pieces` - One side's active pieces, in tile order
pub(crate) fn generate_pseudo_legal_moves(snapshot: &Snapshot, pieces: &[Piece]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(pieces.len() * 4);
    for piece in pieces {
        generate_piece_moves(snapshot, piece, &mut moves);
    }
    moves
}

/// Quiet move or capture onto `destination`, or nothing if a friendly piece sits there
#[inline]
pub(crate) fn step_to(snapshot: &Snapshot, piece: &Piece, destination: u8) -> Option<Move> {
    match snapshot.piece_at(destination) {
        None => Some(Move::normal(*piece, destination)),
        Some(occupant) if occupant.alliance() != piece.alliance() => {
            Some(Move::capture(*piece, destination, *occupant))
        }
        Some(_) => None,
    }
}
