//! Queen move generation
//!
//! The queen combines the rook and bishop rays.

use super::bishop::BISHOP_DIRECTIONS;
use super::rook::ROOK_DIRECTIONS;
use super::sliding;
use crate::board::Snapshot;
use crate::moves::Move;
use crate::pieces::Piece;

pub(crate) fn generate_queen_moves(snapshot: &Snapshot, queen: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(snapshot, queen, &ROOK_DIRECTIONS, moves);
    sliding::generate_sliding_moves(snapshot, queen, &BISHOP_DIRECTIONS, moves);
}
