//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked.

use super::sliding;
use crate::board::Snapshot;
use crate::moves::Move;
use crate::pieces::Piece;

pub(crate) const ROOK_DIRECTIONS: [i32; 4] = [-8, -1, 1, 8];

/// Rook moves along ranks and files; see [`sliding::generate_sliding_moves`]
pub(crate) fn generate_rook_moves(snapshot: &Snapshot, rook: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(snapshot, rook, &ROOK_DIRECTIONS, moves);
}
