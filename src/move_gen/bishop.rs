//! Bishop move generation
//!
//! Bishops slide along the four diagonals until blocked.

use super::sliding;
use crate::board::Snapshot;
use crate::moves::Move;
use crate::pieces::Piece;

pub(crate) const BISHOP_DIRECTIONS: [i32; 4] = [-9, -7, 7, 9];

/// Bishop moves along diagonals; see [`sliding::generate_sliding_moves`]
pub(crate) fn generate_bishop_moves(snapshot: &Snapshot, bishop: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(snapshot, bishop, &BISHOP_DIRECTIONS, moves);
}
