//! Attack bitboards
//!
//! One `u64` per side, bit `i` set when tile `i` is attacked by that side.
//! Built once per board from the side's pseudo-legal moves:
//!
//! - every destination of a non-pawn move is attacked
//! - pawn pushes attack nothing
//! - a pawn attacks both forward diagonals, occupied or not
//!
//! The King square test is then the same as "some enemy pseudo-legal move
//! lands on the King", and an empty castling square in front of an enemy pawn
//! still counts as covered.

use super::pawn::wraps_around;
use crate::constants::is_valid_tile_coordinate;
use crate::moves::Move;
use crate::pieces::Piece;

const PAWN_ATTACK_OFFSETS: [i32; 2] = [7, 9];

/// Attack bitboard of one side
///
/// # Arguments
///
/// * `pieces` - The side's active pieces; only its pawns are read
/// * `moves` - The side's pseudo-legal moves on the same board
pub(crate) fn attack_map(pieces: &[Piece], moves: &[Move]) -> u64 {
    let mut attacks = 0u64;

    for mv in moves {
        if mv.moved_piece().kind().is_pawn() {
            continue;
        }
        attacks |= 1u64 << mv.destination();
    }

    for pawn in pieces.iter().filter(|piece| piece.kind().is_pawn()) {
        attacks |= pawn_attacks(pawn);
    }

    attacks
}

fn pawn_attacks(pawn: &Piece) -> u64 {
    let mut attacks = 0u64;
    for offset in PAWN_ATTACK_OFFSETS {
        if wraps_around(pawn, offset) {
            continue;
        }
        let candidate = pawn.position() as i32 + pawn.alliance().direction() * offset;
        if is_valid_tile_coordinate(candidate) {
            attacks |= 1u64 << candidate;
        }
    }
    attacks
}
