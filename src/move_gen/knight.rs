//! Knight move generation
//!
//! Knights jump, so only the destination tile matters. Offsets that would
//! wrap across the a- or h-file are dropped per starting file.

use super::step_to;
use crate::board::Snapshot;
use crate::constants::*;
use crate::moves::Move;
use crate::pieces::Piece;

const CANDIDATE_MOVE_COORDINATES: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Generate knight moves from `knight`'s square
///
/// Every offset that stays on the board and does not wrap is a candidate; the
/// destination must be empty or hold an enemy piece.
///
/// # Arguments
///
/// * `snapshot` - Board being built
/// * `knight` - The knight to move
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(board.snapshot(), &Piece::knight(Alliance::White, 56), &mut moves);
/// // a1: b3 and c2 only
/// assert_eq!(moves.len(), 2);
/// ```
pub(crate) fn generate_knight_moves(snapshot: &Snapshot, knight: &Piece, moves: &mut Vec<Move>) {
    for offset in CANDIDATE_MOVE_COORDINATES {
        if is_column_exclusion(knight.position(), offset) {
            continue;
        }
        let candidate = knight.position() as i32 + offset;
        if !is_valid_tile_coordinate(candidate) {
            continue;
        }
        if let Some(mv) = step_to(snapshot, knight, candidate as u8) {
            moves.push(mv);
        }
    }
}

fn is_column_exclusion(position: u8, offset: i32) -> bool {
    let position = position as usize;
    (FIRST_FILE[position] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_FILE[position] && matches!(offset, -10 | 6))
        || (SEVENTH_FILE[position] && matches!(offset, -6 | 10))
        || (EIGHTH_FILE[position] && matches!(offset, -15 | -6 | 10 | 17))
}
