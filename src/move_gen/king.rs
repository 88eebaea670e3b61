//! King move generation
//!
//! One step in any of eight directions. Castling is not generated here: it
//! needs the opponent's attack map, which only exists once both sides are
//! generated, so [`crate::player::castling`] adds it afterwards.

use super::step_to;
use crate::board::Snapshot;
use crate::constants::*;
use crate::moves::Move;
use crate::pieces::Piece;

const CANDIDATE_MOVE_COORDINATES: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Generate single-step king moves
///
/// # Arguments
///
/// * `snapshot` - Board being built
/// * `king` - The king to move
/// * `moves` - Output vector to append valid moves to
pub(crate) fn generate_king_moves(snapshot: &Snapshot, king: &Piece, moves: &mut Vec<Move>) {
    for offset in CANDIDATE_MOVE_COORDINATES {
        if is_column_exclusion(king.position(), offset) {
            continue;
        }
        let candidate = king.position() as i32 + offset;
        if !is_valid_tile_coordinate(candidate) {
            continue;
        }
        if let Some(mv) = step_to(snapshot, king, candidate as u8) {
            moves.push(mv);
        }
    }
}

fn is_column_exclusion(position: u8, offset: i32) -> bool {
    let position = position as usize;
    (FIRST_FILE[position] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_FILE[position] && matches!(offset, -7 | 1 | 9))
}
