//! Sliding piece move generation
//!
//! Common ray walk for bishops, rooks and queens.
//!
//! ## Algorithm
//!
//! For each direction vector, step from the piece's square until:
//! 1. The next step would wrap across the a- or h-file
//! 2. The next step leaves the board
//! 3. An occupied tile is reached; an enemy there is captured, a friend is not
//!
//! Empty tiles along the ray are quiet moves.

use crate::board::Snapshot;
use crate::constants::*;
use crate::moves::Move;
use crate::pieces::Piece;

/// Walk every ray in `directions` from `piece`'s square
///
/// # Arguments
///
/// * `snapshot` - Board being built
/// * `piece` - Bishop, rook or queen to move
/// * `directions` - Tile-index steps, e.g. `[-8, -1, 1, 8]` for a rook
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(snapshot, &rook, &ROOK_DIRECTIONS, &mut moves);
/// // Rook on an empty d4: 14 moves
/// ```
pub(crate) fn generate_sliding_moves(
    snapshot: &Snapshot,
    piece: &Piece,
    directions: &[i32],
    moves: &mut Vec<Move>,
) {
    for &direction in directions {
        let mut current = piece.position();
        loop {
            if is_column_exclusion(current, direction) {
                break;
            }
            let candidate = current as i32 + direction;
            if !is_valid_tile_coordinate(candidate) {
                break;
            }
            current = candidate as u8;

            match snapshot.piece_at(current) {
                None => moves.push(Move::normal(*piece, current)),
                Some(occupant) => {
                    if occupant.alliance() != piece.alliance() {
                        moves.push(Move::capture(*piece, current, *occupant));
                    }
                    break;
                }
            }
        }
    }
}

/// Stepping `direction` from `position` would cross a board edge sideways
fn is_column_exclusion(position: u8, direction: i32) -> bool {
    let position = position as usize;
    (FIRST_FILE[position] && matches!(direction, -9 | -1 | 7))
        || (EIGHTH_FILE[position] && matches!(direction, -7 | 1 | 9))
}
