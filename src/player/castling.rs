//! Castle move generation
//!
//! Castles are added per player after both sides' pseudo-legal moves exist,
//! because they depend on the opponent's attack map. A castle is offered when:
//!
//! - the King has never moved, stands on its home square and is not in check
//! - the Rook on the corner is this side's and has never moved
//! - every tile between them is empty
//! - the tiles the King crosses and lands on are not attacked
//!
//! The b-file square on the queen side must be empty but may be attacked.

use crate::alliance::Alliance;
use crate::board::Snapshot;
use crate::constants::*;
use crate::moves::{CastleSide, Move};
use crate::pieces::Piece;

struct CastleLane {
    side: CastleSide,
    rook_square: u8,
    king_destination: u8,
    rook_destination: u8,
    between: &'static [u8],
    king_path: &'static [u8],
}

const WHITE_LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::KingSide,
        rook_square: WHITE_KING_SIDE_ROOK,
        king_destination: 62,
        rook_destination: 61,
        between: &[61, 62],
        king_path: &[61, 62],
    },
    CastleLane {
        side: CastleSide::QueenSide,
        rook_square: WHITE_QUEEN_SIDE_ROOK,
        king_destination: 58,
        rook_destination: 59,
        between: &[57, 58, 59],
        king_path: &[59, 58],
    },
];

const BLACK_LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::KingSide,
        rook_square: BLACK_KING_SIDE_ROOK,
        king_destination: 6,
        rook_destination: 5,
        between: &[5, 6],
        king_path: &[5, 6],
    },
    CastleLane {
        side: CastleSide::QueenSide,
        rook_square: BLACK_QUEEN_SIDE_ROOK,
        king_destination: 2,
        rook_destination: 3,
        between: &[1, 2, 3],
        king_path: &[3, 2],
    },
];

/// Castle moves available to `king`
///
/// Returns at most one move per side, king side first. Nothing is returned
/// when the King has moved, has left its home square, or is in check.
///
/// # Arguments
///
/// * `snapshot` - Board being built
/// * `king` - This side's King
/// * `in_check` - Whether `opponent_attacks` covers the King's square
/// * `opponent_attacks` - Attack bitboard of the other side, bit `i` for tile `i`
///
/// # Examples
///
/// ```rust,ignore
/// // King e1 and rooks a1/h1 unmoved, nothing between, nothing attacked
/// let castles = calculate_king_castles(snapshot, &king, false, 0);
/// assert_eq!(castles.len(), 2);
/// ```
pub(crate) fn calculate_king_castles(
    snapshot: &Snapshot,
    king: &Piece,
    in_check: bool,
    opponent_attacks: u64,
) -> Vec<Move> {
    let (home, lanes) = match king.alliance() {
        Alliance::White => (WHITE_KING_START, &WHITE_LANES),
        Alliance::Black => (BLACK_KING_START, &BLACK_LANES),
    };

    if !king.is_first_move() || king.position() != home || in_check {
        return Vec::new();
    }

    let attacked = |square: &u8| opponent_attacks & (1u64 << *square) != 0;

    lanes
        .iter()
        .filter_map(|lane| {
            let rook = snapshot.piece_at(lane.rook_square).filter(|rook| {
                rook.kind().is_rook() && rook.is_first_move() && rook.alliance() == king.alliance()
            })?;
            if lane.between.iter().any(|&square| snapshot.is_occupied(square)) {
                return None;
            }
            if lane.king_path.iter().any(attacked) {
                return None;
            }
            Some(Move::castle(
                *king,
                lane.king_destination,
                lane.side,
                *rook,
                lane.rook_destination,
            ))
        })
        .collect()
}
