//! Pawn move generation
//!
//! Four candidate offsets `{8, 16, 7, 9}`, each scaled by the pawn's
//! [`Alliance::direction`](crate::alliance::Alliance::direction):
//!
//! - **8**: single push onto an empty tile
//! - **16**: double push from the starting rank on the first move, both tiles empty;
//!   produces a pawn jump so the next board records the en passant pawn
//! - **7 / 9**: diagonal capture of an enemy piece, or en passant against the
//!   recorded pawn standing beside this one
//!
//! A push or capture landing on the far rank is always wrapped as a promotion.

use crate::alliance::Alliance;
use crate::board::Snapshot;
use crate::constants::*;
use crate::moves::Move;
use crate::pieces::Piece;

const CANDIDATE_MOVE_COORDINATES: [i32; 4] = [8, 16, 7, 9];

/// Generate pawn moves from `pawn`'s square
///
/// Far-rank arrivals are wrapped once per kind in
/// [`RulesConfig::promotion_kinds`](crate::config::RulesConfig::promotion_kinds).
///
/// # Arguments
///
/// * `snapshot` - Board being built; supplies occupancy, the en passant pawn and the config
/// * `pawn` - The pawn to move
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(board.snapshot(), &Piece::pawn(Alliance::White, 52), &mut moves);
/// // e2: e3 and the e4 jump
/// assert_eq!(moves.len(), 2);
/// ```
pub(crate) fn generate_pawn_moves(snapshot: &Snapshot, pawn: &Piece, moves: &mut Vec<Move>) {
    let from = pawn.position() as i32;
    let alliance = pawn.alliance();

    for offset in CANDIDATE_MOVE_COORDINATES {
        let candidate = from + alliance.direction() * offset;
        if !is_valid_tile_coordinate(candidate) {
            continue;
        }
        let destination = candidate as u8;

        match offset {
            8 => {
                if !snapshot.is_occupied(destination) {
                    push_or_promote(snapshot, pawn, Move::normal(*pawn, destination), moves);
                }
            }
            16 => {
                if !pawn.is_first_move() || !alliance.is_pawn_start_square(pawn.position()) {
                    continue;
                }
                let behind = (from + alliance.direction() * 8) as u8;
                if !snapshot.is_occupied(behind) && !snapshot.is_occupied(destination) {
                    moves.push(Move::pawn_jump(*pawn, destination));
                }
            }
            7 | 9 => {
                if wraps_around(pawn, offset) {
                    continue;
                }
                match snapshot.piece_at(destination) {
                    Some(occupant) if occupant.alliance() != alliance => {
                        let attack = Move::capture(*pawn, destination, *occupant);
                        push_or_promote(snapshot, pawn, attack, moves);
                    }
                    Some(_) => {}
                    None => {
                        if let Some(captured) = en_passant_target(snapshot, pawn, offset) {
                            moves.push(Move::en_passant(*pawn, destination, captured));
                        }
                    }
                }
            }
            _ => unreachable!("pawn offsets are fixed"),
        }
    }
}

/// Diagonal offset would leave the board sideways
///
/// For White (direction -1) offset 7 heads toward the h-file and 9 toward the
/// a-file; Black mirrors this.
pub(crate) fn wraps_around(pawn: &Piece, offset: i32) -> bool {
    let position = pawn.position() as usize;
    match (offset, pawn.alliance()) {
        (7, Alliance::White) | (9, Alliance::Black) => EIGHTH_FILE[position],
        (9, Alliance::White) | (7, Alliance::Black) => FIRST_FILE[position],
        _ => false,
    }
}

/// Recorded en passant pawn, if it is the enemy pawn beside `pawn` on the side `offset` heads to
fn en_passant_target(snapshot: &Snapshot, pawn: &Piece, offset: i32) -> Option<Piece> {
    let target = snapshot.en_passant_pawn()?;
    if target.alliance() == pawn.alliance() {
        return None;
    }
    let alliance = pawn.alliance();
    let beside = match offset {
        7 => pawn.position() as i32 + alliance.opposite_direction(),
        _ => pawn.position() as i32 - alliance.opposite_direction(),
    };
    (target.position() as i32 == beside).then_some(*target)
}

fn push_or_promote(snapshot: &Snapshot, pawn: &Piece, base: Move, moves: &mut Vec<Move>) {
    if !pawn.alliance().is_pawn_promotion_square(base.destination()) {
        moves.push(base);
        return;
    }
    for &kind in snapshot.config().promotion_kinds() {
        moves.push(Move::promotion(base.clone(), kind));
    }
}
