//! Leaf-node counting
//!
//! `perft` walks every completed move to a fixed depth and counts the leaves.
//! Published counts for well-known positions make it the standard end-to-end
//! check of a move generator: a single missing or extra move anywhere in the
//! tree changes the total.
//!
//! A move whose execution cannot build a board stops the walk with that
//! error instead of being skipped, so a malformed child never hides inside a
//! count.

use tracing::warn;

use crate::board::Board;
use crate::error::BoardResult;
use crate::player::MoveTransition;

/// Number of positions reachable in exactly `depth` plies
///
/// Only transitions with status [`crate::MoveStatus::Done`] are followed.
///
/// # Errors
///
/// Returns the [`crate::BoardError`] of the first move whose execution
/// produced a malformed board.
pub fn perft(board: &Board, depth: u32) -> BoardResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0;
    for transition in completed_transitions(board)? {
        nodes += perft(transition.transition_board(), depth - 1)?;
    }
    Ok(nodes)
}

/// Per-move breakdown of [`perft`] at the root, in legal-move order
pub fn perft_divide(board: &Board, depth: u32) -> BoardResult<Vec<(String, u64)>> {
    completed_transitions(board)?
        .into_iter()
        .map(|transition| {
            let nodes = perft(transition.transition_board(), depth.saturating_sub(1))?;
            Ok((transition.attempted_move().to_string(), nodes))
        })
        .collect()
}

fn completed_transitions(board: &Board) -> BoardResult<Vec<MoveTransition>> {
    let player = board.current_player();
    let mut done = Vec::with_capacity(player.legal_moves().len());
    for mv in player.legal_moves() {
        let transition = player.make_move(mv).map_err(|e| {
            warn!("[PERFT] {} produced a malformed board ({}) from\n{}", mv, e, board);
            e
        })?;
        if transition.status().is_done() {
            done.push(transition);
        }
    }
    Ok(done)
}
