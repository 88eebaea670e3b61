//! Outcome of one `make_move` call

use crate::board::Board;
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Mutually exclusive classification of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Resulting board, attempted move and status
///
/// For any status other than [`MoveStatus::Done`] the board is the original
/// one (same snapshot, see [`Board::ptr_eq`]).
#[derive(Debug, Clone)]
pub struct MoveTransition {
    transition_board: Board,
    attempted_move: Move,
    status: MoveStatus,
}

impl MoveTransition {
    pub(crate) fn new(transition_board: Board, attempted_move: Move, status: MoveStatus) -> Self {
        MoveTransition {
            transition_board,
            attempted_move,
            status,
        }
    }

    pub fn transition_board(&self) -> &Board {
        &self.transition_board
    }

    /// Take the resulting board
    pub fn into_board(self) -> Board {
        self.transition_board
    }

    pub fn attempted_move(&self) -> &Move {
        &self.attempted_move
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }
}
