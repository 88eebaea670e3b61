//! One side's view of a board
//!
//! [`Player`] is a borrowed view: the board owns the derived [`PlayerState`]
//! for both sides (king, legal moves, check status), computed once in
//! `build()`. The view adds the operations that need the board itself, most
//! importantly [`Player::make_move`].
//!
//! # Legality
//!
//! A move is accepted in two phases:
//! 1. It must be in [`Player::legal_moves`] (pseudo-legal moves plus castles)
//! 2. Executing it must not leave this side's King attacked
//!
//! Failing either phase is a [`MoveStatus`], never an error, and hands back
//! the original board.
//!
//! # Terminal positions
//!
//! Checkmate and stalemate are derived by trial-running `make_move` over every
//! legal move. Each trial builds a full board, so detection costs one board
//! construction per legal move.

pub(crate) mod castling;
mod transition;


pub use transition::{MoveStatus, MoveTransition};

use tracing::debug;

use crate::alliance::Alliance;
use crate::board::Board;
use crate::error::BoardResult;
use crate::moves::Move;
use crate::pieces::Piece;

/// Derived per-side data stored in the board
#[derive(Debug)]
pub(crate) struct PlayerState {
    pub(crate) alliance: Alliance,
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a PlayerState) -> Self {
        Player { board, state }
    }

    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    pub fn king(&self) -> &'a Piece {
        &self.state.king
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Pseudo-legal moves of every active piece plus available castles
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state.legal_moves
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance())
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.alliance().opponent())
    }

    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_move_legal(&self, candidate: &Move) -> bool {
        self.state.legal_moves.contains(candidate)
    }

    /// Some legal move completes with [`MoveStatus::Done`]
    ///
    /// A move whose execution cannot produce a valid board counts as no escape.
    pub fn has_escape_moves(&self) -> bool {
        self.state.legal_moves.iter().any(|mv| {
            self.make_move(mv)
                .map(|transition| transition.status().is_done())
                .unwrap_or(false)
        })
    }

    /// Attempt `candidate` on this player's board
    ///
    /// Returns `Err` only if executing the move would build a malformed board,
    /// which can happen when the source position already let this side
    /// capture the enemy King.
    pub fn make_move(&self, candidate: &Move) -> BoardResult<MoveTransition> {
        if !self.is_move_legal(candidate) {
            debug!("[PLAYER] {} rejected {}: not a legal move", self.alliance(), candidate);
            return Ok(MoveTransition::new(
                self.board.clone(),
                candidate.clone(),
                MoveStatus::IllegalMove,
            ));
        }

        let transition_board = candidate.execute(self.board)?;
        if transition_board.player(self.alliance()).is_in_check() {
            debug!(
                "[PLAYER] {} rejected {}: leaves own king in check",
                self.alliance(),
                candidate
            );
            return Ok(MoveTransition::new(
                self.board.clone(),
                candidate.clone(),
                MoveStatus::LeavesPlayerInCheck,
            ));
        }

        debug!("[PLAYER] {} played {}", self.alliance(), candidate);
        Ok(MoveTransition::new(
            transition_board,
            candidate.clone(),
            MoveStatus::Done,
        ))
    }
}
