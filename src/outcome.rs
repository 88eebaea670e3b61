//! Game outcome of a single position
//!
//! Derived on demand from the side to move; nothing is stored on the board.
//!
//! # States
//!
//! ```text
//! Playing -> Checkmate { winner } / Stalemate
//! ```
//!
//! Only the position itself is judged. Repetition, move counters and clocks
//! belong to whoever drives the game.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alliance::Alliance;
use crate::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The side to move has at least one move that completes
    #[default]
    Playing,

    /// The side to move is in check and every legal move is rejected
    Checkmate { winner: Alliance },

    /// The side to move is not in check and every legal move is rejected
    Stalemate,
}

impl GameOutcome {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOutcome::Playing)
    }

    /// `None` for draws and games in progress
    pub fn winner(&self) -> Option<Alliance> {
        match self {
            GameOutcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GameOutcome::Playing => "Game in progress",
            GameOutcome::Checkmate {
                winner: Alliance::White,
            } => "White wins by checkmate!",
            GameOutcome::Checkmate {
                winner: Alliance::Black,
            } => "Black wins by checkmate!",
            GameOutcome::Stalemate => "Draw by stalemate",
        }
    }
}

impl Board {
    /// Classify this position for the side to move
    pub fn outcome(&self) -> GameOutcome {
        let player = self.current_player();
        if player.has_escape_moves() {
            return GameOutcome::Playing;
        }

        let outcome = if player.is_in_check() {
            GameOutcome::Checkmate {
                winner: player.alliance().opponent(),
            }
        } else {
            GameOutcome::Stalemate
        };
        debug!("[OUTCOME] {}", outcome.message());
        outcome
    }
}
