//! Two-phase board construction
//!
//! [`Builder`] is a transient accumulator of placements. [`Builder::build`]
//! consumes it and freezes the placements into a [`Board`], deriving the
//! active-piece lists and both players exactly once. Nothing else constructs
//! a board.
//!
//! # Examples
//!
//! ```rust
//! use chess_rules::{Alliance, Board, Piece};
//!
//! let board = Board::builder()
//!     .set_piece(Piece::king(Alliance::Black, 4))
//!     .set_piece(Piece::king(Alliance::White, 60))
//!     .set_piece(Piece::rook(Alliance::White, 63))
//!     .set_move_maker(Alliance::White)
//!     .build()
//!     .unwrap();
//!
//! assert!(board.piece_at(63).is_some());
//! ```

use std::collections::BTreeMap;

use super::Board;
use crate::alliance::Alliance;
use crate::config::RulesConfig;
use crate::error::BoardResult;
use crate::pieces::Piece;

#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(crate) placements: BTreeMap<u8, Piece>,
    pub(crate) next_move_maker: Option<Alliance>,
    pub(crate) en_passant_pawn: Option<Piece>,
    pub(crate) config: RulesConfig,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a piece on its own square; last write wins per square
    pub fn set_piece(mut self, piece: Piece) -> Self {
        self.placements.insert(piece.position(), piece);
        self
    }

    /// Side to move in the built board
    pub fn set_move_maker(mut self, alliance: Alliance) -> Self {
        self.next_move_maker = Some(alliance);
        self
    }

    /// The pawn that may be captured en passant in the built board only
    pub fn set_en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> BoardResult<Board> {
        Board::from_builder(self)
    }
}
