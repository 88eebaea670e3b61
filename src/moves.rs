//! Move values
//!
//! A [`Move`] holds by-value copies of everything it needs: the moving piece,
//! the destination and, per [`MoveKind`], the captured piece, the wrapped base
//! move of a promotion, or the rook of a castle. It never references the board
//! it was generated on; [`Move::execute`] takes that board explicitly.

mod execute;

use crate::constants::square_name;
use crate::pieces::{Piece, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move onto an empty tile, including single pawn pushes
    Normal,
    /// Capture of the piece on the destination tile
    Capture { captured: Piece },
    /// Double pawn push; marks the pawn en passant eligible in the next board
    PawnJump,
    /// Pawn capture of the recorded en passant pawn, which is not on the destination
    EnPassant { captured: Piece },
    /// Pawn push or capture reaching the far rank
    Promotion { base: Box<Move>, promoted: PieceKind },
    /// King moves two files; the rook jumps to the square the King crossed
    Castle {
        side: CastleSide,
        rook: Piece,
        rook_destination: u8,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    moved: Piece,
    destination: u8,
    kind: MoveKind,
}

impl Move {
    pub(crate) fn normal(moved: Piece, destination: u8) -> Self {
        Self::with_kind(moved, destination, MoveKind::Normal)
    }

    pub(crate) fn capture(moved: Piece, destination: u8, captured: Piece) -> Self {
        Self::with_kind(moved, destination, MoveKind::Capture { captured })
    }

    pub(crate) fn pawn_jump(moved: Piece, destination: u8) -> Self {
        Self::with_kind(moved, destination, MoveKind::PawnJump)
    }

    pub(crate) fn en_passant(moved: Piece, destination: u8, captured: Piece) -> Self {
        Self::with_kind(moved, destination, MoveKind::EnPassant { captured })
    }

    pub(crate) fn promotion(base: Move, promoted: PieceKind) -> Self {
        let (moved, destination) = (base.moved, base.destination);
        Self::with_kind(
            moved,
            destination,
            MoveKind::Promotion {
                base: Box::new(base),
                promoted,
            },
        )
    }

    pub(crate) fn castle(
        king: Piece,
        destination: u8,
        side: CastleSide,
        rook: Piece,
        rook_destination: u8,
    ) -> Self {
        Self::with_kind(
            king,
            destination,
            MoveKind::Castle {
                side,
                rook,
                rook_destination,
            },
        )
    }

    fn with_kind(moved: Piece, destination: u8, kind: MoveKind) -> Self {
        Move {
            moved,
            destination,
            kind,
        }
    }

    pub fn moved_piece(&self) -> &Piece {
        &self.moved
    }

    pub fn current_coordinate(&self) -> u8 {
        self.moved.position()
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn kind(&self) -> &MoveKind {
        &self.kind
    }

    /// Piece removed by this move; for en passant it is not on the destination
    pub fn captured_piece(&self) -> Option<&Piece> {
        match &self.kind {
            MoveKind::Capture { captured } | MoveKind::EnPassant { captured } => Some(captured),
            MoveKind::Promotion { base, .. } => base.captured_piece(),
            _ => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    pub fn is_pawn_jump(&self) -> bool {
        matches!(self.kind, MoveKind::PawnJump)
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    pub fn promoted_kind(&self) -> Option<PieceKind> {
        match &self.kind {
            MoveKind::Promotion { promoted, .. } => Some(*promoted),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MoveKind::Castle {
                side: CastleSide::KingSide,
                ..
            } => write!(f, "O-O"),
            MoveKind::Castle {
                side: CastleSide::QueenSide,
                ..
            } => write!(f, "O-O-O"),
            MoveKind::Promotion { base, promoted } => write!(f, "{}={}", base, promoted),
            _ => {
                let separator = if self.is_capture() { 'x' } else { '-' };
                write!(
                    f,
                    "{}{}{}{}",
                    self.moved.kind(),
                    square_name(self.moved.position()),
                    separator,
                    square_name(self.destination)
                )
            }
        }
    }
}
