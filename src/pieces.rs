//! Piece values
//!
//! A [`Piece`] is a plain `Copy` value: kind, side, tile index and whether it
//! still has its first move. Moving a piece never mutates it; executing a move
//! places a fresh value (see [`Piece::moved_to`]) into the next board.

use crate::alliance::Alliance;
use crate::board::Board;
use crate::constants::square_name;
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to, strongest first
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_king(self) -> bool {
        self == PieceKind::King
    }

    pub fn is_rook(self) -> bool {
        self == PieceKind::Rook
    }

    pub fn is_pawn(self) -> bool {
        self == PieceKind::Pawn
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Upper-case letter used by the board dump
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: u8,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet
    pub fn new(kind: PieceKind, alliance: Alliance, position: u8) -> Self {
        Self::with_first_move(kind, alliance, position, true)
    }

    pub fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        position: u8,
        first_move: bool,
    ) -> Self {
        Piece {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    pub fn pawn(alliance: Alliance, position: u8) -> Self {
        Self::new(PieceKind::Pawn, alliance, position)
    }

    pub fn knight(alliance: Alliance, position: u8) -> Self {
        Self::new(PieceKind::Knight, alliance, position)
    }

    pub fn bishop(alliance: Alliance, position: u8) -> Self {
        Self::new(PieceKind::Bishop, alliance, position)
    }

    pub fn rook(alliance: Alliance, position: u8) -> Self {
        Self::new(PieceKind::Rook, alliance, position)
    }

    pub fn queen(alliance: Alliance, position: u8) -> Self {
        Self::new(PieceKind::Queen, alliance, position)
    }

    pub fn king(alliance: Alliance, position: u8) -> Self {
        Self::new(PieceKind::King, alliance, position)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// The value this piece takes on after moving to `destination`
    pub fn moved_to(&self, destination: u8) -> Piece {
        Piece::with_first_move(self.kind, self.alliance, destination, false)
    }

    /// Same square and side, different kind (promotion)
    pub fn promoted_to(&self, kind: PieceKind) -> Piece {
        Piece::with_first_move(kind, self.alliance, self.position, false)
    }

    /// Pseudo-legal moves of this piece on `board`
    ///
    /// Ignores whether the move leaves the own King attacked; that filter lives
    /// in [`crate::player::Player::make_move`].
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        crate::move_gen::generate_piece_moves(board.snapshot(), self, &mut moves);
        moves
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.alliance {
            Alliance::White => self.kind.letter(),
            Alliance::Black => self.kind.letter().to_ascii_lowercase(),
        };
        write!(f, "{}{}", letter, square_name(self.position))
    }
}
