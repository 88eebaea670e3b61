//! Error types for the rules engine
//!
//! Only malformed setups are errors. A rejected move attempt is not an error:
//! it comes back as a [`crate::player::MoveStatus`] inside a transition.

use crate::alliance::Alliance;
use crate::pieces::PieceKind;
use thiserror::Error;

/// Errors raised while freezing a [`crate::board::Builder`] into a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A side has no King
    #[error("Not a valid board: {alliance} has no king")]
    MissingKing { alliance: Alliance },

    /// A side has more than one King
    #[error("Not a valid board: {alliance} has {count} kings")]
    MultipleKings { alliance: Alliance, count: usize },

    /// Placement outside the 64 tiles
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: u8 },

    /// `build()` called before a side to move was recorded
    #[error("No side to move was set on the builder")]
    MissingMoveMaker,

    /// The recorded en passant pawn is not a pawn standing on its square
    #[error("En passant pawn at square {square} is not on the board")]
    InvalidEnPassantPawn { square: u8 },

    /// The attached [`crate::config::RulesConfig`] failed validation
    #[error("Invalid rules config: {reason}")]
    InvalidConfig { reason: String },
}

/// Result type alias for board construction
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors raised while loading a [`crate::config::RulesConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Rules config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Pawns cannot promote to a King or stay a Pawn
    #[error("Invalid promotion piece: {kind:?}")]
    InvalidPromotionPiece { kind: PieceKind },
}

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
