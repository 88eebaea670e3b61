//! # Chess rules over immutable boards
//!
//! Given a [`Board`], produce the legal moves of the side to move, apply one to
//! get a new board, and classify check, checkmate and stalemate.
//!
//! ```rust
//! use chess_rules::{Board, MoveStatus};
//!
//! let board = Board::standard();
//! let player = board.current_player();
//! assert_eq!(player.legal_moves().len(), 20);
//!
//! // e2-e4
//! let mv = board.find_move(52, 36).unwrap();
//! let transition = player.make_move(&mv).unwrap();
//! assert_eq!(transition.status(), MoveStatus::Done);
//!
//! let next = transition.into_board();
//! assert_eq!(next.en_passant_pawn().map(|p| p.position()), Some(36));
//! ```
//!
//! Tiles are indexed 0 (a8) to 63 (h1); see [`constants`].

pub mod alliance;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
mod move_gen;
pub mod moves;
pub mod outcome;
pub mod perft;
pub mod pieces;
pub mod player;

pub use alliance::Alliance;
pub use board::{Board, Builder, Tile};
pub use config::RulesConfig;
pub use error::{BoardError, BoardResult, ConfigError, ConfigResult};
pub use moves::{CastleSide, Move, MoveKind};
pub use outcome::GameOutcome;
pub use perft::{perft, perft_divide};
pub use pieces::{Piece, PieceKind};
pub use player::{MoveStatus, MoveTransition, Player};
