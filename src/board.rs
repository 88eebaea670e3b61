//! Immutable board snapshots
//!
//! A [`Board`] is frozen at construction: 64 tiles, the active pieces of each
//! side, the en passant pawn (if any), a per-side attack bitboard and the two
//! players derived for this exact snapshot. Executing a move never touches the
//! source board; it builds a new one through [`Builder`].
//!
//! # Construction
//!
//! [`Builder::build`] runs these steps once:
//! 1. Materialize 64 tiles from the placement map (unfilled squares are empty)
//! 2. Partition occupants into White and Black active pieces
//! 3. Generate each side's pseudo-legal moves against the new tiles
//! 4. Derive each side's attack bitboard
//! 5. Derive both players (king, check status, castles, legal moves)
//!
//! A side without exactly one King, or a [`RulesConfig`] that fails
//! [`RulesConfig::validate`], is rejected with a [`BoardError`].
//!
//! # Sharing
//!
//! `Board` is a cheap handle over shared immutable data. Clones refer to the
//! same snapshot, so a rejected move can hand back the original board, and
//! several threads can analyse one board without locks.

mod builder;
mod tile;

#[cfg(test)]
mod tests;

pub use builder::Builder;
pub use tile::Tile;

use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::alliance::Alliance;
use crate::config::RulesConfig;
use crate::constants::*;
use crate::error::{BoardError, BoardResult};
use crate::move_gen;
use crate::moves::Move;
use crate::pieces::{Piece, PieceKind};
use crate::player::{castling, Player, PlayerState};

/// Tiles plus the state move generation reads
///
/// Exists before the players do, so piece generators can run during `build()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    tiles: [Tile; NUM_TILES],
    en_passant_pawn: Option<Piece>,
    config: RulesConfig,
}

impl Snapshot {
    #[inline]
    pub(crate) fn tile(&self, index: u8) -> &Tile {
        &self.tiles[index as usize]
    }

    #[inline]
    pub(crate) fn piece_at(&self, index: u8) -> Option<&Piece> {
        self.tiles[index as usize].piece()
    }

    #[inline]
    pub(crate) fn is_occupied(&self, index: u8) -> bool {
        self.tiles[index as usize].is_occupied()
    }

    pub(crate) fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    pub(crate) fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn active_pieces(&self, alliance: Alliance) -> Vec<Piece> {
        self.tiles
            .iter()
            .filter_map(Tile::piece)
            .filter(|piece| piece.alliance() == alliance)
            .copied()
            .collect()
    }
}

#[derive(Debug)]
struct BoardData {
    snapshot: Snapshot,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_attacks: u64,
    black_attacks: u64,
    white_player: PlayerState,
    black_player: PlayerState,
    next_move_maker: Alliance,
}

#[derive(Debug, Clone)]
pub struct Board {
    inner: Arc<BoardData>,
}

impl Board {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The standard starting position with White to move
    pub fn standard() -> Board {
        match Self::standard_with_config(RulesConfig::default()) {
            Ok(board) => board,
            // Both kings, a side to move and the default config are always valid
            Err(e) => unreachable!("standard position rejected: {e}"),
        }
    }

    /// The standard starting position under `config`
    ///
    /// Fails only when `config` does not validate.
    pub fn standard_with_config(config: RulesConfig) -> BoardResult<Board> {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Builder::new().with_config(config);
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            builder = builder
                .set_piece(Piece::new(kind, Alliance::Black, file))
                .set_piece(Piece::pawn(Alliance::Black, 8 + file))
                .set_piece(Piece::pawn(Alliance::White, 48 + file))
                .set_piece(Piece::new(kind, Alliance::White, 56 + file));
        }

        builder.set_move_maker(Alliance::White).build()
    }

    pub(crate) fn from_builder(builder: Builder) -> BoardResult<Board> {
        let next_move_maker = builder.next_move_maker.ok_or_else(|| {
            warn!("[BOARD] Rejected board: no side to move");
            BoardError::MissingMoveMaker
        })?;

        builder.config.validate().map_err(|e| {
            warn!("[BOARD] Rejected board: {}", e);
            BoardError::InvalidConfig {
                reason: e.to_string(),
            }
        })?;

        let mut tiles: [Tile; NUM_TILES] = std::array::from_fn(|i| Tile::new(i as u8, None));
        for (&square, piece) in &builder.placements {
            if square as usize >= NUM_TILES {
                warn!("[BOARD] Rejected board: piece placed on square {}", square);
                return Err(BoardError::InvalidSquare { square });
            }
            tiles[square as usize] = Tile::new(square, Some(*piece));
        }

        let en_passant_pawn = match builder.en_passant_pawn {
            None => None,
            Some(pawn) => {
                let square = pawn.position();
                let on_board = tiles
                    .get(square as usize)
                    .and_then(Tile::piece)
                    .filter(|p| p.kind().is_pawn() && p.alliance() == pawn.alliance())
                    .copied();
                match on_board {
                    Some(p) => Some(p),
                    None => {
                        warn!("[BOARD] Rejected board: en passant pawn missing from {}", square);
                        return Err(BoardError::InvalidEnPassantPawn { square });
                    }
                }
            }
        };

        let snapshot = Snapshot {
            tiles,
            en_passant_pawn,
            config: builder.config,
        };

        let white_pieces = snapshot.active_pieces(Alliance::White);
        let black_pieces = snapshot.active_pieces(Alliance::Black);

        let white_moves = move_gen::generate_pseudo_legal_moves(&snapshot, &white_pieces);
        let black_moves = move_gen::generate_pseudo_legal_moves(&snapshot, &black_pieces);

        let white_attacks = move_gen::attack_map(&white_pieces, &white_moves);
        let black_attacks = move_gen::attack_map(&black_pieces, &black_moves);

        let white_king = find_king(&white_pieces, Alliance::White)?;
        let black_king = find_king(&black_pieces, Alliance::Black)?;

        trace!(
            "[BOARD] Built board: {} white / {} black pieces, {} / {} pseudo-legal moves, {} to move",
            white_pieces.len(),
            black_pieces.len(),
            white_moves.len(),
            black_moves.len(),
            next_move_maker
        );

        let white_player =
            Self::derive_player(&snapshot, white_king, white_moves, black_attacks);
        let black_player =
            Self::derive_player(&snapshot, black_king, black_moves, white_attacks);

        Ok(Board {
            inner: Arc::new(BoardData {
                snapshot,
                white_pieces,
                black_pieces,
                white_attacks,
                black_attacks,
                white_player,
                black_player,
                next_move_maker,
            }),
        })
    }

    fn derive_player(
        snapshot: &Snapshot,
        king: Piece,
        mut legal_moves: Vec<Move>,
        opponent_attacks: u64,
    ) -> PlayerState {
        let in_check = opponent_attacks & (1u64 << king.position()) != 0;
        legal_moves.extend(castling::calculate_king_castles(
            snapshot,
            &king,
            in_check,
            opponent_attacks,
        ));
        PlayerState {
            alliance: king.alliance(),
            king,
            legal_moves,
            in_check,
        }
    }

    pub(crate) fn snapshot(&self) -> &Snapshot {
        &self.inner.snapshot
    }

    /// Tile at `index`
    ///
    /// # Panics
    ///
    /// If `index` is not in 0..64.
    pub fn tile(&self, index: u8) -> &Tile {
        self.inner.snapshot.tile(index)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.inner.snapshot.tiles
    }

    pub fn piece_at(&self, index: u8) -> Option<&Piece> {
        self.inner.snapshot.tiles.get(index as usize).and_then(Tile::piece)
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.inner.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.inner.black_pieces
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => self.white_pieces(),
            Alliance::Black => self.black_pieces(),
        }
    }

    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.inner.snapshot.en_passant_pawn()
    }

    pub fn next_move_maker(&self) -> Alliance {
        self.inner.next_move_maker
    }

    pub fn config(&self) -> &RulesConfig {
        self.inner.snapshot.config()
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, &self.inner.white_player)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, &self.inner.black_player)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        match alliance {
            Alliance::White => self.white_player(),
            Alliance::Black => self.black_player(),
        }
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.inner.next_move_maker)
    }

    /// Legal moves of both players, White first
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.inner
            .white_player
            .legal_moves
            .iter()
            .chain(self.inner.black_player.legal_moves.iter())
    }

    /// Look up the current player's move from `from` to `to`
    ///
    /// When under-promotions are generated, the configured promotion piece is
    /// preferred.
    pub fn find_move(&self, from: u8, to: u8) -> Option<Move> {
        let preferred = self.config().promotion_piece;
        let mut candidates = self
            .current_player()
            .legal_moves()
            .iter()
            .filter(|mv| mv.current_coordinate() == from && mv.destination() == to);

        let first = candidates.next()?;
        if first.promoted_kind().map_or(true, |kind| kind == preferred) {
            return Some(first.clone());
        }
        candidates
            .find(|mv| mv.promoted_kind() == Some(preferred))
            .or(Some(first))
            .cloned()
    }

    /// True when any piece of `by` attacks `square`
    pub fn is_attacked(&self, square: u8, by: Alliance) -> bool {
        if square as usize >= NUM_TILES {
            return false;
        }
        self.attack_map(by) & (1u64 << square) != 0
    }

    /// Attack bitboard of `alliance`, bit `i` set when tile `i` is attacked
    pub fn attack_map(&self, alliance: Alliance) -> u64 {
        match alliance {
            Alliance::White => self.inner.white_attacks,
            Alliance::Black => self.inner.black_attacks,
        }
    }

    /// True when both handles point at the same snapshot
    pub fn ptr_eq(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn find_king(pieces: &[Piece], alliance: Alliance) -> BoardResult<Piece> {
    let mut kings = pieces.iter().filter(|piece| piece.kind().is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (None, _) => {
            warn!("[BOARD] Rejected board: {} has no king", alliance);
            Err(BoardError::MissingKing { alliance })
        }
        (Some(_), extra) => {
            warn!("[BOARD] Rejected board: {} has {} kings", alliance, extra + 1);
            Err(BoardError::MultipleKings {
                alliance,
                count: extra + 1,
            })
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.inner.snapshot == other.inner.snapshot
                && self.inner.next_move_maker == other.inner.next_move_maker)
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles().iter().enumerate() {
            write!(f, "{:>3}", tile)?;
            if (i + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
