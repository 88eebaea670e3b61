//! Board geometry constants
//!
//! Tiles are indexed row-major from 0 (a8) to 63 (h1). Row 0 is Black's back
//! rank, row 7 is White's. The membership tables below let move generators
//! reject offsets that would wrap from one edge of the board to the other.
//!
//! ```text
//!  0  1  2  3  4  5  6  7     <- EIGHTH_RANK (Black back rank)
//!  8  9 10 11 12 13 14 15     <- SEVENTH_RANK (Black pawns)
//!  ...
//! 48 49 50 51 52 53 54 55     <- SECOND_RANK (White pawns)
//! 56 57 58 59 60 61 62 63     <- FIRST_RANK (White back rank)
//!  ^                    ^
//!  FIRST_FILE           EIGHTH_FILE
//! ```

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

pub const FIRST_FILE: [bool; NUM_TILES] = column(0);
pub const SECOND_FILE: [bool; NUM_TILES] = column(1);
pub const SEVENTH_FILE: [bool; NUM_TILES] = column(6);
pub const EIGHTH_FILE: [bool; NUM_TILES] = column(7);

pub const EIGHTH_RANK: [bool; NUM_TILES] = row(0);
pub const SEVENTH_RANK: [bool; NUM_TILES] = row(1);
pub const SECOND_RANK: [bool; NUM_TILES] = row(6);
pub const FIRST_RANK: [bool; NUM_TILES] = row(7);

// Castling squares
pub const WHITE_KING_START: u8 = 60;
pub const BLACK_KING_START: u8 = 4;
pub const WHITE_KING_SIDE_ROOK: u8 = 63;
pub const WHITE_QUEEN_SIDE_ROOK: u8 = 56;
pub const BLACK_KING_SIDE_ROOK: u8 = 7;
pub const BLACK_QUEEN_SIDE_ROOK: u8 = 0;

const fn column(col: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut i = col;
    while i < NUM_TILES {
        table[i] = true;
        i += NUM_TILES_PER_ROW;
    }
    table
}

const fn row(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut i = row * NUM_TILES_PER_ROW;
    while i < (row + 1) * NUM_TILES_PER_ROW {
        table[i] = true;
        i += 1;
    }
    table
}

/// Check if a signed coordinate lands on the board
#[inline]
pub fn is_valid_tile_coordinate(coordinate: i32) -> bool {
    (0..NUM_TILES as i32).contains(&coordinate)
}

/// Algebraic name of a tile index ("a8" for 0, "h1" for 63)
///
/// Used for log output and `Display` only; the engine never parses these.
pub fn square_name(index: u8) -> String {
    let file = (b'a' + index % 8) as char;
    let rank = 8 - index / 8;
    format!("{}{}", file, rank)
}
