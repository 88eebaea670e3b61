//! The two sides of the board
//!
//! White starts on the high indices (48-63) and moves toward index 0, so its
//! row-major step sign is `-1`. Black mirrors that with `+1`. Scaling every
//! pawn offset by [`Alliance::direction`] lets one set of constants serve both
//! colors.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Row-major step sign for forward movement
    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    #[inline]
    pub fn opposite_direction(self) -> i32 {
        -self.direction()
    }

    #[inline]
    pub fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    pub fn is_white(self) -> bool {
        self == Alliance::White
    }

    pub fn is_black(self) -> bool {
        self == Alliance::Black
    }

    /// True when a pawn of this side standing on `index` must promote
    pub fn is_pawn_promotion_square(self, index: u8) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[index as usize],
            Alliance::Black => FIRST_RANK[index as usize],
        }
    }

    /// True when `index` is on this side's pawn starting rank
    pub fn is_pawn_start_square(self, index: u8) -> bool {
        match self {
            Alliance::White => SECOND_RANK[index as usize],
            Alliance::Black => SEVENTH_RANK[index as usize],
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}
