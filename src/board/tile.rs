//! Board cells

use crate::alliance::Alliance;
use crate::pieces::Piece;
use std::fmt;

/// One of the 64 cells; empty or holding exactly one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    coordinate: u8,
    occupant: Option<Piece>,
}

impl Tile {
    pub(crate) fn new(coordinate: u8, occupant: Option<Piece>) -> Self {
        Tile {
            coordinate,
            occupant,
        }
    }

    pub fn coordinate(&self) -> u8 {
        self.coordinate
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so the board dump can right-align cells with `{:>3}`
        match &self.occupant {
            None => f.pad("-"),
            Some(piece) => {
                let letter = piece.kind().letter();
                let letter = match piece.alliance() {
                    Alliance::White => letter,
                    Alliance::Black => letter.to_ascii_lowercase(),
                };
                f.pad(letter.encode_utf8(&mut [0; 4]))
            }
        }
    }
}
