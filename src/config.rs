//! Rules configuration
//!
//! [`RulesConfig`] is attached to a board through the builder and carried into
//! every board that a move produces, so one game keeps one set of rules.
//!
//! # JSON
//!
//! Missing fields fall back to the defaults:
//!
//! ```rust
//! use chess_rules::{PieceKind, RulesConfig};
//!
//! let config = RulesConfig::from_json(r#"{ "underpromotions": true }"#).unwrap();
//! assert!(config.underpromotions);
//! assert_eq!(config.promotion_piece, PieceKind::Queen);
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::pieces::PieceKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Piece a promoting pawn becomes
    pub promotion_piece: PieceKind,
    /// Generate one promotion per kind instead of only `promotion_piece`
    pub underpromotions: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            promotion_piece: PieceKind::Queen,
            underpromotions: false,
        }
    }
}

impl RulesConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.promotion_piece.is_promotion_target() {
            return Err(ConfigError::InvalidPromotionPiece {
                kind: self.promotion_piece,
            });
        }
        Ok(())
    }

    /// Kinds emitted for one promoting pawn move
    pub(crate) fn promotion_kinds(&self) -> &[PieceKind] {
        if self.underpromotions {
            &PieceKind::PROMOTIONS
        } else {
            std::slice::from_ref(&self.promotion_piece)
        }
    }
}
