//! Move execution
//!
//! Every variant produces a brand-new board through [`Builder`]:
//! 1. Copy the mover's other pieces unchanged
//! 2. Copy the opponent's pieces except the captured one
//! 3. Place the moved piece on its destination with the first-move flag cleared
//! 4. Hand the move to the opponent and build
//!
//! Only a pawn jump records an en passant pawn, so eligibility lapses after
//! exactly one ply.

use tracing::trace;

use super::{Move, MoveKind};
use crate::board::{Board, Builder};
use crate::error::BoardResult;

impl Move {
    /// Board after this move; the source board is left untouched
    pub fn execute(&self, board: &Board) -> BoardResult<Board> {
        trace!("[MOVE] Executing {}", self);
        self.prepare(board).build()
    }

    fn prepare(&self, board: &Board) -> Builder {
        if let MoveKind::Promotion { base, promoted } = &self.kind {
            let promoted_piece = base.moved.moved_to(base.destination).promoted_to(*promoted);
            return base.prepare(board).set_piece(promoted_piece);
        }

        let mover = self.moved.alliance();
        let vacated = match &self.kind {
            MoveKind::Castle { rook, .. } => Some(rook.position()),
            _ => None,
        };
        let captured = self.captured_piece().map(|piece| piece.position());

        let mut builder = Builder::new().with_config(*board.config());

        for piece in board.active_pieces(mover) {
            let square = Some(piece.position());
            if piece.position() != self.moved.position() && square != vacated {
                builder = builder.set_piece(*piece);
            }
        }
        for piece in board.active_pieces(mover.opponent()) {
            if Some(piece.position()) != captured {
                builder = builder.set_piece(*piece);
            }
        }

        let arrived = self.moved.moved_to(self.destination);
        builder = builder.set_piece(arrived);

        match &self.kind {
            MoveKind::PawnJump => builder = builder.set_en_passant_pawn(arrived),
            MoveKind::Castle {
                rook,
                rook_destination,
                ..
            } => builder = builder.set_piece(rook.moved_to(*rook_destination)),
            _ => {}
        }

        builder.set_move_maker(mover.opponent())
    }
}
