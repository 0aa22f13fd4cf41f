//! Check indicator

use crate::game::types::{BoardSnapshot, BoardSquare, PieceColor};

/// The highlighted square of a king in check, if any
///
/// At most one square: the king of the side to move, and only while that side
/// is in check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckIndicator(Option<BoardSquare>);

impl CheckIndicator {
    /// Recompute from the side to move and a fresh board snapshot
    pub fn locate(in_check: bool, side_to_move: PieceColor, board: &BoardSnapshot) -> Self {
        if !in_check {
            return Self(None);
        }
        Self(board.find_king(side_to_move))
    }

    pub fn square(self) -> Option<BoardSquare> {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
