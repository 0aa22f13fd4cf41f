//! Captured pieces tracking
//!
//! Keeps the pieces removed from the board in the order they were taken.
//! Display only; the rules engine never reads it.
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: if White took (Rook=5, Pawn=1) and Black took (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use crate::game::types::{BoardPiece, PieceColor, PieceType};

/// Ordered, append-only list of captured pieces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pieces: Vec<BoardPiece>,
}

impl CapturedPieces {
    /// Record a capture
    ///
    /// # Arguments
    ///
    /// * `captured_piece_color` - Color of the piece that was captured
    /// * `piece_type` - Type of piece that was captured
    pub fn add_capture(&mut self, captured_piece_color: PieceColor, piece_type: PieceType) {
        self.pieces
            .push(BoardPiece::new(piece_type, captured_piece_color));
    }

    /// Every captured piece, oldest first
    pub fn pieces(&self) -> &[BoardPiece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces of one colour that have been taken, oldest first
    pub fn taken_from(&self, color: PieceColor) -> impl Iterator<Item = PieceType> + '_ {
        self.pieces
            .iter()
            .filter(move |piece| piece.color == color)
            .map(|piece| piece.piece_type)
    }

    /// Material difference in pawn units
    ///
    /// Returns positive if White is ahead, negative if Black is ahead, 0 if equal.
    pub fn material_advantage(&self) -> i32 {
        let taken_by_white: i32 = self.taken_from(PieceColor::Black).map(PieceType::value).sum();
        let taken_by_black: i32 = self.taken_from(PieceColor::White).map(PieceType::value).sum();
        taken_by_white - taken_by_black
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        //! Verifies that captured pieces starts empty
        let captured = CapturedPieces::default();
        assert!(captured.is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_captures_keep_their_order() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Pawn);
        captured.add_capture(PieceColor::White, PieceType::Knight);
        captured.add_capture(PieceColor::Black, PieceType::Queen);

        let types: Vec<PieceType> = captured.pieces().iter().map(|p| p.piece_type).collect();
        assert_eq!(types, vec![PieceType::Pawn, PieceType::Knight, PieceType::Queen]);
        assert_eq!(
            captured.taken_from(PieceColor::Black).collect::<Vec<_>>(),
            vec![PieceType::Pawn, PieceType::Queen]
        );
    }

    #[test]
    fn test_material_advantage_white_ahead() {
        //! Tests material calculation when White is ahead
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Queen); // White takes Queen (9)
        captured.add_capture(PieceColor::White, PieceType::Pawn); // Black takes Pawn (1)

        assert_eq!(captured.material_advantage(), 8, "White should be +8 (9-1)");
    }

    #[test]
    fn test_material_advantage_black_ahead() {
        //! Tests material calculation when Black is ahead
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::White, PieceType::Rook); // Black takes Rook (5)
        captured.add_capture(PieceColor::Black, PieceType::Bishop); // White takes Bishop (3)

        assert_eq!(captured.material_advantage(), -2);
    }

    #[test]
    fn test_clear() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Queen);
        captured.add_capture(PieceColor::White, PieceType::Rook);

        captured.clear();

        assert!(captured.is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }
}
