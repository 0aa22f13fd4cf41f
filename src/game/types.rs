//! Type definitions shared by the rules adapter, the board sessions and the UI
//!
//! These types are deliberately independent of the rules library so the UI
//! never touches `shakmaty` directly. The adapter in [`super::rules`] converts
//! at the boundary.
//!
//! # Coordinates
//!
//! A [`BoardSquare`] stores a file (0 = 'a') and a rank (0 = '1'). The
//! rendering grid is addressed by `(row, col)` with row 0 being rank 8, which
//! is how the board is drawn top to bottom.

use super::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Human readable name ("White" / "Black")
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(PieceColor::White),
            "b" | "black" => Ok(PieceColor::Black),
            _ => Err(GameError::InvalidColor {
                input: s.to_string(),
            }),
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Lowercase single-letter code ('k', 'q', 'b', 'n', 'r', 'p')
    pub fn code(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    /// Material value in pawns. The king has no material value.
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

/// A piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPiece {
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl BoardPiece {
    pub fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self { piece_type, color }
    }

    /// FEN-style letter: uppercase for White, lowercase for Black
    pub fn letter(self) -> char {
        let code = self.piece_type.code();
        match self.color {
            PieceColor::White => code.to_ascii_uppercase(),
            PieceColor::Black => code,
        }
    }
}

/// A square on the board, e.g. `e4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSquare {
    file: u8,
    rank: u8,
}

impl BoardSquare {
    /// Build a square from file and rank indices (both `0..8`)
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Build a square from a rendering grid position (row 0 = rank 8)
    ///
    /// Returns `None` when either index is outside `0..8`.
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row >= 8 || col >= 8 {
            return None;
        }
        Some(Self {
            file: col as u8,
            rank: 7 - row as u8,
        })
    }

    /// Rendering grid position `(row, col)` of this square
    pub fn grid(self) -> (usize, usize) {
        (7 - self.rank as usize, self.file as usize)
    }

    /// File index, 0 for 'a'
    pub fn file(self) -> u8 {
        self.file
    }

    /// Rank index, 0 for '1'
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Whether the square is a light square
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    /// All 64 squares in rendering order (a8, b8, ... h1)
    pub fn all() -> impl Iterator<Item = BoardSquare> {
        (0..8).flat_map(|row| (0..8).filter_map(move |col| BoardSquare::from_grid(row, col)))
    }
}

impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for BoardSquare {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidSquare {
            input: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        BoardSquare::new(file, rank).ok_or_else(invalid)
    }
}

/// Immutable 8×8 picture of the board used for rendering
///
/// Recomputed from the rules engine after every successful move; never
/// mutated by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    cells: [[Option<BoardPiece>; 8]; 8],
}

impl BoardSnapshot {
    /// Build a snapshot from grid rows (row 0 = rank 8)
    pub fn from_rows(cells: [[Option<BoardPiece>; 8]; 8]) -> Self {
        Self { cells }
    }

    /// Piece on a square, if any
    pub fn piece_at(&self, square: BoardSquare) -> Option<BoardPiece> {
        let (row, col) = square.grid();
        self.cells[row][col]
    }

    /// Grid rows, rank 8 first
    pub fn rows(&self) -> &[[Option<BoardPiece>; 8]; 8] {
        &self.cells
    }

    /// Square of the king of the given side
    pub fn find_king(&self, color: PieceColor) -> Option<BoardSquare> {
        BoardSquare::all().find(|&square| {
            self.piece_at(square) == Some(BoardPiece::new(PieceType::King, color))
        })
    }
}

/// Parse a square, mapping failures into [`GameError::InvalidSquare`]
pub fn parse_square(input: &str) -> GameResult<BoardSquare> {
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_round_trip_through_text() {
        let square: BoardSquare = "e4".parse().unwrap();
        assert_eq!(square.file(), 4);
        assert_eq!(square.rank(), 3);
        assert_eq!(square.to_string(), "e4");
    }

    #[test]
    fn test_square_rejects_garbage() {
        assert!("i1".parse::<BoardSquare>().is_err());
        assert!("a9".parse::<BoardSquare>().is_err());
        assert!("e".parse::<BoardSquare>().is_err());
        assert!("e44".parse::<BoardSquare>().is_err());
    }

    #[test]
    fn test_grid_orientation() {
        //! Row 0 is the eighth rank, column 0 the a-file
        assert_eq!(BoardSquare::from_grid(0, 0).unwrap().to_string(), "a8");
        assert_eq!(BoardSquare::from_grid(7, 7).unwrap().to_string(), "h1");
        assert_eq!(parse_square("e2").unwrap().grid(), (6, 4));
        assert!(BoardSquare::from_grid(8, 0).is_none());
    }

    #[test]
    fn test_square_colours() {
        assert!(!parse_square("a1").unwrap().is_light());
        assert!(parse_square("h1").unwrap().is_light());
    }

    #[test]
    fn test_all_squares_in_render_order() {
        let squares: Vec<_> = BoardSquare::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[63].to_string(), "h1");
    }

    #[test]
    fn test_colour_parsing() {
        assert_eq!("white".parse::<PieceColor>().unwrap(), PieceColor::White);
        assert_eq!("B".parse::<PieceColor>().unwrap(), PieceColor::Black);
        assert!("green".parse::<PieceColor>().is_err());
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
    }

    #[test]
    fn test_piece_letters() {
        let white_knight = BoardPiece::new(PieceType::Knight, PieceColor::White);
        let black_queen = BoardPiece::new(PieceType::Queen, PieceColor::Black);
        assert_eq!(white_knight.letter(), 'N');
        assert_eq!(black_queen.letter(), 'q');
    }
}
