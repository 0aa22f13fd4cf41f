//! [`RulesEngine`] implementation backed by the `shakmaty` crate
//!
//! Converts between `shakmaty` squares, roles and colours and the crate's own
//! [`BoardSquare`] / [`PieceType`] / [`PieceColor`]. Castling is reported with
//! the king's destination (e1 → g1) via the standard UCI form of the move,
//! which is what a user drags.

use super::{GameOutcome, MoveInfo, RulesEngine};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{BoardPiece, BoardSnapshot, BoardSquare, PieceColor, PieceType};
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Rank, Role, Square};
use tracing::debug;

/// Game state owned by `shakmaty`, plus the SAN history of the moves played
#[derive(Debug, Clone, Default)]
pub struct ShakmatyRules {
    position: Chess,
    history: Vec<String>,
}

impl ShakmatyRules {
    /// Start from an arbitrary position
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let invalid = |message: String| GameError::InvalidFen {
            fen: fen.to_string(),
            message,
        };

        let parsed: Fen = fen.trim().parse().map_err(|err| invalid(format!("{err}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|err| invalid(format!("{err}")))?;

        debug!("[RULES] Loaded custom start position {}", fen.trim());
        Ok(Self {
            position,
            history: Vec::new(),
        })
    }

    fn describe(&self, m: &Move) -> Option<MoveInfo> {
        let (from, to) = drop_squares(m)?;
        Some(MoveInfo {
            from,
            to,
            piece: BoardPiece::new(piece_type(m.role()), piece_color(self.position.turn())),
            captured: m.capture().map(piece_type),
            promotion: m.promotion().map(piece_type),
            san: SanPlus::from_move(self.position.clone(), m).to_string(),
        })
    }

    fn find_legal(&self, mv: &MoveInfo) -> Option<Move> {
        self.position
            .legal_moves()
            .iter()
            .find(|m| {
                drop_squares(m) == Some((mv.from, mv.to))
                    && m.promotion().map(piece_type) == mv.promotion
            })
            .cloned()
    }
}

impl RulesEngine for ShakmatyRules {
    fn turn(&self) -> PieceColor {
        piece_color(self.position.turn())
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn outcome(&self) -> Option<GameOutcome> {
        if self.position.is_checkmate() {
            Some(GameOutcome::Checkmate {
                winner: self.turn().opposite(),
            })
        } else if self.position.is_stalemate() {
            Some(GameOutcome::Stalemate)
        } else if self.position.is_insufficient_material() {
            Some(GameOutcome::InsufficientMaterial)
        } else {
            None
        }
    }

    fn legal_moves(&self, from: Option<BoardSquare>) -> Vec<MoveInfo> {
        let origin = from.map(to_square);
        self.position
            .legal_moves()
            .iter()
            .filter(|m| origin.is_none() || m.from() == origin)
            .filter_map(|m| self.describe(m))
            .collect()
    }

    fn apply_listed(&mut self, mv: &MoveInfo) -> GameResult<MoveInfo> {
        let m = self.find_legal(mv).ok_or_else(|| GameError::IllegalMove {
            from: mv.from.to_string(),
            to: mv.to.to_string(),
        })?;

        let piece = BoardPiece::new(piece_type(m.role()), self.turn());
        let captured = m.capture().map(piece_type);
        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, &m).to_string();
        self.history.push(san.clone());

        Ok(MoveInfo {
            from: mv.from,
            to: mv.to,
            piece,
            captured,
            promotion: mv.promotion,
            san,
        })
    }

    fn board(&self) -> BoardSnapshot {
        let board = self.position.board();
        let mut cells = [[None; 8]; 8];
        for square in BoardSquare::all() {
            let (row, col) = square.grid();
            cells[row][col] = board.piece_at(to_square(square)).map(|piece| {
                BoardPiece::new(piece_type(piece.role), piece_color(piece.color))
            });
        }
        BoardSnapshot::from_rows(cells)
    }

    fn history(&self) -> &[String] {
        &self.history
    }

    fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}

fn to_square(square: BoardSquare) -> Square {
    Square::from_coords(
        File::new(u32::from(square.file())),
        Rank::new(u32::from(square.rank())),
    )
}

fn from_square(square: Square) -> Option<BoardSquare> {
    let file = (square.file().char() as u8).checked_sub(b'a')?;
    let rank = (square.rank().char() as u8).checked_sub(b'1')?;
    BoardSquare::new(file, rank)
}

/// Origin and user-facing destination of a move
fn drop_squares(m: &Move) -> Option<(BoardSquare, BoardSquare)> {
    match m.to_uci(CastlingMode::Standard) {
        UciMove::Normal { from, to, .. } => Some((from_square(from)?, from_square(to)?)),
        _ => None,
    }
}

fn piece_type(role: Role) -> PieceType {
    match role {
        Role::Pawn => PieceType::Pawn,
        Role::Knight => PieceType::Knight,
        Role::Bishop => PieceType::Bishop,
        Role::Rook => PieceType::Rook,
        Role::Queen => PieceType::Queen,
        Role::King => PieceType::King,
    }
}

fn piece_color(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}
