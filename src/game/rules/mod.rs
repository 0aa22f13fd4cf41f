//! Chess rules module - the seam between the board sessions and the rules library
//!
//! The sessions never reimplement chess rules. They talk to an owned game
//! object through [`RulesEngine`], which exposes only what the boards need:
//! side to move, check detection, legal moves with SAN, move application,
//! history, a board snapshot and the FEN of the position.
//!
//! # Module Structure
//!
//! - `shakmaty_rules` - [`ShakmatyRules`], the adapter over the `shakmaty` crate
//!
//! Swapping the rules library means writing another [`RulesEngine`]
//! implementation; rendering code only sees the types in [`super::types`].

pub mod shakmaty_rules;


use super::error::{GameError, GameResult};
use super::types::{BoardPiece, BoardSnapshot, BoardSquare, PieceColor, PieceType};

pub use shakmaty_rules::ShakmatyRules;

/// A legal move as reported by the rules engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInfo {
    /// Origin square
    pub from: BoardSquare,
    /// Destination square as the user drops it (castling: the king's target)
    pub to: BoardSquare,
    /// The moving piece
    pub piece: BoardPiece,
    /// Type of the captured piece, if any (en passant included)
    pub captured: Option<PieceType>,
    /// Promotion piece, if any
    pub promotion: Option<PieceType>,
    /// Standard Algebraic Notation including check suffixes, e.g. `Qxf7#`
    pub san: String,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: PieceColor },
    Stalemate,
    InsufficientMaterial,
}

impl GameOutcome {
    /// Short banner shown when the game is over
    pub fn message(self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => format!("Checkmate! {} wins", winner),
            GameOutcome::Stalemate => "Stalemate".to_string(),
            GameOutcome::InsufficientMaterial => "Draw by insufficient material".to_string(),
        }
    }
}

/// Owned handle to a game held by an external rules library
///
/// `Default` constructs the standard initial position; `Clone` snapshots a
/// game so a board can return to its starting position.
pub trait RulesEngine: Clone + Default + Send + Sync + 'static {
    /// Side to move
    fn turn(&self) -> PieceColor;

    /// Whether the side to move is in check
    fn is_check(&self) -> bool;

    /// Final result if the game is over
    fn outcome(&self) -> Option<GameOutcome>;

    /// Legal moves, optionally restricted to those starting on `from`
    fn legal_moves(&self, from: Option<BoardSquare>) -> Vec<MoveInfo>;

    /// Apply a move previously returned by [`RulesEngine::legal_moves`]
    ///
    /// Returns the applied move. Fails with [`GameError::IllegalMove`] if the
    /// move is not legal in the current position.
    fn apply_listed(&mut self, mv: &MoveInfo) -> GameResult<MoveInfo>;

    /// Current board occupancy
    fn board(&self) -> BoardSnapshot;

    /// SAN of every move played so far, in order
    fn history(&self) -> &[String];

    /// Position string of the current position
    fn fen(&self) -> String;

    /// Apply the move going from `from` to `to`
    ///
    /// Promotions default to a queen.
    fn apply(&mut self, from: BoardSquare, to: BoardSquare) -> GameResult<MoveInfo> {
        let mv = pick_drop_move(self.legal_moves(Some(from)), to).ok_or_else(|| {
            GameError::IllegalMove {
                from: from.to_string(),
                to: to.to_string(),
            }
        })?;
        self.apply_listed(&mv)
    }
}

/// Choose the move a drop on `to` stands for, auto-promoting to a queen
pub fn pick_drop_move(candidates: Vec<MoveInfo>, to: BoardSquare) -> Option<MoveInfo> {
    candidates
        .into_iter()
        .find(|mv| mv.to == to && matches!(mv.promotion, None | Some(PieceType::Queen)))
}
