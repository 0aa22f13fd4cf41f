//! Board session - one rules engine plus everything derived from it
//!
//! Both boards share this core. The engine is the only mutable game state;
//! after every successful mutation the session re-derives the snapshot, the
//! history, the captured list and the check indicator from it.

use super::error::GameResult;
use super::resources::{CapturedPieces, CheckIndicator, MoveHistory};
use super::rules::{pick_drop_move, GameOutcome, MoveInfo, RulesEngine, ShakmatyRules};
use super::types::{BoardSnapshot, BoardSquare, PieceColor};
use tracing::debug;

/// Rules engine handle with its derived display state
#[derive(Debug, Clone)]
pub struct BoardSession<R: RulesEngine = ShakmatyRules> {
    engine: R,
    snapshot: BoardSnapshot,
    history: MoveHistory,
    captured: CapturedPieces,
    check: CheckIndicator,
}

impl<R: RulesEngine> Default for BoardSession<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: RulesEngine> BoardSession<R> {
    /// Wrap an engine and derive the initial display state from it
    pub fn new(engine: R) -> Self {
        let mut session = Self {
            snapshot: BoardSnapshot::default(),
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            check: CheckIndicator::default(),
            engine,
        };
        session.refresh();
        session
    }

    /// Apply the drop `from` → `to` if the engine lists it as legal
    ///
    /// Illegal drops (including drops from an empty square) change nothing and
    /// return `None`.
    pub fn try_move(&mut self, from: BoardSquare, to: BoardSquare) -> Option<MoveInfo> {
        let Some(mv) = pick_drop_move(self.engine.legal_moves(Some(from)), to) else {
            debug!("[GAME] Ignoring drop {} -> {}: not a legal move", from, to);
            return None;
        };

        match self.apply_listed(&mv) {
            Ok(applied) => Some(applied),
            Err(err) => {
                debug!("[GAME] Ignoring drop {} -> {}: {}", from, to, err);
                None
            }
        }
    }

    /// Apply a move taken from [`BoardSession::legal_moves`]
    pub fn apply_listed(&mut self, mv: &MoveInfo) -> GameResult<MoveInfo> {
        let applied = self.engine.apply_listed(mv)?;
        if let Some(piece_type) = applied.captured {
            self.captured
                .add_capture(applied.piece.color.opposite(), piece_type);
        }
        self.refresh();
        debug!("[GAME] {} played {}", applied.piece.color, applied.san);
        Ok(applied)
    }

    /// Throw the current game away and start again from `engine`
    pub fn replace_engine(&mut self, engine: R) {
        self.engine = engine;
        self.captured.clear();
        self.history.clear();
        self.check.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.snapshot = self.engine.board();
        self.history.sync_from(self.engine.history());
        self.check = CheckIndicator::locate(self.engine.is_check(), self.engine.turn(), &self.snapshot);
    }

    /// All legal moves in the current position
    pub fn legal_moves(&self) -> Vec<MoveInfo> {
        self.engine.legal_moves(None)
    }

    pub fn engine(&self) -> &R {
        &self.engine
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Square of the king in check, if the side to move is in check
    pub fn check_square(&self) -> Option<BoardSquare> {
        self.check.square()
    }

    pub fn turn(&self) -> PieceColor {
        self.engine.turn()
    }

    pub fn fen(&self) -> String {
        self.engine.fen()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.engine.outcome()
    }
}
