//! Local two-player board
//!
//! Both sides are played from the same mouse. A drop is applied when the
//! rules engine lists it among the legal moves of the origin square and is
//! ignored silently otherwise. No network calls.

use super::rules::{MoveInfo, RulesEngine, ShakmatyRules};
use super::session::BoardSession;
use super::types::BoardSquare;
use bevy::prelude::*;
use std::ops::Deref;

/// Hot-seat board mounted on the `/1v1` route
#[derive(Resource, Debug, Clone)]
pub struct LocalBoard<R: RulesEngine = ShakmatyRules> {
    session: BoardSession<R>,
    initial: R,
}

impl<R: RulesEngine> Default for LocalBoard<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: RulesEngine> LocalBoard<R> {
    /// New board starting from `initial`; [`LocalBoard::reset`] returns here
    pub fn new(initial: R) -> Self {
        Self {
            session: BoardSession::new(initial.clone()),
            initial,
        }
    }

    /// Handle a drag-and-drop of the piece on `from` onto `to`
    ///
    /// Returns the applied move, or `None` when the drop was not legal.
    pub fn on_drop(&mut self, from: BoardSquare, to: BoardSquare) -> Option<MoveInfo> {
        self.session.try_move(from, to)
    }

    /// Start a fresh game: empty history and captures, no check highlight
    pub fn reset(&mut self) {
        self.session.replace_engine(self.initial.clone());
        info!("[GAME] Local board reset");
    }
}

impl<R: RulesEngine> Deref for LocalBoard<R> {
    type Target = BoardSession<R>;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}
