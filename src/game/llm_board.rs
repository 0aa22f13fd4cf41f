//! LLM-opponent board
//!
//! The human plays one side, a remote move-suggestion service the other.
//!
//! # Turn Flow
//!
//! 1. The human drops a piece while it is their turn; the move is applied
//!    locally and at once.
//! 2. The board opens its single request slot and hands back a
//!    [`MoveRequest`] carrying the FEN of the resulting position. Status
//!    becomes "LLM is thinking...".
//! 3. The reply is matched against the SAN of every legal move of the current
//!    position. An exact match is applied and the status returns to
//!    "Your move"; anything else leaves the board untouched.
//!
//! An unmatched reply leaves the LLM side to move with no request in flight,
//! so the human's drops stay blocked. That stall is the established
//! behaviour of this board and is kept as is.

use super::error::{GameError, GameResult};
use super::rules::{MoveInfo, RulesEngine, ShakmatyRules};
use super::session::BoardSession;
use super::types::{BoardSquare, PieceColor};
use bevy::prelude::*;
use std::fmt;
use std::ops::Deref;

/// Status line shown under the LLM board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmStatus {
    #[default]
    YourMove,
    Thinking,
    InvalidMove,
    ServiceError,
}

impl LlmStatus {
    pub fn message(self) -> &'static str {
        match self {
            LlmStatus::YourMove => "Your move",
            LlmStatus::Thinking => "LLM is thinking...",
            LlmStatus::InvalidMove => "LLM returned an invalid move.",
            LlmStatus::ServiceError => "Error getting move from LLM",
        }
    }
}

impl fmt::Display for LlmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One outbound request for the opponent's move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Identifies the reply that closes this request
    pub id: u64,
    /// Position the service should answer for
    pub fen: String,
}

/// Board mounted on the `/vs-llm` route
#[derive(Resource, Debug, Clone)]
pub struct LlmBoard<R: RulesEngine = ShakmatyRules> {
    session: BoardSession<R>,
    human: PieceColor,
    status: LlmStatus,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl<R: RulesEngine> Default for LlmBoard<R> {
    fn default() -> Self {
        Self::new(R::default(), PieceColor::White)
    }
}

impl<R: RulesEngine> LlmBoard<R> {
    pub fn new(engine: R, human: PieceColor) -> Self {
        Self {
            session: BoardSession::new(engine),
            human,
            status: LlmStatus::YourMove,
            in_flight: None,
            next_request_id: 1,
        }
    }

    /// Request the LLM's first move when it has the move on mount
    pub fn opening_request(&mut self) -> Option<MoveRequest> {
        if self.session.turn() == self.human || self.session.outcome().is_some() {
            return None;
        }
        match self.begin_request() {
            Ok(request) => Some(request),
            Err(err) => {
                warn!("[LLM] Opening request refused: {}", err);
                None
            }
        }
    }

    /// Handle a human drag-and-drop
    ///
    /// Returns `Ok(None)` when the drop is ignored (not the human's turn, or
    /// not a legal move) and `Ok(Some(request))` once the move has been
    /// applied and a request must go out.
    pub fn on_human_drop(
        &mut self,
        from: BoardSquare,
        to: BoardSquare,
    ) -> GameResult<Option<MoveRequest>> {
        if self.session.turn() != self.human {
            debug!("[LLM] Ignoring drop {} -> {}: not the human's turn", from, to);
            return Ok(None);
        }
        if let Some(id) = self.in_flight {
            return Err(GameError::RequestInFlight { id });
        }
        if self.session.try_move(from, to).is_none() {
            return Ok(None);
        }
        self.begin_request().map(Some)
    }

    /// Open the request slot for the current position
    pub fn begin_request(&mut self) -> GameResult<MoveRequest> {
        if let Some(id) = self.in_flight {
            return Err(GameError::RequestInFlight { id });
        }

        let request = MoveRequest {
            id: self.next_request_id,
            fen: self.session.fen(),
        };
        self.next_request_id += 1;
        self.in_flight = Some(request.id);
        self.status = LlmStatus::Thinking;
        info!("[LLM] Request #{} for {}", request.id, request.fen);
        Ok(request)
    }

    /// Handle the reply to request `id`
    ///
    /// `Ok` carries the suggested SAN, `Err` any failure of the remote call.
    /// Returns the applied move when the suggestion matched a legal move.
    pub fn on_reply<E: fmt::Display>(
        &mut self,
        id: u64,
        reply: Result<String, E>,
    ) -> Option<MoveInfo> {
        if self.in_flight != Some(id) {
            warn!(
                "[LLM] Dropping reply #{} (in flight: {:?})",
                id, self.in_flight
            );
            return None;
        }
        self.in_flight = None;

        let suggestion = match reply {
            Ok(suggestion) => suggestion,
            Err(err) => {
                error!("[LLM] Request #{} failed: {}", id, err);
                self.status = LlmStatus::ServiceError;
                return None;
            }
        };

        let san = suggestion.trim();
        let matched = self.session.legal_moves().into_iter().find(|mv| mv.san == san);
        let Some(mv) = matched else {
            warn!("[LLM] Suggested move {:?} is not a legal SAN move", san);
            self.status = LlmStatus::InvalidMove;
            return None;
        };

        match self.session.apply_listed(&mv) {
            Ok(applied) => {
                info!("[LLM] Played {}", applied.san);
                self.status = LlmStatus::YourMove;
                Some(applied)
            }
            Err(err) => {
                warn!("[LLM] Could not apply {}: {}", mv.san, err);
                self.status = LlmStatus::InvalidMove;
                None
            }
        }
    }

    pub fn status(&self) -> LlmStatus {
        self.status
    }

    pub fn human(&self) -> PieceColor {
        self.human
    }

    /// Id of the request waiting for its reply, if any
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Whether a drop by the human would currently be considered
    pub fn accepts_drops(&self) -> bool {
        self.session.turn() == self.human && self.in_flight.is_none()
    }
}

impl<R: RulesEngine> Deref for LlmBoard<R> {
    type Target = BoardSession<R>;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}
