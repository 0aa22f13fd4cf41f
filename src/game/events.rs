//! Messages exchanged between the board screens, the boards and the move service

use super::llm_board::MoveRequest;
use super::types::BoardSquare;
use bevy::prelude::*;

/// A piece was dragged from `from` and released over `to`
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDropped {
    pub from: BoardSquare,
    pub to: BoardSquare,
}

/// "Reset Game" was pressed on the local board
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResetBoard;

/// The LLM board needs the opponent's move for a position
#[derive(Message, Debug, Clone)]
pub struct MoveRequested(pub MoveRequest);

/// Reply for the request with id `request_id`
///
/// `result` carries the suggested SAN, or the failure rendered as text.
#[derive(Message, Debug, Clone)]
pub struct MoveReplied {
    pub request_id: u64,
    pub result: Result<String, String>,
}
