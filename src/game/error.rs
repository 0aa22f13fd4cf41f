//! Error types for game module
//!
//! Provides custom error types for board sessions, the rules adapter and the
//! LLM request slot.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Text that does not name a square (e.g. "i9")
    #[error("Invalid square: {input:?}")]
    InvalidSquare { input: String },

    /// Text that does not name a side
    #[error("Invalid colour: {input:?} (expected white or black)")]
    InvalidColor { input: String },

    /// Position string rejected by the rules engine
    #[error("Invalid FEN {fen:?}: {message}")]
    InvalidFen { fen: String, message: String },

    /// Move that is not legal in the current position
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: String, to: String },

    /// A move request is already waiting for its reply
    #[error("Move request #{id} is still in flight")]
    RequestInFlight { id: u64 },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
