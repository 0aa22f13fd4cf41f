//! Derived board state kept next to the rules engine
//!
//! Everything here is recomputed or appended after a successful move and is
//! used purely for display.
//!
//! - [`MoveHistory`] - SAN moves, rendered as White/Black pairs
//! - [`CapturedPieces`] - pieces removed from the board and material balance
//! - [`CheckIndicator`] - the square of a king in check

pub mod captured;
pub mod check;
pub mod history;

pub use captured::CapturedPieces;
pub use check::CheckIndicator;
pub use history::{HistoryRow, MoveHistory};
