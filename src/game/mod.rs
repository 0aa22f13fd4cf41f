//! Chess game module - board state and move handling
//!
//! Chess rules live in an external library behind [`rules::RulesEngine`];
//! this module owns the state derived from it and the two ways of playing.
//!
//! # Module Organization
//!
//! - `types` - squares, pieces and board snapshots shared with the UI
//! - `rules` - the rules-engine seam and its `shakmaty` adapter
//! - `resources` - move history, captured pieces, check indicator
//! - `session` - one engine plus everything derived from it
//! - `local_board` - hot-seat board for two players on one screen
//! - `llm_board` - board against the remote move-suggestion service
//! - `events` - messages between screens, boards and the move service
//! - `plugin` - [`GamePlugin`], mounting boards per route

pub mod error;
pub mod events;
pub mod llm_board;
pub mod local_board;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod session;
pub mod system_sets;
pub mod types;

pub use error::{GameError, GameResult};
pub use events::{MoveReplied, MoveRequested, PieceDropped, ResetBoard};
pub use llm_board::{LlmBoard, LlmStatus, MoveRequest};
pub use local_board::LocalBoard;
pub use plugin::GamePlugin;
pub use system_sets::GameSystems;
