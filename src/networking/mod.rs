//! Networking module - the remote move-suggestion service
//!
//! - `move_client` - [`MoveSuggestionClient`] and its HTTP implementation
//! - `plugin` - [`NetworkingPlugin`], running requests as background tasks

pub mod move_client;
pub mod plugin;

pub use move_client::{HttpMoveClient, MoveServiceError, MoveSuggestionClient};
pub use plugin::{MoveService, NetworkingPlugin, PendingLlmMove};
