//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - apply drops and resets to the mounted board
//! 2. **Network** - start and poll move requests
//! 3. **Execution** - apply move replies to the LLM board

use bevy::prelude::*;

/// System execution order for board logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Drops and resets coming from the board screens
    Input,

    /// Outbound move requests and their pending tasks
    Network,

    /// Replies from the move service
    Execution,
}
