//! Route state
//!
//! The application has three screens, addressed by path:
//!
//! ```text
//!        [Home "/"]
//!        ↙        ↘
//! [OneVsOne "/1v1"]  [VsLlm "/vs-llm"]
//! ```
//!
//! Each route is a Bevy state. Board resources are inserted on
//! `OnEnter(route)` and removed on `OnExit(route)`, so leaving a screen
//! tears down everything it owned.

use super::error::{CoreError, CoreResult};
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen currently shown
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States, Reflect, Serialize, Deserialize,
)]
pub enum Route {
    /// Heading plus the two mode buttons
    #[default]
    Home,

    /// Local two-player board
    OneVsOne,

    /// Board against the LLM opponent
    VsLlm,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::OneVsOne, Route::VsLlm];

    /// Path this route is addressed by
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::OneVsOne => "/1v1",
            Route::VsLlm => "/vs-llm",
        }
    }

    /// Parse a path, tolerating a missing leading or a trailing slash
    pub fn from_path(path: &str) -> CoreResult<Self> {
        let trimmed = path.trim().trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| Route::path(*route).trim_matches('/') == trimmed)
            .ok_or_else(|| CoreError::InvalidRoute {
                path: path.to_string(),
            })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Route::path(*self))
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
    }
}

/// Log every route change
pub fn log_route_transitions(mut transitions: MessageReader<StateTransitionEvent<Route>>) {
    for transition in transitions.read() {
        match (transition.exited, transition.entered) {
            (Some(from), Some(to)) if from != to => {
                info!("[ROUTE] {} -> {}", from, to);
            }
            (None, Some(to)) => info!("[ROUTE] Starting at {}", to),
            _ => {}
        }
    }
}
