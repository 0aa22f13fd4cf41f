//! Core plugin
//!
//! Installs the [`Route`] state, starting at the configured route, and the
//! [`AppConfig`] resource other plugins read from.
//!
//! # Plugin Order
//!
//! 1. [`bevy::DefaultPlugins`] - Core Bevy functionality (states, logging)
//! 2. [`bevy_egui::EguiPlugin`] - UI framework
//! 3. [`CorePlugin`] - Route state and configuration
//! 4. [`crate::game::GamePlugin`], [`crate::networking::NetworkingPlugin`],
//!    [`crate::ui::UiPlugin`]
//!
//! Insert a loaded [`AppConfig`] before adding this plugin; otherwise the
//! defaults are used.

use super::config::{log_config_summary, AppConfig};
use super::states::{log_route_transitions, Route};
use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>();

        let start_route = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| config.start_route)
            .unwrap_or_default();

        app.insert_state(start_route).register_type::<Route>();

        app.add_systems(Startup, log_config_summary)
            .add_systems(Update, log_route_transitions);
    }
}
