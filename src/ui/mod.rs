//! UI module - Egui screens for each route
//!
//! - **home**: `/`, the two mode buttons
//! - **local_screen**: `/1v1`, the hot-seat board with history and captures
//! - **llm_screen**: `/vs-llm`, the board against the LLM with its status line
//! - **board_widget**: the drag-and-drop board both boards share
//!
//! Screens only read board resources and write messages; all game state
//! changes happen in [`crate::game`].

pub mod board_widget;
pub mod camera;
pub mod home;
pub mod llm_screen;
pub mod local_screen;
pub mod styles;

use crate::core::Route;
use crate::game::{LlmBoard, LocalBoard};
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use board_widget::BoardWidget;
pub use camera::PersistentEguiCamera;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PersistentEguiCamera>()
            .add_systems(Startup, camera::setup_persistent_egui_camera)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    home::home_ui.run_if(in_state(Route::Home)),
                    local_screen::local_board_ui
                        .run_if(in_state(Route::OneVsOne).and(resource_exists::<LocalBoard>)),
                    llm_screen::llm_board_ui
                        .run_if(in_state(Route::VsLlm).and(resource_exists::<LlmBoard>)),
                ),
            );
    }
}
