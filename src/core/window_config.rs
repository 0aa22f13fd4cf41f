//! Primary window settings
//!
//! The `window` section of the settings file. Read once at startup by `main`
//! to build the primary window.

use bevy::window::{MonitorSelection, VideoModeSelection, Window, WindowMode, WindowResolution};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Physical pixels
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chess".to_string(),
            width: 960,
            height: 800,
            resizable: true,
            fullscreen: false,
        }
    }
}

impl WindowConfig {
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            mode: self.mode(),
            ..Default::default()
        }
    }

    fn mode(&self) -> WindowMode {
        if self.fullscreen {
            WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current)
        } else {
            WindowMode::Windowed
        }
    }
}
