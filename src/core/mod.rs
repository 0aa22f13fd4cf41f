//! Core module - routing and application configuration
//!
//! # Module Structure
//!
//! - `states` - [`Route`], the Bevy state selecting the visible screen
//! - `config` - [`AppConfig`] and the [`Cli`] flags it is layered from
//! - `window_config` - [`WindowConfig`], primary window settings
//! - `error` - [`CoreError`]
//! - `plugin` - [`CorePlugin`]

pub mod config;
pub mod error;
pub mod plugin;
pub mod states;
pub mod window_config;

pub use config::{AppConfig, Cli, DEFAULT_MOVE_ENDPOINT};
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use states::Route;
pub use window_config::WindowConfig;
