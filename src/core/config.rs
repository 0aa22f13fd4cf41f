//! Application configuration
//!
//! [`AppConfig`] is assembled once in `main` before the app is built, from
//! lowest to highest precedence:
//!
//! 1. built-in defaults
//! 2. a JSON settings file (`--config <PATH>`, else `settings.json` in the
//!    per-user config directory)
//! 3. environment variables (`.env` is loaded by `main`)
//! 4. command line flags
//!
//! A missing default settings file is normal. An explicit `--config` file
//! that cannot be read or parsed is an error.

use super::error::{CoreError, CoreResult};
use super::states::Route;
use super::window_config::WindowConfig;
use crate::game::types::PieceColor;
use bevy::prelude::*;
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Move-suggestion endpoint used when nothing else is configured
pub const DEFAULT_MOVE_ENDPOINT: &str = "http://localhost:5000/groq_move";

/// Default log filter handed to Bevy's `LogPlugin`
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

pub const ENV_MOVE_ENDPOINT: &str = "LLMCHESS_MOVE_ENDPOINT";
pub const ENV_HUMAN_COLOR: &str = "LLMCHESS_HUMAN_COLOR";
pub const ENV_LOG: &str = "LLMCHESS_LOG";

/// Command line flags
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file to load instead of the per-user settings.json
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// URL the LLM board posts positions to (empty disables the service)
    #[arg(long, value_name = "URL")]
    pub move_endpoint: Option<String>,

    /// Give up on a move request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Side the human plays against the LLM (white or black)
    #[arg(long, value_name = "COLOR")]
    pub human_color: Option<PieceColor>,

    /// Start both boards from this position instead of the initial one
    #[arg(long, value_name = "FEN")]
    pub fen: Option<String>,

    /// Screen to open first: /, /1v1 or /vs-llm
    #[arg(long, value_name = "PATH")]
    pub route: Option<Route>,

    /// Log filter, e.g. "info,llmchess=debug"
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Where the settings file layer came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    Defaults,
    File(PathBuf),
}

/// Effective application configuration
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint of the move-suggestion service; `None` disables it
    pub move_endpoint: Option<String>,
    /// Request timeout in seconds; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
    /// Side the human plays on the LLM board
    pub human_color: PieceColor,
    /// Custom start position for both boards
    pub start_fen: Option<String>,
    /// Screen shown at startup
    pub start_route: Route,
    /// Filter for the log subscriber
    pub log_filter: String,
    pub window: WindowConfig,

    #[serde(skip)]
    pub source: ConfigSource,
    /// Problems found while loading that did not stop startup
    #[serde(skip)]
    pub load_warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            move_endpoint: Some(DEFAULT_MOVE_ENDPOINT.to_string()),
            request_timeout_secs: None,
            human_color: PieceColor::White,
            start_fen: None,
            start_route: Route::Home,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            window: WindowConfig::default(),
            source: ConfigSource::Defaults,
            load_warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Build the effective configuration for `cli`
    pub fn load(cli: &Cli) -> CoreResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_file(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_cli(cli);
        Ok(config)
    }

    /// Read a settings file
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CoreError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: AppConfig =
            serde_json::from_str(&contents).map_err(|source| CoreError::SettingsSerialization {
                path: path.to_path_buf(),
                source,
            })?;
        config.move_endpoint = normalize_endpoint(config.move_endpoint);
        config.source = ConfigSource::File(path.to_path_buf());
        Ok(config)
    }

    fn from_default_file() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                let mut config = Self::default();
                config
                    .load_warnings
                    .push(format!("{}. Using defaults.", err));
                config
            }
        }
    }

    /// Apply environment overrides, reading variables through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_MOVE_ENDPOINT) {
            self.move_endpoint = normalize_endpoint(Some(endpoint));
        }
        if let Some(color) = lookup(ENV_HUMAN_COLOR) {
            self.human_color = color.parse().map_err(|err| CoreError::InvalidSetting {
                key: ENV_HUMAN_COLOR,
                message: format!("{}", err),
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// Apply command line overrides
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.move_endpoint {
            self.move_endpoint = normalize_endpoint(Some(endpoint.clone()));
        }
        if let Some(secs) = cli.request_timeout {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(color) = cli.human_color {
            self.human_color = color;
        }
        if let Some(fen) = &cli.fen {
            self.start_fen = Some(fen.clone());
        }
        if let Some(route) = cli.route {
            self.start_route = route;
        }
        if let Some(filter) = &cli.log_filter {
            self.log_filter = filter.clone();
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Per-user settings file, e.g. `~/.config/llmchess/settings.json`
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "trilltino", "LLMChess")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
}

fn normalize_endpoint(endpoint: Option<String>) -> Option<String> {
    endpoint
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// Log the effective configuration once at startup
pub fn log_config_summary(config: Res<AppConfig>) {
    match &config.source {
        ConfigSource::Defaults => info!("[CONFIG] Using built-in defaults"),
        ConfigSource::File(path) => info!("[CONFIG] Loaded settings from {:?}", path),
    }
    for warning in &config.load_warnings {
        warn!("[CONFIG] {}", warning);
    }
    match &config.move_endpoint {
        Some(endpoint) => info!(
            "[CONFIG] Move endpoint {} (timeout: {:?})",
            endpoint,
            config.request_timeout()
        ),
        None => warn!("[CONFIG] No move endpoint configured; the LLM board cannot get replies"),
    }
    info!(
        "[CONFIG] Human plays {} | start route {}",
        config.human_color, config.start_route
    );
}
