use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use llmchess::core::{AppConfig, Cli, CorePlugin};
use llmchess::game::GamePlugin;
use llmchess::networking::NetworkingPlugin;
use llmchess::ui::UiPlugin;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli).context("failed to load configuration")?;

    let window = config.window.to_window();
    let log_filter = config.log_filter.clone();

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(LogPlugin {
                    filter: log_filter,
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(config)
        .add_plugins((CorePlugin, GamePlugin, NetworkingPlugin, UiPlugin))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {}", code),
    }
}
