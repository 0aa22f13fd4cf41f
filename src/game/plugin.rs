//! Game plugin - board lifetimes and move handling
//!
//! # Board Lifetime
//!
//! - `OnEnter(Route::OneVsOne)` inserts a [`LocalBoard`], `OnExit` removes it
//! - `OnEnter(Route::VsLlm)` inserts an [`LlmBoard`], `OnExit` removes it
//!
//! Drop handlers only run while their route is active and their board
//! exists, so nothing touches a board after its screen has gone.
//!
//! # System Organization
//!
//! - `Input` - [`PieceDropped`] and [`ResetBoard`] applied to the mounted board
//! - `Network` - move requests (see [`crate::networking`])
//! - `Execution` - [`MoveReplied`] applied to the LLM board
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - Must be added first for the route state
//!   and [`AppConfig`]

use super::events::{MoveReplied, MoveRequested, PieceDropped, ResetBoard};
use super::llm_board::LlmBoard;
use super::local_board::LocalBoard;
use super::rules::ShakmatyRules;
use super::system_sets::GameSystems;
use crate::core::{AppConfig, Route};
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PieceDropped>()
            .add_message::<ResetBoard>()
            .add_message::<MoveRequested>()
            .add_message::<MoveReplied>();

        // Input → Network → Execution
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Network,
                GameSystems::Execution,
            )
                .chain(),
        );

        app.add_systems(OnEnter(Route::OneVsOne), mount_local_board)
            .add_systems(OnExit(Route::OneVsOne), unmount_local_board)
            .add_systems(OnEnter(Route::VsLlm), mount_llm_board)
            .add_systems(OnExit(Route::VsLlm), unmount_llm_board);

        app.add_systems(
            Update,
            (
                (handle_local_resets, handle_local_drops)
                    .chain()
                    .run_if(in_state(Route::OneVsOne).and(resource_exists::<LocalBoard>)),
                handle_llm_drops.run_if(in_state(Route::VsLlm).and(resource_exists::<LlmBoard>)),
            )
                .in_set(GameSystems::Input),
        );

        app.add_systems(
            Update,
            handle_llm_replies
                .in_set(GameSystems::Execution)
                .run_if(in_state(Route::VsLlm).and(resource_exists::<LlmBoard>)),
        );
    }
}

/// Engine for a freshly mounted board
///
/// A configured start position that fails to parse is reported and replaced
/// by the standard initial position.
pub fn start_engine(config: &AppConfig) -> ShakmatyRules {
    let Some(fen) = config.start_fen.as_deref() else {
        return ShakmatyRules::default();
    };
    ShakmatyRules::from_fen(fen).unwrap_or_else(|err| {
        error!("[GAME] {}; starting from the initial position", err);
        ShakmatyRules::default()
    })
}

fn mount_local_board(mut commands: Commands, config: Res<AppConfig>) {
    commands.insert_resource(LocalBoard::new(start_engine(&config)));
    info!("[GAME] Local board mounted");
}

fn unmount_local_board(mut commands: Commands) {
    commands.remove_resource::<LocalBoard>();
    info!("[GAME] Local board unmounted");
}

fn mount_llm_board(
    mut commands: Commands,
    config: Res<AppConfig>,
    mut requests: MessageWriter<MoveRequested>,
) {
    let mut board = LlmBoard::new(start_engine(&config), config.human_color);
    info!("[GAME] LLM board mounted, human plays {}", board.human());

    if let Some(request) = board.opening_request() {
        requests.write(MoveRequested(request));
    }
    commands.insert_resource(board);
}

fn unmount_llm_board(mut commands: Commands) {
    commands.remove_resource::<LlmBoard>();
    info!("[GAME] LLM board unmounted");
}

fn handle_local_resets(mut resets: MessageReader<ResetBoard>, mut board: ResMut<LocalBoard>) {
    // Several presses in one frame still mean a single reset
    if resets.read().count() > 0 {
        board.reset();
    }
}

fn handle_local_drops(mut drops: MessageReader<PieceDropped>, mut board: ResMut<LocalBoard>) {
    for drop in drops.read() {
        if let Some(mv) = board.on_drop(drop.from, drop.to) {
            info!("[GAME] {} played {}", mv.piece.color, mv.san);
            if let Some(outcome) = board.outcome() {
                info!("[GAME] {}", outcome.message());
            }
        }
    }
}

fn handle_llm_drops(
    mut drops: MessageReader<PieceDropped>,
    mut board: ResMut<LlmBoard>,
    mut requests: MessageWriter<MoveRequested>,
) {
    for drop in drops.read() {
        match board.on_human_drop(drop.from, drop.to) {
            Ok(Some(request)) => {
                requests.write(MoveRequested(request));
            }
            Ok(None) => {}
            Err(err) => warn!("[GAME] Drop {} -> {} rejected: {}", drop.from, drop.to, err),
        }
    }
}

fn handle_llm_replies(mut replies: MessageReader<MoveReplied>, mut board: ResMut<LlmBoard>) {
    for reply in replies.read() {
        board.on_reply(reply.request_id, reply.result.clone());
    }
}
