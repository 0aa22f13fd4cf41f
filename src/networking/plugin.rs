//! Networking plugin - runs move requests off the main thread
//!
//! Each [`MoveRequested`] message starts a worker thread that makes the
//! blocking call and sends its result back over a channel. The channel is
//! polled every frame and, once the result arrives, it is forwarded as a
//! [`MoveReplied`] message for the LLM board.
//!
//! Leaving the `/vs-llm` route drops the receiving end. A worker still stuck
//! in its call keeps only its own thread, and its late result is discarded.

use super::move_client::{HttpMoveClient, MoveServiceError, MoveSuggestionClient};
use crate::core::{AppConfig, Route};
use crate::game::{GameSystems, MoveReplied, MoveRequested};
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use crossbeam_channel::{Receiver, TryRecvError};
use std::sync::Arc;

/// Client used for move requests
///
/// Inserted at startup from [`AppConfig`] unless one is already present, so
/// tests can provide their own.
#[derive(Resource, Clone)]
pub struct MoveService(pub Arc<dyn MoveSuggestionClient>);

impl MoveService {
    pub fn new(client: impl MoveSuggestionClient) -> Self {
        Self(Arc::new(client))
    }
}

/// The move request currently running
#[derive(Resource)]
pub struct PendingLlmMove {
    pub request_id: u64,
    pub receiver: Receiver<Result<String, MoveServiceError>>,
}

pub struct NetworkingPlugin;

impl Plugin for NetworkingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_move_service)
            .add_systems(
                Update,
                (spawn_move_request_system, poll_move_request_system)
                    .chain()
                    .in_set(GameSystems::Network),
            )
            .add_systems(OnExit(Route::VsLlm), cancel_pending_move);
    }
}

fn setup_move_service(
    mut commands: Commands,
    config: Res<AppConfig>,
    existing: Option<Res<MoveService>>,
) {
    if existing.is_some() {
        return;
    }

    let Some(endpoint) = config.move_endpoint.as_deref() else {
        warn!("[LLM] No move endpoint configured");
        return;
    };

    match HttpMoveClient::new(endpoint, config.request_timeout()) {
        Ok(client) => {
            info!("[LLM] Move service at {}", client.endpoint());
            commands.insert_resource(MoveService::new(client));
        }
        Err(err) => error!("[LLM] Could not create HTTP client: {}", err),
    }
}

/// Start a worker for each move request
fn spawn_move_request_system(
    mut commands: Commands,
    mut requests: MessageReader<MoveRequested>,
    mut replies: MessageWriter<MoveReplied>,
    service: Option<Res<MoveService>>,
) {
    for MoveRequested(request) in requests.read() {
        let Some(service) = service.as_ref() else {
            error!("[LLM] Request #{} has no move service", request.id);
            replies.write(MoveReplied {
                request_id: request.id,
                result: Err(MoveServiceError::Unavailable.to_string()),
            });
            continue;
        };

        let client = Arc::clone(&service.0);
        let fen = request.fen.clone();
        let request_id = request.id;
        let (sender, receiver) = crossbeam_channel::bounded(1);

        // Own thread per request; a hung call must not hold a pool thread
        let spawned = std::thread::Builder::new()
            .name(format!("llm-move-{}", request_id))
            .spawn(move || {
                let result = client.suggest_move(&fen);
                if sender.send(result).is_err() {
                    debug!("[LLM] Request #{} finished after its board was gone", request_id);
                }
            });

        if let Err(err) = spawned {
            error!("[LLM] Could not start request #{}: {}", request_id, err);
            replies.write(MoveReplied {
                request_id,
                result: Err(MoveServiceError::Unavailable.to_string()),
            });
            continue;
        }

        debug!("[LLM] Request #{} spawned", request.id);
        commands.insert_resource(PendingLlmMove {
            request_id,
            receiver,
        });
    }
}

/// Poll the running request and forward its result
fn poll_move_request_system(
    mut commands: Commands,
    pending: Option<Res<PendingLlmMove>>,
    mut replies: MessageWriter<MoveReplied>,
) {
    let Some(pending) = pending else {
        return;
    };

    let result = match pending.receiver.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            error!("[LLM] Request #{} worker exited without a result", pending.request_id);
            Err(MoveServiceError::Unavailable)
        }
    };
    commands.remove_resource::<PendingLlmMove>();

    match &result {
        Ok(suggestion) => info!("[LLM] Request #{} answered {:?}", pending.request_id, suggestion),
        Err(err) => warn!("[LLM] Request #{} failed: {}", pending.request_id, err),
    }

    replies.write(MoveReplied {
        request_id: pending.request_id,
        result: result.map_err(|err| err.to_string()),
    });
}

fn cancel_pending_move(mut commands: Commands, pending: Option<Res<PendingLlmMove>>) {
    if let Some(pending) = pending {
        info!("[LLM] Dropping request #{} on unmount", pending.request_id);
        commands.remove_resource::<PendingLlmMove>();
    }
}
