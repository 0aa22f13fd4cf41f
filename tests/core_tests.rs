//! Integration tests for routing and board lifetimes
//!
//! Runs the core and game plugins headless and checks that each route
//! mounts its board on enter and tears it down on exit.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use llmchess::core::{AppConfig, CorePlugin, Route};
use llmchess::game::rules::RulesEngine;
use llmchess::game::types::parse_square;
use llmchess::game::{GamePlugin, LlmBoard, LlmStatus, LocalBoard, PieceDropped, ResetBoard};

fn test_app(config: AppConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(config);
    app.add_plugins((CorePlugin, GamePlugin));
    app
}

fn offline_config() -> AppConfig {
    AppConfig {
        move_endpoint: None,
        ..default()
    }
}

fn go_to(app: &mut App, route: Route) {
    app.world_mut()
        .resource_mut::<NextState<Route>>()
        .set(route);
    app.update();
}

fn current_route(app: &App) -> Route {
    *app.world().resource::<State<Route>>().get()
}

#[test]
fn test_initial_route_is_home() {
    //! A default app opens on `/` with no board mounted

    let mut app = test_app(offline_config());
    app.update();

    assert_eq!(current_route(&app), Route::Home);
    assert!(!app.world().contains_resource::<LocalBoard>());
    assert!(!app.world().contains_resource::<LlmBoard>());
}

#[test]
fn test_configured_start_route() {
    //! `start_route` picks the first screen and mounts its board

    let mut app = test_app(AppConfig {
        start_route: Route::OneVsOne,
        ..offline_config()
    });
    app.update();

    assert_eq!(current_route(&app), Route::OneVsOne);
    assert!(app.world().contains_resource::<LocalBoard>());
}

#[test]
fn test_local_board_mount_and_unmount() {
    //! Entering `/1v1` inserts the local board; leaving removes it

    let mut app = test_app(offline_config());
    app.update();

    go_to(&mut app, Route::OneVsOne);
    assert!(app.world().contains_resource::<LocalBoard>());

    go_to(&mut app, Route::Home);
    assert!(!app.world().contains_resource::<LocalBoard>());
}

#[test]
fn test_llm_board_mount_and_unmount() {
    //! Entering `/vs-llm` inserts a fresh LLM board; leaving removes it

    let mut app = test_app(offline_config());
    app.update();

    go_to(&mut app, Route::VsLlm);
    {
        let board = app.world().resource::<LlmBoard>();
        assert_eq!(board.status(), LlmStatus::YourMove);
        assert!(board.history().is_empty());
    }

    go_to(&mut app, Route::OneVsOne);
    assert!(!app.world().contains_resource::<LlmBoard>());
    assert!(app.world().contains_resource::<LocalBoard>());
}

#[test]
fn test_remount_starts_a_new_game() {
    //! Leaving and re-entering `/1v1` discards the previous game

    let mut app = test_app(offline_config());
    app.update();
    go_to(&mut app, Route::OneVsOne);

    app.world_mut().write_message(PieceDropped {
        from: parse_square("e2").unwrap(),
        to: parse_square("e4").unwrap(),
    });
    app.update();
    assert_eq!(app.world().resource::<LocalBoard>().history().len(), 1);

    go_to(&mut app, Route::Home);
    go_to(&mut app, Route::OneVsOne);
    assert!(app.world().resource::<LocalBoard>().history().is_empty());
}

#[test]
fn test_drops_and_reset_through_messages() {
    //! Drops reach the mounted board; a reset message restores the start

    let mut app = test_app(offline_config());
    app.update();
    go_to(&mut app, Route::OneVsOne);

    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("e4", "e5")] {
        app.world_mut().write_message(PieceDropped {
            from: parse_square(from).unwrap(),
            to: parse_square(to).unwrap(),
        });
        app.update();
    }
    assert_eq!(
        app.world().resource::<LocalBoard>().history().moves(),
        ["e4", "e5"]
    );

    app.world_mut().write_message(ResetBoard);
    app.update();

    let board = app.world().resource::<LocalBoard>();
    assert!(board.history().is_empty());
    assert!(board.captured().is_empty());
}

#[test]
fn test_drops_ignored_on_home() {
    //! Drops written while no board is mounted do nothing

    let mut app = test_app(offline_config());
    app.update();

    app.world_mut().write_message(PieceDropped {
        from: parse_square("e2").unwrap(),
        to: parse_square("e4").unwrap(),
    });
    app.update();

    go_to(&mut app, Route::OneVsOne);
    assert!(app.world().resource::<LocalBoard>().history().is_empty());
}

#[test]
fn test_start_fen_from_config() {
    //! Boards start from a configured position; a bad one falls back

    let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
    let mut app = test_app(AppConfig {
        start_fen: Some(fen.to_string()),
        ..offline_config()
    });
    app.update();
    go_to(&mut app, Route::OneVsOne);
    assert_eq!(app.world().resource::<LocalBoard>().fen(), fen);

    let mut app = test_app(AppConfig {
        start_fen: Some("not a position".to_string()),
        ..offline_config()
    });
    app.update();
    go_to(&mut app, Route::OneVsOne);
    assert_eq!(
        app.world().resource::<LocalBoard>().fen(),
        llmchess::game::rules::ShakmatyRules::default().fen()
    );
}
