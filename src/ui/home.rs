//! Home screen: heading and the two mode buttons

use crate::core::Route;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub fn home_ui(mut contexts: EguiContexts, mut next_route: ResMut<NextState<Route>>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.heading(egui::RichText::new("Chess").size(48.0));
            ui.add_space(40.0);

            if ui.button(egui::RichText::new("1 v 1").size(24.0)).clicked() {
                next_route.set(Route::OneVsOne);
            }

            ui.add_space(12.0);

            if ui.button(egui::RichText::new("1 v LLM").size(24.0)).clicked() {
                next_route.set(Route::VsLlm);
            }
        });
    });
}

/// Top bar with a way back to `/`
pub fn home_bar(ctx: &egui::Context, id: &'static str, title: &str, next_route: &mut NextState<Route>) {
    egui::TopBottomPanel::top(id).show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Home").clicked() {
                next_route.set(Route::Home);
            }
            ui.separator();
            ui.strong(title);
        });
        ui.add_space(4.0);
    });
}
