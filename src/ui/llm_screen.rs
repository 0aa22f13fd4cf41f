//! `/vs-llm` screen: board, status line and the current FEN

use super::board_widget::BoardWidget;
use super::home::home_bar;
use super::styles::UiColors;
use crate::core::Route;
use crate::game::types::PieceColor;
use crate::game::{LlmBoard, LlmStatus, PieceDropped};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub fn llm_board_ui(
    mut contexts: EguiContexts,
    board: Res<LlmBoard>,
    mut drops: MessageWriter<PieceDropped>,
    mut next_route: ResMut<NextState<Route>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if board.status() == LlmStatus::Thinking {
        // Keep repainting so the reply shows up without pointer movement
        ctx.request_repaint();
    }

    home_bar(ctx, "llm_top_bar", "1 v LLM", &mut next_route);

    egui::TopBottomPanel::bottom("llm_status_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        let status = board.status();
        let color = match status {
            LlmStatus::InvalidMove | LlmStatus::ServiceError => UiColors::DANGER,
            LlmStatus::YourMove | LlmStatus::Thinking => ui.visuals().strong_text_color(),
        };
        ui.label(egui::RichText::new(status.message()).size(18.0).color(color));
        if let Some(outcome) = board.outcome() {
            ui.colored_label(UiColors::ACCENT_GOLD, outcome.message());
        }
        ui.horizontal(|ui| {
            ui.colored_label(UiColors::TEXT_SECONDARY, format!("You play {}", board.human()));
            ui.separator();
            ui.colored_label(UiColors::TEXT_SECONDARY, "FEN");
            ui.add(egui::Label::new(egui::RichText::new(board.fen()).monospace()).selectable(true));
        });
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            let widget = BoardWidget::new(board.snapshot(), "llm_board")
                .check(board.check_square())
                .flipped(board.human() == PieceColor::Black)
                .interactive(board.accepts_drops());
            if let Some(dropped) = widget.show(ui) {
                drops.write(dropped);
            }
        });
    });
}
