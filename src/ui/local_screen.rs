//! `/1v1` screen: board, turn, move history, captured pieces and reset

use super::board_widget::{paint_piece, BoardWidget};
use super::home::home_bar;
use super::styles::UiColors;
use crate::core::Route;
use crate::game::types::{BoardPiece, PieceColor};
use crate::game::{LocalBoard, PieceDropped, ResetBoard};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const CAPTURE_ICON: f32 = 22.0;

pub fn local_board_ui(
    mut contexts: EguiContexts,
    board: Res<LocalBoard>,
    mut drops: MessageWriter<PieceDropped>,
    mut resets: MessageWriter<ResetBoard>,
    mut next_route: ResMut<NextState<Route>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    home_bar(ctx, "local_top_bar", "1 v 1", &mut next_route);

    egui::SidePanel::right("local_side_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(format!("{} to move", board.turn()));
            if board.check_square().is_some() && board.outcome().is_none() {
                ui.colored_label(UiColors::DANGER, "Check!");
            }
            if let Some(outcome) = board.outcome() {
                ui.colored_label(
                    UiColors::ACCENT_GOLD,
                    egui::RichText::new(outcome.message()).size(18.0),
                );
            }

            ui.add_space(8.0);
            if ui.button("Reset Game").clicked() {
                resets.write(ResetBoard);
            }

            ui.separator();
            ui.strong("Move History");
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    egui::Grid::new("local_history")
                        .num_columns(3)
                        .striped(true)
                        .show(ui, |ui| {
                            for row in board.history().rows() {
                                ui.label(format!("{}.", row.number));
                                ui.monospace(row.white);
                                ui.monospace(row.black.unwrap_or(""));
                                ui.end_row();
                            }
                        });
                });

            ui.separator();
            ui.strong("Captured Pieces");
            for color in [PieceColor::White, PieceColor::Black] {
                ui.label(format!("{} lost:", color));
                captured_row(ui, board.captured().taken_from(color).map(|t| BoardPiece::new(t, color)));
            }

            let advantage = board.captured().material_advantage();
            let balance = match advantage {
                0 => "Material: even".to_string(),
                n if n > 0 => format!("Material: White +{}", n),
                n => format!("Material: Black +{}", -n),
            };
            ui.colored_label(UiColors::TEXT_SECONDARY, balance);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            let widget = BoardWidget::new(board.snapshot(), "local_board").check(board.check_square());
            if let Some(dropped) = widget.show(ui) {
                drops.write(dropped);
            }
        });
    });
}

fn captured_row(ui: &mut egui::Ui, pieces: impl Iterator<Item = BoardPiece>) {
    ui.horizontal_wrapped(|ui| {
        for piece in pieces {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(CAPTURE_ICON, CAPTURE_ICON), egui::Sense::hover());
            paint_piece(ui.painter(), rect.center(), CAPTURE_ICON, piece);
        }
    });
}
