//! Drag-and-drop chessboard widget
//!
//! Draws a [`BoardSnapshot`] as an 8x8 grid, rank 8 at the top, and reports
//! a [`PieceDropped`] when a piece is dragged from one square and released
//! over another. The widget never judges legality; the board resource does.
//!
//! A flipped board puts rank 1 at the top, for the player on Black.

use super::styles::UiColors;
use crate::game::types::{BoardPiece, BoardSnapshot, BoardSquare, PieceColor};
use crate::game::PieceDropped;
use bevy_egui::egui;

/// Largest board edge in points
const MAX_BOARD_SIZE: f32 = 560.0;
const MIN_BOARD_SIZE: f32 = 240.0;

/// One frame of the board
pub struct BoardWidget<'a> {
    snapshot: &'a BoardSnapshot,
    check: Option<BoardSquare>,
    flipped: bool,
    interactive: bool,
    id_salt: &'static str,
}

impl<'a> BoardWidget<'a> {
    pub fn new(snapshot: &'a BoardSnapshot, id_salt: &'static str) -> Self {
        Self {
            snapshot,
            check: None,
            flipped: false,
            interactive: true,
            id_salt,
        }
    }

    /// Draw from Black's side
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// When false pieces cannot be picked up and the board is dimmed
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Highlight `square` as holding a king in check
    pub fn check(mut self, square: Option<BoardSquare>) -> Self {
        self.check = square;
        self
    }

    /// Draw the board, returning the drop completed this frame, if any
    pub fn show(self, ui: &mut egui::Ui) -> Option<PieceDropped> {
        let available = ui.available_size();
        let size = available
            .x
            .min(available.y)
            .clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let cell = size / 8.0;

        let (board_rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
        let painter = ui.painter_at(board_rect);
        let dragged_from = egui::DragAndDrop::payload::<BoardSquare>(ui.ctx()).map(|from| *from);

        let mut dropped = None;

        for row in 0..8 {
            for col in 0..8 {
                let Some(square) = square_at(row, col, self.flipped) else {
                    continue;
                };
                let rect = egui::Rect::from_min_size(
                    board_rect.min + egui::vec2(col as f32 * cell, row as f32 * cell),
                    egui::vec2(cell, cell),
                );

                let fill = if square.is_light() {
                    UiColors::SQUARE_LIGHT
                } else {
                    UiColors::SQUARE_DARK
                };
                painter.rect_filled(rect, 0.0, fill);

                if self.check == Some(square) {
                    painter.rect_filled(rect, 0.0, UiColors::CHECK_OVERLAY);
                }

                let response = ui.interact(
                    rect,
                    ui.id().with((self.id_salt, row, col)),
                    egui::Sense::drag(),
                );

                let piece = self.snapshot.piece_at(square);
                if piece.is_some() && self.interactive {
                    response.dnd_set_drag_payload(square);
                }

                if response.dnd_hover_payload::<BoardSquare>().is_some() {
                    painter.rect_filled(rect, 0.0, UiColors::DROP_TARGET);
                }

                if let Some(from) = response.dnd_release_payload::<BoardSquare>() {
                    dropped = Some(PieceDropped {
                        from: *from,
                        to: square,
                    });
                }

                if let Some(piece) = piece {
                    // The dragged piece follows the pointer instead
                    if dragged_from != Some(square) {
                        paint_piece(&painter, rect.center(), cell, piece);
                    }
                }

                paint_coordinates(&painter, rect, square, row, col, cell);
            }
        }

        if !self.interactive {
            painter.rect_filled(board_rect, 0.0, UiColors::BOARD_DIMMED);
        }

        if let Some(from) = dragged_from {
            if let (Some(piece), Some(pointer)) = (
                self.snapshot.piece_at(from),
                ui.ctx().pointer_interact_pos(),
            ) {
                let layer = egui::LayerId::new(egui::Order::Tooltip, ui.id().with(self.id_salt));
                paint_piece(&ui.ctx().layer_painter(layer), pointer, cell, piece);
            }
        }

        dropped
    }
}

/// Square drawn at screen `row`/`col`, row 0 being the top of the board
pub fn square_at(row: usize, col: usize, flipped: bool) -> Option<BoardSquare> {
    if flipped {
        BoardSquare::from_grid(7usize.checked_sub(row)?, 7usize.checked_sub(col)?)
    } else {
        BoardSquare::from_grid(row, col)
    }
}

/// Disc with the piece letter, light for White and dark for Black
pub fn paint_piece(painter: &egui::Painter, center: egui::Pos2, cell: f32, piece: BoardPiece) {
    let (fill, text) = match piece.color {
        PieceColor::White => (UiColors::PIECE_WHITE, UiColors::PIECE_BLACK),
        PieceColor::Black => (UiColors::PIECE_BLACK, UiColors::PIECE_WHITE),
    };
    painter.circle(
        center,
        cell * 0.38,
        fill,
        egui::Stroke::new((cell * 0.03).max(1.0), UiColors::PIECE_OUTLINE),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        piece.letter().to_ascii_uppercase(),
        egui::FontId::proportional(cell * 0.42),
        text,
    );
}

fn paint_coordinates(
    painter: &egui::Painter,
    rect: egui::Rect,
    square: BoardSquare,
    row: usize,
    col: usize,
    cell: f32,
) {
    let font = egui::FontId::monospace((cell * 0.16).max(8.0));
    let inset = cell * 0.06;
    let label = square.to_string();

    if col == 0 {
        painter.text(
            rect.left_top() + egui::vec2(inset, inset),
            egui::Align2::LEFT_TOP,
            &label[1..],
            font.clone(),
            UiColors::COORDINATE,
        );
    }
    if row == 7 {
        painter.text(
            rect.right_bottom() - egui::vec2(inset, inset),
            egui::Align2::RIGHT_BOTTOM,
            &label[..1],
            font,
            UiColors::COORDINATE,
        );
    }
}
