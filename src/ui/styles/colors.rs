//! Color palette for the board screens
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Board and panel colors
pub struct UiColors;

impl UiColors {
    // === Board ===

    /// Light square
    pub const SQUARE_LIGHT: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xd9, 0xb5);

    /// Dark square
    pub const SQUARE_DARK: egui::Color32 = egui::Color32::from_rgb(0xb5, 0x88, 0x63);

    /// Square under a dragged piece
    pub const DROP_TARGET: egui::Color32 = egui::Color32::from_rgba_premultiplied(140, 140, 140, 160);

    /// Overlay on the square of a king in check
    pub const CHECK_OVERLAY: egui::Color32 = egui::Color32::from_rgba_premultiplied(102, 0, 0, 102);

    /// Veil over the board while it takes no drops
    pub const BOARD_DIMMED: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 60);

    /// Rank and file labels
    pub const COORDINATE: egui::Color32 = egui::Color32::from_rgb(90, 60, 40);

    // === Pieces ===

    pub const PIECE_WHITE: egui::Color32 = egui::Color32::from_rgb(250, 250, 245);

    pub const PIECE_BLACK: egui::Color32 = egui::Color32::from_rgb(35, 35, 40);

    pub const PIECE_OUTLINE: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);

    // === Text ===

    /// Secondary text (status lines, FEN)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(160, 160, 165);

    /// Error/danger color (red)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    /// Game over banner
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);
}
