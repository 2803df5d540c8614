//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 250, 250);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SURFACE: Color32 = Color32::from_rgb(244, 244, 245);
pub const BORDER: Color32 = Color32::from_rgb(228, 228, 231);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(39, 39, 42);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(113, 113, 122);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_MUTED: Color32 = Color32::from_rgb(96, 165, 250);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(59, 130, 246);
pub const WARNING_BG: Color32 = Color32::from_rgb(255, 251, 235);
pub const WARNING_FG: Color32 = Color32::from_rgb(180, 83, 9);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(16);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_MUTED);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
