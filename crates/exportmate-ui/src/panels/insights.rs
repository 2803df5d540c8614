//! Insights card and the fallback-mode warning banner.

use egui::{self, RichText, Stroke};
use exportmate_types::insights::Insights;
use crate::theme::*;

fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text.to_uppercase()).color(TEXT_SECONDARY).small());
}

fn bullet_list(ui: &mut egui::Ui, items: &[String]) {
    for item in items {
        ui.label(RichText::new(format!("• {}", item)).color(TEXT_PRIMARY));
    }
}

/// Render the summary / focus markets / next steps card. Nothing when `None`.
pub fn insights_panel(ui: &mut egui::Ui, insights: Option<&Insights>) {
    let Some(insights) = insights else {
        return;
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_title(ui, "Quick Summary");
            ui.label(RichText::new(&insights.summary).color(TEXT_PRIMARY));
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                section_title(&mut columns[0], "Focus Markets");
                bullet_list(&mut columns[0], &insights.focus_markets);

                section_title(&mut columns[1], "Immediate Next Steps");
                bullet_list(&mut columns[1], &insights.next_steps);
            });
        });
}

/// Amber banner shown while the endpoint runs in fallback mode.
pub fn warning_banner(ui: &mut egui::Ui, warning: Option<&str>) {
    let Some(warning) = warning else {
        return;
    };

    egui::Frame::default()
        .fill(WARNING_BG)
        .stroke(Stroke::new(1.0, WARNING_FG.linear_multiply(0.4)))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(warning).color(WARNING_FG).small());
        });
}
