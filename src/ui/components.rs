//! Reusable UI components
//!
//! Standalone widgets for the calculator form and its results card.

use crate::theme;
use crate::types::{CalculationResult, Field};
use crate::utils::sanitize_numeric;
use eframe::egui;

/// Labeled numeric input. Characters a number cannot contain are dropped
/// as they are typed. `flagged` outlines the field in the error color.
/// Returns the text edit response.
pub fn input_field(
    ui: &mut egui::Ui,
    field: Field,
    value: &mut String,
    flagged: bool,
) -> egui::Response {
    ui.add(egui::Label::new(
        egui::RichText::new(field.label())
            .size(theme::FONT_LABEL)
            .color(theme::TEXT_SECONDARY),
    ));
    let border = if flagged {
        theme::STATUS_ERROR
    } else {
        theme::BORDER_DEFAULT
    };
    // Outer frame carries the border so it can turn red; the edit is frameless
    let response = egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, border))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id_salt(field.id())
                    .frame(false)
                    .hint_text(egui::RichText::new(field.placeholder()).color(theme::TEXT_DIM))
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::proportional(theme::FONT_BODY)),
            )
        })
        .inner;
    if response.changed() {
        let cleaned = sanitize_numeric(value);
        if cleaned != *value {
            *value = cleaned;
        }
    }
    ui.add_space(theme::SPACING_SM);
    response
}

/// Results card: the three estimate lines and the price disclaimer
pub fn results_card(ui: &mut egui::Ui, result: &CalculationResult, price_note: &str) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        for (label, value) in [
            ("Estimated Time", &result.time),
            ("Fuel Needed", &result.liters),
            ("Fuel Cost", &result.cost),
        ] {
            ui.label(
                egui::RichText::new(format!("{}: {}", label, value))
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            );
        }
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(price_note)
                .size(theme::FONT_CAPTION)
                .italics()
                .color(theme::TEXT_MUTED),
        );
    });
}
