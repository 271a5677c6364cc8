//! Modal dialogs (invalid-input alert)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    /// Blocking alert. The backdrop eats input to the form until the user
    /// acknowledges with OK, Escape or a click outside.
    pub(crate) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.pending().map(str::to_owned) else {
            return;
        };

        let modal_area = egui::Modal::default_area(egui::Id::new("invalid_input_alert"))
            .default_width(theme::ALERT_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("invalid_input_alert"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut acknowledged = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::ALERT_WIDTH);
            ui.set_max_width(theme::ALERT_WIDTH);

            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(32.0)
                        .color(theme::STATUS_WARNING),
                );
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&message)
                            .size(theme::FONT_HEADING)
                            .color(theme::TEXT_PRIMARY),
                    )
                    .wrap(),
                );
                ui.add_space(theme::SPACING_XL);

                // Focused so Enter/Space acknowledges
                let ok = ui.add(theme::button(format!("{}  OK", egui_phosphor::regular::CHECK)));
                ok.request_focus();
                if ok.clicked() {
                    acknowledged = true;
                }
            });
        });

        if acknowledged || modal_response.should_close() {
            self.alert.acknowledge();
        }
    }
}
