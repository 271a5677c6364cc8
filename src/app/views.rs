//! Main view: heading, the four inputs, Calculate button and results

use super::App;
use crate::theme;
use crate::types::Field;
use crate::ui::components::{input_field, results_card};
use eframe::egui;

impl App {
    pub(crate) fn render_calculator(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(format!(
                                "{}  Travel Calculator  {}",
                                egui_phosphor::regular::CAR,
                                egui_phosphor::regular::CLOCK
                            ))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                        );
                        ui.add_space(theme::SPACING_LG);
                    });

                    ui.vertical_centered(|ui| {
                        ui.set_max_width(theme::FORM_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            self.render_form(ui);
                        });
                    });
                });
            });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;

        for field in Field::ALL {
            let mut value = self.form.inputs().get(field).to_owned();
            let response = input_field(ui, field, &mut value, self.field_flagged(field));
            if response.changed() {
                self.form.set_field(field, value);
            }
            if field == Field::Distance && self.focus_first_field {
                self.focus_first_field = false;
                response.request_focus();
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
        }

        ui.add_space(theme::SPACING_MD);
        let button = ui.add_sized(
            [ui.available_width(), theme::BUTTON_HEIGHT_LARGE],
            theme::button_accent(format!("{}  Calculate", egui_phosphor::regular::CALCULATOR)),
        );
        if button.clicked() {
            submit = true;
        }

        // Alert modal open: swallow the submit so Enter can't re-trigger it
        if submit && !self.alert.is_open() {
            self.handle_calculate();
        }

        if let Some(result) = self.form.result() {
            ui.add_space(theme::SPACING_LG);
            results_card(ui, result, &self.form.config().price_note());
        }
    }
}
