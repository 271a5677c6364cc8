//! App module - contains the main application state and logic

mod modals;
mod views;

use crate::calculator::{is_valid_number, CalculatorConfig};
use crate::constants::{DEFAULT_FUEL_ECONOMY, DEFAULT_FUEL_PRICE};
use crate::form::CalculatorForm;
use crate::notify::AlertSlot;
use crate::settings::Settings;
use crate::theme;
use crate::types::{Field, FormPhase};
use eframe::egui;
use std::path::PathBuf;
use tracing::warn;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: CalculatorForm,
    pub(crate) alert: AlertSlot,
    pub(crate) focus_first_field: bool,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let config = CalculatorConfig::new(DEFAULT_FUEL_ECONOMY, DEFAULT_FUEL_PRICE)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default calculator config");
                CalculatorConfig::default()
            });
        Self::with_config(config, settings, data_dir)
    }

    pub(crate) fn with_config(config: CalculatorConfig, settings: &Settings, data_dir: PathBuf) -> Self {
        Self {
            form: CalculatorForm::new(config),
            alert: AlertSlot::default(),
            focus_first_field: true,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: settings.window_pos().is_none(),
            data_dir,
        }
    }

    /// Run the calculate action. Failures are already surfaced through the
    /// alert slot, so only the log sees the error here.
    pub(crate) fn handle_calculate(&mut self) {
        if let Err(e) = self.form.calculate(&mut self.alert) {
            warn!(error = %e, "Rejected calculation input");
        }
    }

    /// Outline a field while the last calculate attempt was rejected and
    /// the field's current text is still not a valid number.
    pub(crate) fn field_flagged(&self, field: Field) -> bool {
        self.form.phase() == FormPhase::Invalid && !is_valid_number(self.form.inputs().get(field))
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INVALID_INPUT_ALERT;
    use pretty_assertions::assert_eq;

    fn app(dir: &std::path::Path) -> App {
        App::with_config(CalculatorConfig::default(), &Settings::default(), dir.to_path_buf())
    }

    #[test]
    fn test_invalid_calculate_opens_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.handle_calculate();
        assert_eq!(app.alert.pending(), Some(INVALID_INPUT_ALERT));
        assert_eq!(app.form.phase(), FormPhase::Invalid);
        assert!(app.form.result().is_none());
    }

    #[test]
    fn test_valid_calculate_sets_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        for (field, value) in [
            (Field::Distance, "100"),
            (Field::TankCost, "80"),
            (Field::TankLiters, "50"),
            (Field::AvgSpeed, "50"),
        ] {
            app.form.set_field(field, value);
        }

        app.handle_calculate();
        assert!(!app.alert.is_open());
        assert_eq!(app.form.result().map(|r| r.cost.as_str()), Some("$25.00"));
    }

    #[test]
    fn test_rejected_fields_are_flagged_until_edited() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        for (field, value) in [
            (Field::Distance, "100"),
            (Field::TankCost, "80"),
            (Field::TankLiters, "abc"),
            (Field::AvgSpeed, "0"),
        ] {
            app.form.set_field(field, value);
        }
        assert!(Field::ALL.iter().all(|f| !app.field_flagged(*f)));

        app.handle_calculate();
        let flagged: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| app.field_flagged(*f))
            .collect();
        assert_eq!(flagged, vec![Field::TankLiters, Field::AvgSpeed]);

        // Any edit leaves the Invalid phase and clears the outlines
        app.form.set_field(Field::AvgSpeed, "60");
        assert!(Field::ALL.iter().all(|f| !app.field_flagged(*f)));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = CalculatorConfig::new(DEFAULT_FUEL_ECONOMY, DEFAULT_FUEL_PRICE).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_save_settings_writes_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.window_pos = Some(egui::pos2(3.0, 4.0));
        app.window_size = Some(egui::vec2(500.0, 600.0));
        app.save_settings();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_pos(), Some(egui::pos2(3.0, 4.0)));
        assert_eq!(loaded.window_size(), Some(egui::vec2(500.0, 600.0)));
    }

    #[test]
    fn test_restored_position_skips_centering() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_x: Some(1.0),
            window_y: Some(2.0),
            ..Default::default()
        };
        let app = App::with_config(CalculatorConfig::default(), &settings, dir.path().to_path_buf());
        assert!(!app.needs_center);
        assert!(self::app(dir.path()).needs_center);
    }
}
