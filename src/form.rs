//! Calculator form session: input text, last result and the phase machine

use crate::calculator::{self, CalculatorConfig};
use crate::constants::INVALID_INPUT_ALERT;
use crate::error::CalcError;
use crate::notify::Notifier;
use crate::types::{CalculationResult, Field, FormInputs, FormPhase};
use tracing::debug;

/// One live form. Inputs and result are independent slots: editing a
/// field never clears the result, and a failed calculate never touches it.
#[derive(Debug, Default)]
pub struct CalculatorForm {
    inputs: FormInputs,
    result: Option<CalculationResult>,
    phase: FormPhase,
    config: CalculatorConfig,
}

impl CalculatorForm {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.inputs.get_mut(field) = value.into();
        self.mark_edited();
    }

    fn mark_edited(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Validate and compute. On failure the notifier gets the alert text
    /// and the previous result is kept.
    pub fn calculate(
        &mut self,
        notifier: &mut dyn Notifier,
    ) -> Result<&CalculationResult, CalcError> {
        match calculator::calculate(&self.inputs, &self.config) {
            Ok(result) => {
                debug!(
                    time = %result.time,
                    liters = %result.liters,
                    cost = %result.cost,
                    "Calculation succeeded"
                );
                self.phase = FormPhase::Computed;
                Ok(self.result.insert(result))
            }
            Err(e) => {
                debug!(error = %e, "Calculation rejected");
                self.phase = FormPhase::Invalid;
                notifier.notify(INVALID_INPUT_ALERT);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Notifier for Recorder {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_owned());
        }
    }

    fn filled(distance: &str, avg_speed: &str) -> CalculatorForm {
        let mut form = CalculatorForm::default();
        form.set_field(Field::Distance, distance);
        form.set_field(Field::TankCost, "80");
        form.set_field(Field::TankLiters, "50");
        form.set_field(Field::AvgSpeed, avg_speed);
        form
    }

    #[test]
    fn test_starts_idle_without_result() {
        let form = CalculatorForm::default();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.result(), None);
    }

    #[test]
    fn test_edit_moves_to_editing() {
        let mut form = CalculatorForm::default();
        form.set_field(Field::Distance, "12");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.inputs().distance, "12");
    }

    #[test]
    fn test_successful_calculate() {
        let mut form = filled("100", "50");
        let mut alerts = Recorder::default();

        let result = form.calculate(&mut alerts).unwrap().clone();
        assert_eq!(
            result,
            CalculationResult {
                time: "2.00 hours".into(),
                liters: "10.00 liters".into(),
                cost: "$25.00".into(),
            }
        );
        assert_eq!(form.phase(), FormPhase::Computed);
        assert!(alerts.0.is_empty());
    }

    #[test]
    fn test_failed_calculate_alerts_once_and_keeps_result() {
        let mut form = filled("100", "50");
        let mut alerts = Recorder::default();
        form.calculate(&mut alerts).unwrap();
        let before = form.result().cloned();

        form.set_field(Field::AvgSpeed, "0");
        let err = form.calculate(&mut alerts).unwrap_err();

        assert_eq!(
            err,
            CalcError::InvalidInput {
                fields: vec![Field::AvgSpeed]
            }
        );
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(alerts.0, vec![INVALID_INPUT_ALERT.to_string()]);
        assert_eq!(form.result().cloned(), before);
    }

    #[test]
    fn test_failed_first_calculate_leaves_no_result() {
        let mut form = CalculatorForm::default();
        let mut alerts = Recorder::default();
        assert!(form.calculate(&mut alerts).is_err());
        assert_eq!(form.result(), None);
        assert_eq!(alerts.0.len(), 1);
    }

    #[test]
    fn test_edit_keeps_previous_result() {
        let mut form = filled("100", "50");
        form.calculate(&mut Recorder::default()).unwrap();

        form.set_field(Field::Distance, "abc");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.result().map(|r| r.time.as_str()), Some("2.00 hours"));
    }

    #[test]
    fn test_tank_edits_do_not_change_result() {
        let mut form = filled("300", "75");
        let first = form.calculate(&mut Recorder::default()).unwrap().clone();

        form.set_field(Field::TankCost, "12.34");
        form.set_field(Field::TankLiters, "99");
        let second = form.calculate(&mut Recorder::default()).unwrap().clone();

        assert_eq!(first, second);
    }

    #[test]
    fn test_recalculate_replaces_result() {
        let mut form = filled("100", "50");
        let mut alerts = Recorder::default();
        form.calculate(&mut alerts).unwrap();

        form.set_field(Field::Distance, "1");
        form.set_field(Field::AvgSpeed, "3");
        let result = form.calculate(&mut alerts).unwrap();
        assert_eq!(result.time, "0.33 hours");
        assert_eq!(result.liters, "0.10 liters");
        assert_eq!(result.cost, "$0.25");
    }
}
