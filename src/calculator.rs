//! Input validation and the travel estimate itself
//!
//! Everything here is pure: no UI, no I/O. The form in `crate::form`
//! drives these functions and owns the resulting state.

use crate::constants::{DEFAULT_FUEL_ECONOMY, DEFAULT_FUEL_PRICE};
use crate::error::CalcError;
use crate::types::{CalculationResult, Field, FormInputs};

/// Fuel constants applied to every estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    /// Kilometers per liter
    pub fuel_economy: f64,
    /// Dollars per liter
    pub fuel_price: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            fuel_economy: DEFAULT_FUEL_ECONOMY,
            fuel_price: DEFAULT_FUEL_PRICE,
        }
    }
}

impl CalculatorConfig {
    /// Economy must be finite and positive; price finite and not negative.
    pub fn new(fuel_economy: f64, fuel_price: f64) -> Result<Self, CalcError> {
        let economy_ok = fuel_economy.is_finite() && fuel_economy > 0.0;
        let price_ok = fuel_price.is_finite() && fuel_price >= 0.0;
        if economy_ok && price_ok {
            Ok(Self {
                fuel_economy,
                fuel_price,
            })
        } else {
            Err(CalcError::InvalidConfig {
                fuel_economy,
                fuel_price,
            })
        }
    }

    /// Disclaimer line shown under the results
    pub fn price_note(&self) -> String {
        format!("Fuel price is calculated at ${:.2} per liter.", self.fuel_price)
    }
}

/// All four inputs, parsed and known to be finite and > 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInputs {
    pub distance: f64,
    pub tank_cost: f64,
    pub tank_liters: f64,
    pub avg_speed: f64,
}

/// Unformatted estimate values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub hours: f64,
    pub liters: f64,
    pub cost: f64,
}

impl Estimate {
    pub fn to_result(&self) -> CalculationResult {
        CalculationResult {
            time: format!("{:.2} hours", self.hours),
            liters: format!("{:.2} liters", self.liters),
            cost: format!("${:.2}", self.cost),
        }
    }
}

/// Parse a raw field value, accepting only finite numbers greater than zero.
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

pub fn is_valid_number(raw: &str) -> bool {
    parse_positive(raw).is_some()
}

/// Check every field, reporting all of the ones that fail.
pub fn validate(inputs: &FormInputs) -> Result<ValidatedInputs, CalcError> {
    let invalid: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| !is_valid_number(inputs.get(*f)))
        .collect();
    if !invalid.is_empty() {
        return Err(CalcError::InvalidInput { fields: invalid });
    }

    let value = |f: Field| parse_positive(inputs.get(f)).unwrap_or_default();
    Ok(ValidatedInputs {
        distance: value(Field::Distance),
        tank_cost: value(Field::TankCost),
        tank_liters: value(Field::TankLiters),
        avg_speed: value(Field::AvgSpeed),
    })
}

/// Travel time and fuel figures for a validated trip.
///
/// Tank cost and tank capacity do not take part in the estimate.
pub fn estimate(inputs: &ValidatedInputs, config: &CalculatorConfig) -> Estimate {
    let hours = inputs.distance / inputs.avg_speed;
    let liters = inputs.distance / config.fuel_economy;
    Estimate {
        hours,
        liters,
        cost: liters * config.fuel_price,
    }
}

/// Validate then estimate, producing the display strings.
pub fn calculate(
    inputs: &FormInputs,
    config: &CalculatorConfig,
) -> Result<CalculationResult, CalcError> {
    let validated = validate(inputs)?;
    let est = estimate(&validated, config);
    if !est.hours.is_finite() {
        return Err(CalcError::InvalidInput {
            fields: vec![Field::Distance, Field::AvgSpeed],
        });
    }
    if !est.liters.is_finite() || !est.cost.is_finite() {
        return Err(CalcError::InvalidInput {
            fields: vec![Field::Distance],
        });
    }
    Ok(est.to_result())
}
