//! Application constants and fixed UI copy

pub const APP_NAME: &str = "Travel Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default fuel economy, distance units per unit of fuel (km per liter)
pub const DEFAULT_FUEL_ECONOMY: f64 = 10.0;
/// Default fuel price, currency per unit of fuel ($ per liter)
pub const DEFAULT_FUEL_PRICE: f64 = 2.50;

/// Shown in the blocking alert when any field fails validation
pub const INVALID_INPUT_ALERT: &str = "Please enter valid numbers for all fields.";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "travel-calculator.log";
