//! Common types and data structures

use std::fmt;

/// One of the four form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Distance,
    TankCost,
    TankLiters,
    AvgSpeed,
}

impl Field {
    /// Display order of the form
    pub const ALL: [Field; 4] = [
        Field::Distance,
        Field::TankCost,
        Field::TankLiters,
        Field::AvgSpeed,
    ];

    /// Stable identifier, also used as the egui widget id salt
    pub fn id(self) -> &'static str {
        match self {
            Field::Distance => "distance",
            Field::TankCost => "tankCost",
            Field::TankLiters => "tankLiters",
            Field::AvgSpeed => "avgSpeed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Distance => "Distance to travel (km):",
            Field::TankCost => "Cost of a full tank of fuel ($):",
            Field::TankLiters => "Number of liters in a full tank:",
            Field::AvgSpeed => "Average speed (km/h):",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Distance => "Enter distance in kilometers",
            Field::TankCost => "Enter cost of a full tank",
            Field::TankLiters => "Enter liters in a full tank",
            Field::AvgSpeed => "Enter average speed",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw text of the four inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub distance: String,
    pub tank_cost: String,
    pub tank_liters: String,
    pub avg_speed: String,
}

impl FormInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::TankCost => &self.tank_cost,
            Field::TankLiters => &self.tank_liters,
            Field::AvgSpeed => &self.avg_speed,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Distance => &mut self.distance,
            Field::TankCost => &mut self.tank_cost,
            Field::TankLiters => &mut self.tank_liters,
            Field::AvgSpeed => &mut self.avg_speed,
        }
    }
}

/// Display strings produced by a successful calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub time: String,
    pub liters: String,
    pub cost: String,
}

/// Where the form currently is in its edit/calculate cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    /// Last calculate attempt failed validation
    Invalid,
    Computed,
}
