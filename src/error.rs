//! Calculation errors

use crate::types::Field;
use thiserror::Error;

/// Errors raised while validating input or building a calculator config
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input in: {}", join_fields(.fields))]
    InvalidInput { fields: Vec<Field> },

    #[error("Invalid calculator config: fuel economy {fuel_economy}, fuel price {fuel_price}")]
    InvalidConfig { fuel_economy: f64, fuel_price: f64 },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_input_lists_fields() {
        let err = CalcError::InvalidInput {
            fields: vec![Field::Distance, Field::AvgSpeed],
        };
        assert_eq!(err.to_string(), "Invalid input in: distance, avgSpeed");
    }
}
