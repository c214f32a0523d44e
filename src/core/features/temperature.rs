//! Temperature conversion
//!
//! Temperature is affine, so there is no shared base unit. Each pair of
//! scales has its own direct formula.

use crate::shared::error::{AppError, AppResult};
use crate::shared::format::format_number;
use crate::shared::types::{ConversionResult, UnitDTO};
use super::CategoryEngine;

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn from_id(id: &str) -> AppResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.id() == id)
            .ok_or_else(|| AppError::UnknownUnit(id.to_string()))
    }
}

/// Direct pairwise conversion between two scales
pub fn convert_scale(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureConverter;

impl CategoryEngine for TemperatureConverter {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn label(&self) -> &'static str {
        "Temperature"
    }

    fn convert(&self, value: f64, unit_id: &str) -> AppResult<Vec<ConversionResult>> {
        let from = TemperatureUnit::from_id(unit_id)?;
        tracing::debug!(from = unit_id, value, "converting temperature");

        TemperatureUnit::ALL
            .iter()
            .copied()
            .filter(|unit| *unit != from)
            .map(|unit| {
                Ok(ConversionResult {
                    unit_id: unit.id().to_string(),
                    unit_name: unit.name().to_string(),
                    symbol: unit.symbol().to_string(),
                    value: format_number(convert_scale(value, from, unit))?,
                })
            })
            .collect()
    }

    fn convert_value(&self, value: f64, from_id: &str, to_id: &str) -> AppResult<f64> {
        let from = TemperatureUnit::from_id(from_id)?;
        let to = TemperatureUnit::from_id(to_id)?;
        Ok(convert_scale(value, from, to))
    }

    fn units(&self) -> Vec<UnitDTO> {
        TemperatureUnit::ALL
            .iter()
            .map(|unit| UnitDTO {
                id: unit.id().to_string(),
                label: unit.name().to_string(),
                symbol: unit.symbol().to_string(),
                category: self.id().to_string(),
            })
            .collect()
    }

    fn default_unit_id(&self) -> &'static str {
        "celsius"
    }
}
