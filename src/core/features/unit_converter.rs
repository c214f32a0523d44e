//! Linear unit conversion (length, volume, weight)
//!
//! Every conversion funnels through the category's base unit: the input is
//! scaled to the base, then scaled out to each other unit in the table.

pub mod tables;
pub mod parsing;

use crate::shared::error::{AppError, AppResult};
use crate::shared::format::format_number;
use crate::shared::types::{ConversionResult, UnitDTO};
use super::CategoryEngine;
use tables::{LengthUnit, LinearUnit, VolumeUnit, WeightUnit};

pub use parsing::parse_quantity;

fn lookup<U: LinearUnit>(unit_id: &str) -> AppResult<U> {
    U::from_id(unit_id).ok_or_else(|| AppError::UnknownUnit(unit_id.to_string()))
}

/// Convert `value` into every unit of the table except the source unit
pub fn convert_linear<U: LinearUnit>(value: f64, from_unit_id: &str) -> AppResult<Vec<ConversionResult>> {
    let from = lookup::<U>(from_unit_id)?;
    let base_value = from.to_base(value);

    tracing::debug!(
        category = U::CATEGORY,
        from = from_unit_id,
        value,
        base_value,
        "converting through base unit"
    );

    U::ALL
        .iter()
        .copied()
        .filter(|unit| *unit != from)
        .map(|unit| {
            let def = unit.definition();
            Ok(ConversionResult {
                unit_id: def.id.to_string(),
                unit_name: def.name.to_string(),
                symbol: def.symbol.to_string(),
                value: format_number(unit.from_base(base_value))?,
            })
        })
        .collect()
}

fn convert_linear_value<U: LinearUnit>(value: f64, from_unit_id: &str, to_unit_id: &str) -> AppResult<f64> {
    let from = lookup::<U>(from_unit_id)?;
    let to = lookup::<U>(to_unit_id)?;
    if from == to {
        return Ok(value);
    }
    Ok(to.from_base(from.to_base(value)))
}

fn linear_units<U: LinearUnit>() -> Vec<UnitDTO> {
    U::ALL
        .iter()
        .map(|unit| {
            let def = unit.definition();
            UnitDTO {
                id: def.id.to_string(),
                label: def.name.to_string(),
                symbol: def.symbol.to_string(),
                category: U::CATEGORY.to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthConverter;

impl CategoryEngine for LengthConverter {
    fn id(&self) -> &'static str {
        LengthUnit::CATEGORY
    }

    fn label(&self) -> &'static str {
        "Length"
    }

    fn convert(&self, value: f64, unit_id: &str) -> AppResult<Vec<ConversionResult>> {
        convert_linear::<LengthUnit>(value, unit_id)
    }

    fn convert_value(&self, value: f64, from_id: &str, to_id: &str) -> AppResult<f64> {
        convert_linear_value::<LengthUnit>(value, from_id, to_id)
    }

    fn units(&self) -> Vec<UnitDTO> {
        linear_units::<LengthUnit>()
    }

    fn default_unit_id(&self) -> &'static str {
        "meter"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeConverter;

impl CategoryEngine for VolumeConverter {
    fn id(&self) -> &'static str {
        VolumeUnit::CATEGORY
    }

    fn label(&self) -> &'static str {
        "Volume"
    }

    fn convert(&self, value: f64, unit_id: &str) -> AppResult<Vec<ConversionResult>> {
        convert_linear::<VolumeUnit>(value, unit_id)
    }

    fn convert_value(&self, value: f64, from_id: &str, to_id: &str) -> AppResult<f64> {
        convert_linear_value::<VolumeUnit>(value, from_id, to_id)
    }

    fn units(&self) -> Vec<UnitDTO> {
        linear_units::<VolumeUnit>()
    }

    fn default_unit_id(&self) -> &'static str {
        "liter"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightConverter;

impl CategoryEngine for WeightConverter {
    fn id(&self) -> &'static str {
        WeightUnit::CATEGORY
    }

    fn label(&self) -> &'static str {
        "Weight"
    }

    fn convert(&self, value: f64, unit_id: &str) -> AppResult<Vec<ConversionResult>> {
        convert_linear::<WeightUnit>(value, unit_id)
    }

    fn convert_value(&self, value: f64, from_id: &str, to_id: &str) -> AppResult<f64> {
        convert_linear_value::<WeightUnit>(value, from_id, to_id)
    }

    fn units(&self) -> Vec<UnitDTO> {
        linear_units::<WeightUnit>()
    }

    fn default_unit_id(&self) -> &'static str {
        "kilogram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(results: &'a [ConversionResult], unit_id: &str) -> &'a str {
        results
            .iter()
            .find(|r| r.unit_id == unit_id)
            .map(|r| r.value.as_str())
            .unwrap_or_else(|| panic!("no result for {}", unit_id))
    }

    #[test]
    fn test_one_meter() {
        let results = LengthConverter.convert(1.0, "meter").unwrap();
        assert_eq!(value_of(&results, "centimeter"), "100");
        assert_eq!(value_of(&results, "millimeter"), "1,000");
        assert_eq!(value_of(&results, "foot"), "3.28");
        assert_eq!(value_of(&results, "inch"), "39.37");
        // Sub-threshold values round to zero instead of being omitted
        assert_eq!(value_of(&results, "kilometer"), "0.00");
    }

    #[test]
    fn test_result_carries_unit_metadata() {
        let results = LengthConverter.convert(5.0, "kilometer").unwrap();
        let meter = results.iter().find(|r| r.unit_id == "meter").unwrap();
        assert_eq!(meter.unit_name, "Meters");
        assert_eq!(meter.symbol, "m");
        assert_eq!(meter.value, "5,000");
    }

    #[test]
    fn test_results_cover_every_other_unit() {
        let results = LengthConverter.convert(1.0, "meter").unwrap();
        let mut ids: Vec<&str> = results.iter().map(|r| r.unit_id.as_str()).collect();
        ids.sort();
        assert_eq!(
            ids,
            vec!["centimeter", "foot", "inch", "kilometer", "mile", "millimeter", "nautical-mile", "yard"]
        );
    }

    #[test]
    fn test_volume_gallon() {
        let results = VolumeConverter.convert(1.0, "gallon").unwrap();
        assert_eq!(value_of(&results, "liter"), "3.79");
        assert_eq!(value_of(&results, "quart"), "4");
        assert_eq!(value_of(&results, "cup"), "16");
        assert_eq!(value_of(&results, "fluid-ounce"), "128");
        assert_eq!(results.len(), VolumeUnit::ALL.len() - 1);
    }

    #[test]
    fn test_weight_kilogram() {
        let results = WeightConverter.convert(1.0, "kilogram").unwrap();
        assert_eq!(value_of(&results, "gram"), "1,000");
        assert_eq!(value_of(&results, "pound"), "2.20");
        assert_eq!(value_of(&results, "ounce"), "35.27");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        let results = LengthConverter.convert(-2.0, "kilometer").unwrap();
        assert_eq!(value_of(&results, "meter"), "-2,000");
    }

    #[test]
    fn test_unknown_unit_names_offender() {
        let err = WeightConverter.convert(1.0, "not-a-real-unit").unwrap_err();
        assert_eq!(err, AppError::UnknownUnit("not-a-real-unit".to_string()));
        assert!(err.to_string().contains("not-a-real-unit"));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let err = LengthConverter.convert(f64::NAN, "meter").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_unit_names_in_declared_order() {
        let names = WeightConverter.unit_names();
        assert_eq!(names.first().map(String::as_str), Some("Milligrams"));
        assert_eq!(names.len(), WeightUnit::ALL.len());
        assert_eq!(WeightConverter.unit_id_from_name("pounds"), Some("pound".to_string()));
    }
}
