//! Category engines with enum dispatch
//!
//! Each conversion category implements [`CategoryEngine`]. The [`Category`]
//! enum uses enum_dispatch for static dispatch, so a caller holds a list of
//! categories instead of branching on a tab id.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ConversionResult, UnitDTO};
use enum_dispatch::enum_dispatch;

pub mod unit_converter;
pub mod temperature;
pub mod time_converter;
pub mod date_calculator;
pub mod number_relation;

use unit_converter::{LengthConverter, VolumeConverter, WeightConverter};
use temperature::TemperatureConverter;

#[enum_dispatch]
pub trait CategoryEngine {
    /// Stable category id (e.g. "length")
    fn id(&self) -> &'static str;

    /// Display label (e.g. "Length")
    fn label(&self) -> &'static str;

    /// Convert `value` given in `unit_id` into every other unit of the category.
    ///
    /// The result never contains the source unit. Unknown ids fail with
    /// `AppError::UnknownUnit`.
    fn convert(&self, value: f64, unit_id: &str) -> AppResult<Vec<ConversionResult>>;

    /// Convert `value` from one unit of the category into another.
    fn convert_value(&self, value: f64, from_id: &str, to_id: &str) -> AppResult<f64>;

    /// Units in declared order
    fn units(&self) -> Vec<UnitDTO>;

    /// Id of the unit preselected when no preference is stored
    fn default_unit_id(&self) -> &'static str;

    fn unit_names(&self) -> Vec<String> {
        self.units().into_iter().map(|unit| unit.label).collect()
    }

    /// Case-insensitive reverse lookup from display name to unit id
    fn unit_id_from_name(&self, name: &str) -> Option<String> {
        let name = name.trim();
        self.units()
            .into_iter()
            .find(|unit| unit.label.eq_ignore_ascii_case(name))
            .map(|unit| unit.id)
    }

    fn has_unit(&self, unit_id: &str) -> bool {
        self.units().iter().any(|unit| unit.id == unit_id)
    }
}

/// All unit categories known to the calculator
#[enum_dispatch(CategoryEngine)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length(LengthConverter),
    Volume(VolumeConverter),
    Weight(WeightConverter),
    Temperature(TemperatureConverter),
}

impl Category {
    pub fn length() -> Self {
        Category::Length(LengthConverter)
    }

    pub fn volume() -> Self {
        Category::Volume(VolumeConverter)
    }

    pub fn weight() -> Self {
        Category::Weight(WeightConverter)
    }

    pub fn temperature() -> Self {
        Category::Temperature(TemperatureConverter)
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::length(),
            Self::volume(),
            Self::weight(),
            Self::temperature(),
        ]
    }

    pub fn from_id(id: &str) -> AppResult<Self> {
        let id = id.trim();
        Self::all()
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| AppError::UnknownCategory(id.to_string()))
    }

    /// Category owning `unit_id`, if any
    pub fn of_unit(unit_id: &str) -> Option<Self> {
        Self::all().into_iter().find(|category| category.has_unit(unit_id))
    }
}

pub fn convert_length(value: f64, from_unit_id: &str) -> AppResult<Vec<ConversionResult>> {
    LengthConverter.convert(value, from_unit_id)
}

pub fn convert_volume(value: f64, from_unit_id: &str) -> AppResult<Vec<ConversionResult>> {
    VolumeConverter.convert(value, from_unit_id)
}

pub fn convert_weight(value: f64, from_unit_id: &str) -> AppResult<Vec<ConversionResult>> {
    WeightConverter.convert(value, from_unit_id)
}

pub fn convert_temperature(value: f64, from_unit_id: &str) -> AppResult<Vec<ConversionResult>> {
    TemperatureConverter.convert(value, from_unit_id)
}

pub fn get_length_unit_names() -> Vec<String> {
    LengthConverter.unit_names()
}

pub fn get_volume_unit_names() -> Vec<String> {
    VolumeConverter.unit_names()
}

pub fn get_weight_unit_names() -> Vec<String> {
    WeightConverter.unit_names()
}

pub fn get_temperature_unit_names() -> Vec<String> {
    TemperatureConverter.unit_names()
}

/// Reverse lookup across every category
pub fn get_unit_id_from_name(name: &str) -> Option<String> {
    Category::all()
        .iter()
        .find_map(|category| category.unit_id_from_name(name))
}

/// Every unit of every category, sorted by category then label
pub fn get_all_units() -> Vec<UnitDTO> {
    let mut units: Vec<UnitDTO> = Category::all()
        .iter()
        .flat_map(|category| category.units())
        .collect();

    units.sort_by(|a, b| {
        a.category.cmp(&b.category)
            .then_with(|| a.label.cmp(&b.label))
    });

    units
}

/// Convert between two units, which must share a category
pub fn convert_between(value: f64, from_unit_id: &str, to_unit_id: &str) -> AppResult<f64> {
    let from_category = Category::of_unit(from_unit_id)
        .ok_or_else(|| AppError::UnknownUnit(from_unit_id.to_string()))?;
    let to_category = Category::of_unit(to_unit_id)
        .ok_or_else(|| AppError::UnknownUnit(to_unit_id.to_string()))?;

    if from_category != to_category {
        return Err(AppError::IncompatibleUnits(format!(
            "Cannot convert between {} ({}) and {} ({})",
            from_unit_id,
            from_category.id(),
            to_unit_id,
            to_category.id()
        )));
    }

    from_category.convert_value(value, from_unit_id, to_unit_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_rejects_unknown_unit() {
        for category in Category::all() {
            let err = category.convert(1.0, "not-a-real-unit").unwrap_err();
            assert_eq!(err, AppError::UnknownUnit("not-a-real-unit".to_string()));
        }
    }

    #[test]
    fn test_every_category_excludes_source_unit() {
        for category in Category::all() {
            let units = category.units();
            for unit in &units {
                let results = category.convert(12.5, &unit.id).unwrap();
                assert_eq!(results.len(), units.len() - 1);
                assert!(results.iter().all(|r| r.unit_id != unit.id));
            }
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Category::from_id("Length").unwrap(), Category::length());
        assert_eq!(Category::from_id("temperature").unwrap(), Category::temperature());
        assert_eq!(
            Category::from_id("speed").unwrap_err(),
            AppError::UnknownCategory("speed".to_string())
        );
    }

    #[test]
    fn test_unit_id_from_name_is_case_insensitive() {
        assert_eq!(get_unit_id_from_name("kilometers"), Some("kilometer".to_string()));
        assert_eq!(get_unit_id_from_name("FAHRENHEIT"), Some("fahrenheit".to_string()));
        assert_eq!(get_unit_id_from_name("  Gallons "), Some("gallon".to_string()));
        assert_eq!(get_unit_id_from_name("parsecs"), None);
    }

    #[test]
    fn test_unit_ids_are_unique_across_categories() {
        let units = get_all_units();
        let mut ids: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), units.len());
    }

    #[test]
    fn test_get_all_units_sorted_by_category_then_label() {
        let units = get_all_units();
        for pair in units.windows(2) {
            let ordered = (pair[0].category.as_str(), pair[0].label.as_str())
                <= (pair[1].category.as_str(), pair[1].label.as_str());
            assert!(ordered, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_convert_between() {
        let feet = convert_between(1.0, "meter", "foot").unwrap();
        assert!((feet - 3.280839895).abs() < 1e-6);

        let fahrenheit = convert_between(100.0, "celsius", "fahrenheit").unwrap();
        assert!((fahrenheit - 212.0).abs() < 1e-9);

        assert_eq!(convert_between(7.0, "liter", "liter").unwrap(), 7.0);
    }

    #[test]
    fn test_convert_between_rejects_mixed_categories() {
        assert!(matches!(
            convert_between(1.0, "meter", "kilogram"),
            Err(AppError::IncompatibleUnits(_))
        ));
        assert_eq!(
            convert_between(1.0, "meter", "cubit").unwrap_err(),
            AppError::UnknownUnit("cubit".to_string())
        );
    }
}
