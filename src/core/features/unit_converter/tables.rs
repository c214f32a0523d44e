//! Static unit tables for the linear categories
//!
//! Every unit is an enum variant; `to_base`/`from_base` dispatch over the
//! variant and its scale factor. Base units: meter, liter, kilogram.

/// Unit definition with conversion factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub base_factor: f64, // Multiplier to convert to base unit
}

pub trait LinearUnit: Copy + PartialEq + 'static {
    /// Category id the table belongs to
    const CATEGORY: &'static str;

    /// Declared order, also the order of conversion results
    const ALL: &'static [Self];

    fn definition(self) -> UnitDefinition;

    fn to_base(self, value: f64) -> f64 {
        value * self.definition().base_factor
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.definition().base_factor
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.definition().id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
}

impl LinearUnit for LengthUnit {
    const CATEGORY: &'static str = "length";

    const ALL: &'static [Self] = &[
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
        LengthUnit::NauticalMile,
    ];

    fn definition(self) -> UnitDefinition {
        let (id, name, symbol, base_factor) = match self {
            LengthUnit::Millimeter => ("millimeter", "Millimeters", "mm", 0.001),
            LengthUnit::Centimeter => ("centimeter", "Centimeters", "cm", 0.01),
            LengthUnit::Meter => ("meter", "Meters", "m", 1.0),
            LengthUnit::Kilometer => ("kilometer", "Kilometers", "km", 1000.0),
            LengthUnit::Inch => ("inch", "Inches", "in", 0.0254),
            LengthUnit::Foot => ("foot", "Feet", "ft", 0.3048),
            LengthUnit::Yard => ("yard", "Yards", "yd", 0.9144),
            LengthUnit::Mile => ("mile", "Miles", "mi", 1609.344),
            LengthUnit::NauticalMile => ("nautical-mile", "Nautical Miles", "nmi", 1852.0),
        };
        UnitDefinition { id, name, symbol, base_factor }
    }
}

// US customary liquid measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    CubicMeter,
    Teaspoon,
    Tablespoon,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
}

impl LinearUnit for VolumeUnit {
    const CATEGORY: &'static str = "volume";

    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::CubicMeter,
        VolumeUnit::Teaspoon,
        VolumeUnit::Tablespoon,
        VolumeUnit::FluidOunce,
        VolumeUnit::Cup,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
    ];

    fn definition(self) -> UnitDefinition {
        let (id, name, symbol, base_factor) = match self {
            VolumeUnit::Milliliter => ("milliliter", "Milliliters", "mL", 0.001),
            VolumeUnit::Liter => ("liter", "Liters", "L", 1.0),
            VolumeUnit::CubicMeter => ("cubic-meter", "Cubic Meters", "m³", 1000.0),
            VolumeUnit::Teaspoon => ("teaspoon", "Teaspoons", "tsp", 0.00492892159375),
            VolumeUnit::Tablespoon => ("tablespoon", "Tablespoons", "tbsp", 0.01478676478125),
            VolumeUnit::FluidOunce => ("fluid-ounce", "Fluid Ounces", "fl oz", 0.0295735295625),
            VolumeUnit::Cup => ("cup", "Cups", "cup", 0.2365882365),
            VolumeUnit::Pint => ("pint", "Pints", "pt", 0.473176473),
            VolumeUnit::Quart => ("quart", "Quarts", "qt", 0.946352946),
            VolumeUnit::Gallon => ("gallon", "Gallons", "gal", 3.785411784),
        };
        UnitDefinition { id, name, symbol, base_factor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Milligram,
    Gram,
    Kilogram,
    MetricTon,
    Ounce,
    Pound,
    Stone,
}

impl LinearUnit for WeightUnit {
    const CATEGORY: &'static str = "weight";

    const ALL: &'static [Self] = &[
        WeightUnit::Milligram,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::MetricTon,
        WeightUnit::Ounce,
        WeightUnit::Pound,
        WeightUnit::Stone,
    ];

    fn definition(self) -> UnitDefinition {
        // 1 lb = 0.45359237 kg exactly; ounce and stone derive from it
        let (id, name, symbol, base_factor) = match self {
            WeightUnit::Milligram => ("milligram", "Milligrams", "mg", 0.000001),
            WeightUnit::Gram => ("gram", "Grams", "g", 0.001),
            WeightUnit::Kilogram => ("kilogram", "Kilograms", "kg", 1.0),
            WeightUnit::MetricTon => ("metric-ton", "Metric Tons", "t", 1000.0),
            WeightUnit::Ounce => ("ounce", "Ounces", "oz", 0.028349523125),
            WeightUnit::Pound => ("pound", "Pounds", "lb", 0.45359237),
            WeightUnit::Stone => ("stone", "Stones", "st", 6.35029318),
        };
        UnitDefinition { id, name, symbol, base_factor }
    }
}
