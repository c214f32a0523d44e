use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use crate::core::features::{Category, CategoryEngine};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::ParsedQuantity;

const ERR_CANNOT_PARSE_UNIT: &str = "Could not parse quantity from text";

// Map free-text unit spellings onto table ids
fn normalize_unit(unit: &str) -> Option<&'static str> {
    let unit_lower = unit.trim().to_lowercase();
    match unit_lower.as_str() {
        // Length
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Some("millimeter"),
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Some("centimeter"),
        "m" | "meter" | "meters" | "metre" | "metres" => Some("meter"),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Some("kilometer"),
        "in" | "inch" | "inches" | "\"" => Some("inch"),
        "ft" | "foot" | "feet" | "'" => Some("foot"),
        "yd" | "yard" | "yards" => Some("yard"),
        "mi" | "mile" | "miles" => Some("mile"),
        "nmi" | "nautical mile" | "nautical miles" => Some("nautical-mile"),
        // Volume
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some("milliliter"),
        "l" | "liter" | "liters" | "litre" | "litres" => Some("liter"),
        "m3" | "m³" | "cubic meter" | "cubic meters" | "cubic metre" | "cubic metres" => Some("cubic-meter"),
        "tsp" | "teaspoon" | "teaspoons" => Some("teaspoon"),
        "tbsp" | "tablespoon" | "tablespoons" => Some("tablespoon"),
        "floz" | "fl oz" | "fluid ounce" | "fluid ounces" => Some("fluid-ounce"),
        "cup" | "cups" => Some("cup"),
        "pt" | "pint" | "pints" => Some("pint"),
        "qt" | "quart" | "quarts" => Some("quart"),
        "gal" | "gallon" | "gallons" => Some("gallon"),
        // Weight
        "mg" | "milligram" | "milligrams" => Some("milligram"),
        "g" | "gram" | "grams" => Some("gram"),
        "kg" | "kilogram" | "kilograms" => Some("kilogram"),
        "t" | "tonne" | "tonnes" | "metric ton" | "metric tons" => Some("metric-ton"),
        "oz" | "ounce" | "ounces" => Some("ounce"),
        "lb" | "lbs" | "pound" | "pounds" => Some("pound"),
        "st" | "stone" | "stones" => Some("stone"),
        // Temperature
        "c" | "°c" | "celsius" => Some("celsius"),
        "f" | "°f" | "fahrenheit" => Some("fahrenheit"),
        "k" | "kelvin" | "kelvins" => Some("kelvin"),
        _ => None,
    }
}

// Thousands grouped US-style ("1,000", "12,345,678")
static RE_GROUPED_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,3}(?:,\d{3})+\b")
        .expect("grouped-number pattern is valid")
});

// Number followed by unit, with an optional second word ("12 fluid ounces")
static RE_NUMBER_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([+-]?(?:\d+(?:\.\d+)?|\.\d+))\s*([a-zA-Z°'"³]+\d?)(?:\s+([a-zA-Z]+))?"#)
        .expect("number-unit pattern is valid")
});

// Unit followed by number ("km 12")
static RE_UNIT_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z°]+)\s*([+-]?(?:\d+(?:\.\d+)?|\.\d+))")
        .expect("unit-number pattern is valid")
});

// Drop grouping commas, then read any remaining comma as a decimal comma
fn normalize_separators(text: &str) -> String {
    RE_GROUPED_NUMBER
        .replace_all(text, |caps: &Captures| caps[0].replace(',', ""))
        .replace(',', ".")
}

/// Extract the first number/unit pair with a recognized unit from free text.
///
/// Accepts "12km", "3.5 meters", ".5 km", "km 12", "100°F", "1,000 km" and
/// "2 km to miles". Commas grouping digits in threes are thousands
/// separators; any other comma is a decimal comma ("1,5 l").
pub fn parse_quantity(text: &str) -> AppResult<ParsedQuantity> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput("Empty text".to_string()));
    }

    let normalized_text = normalize_separators(text);

    for caps in RE_NUMBER_UNIT.captures_iter(&normalized_text) {
        let Ok(amount) = caps[1].parse::<f64>() else {
            continue;
        };

        let first = &caps[2];
        let two_words = caps.get(3).map(|second| format!("{} {}", first, second.as_str()));

        let unit = two_words
            .as_deref()
            .and_then(normalize_unit)
            .or_else(|| normalize_unit(first));

        if let Some(unit_id) = unit {
            return build(amount, unit_id, text);
        }
    }

    for caps in RE_UNIT_NUMBER.captures_iter(&normalized_text) {
        if let (Some(unit_id), Ok(amount)) = (normalize_unit(&caps[1]), caps[2].parse::<f64>()) {
            return build(amount, unit_id, text);
        }
    }

    tracing::debug!(text, "no quantity found");
    Err(AppError::InvalidInput(format!("{}: {}", ERR_CANNOT_PARSE_UNIT, text)))
}

fn build(amount: f64, unit_id: &str, text: &str) -> AppResult<ParsedQuantity> {
    let category = Category::of_unit(unit_id)
        .ok_or_else(|| AppError::UnknownUnit(unit_id.to_string()))?;

    tracing::debug!(amount, unit_id, text, "extracted quantity");

    Ok(ParsedQuantity {
        amount,
        unit_id: unit_id.to_string(),
        category: category.id().to_string(),
    })
}
