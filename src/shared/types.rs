use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One converted value in a category result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct ConversionResult {
    pub unit_id: String,
    pub unit_name: String,
    pub symbol: String,
    /// Display-formatted value, not the raw number
    pub value: String,
}

// Rich Unit Data Transfer Object for unit-selection controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct UnitDTO {
    pub id: String,       // Internal id (e.g., "kilometer")
    pub label: String,    // Display name (e.g., "Kilometers")
    pub symbol: String,   // Symbol (e.g., "km")
    pub category: String, // Category id (e.g., "length")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct ParsedQuantity {
    pub amount: f64,
    pub unit_id: String,
    pub category: String,
}

/// Six projections of one instant, always populated together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct TimeConversionResult {
    #[ts(type = "number")]
    pub unix_seconds: i64,
    #[ts(type = "number")]
    pub unix_milliseconds: i64,
    /// `YYYY-MM-DDTHH:mm:ss` in the converter's zone, no offset
    pub local_datetime: String,
    /// `YYYY-MM-DDTHH:mm:ss.sssZ`
    pub utc_datetime: String,
    pub timezone: String,
    #[serde(rename = "isDST")]
    pub is_dst: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct DateDifference {
    /// Signed, positive when the end date is after the start date
    #[ts(type = "number")]
    pub days: i64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct DateOffset {
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct NumberComparison {
    pub difference: f64,
    pub percent: f64,
    pub formatted_difference: String,
    pub formatted_percent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings.ts")]
pub struct PercentAdjustment {
    pub result: f64,
    pub formatted_result: String,
}
