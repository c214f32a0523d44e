//! Number relations: compare two numbers or adjust one by a percentage
//!
//! Inputs are expected to be finite (see [`parse_number_input`]).

pub mod expression;

use crate::shared::error::{AppError, AppResult};
use crate::shared::format::{format_number, format_percent};
use crate::shared::types::{NumberComparison, PercentAdjustment};

pub use expression::parse_number_input;

fn ensure_finite(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("{} must be a finite number, got {}", name, value)))
    }
}

/// Absolute and percentage difference going from `first` to `second`.
///
/// A zero `first` yields 0% rather than an infinite change. Known oddity,
/// kept for compatibility with existing callers.
pub fn compare(first: f64, second: f64) -> AppResult<NumberComparison> {
    ensure_finite("first", first)?;
    ensure_finite("second", second)?;

    let difference = second - first;
    let percent = if first != 0.0 {
        difference / first * 100.0
    } else {
        0.0
    };

    Ok(NumberComparison {
        difference,
        percent,
        formatted_difference: format_number(difference)?,
        formatted_percent: format_percent(percent)?,
    })
}

/// `base` increased (or decreased, for negative `percent`) by `percent` percent
pub fn adjust_by_percent(base: f64, percent: f64) -> AppResult<PercentAdjustment> {
    ensure_finite("base", base)?;
    ensure_finite("percent", percent)?;

    let result = base * (1.0 + percent / 100.0);

    Ok(PercentAdjustment {
        result,
        formatted_result: format_number(result)?,
    })
}
