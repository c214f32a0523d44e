//! Display formatting for converted values
//!
//! Whole numbers (within 0.0001) render without decimals, everything else
//! with exactly two. Grouping is fixed to US style regardless of locale.

use crate::shared::error::{AppError, AppResult};

const WHOLE_NUMBER_TOLERANCE: f64 = 0.0001;

/// Format a converted value for display.
///
/// Examples: `1000.0 -> "1,000"`, `3.14159 -> "3.14"`, `10.999 -> "11.00"`.
/// NaN and infinities are rejected with `InvalidInput`.
pub fn format_number(value: f64) -> AppResult<String> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!("Cannot format non-finite value: {}", value)));
    }

    let rounded = value.round();
    if (value - rounded).abs() < WHOLE_NUMBER_TOLERANCE {
        // -0.00004 rounds to -0.0, which should not render a sign
        if rounded == 0.0 {
            return Ok("0".to_string());
        }
        return Ok(group_signed(&format!("{:.0}", rounded)));
    }

    Ok(group_signed(&format!("{:.2}", value)))
}

/// Format a percentage with two decimals and a trailing `%`.
pub fn format_percent(value: f64) -> AppResult<String> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!("Cannot format non-finite percentage: {}", value)));
    }
    Ok(format!("{}%", group_signed(&format!("{:.2}", value))))
}

// Apply thousands separators to a plain `-?digits(.digits)?` string
fn group_signed(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let grouped = add_thousands_separators(integer);
    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

fn add_thousands_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}
