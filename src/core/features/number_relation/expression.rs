//! Numeric input parsing with AST-based math evaluation
//!
//! Plain numbers may carry thousands separators ("1,250.5"). Anything else is
//! handed to meval, so "2 * 50" or "(3 + 4) / 2" are accepted as inputs.

use meval::Expr;
use std::str::FromStr;
use crate::shared::error::{AppError, AppResult};

/// Parse a user-entered number or simple arithmetic expression.
///
/// Empty input, unparseable expressions, NaN and infinities are rejected.
pub fn parse_number_input(text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("Empty number".to_string()));
    }

    let value = match trimmed.replace(',', "").parse::<f64>() {
        Ok(value) => value,
        Err(_) => evaluate_expression(trimmed)?,
    };

    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!("'{}' is not a finite number", trimmed)));
    }

    Ok(value)
}

fn evaluate_expression(expression: &str) -> AppResult<f64> {
    let cleaned = expression
        .replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-");

    let expr = Expr::from_str(&cleaned)
        .map_err(|e| AppError::InvalidInput(format!("Failed to parse expression '{}': {}", cleaned, e)))?;

    expr.eval()
        .map_err(|e| AppError::InvalidInput(format!("Failed to evaluate expression '{}': {}", cleaned, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number_input("42").unwrap(), 42.0);
        assert_eq!(parse_number_input(" -3.5 ").unwrap(), -3.5);
        assert_eq!(parse_number_input("1,250.5").unwrap(), 1250.5);
    }

    #[test]
    fn test_expressions() {
        assert_eq!(parse_number_input("2 * 50").unwrap(), 100.0);
        assert_eq!(parse_number_input("(3 + 4) / 2").unwrap(), 3.5);
        assert_eq!(parse_number_input("10 × 3").unwrap(), 30.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(parse_number_input(""), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_number_input("2 +"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_number_input("inf"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_number_input("NaN"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_number_input("1 / 0"), Err(AppError::InvalidInput(_))));
    }
}
