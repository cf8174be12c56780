//! Input normalization: reject structurally invalid raw input before any
//! derivation happens.

use crate::errors::{CheckError, Result};
use crate::operator::ComparisonOperator;

use super::CheckResultInput;

/// Raw input after domain checks, with a typed operator and a paired
/// provided/required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Normalized {
    pub pair: Option<(f64, f64)>,
    pub operator: ComparisonOperator,
    pub unity_check: Option<f64>,
    pub factor_of_safety: Option<f64>,
    pub is_ok: Option<bool>,
}

pub(super) fn normalize(input: &CheckResultInput) -> Result<Normalized> {
    check_ratio("unity_check", input.unity_check)?;
    check_ratio("factor_of_safety", input.factor_of_safety)?;
    check_value("provided", input.provided)?;
    check_value("required", input.required)?;

    let operator: ComparisonOperator = input.operator.parse()?;

    let pair = match (input.provided, input.required) {
        (Some(provided), Some(required)) => Some((provided, required)),
        (Some(_), None) => return Err(CheckError::unpaired("provided", "required")),
        (None, Some(_)) => return Err(CheckError::unpaired("required", "provided")),
        (None, None) => None,
    };

    Ok(Normalized {
        pair,
        operator,
        unity_check: input.unity_check,
        factor_of_safety: input.factor_of_safety,
        is_ok: input.is_ok,
    })
}

/// Ratios may be infinite (the partner of zero) but never negative or NaN.
fn check_ratio(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if v.is_nan() => Err(CheckError::invalid_input(field, v.to_string(), "Value must be a number")),
        Some(v) if v < 0.0 => Err(CheckError::invalid_input(field, v.to_string(), "Value cannot be negative")),
        _ => Ok(()),
    }
}

/// Provided/required are design values and must be finite as well.
fn check_value(field: &str, value: Option<f64>) -> Result<()> {
    check_ratio(field, value)?;
    match value {
        Some(v) if v.is_infinite() => Err(CheckError::invalid_input(field, v.to_string(), "Value must be finite")),
        _ => Ok(()),
    }
}
