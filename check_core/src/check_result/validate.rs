//! Consistency validation of every directly supplied representation.
//!
//! Runs on the normalized input, before derivation, so only values the
//! caller actually gave are compared. Checks run in a fixed order and the
//! first mismatch is returned.

use crate::errors::{CheckError, Result};

use super::normalize::Normalized;
use super::unity::{comparison_unity_check, reciprocal, within_tolerance};

const PAIR: &str = "provided/required";

pub(super) fn validate(input: &Normalized) -> Result<()> {
    let operator = input.operator;

    if let Some((provided, required)) = input.pair {
        let computed = comparison_unity_check(provided, required, operator);

        if let Some(uc) = input.unity_check {
            if !within_tolerance(uc, computed) {
                return Err(CheckError::inconsistent(
                    PAIR,
                    "unity_check",
                    format!("{provided} {operator} {required} gives {computed}, got {uc}"),
                ));
            }
        }

        if let Some(fos) = input.factor_of_safety {
            let expected = reciprocal(computed);
            if !within_tolerance(fos, expected) {
                return Err(CheckError::inconsistent(
                    PAIR,
                    "factor_of_safety",
                    format!("{provided} {operator} {required} gives {expected}, got {fos}"),
                ));
            }
        }

        if let Some(is_ok) = input.is_ok {
            if operator.passes(computed) != is_ok {
                return Err(CheckError::inconsistent(
                    PAIR,
                    "is_ok",
                    format!("{provided} {operator} {required} has unity check {computed}, got is_ok={is_ok}"),
                ));
            }
        }
    }

    if let (Some(uc), Some(fos)) = (input.unity_check, input.factor_of_safety) {
        if !within_tolerance(fos, reciprocal(uc)) {
            return Err(CheckError::inconsistent(
                "unity_check",
                "factor_of_safety",
                format!("{uc} and {fos} are not reciprocals"),
            ));
        }
    }

    if let Some(is_ok) = input.is_ok {
        if let Some(uc) = input.unity_check {
            if !at_limit(uc) && operator.passes(uc) != is_ok {
                return Err(CheckError::inconsistent(
                    "unity_check",
                    "is_ok",
                    format!("unity check {uc} under '{operator}' disagrees with is_ok={is_ok}"),
                ));
            }
        }
        if let Some(fos) = input.factor_of_safety {
            if !at_limit(fos) && operator.passes_factor_of_safety(fos) != is_ok {
                return Err(CheckError::inconsistent(
                    "factor_of_safety",
                    "is_ok",
                    format!("factor of safety {fos} under '{operator}' disagrees with is_ok={is_ok}"),
                ));
            }
        }
    }

    Ok(())
}

/// A supplied ratio within tolerance of 1.0 agrees with either verdict; the
/// verdict itself was fixed from the exact provided/required when present.
fn at_limit(ratio: f64) -> bool {
    within_tolerance(ratio, 1.0)
}
