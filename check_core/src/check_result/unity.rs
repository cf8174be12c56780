//! Unity-check arithmetic shared by derivation and validation.
//!
//! A unity check is always in `[0, ∞]` and `<= 1` (or `< 1` for strict
//! operators) means passing. For `==` and `!=` there is no meaningful
//! magnitude, so the result collapses to the sentinels `0` (pass) and
//! `∞` (fail).

use crate::operator::ComparisonOperator;

/// Relative tolerance used for `==`/`!=` and for comparing supplied values
/// against derived ones.
pub const TOLERANCE: f64 = 1e-6;

/// Canonical unity check for a provided/required pair.
///
/// Never produces `0/0`; zero operands map to `0` or `∞` depending on the
/// operator direction.
///
/// ```rust
/// use check_core::{comparison_unity_check, ComparisonOperator};
///
/// assert_eq!(comparison_unity_check(80.0, 100.0, ComparisonOperator::Le), 0.8);
/// assert_eq!(comparison_unity_check(50.0, 40.0, ComparisonOperator::Ge), 0.8);
/// assert_eq!(comparison_unity_check(0.0, 0.0, ComparisonOperator::Le), 0.0);
/// assert!(comparison_unity_check(5.0, 0.0, ComparisonOperator::Lt).is_infinite());
/// ```
pub fn comparison_unity_check(provided: f64, required: f64, operator: ComparisonOperator) -> f64 {
    match operator {
        ComparisonOperator::Lt => {
            if required == 0.0 {
                f64::INFINITY
            } else {
                provided / required
            }
        }
        ComparisonOperator::Le => {
            if provided == 0.0 {
                0.0
            } else if required == 0.0 {
                f64::INFINITY
            } else {
                provided / required
            }
        }
        ComparisonOperator::Ge => {
            if required == 0.0 {
                0.0
            } else if provided == 0.0 {
                f64::INFINITY
            } else {
                required / provided
            }
        }
        ComparisonOperator::Gt => {
            if provided == 0.0 {
                f64::INFINITY
            } else {
                required / provided
            }
        }
        ComparisonOperator::Eq => {
            if provided == 0.0 && required == 0.0 {
                0.0
            } else if relative_difference(provided, required) <= TOLERANCE {
                0.0
            } else {
                f64::INFINITY
            }
        }
        ComparisonOperator::Ne => {
            if provided == 0.0 && required == 0.0 {
                f64::INFINITY
            } else if relative_difference(provided, required) <= TOLERANCE {
                f64::INFINITY
            } else {
                0.0
            }
        }
    }
}

/// Reciprocal with `0 ↔ ∞` as partners.
pub fn reciprocal(value: f64) -> f64 {
    if value == 0.0 {
        f64::INFINITY
    } else if value.is_infinite() {
        0.0
    } else {
        1.0 / value
    }
}

/// Agreement of two non-negative ratios within [`TOLERANCE`].
///
/// Absolute below 1.0, relative above. Infinity only matches infinity.
pub(crate) fn within_tolerance(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= TOLERANCE * scale
}

// Caller guarantees at least one operand is non-zero.
fn relative_difference(provided: f64, required: f64) -> f64 {
    (provided - required).abs() / provided.max(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ComparisonOperator::*;

    #[test]
    fn test_less_than() {
        assert!((comparison_unity_check(80.0, 100.0, Lt) - 0.8).abs() < 1e-12);
        assert!(comparison_unity_check(0.0, 0.0, Lt).is_infinite());
        assert_eq!(comparison_unity_check(0.0, 10.0, Lt), 0.0);
    }

    #[test]
    fn test_less_or_equal_zero_operands() {
        assert_eq!(comparison_unity_check(0.0, 0.0, Le), 0.0);
        assert_eq!(comparison_unity_check(0.0, 10.0, Le), 0.0);
        assert!(comparison_unity_check(3.0, 0.0, Le).is_infinite());
    }

    #[test]
    fn test_greater_or_equal_inverts_ratio() {
        // 120 provided against 100 required: capacity exceeds demand
        let uc = comparison_unity_check(120.0, 100.0, Ge);
        assert!((uc - 100.0 / 120.0).abs() < 1e-12);
        assert_eq!(comparison_unity_check(0.0, 0.0, Ge), 0.0);
        assert!(comparison_unity_check(0.0, 5.0, Ge).is_infinite());
    }

    #[test]
    fn test_greater_than() {
        assert!(comparison_unity_check(0.0, 0.0, Gt).is_infinite());
        assert_eq!(comparison_unity_check(4.0, 0.0, Gt), 0.0);
        assert!((comparison_unity_check(4.0, 2.0, Gt) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_equality_sentinels() {
        assert_eq!(comparison_unity_check(100.0, 100.0, Eq), 0.0);
        assert_eq!(comparison_unity_check(100.0, 100.00001, Eq), 0.0);
        assert!(comparison_unity_check(120.0, 100.0, Eq).is_infinite());
        assert_eq!(comparison_unity_check(0.0, 0.0, Eq), 0.0);
        assert!(comparison_unity_check(0.0, 1.0, Eq).is_infinite());
    }

    #[test]
    fn test_inequality_sentinels() {
        assert!(comparison_unity_check(0.0, 0.0, Ne).is_infinite());
        assert!(comparison_unity_check(7.0, 7.0, Ne).is_infinite());
        assert_eq!(comparison_unity_check(7.0, 8.0, Ne), 0.0);
    }

    #[test]
    fn test_reciprocal_partners() {
        assert!(reciprocal(0.0).is_infinite());
        assert_eq!(reciprocal(f64::INFINITY), 0.0);
        assert!((reciprocal(0.8) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(0.8, 0.8000001));
        assert!(!within_tolerance(0.8, 0.81));
        assert!(within_tolerance(f64::INFINITY, f64::INFINITY));
        assert!(!within_tolerance(f64::INFINITY, 1e12));
        // relative above 1.0
        assert!(within_tolerance(1_000_000.0, 1_000_000.5));
    }
}
