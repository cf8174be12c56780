//! # Check Results
//!
//! A [`CheckResult`] is the verdict of one code check. The verdict can be
//! given in any of four equivalent forms:
//!
//! - a `provided`/`required` pair with a [`ComparisonOperator`]
//! - a unity check (`<= 1.0` passes)
//! - a factor of safety (`>= 1.0` passes)
//! - a plain `is_ok` flag
//!
//! Construction normalizes the raw input, validates every supplied form
//! against the others, and derives whatever was left out. The result is
//! immutable; a record either exists and is consistent or construction
//! failed.
//!
//! ## Example
//!
//! ```rust
//! use check_core::{CheckResult, CheckResultInput, ComparisonOperator};
//!
//! let result = CheckResult::from_comparison(80.0, 100.0, ComparisonOperator::Le).unwrap();
//! assert_eq!(result.is_ok(), Some(true));
//! assert!((result.unity_check().unwrap() - 0.8).abs() < 1e-9);
//! assert!((result.factor_of_safety().unwrap() - 1.25).abs() < 1e-9);
//!
//! // Direct construction with any subset of fields
//! let direct = CheckResultInput::default()
//!     .with_unity_check(0.8)
//!     .with_is_ok(false)
//!     .build();
//! assert!(direct.is_err());
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "provided": 0.0,
//!   "required": 10.0,
//!   "operator": "<=",
//!   "unity_check": 0.0,
//!   "factor_of_safety": "inf",
//!   "is_ok": true
//! }
//! ```

mod derive;
mod normalize;
mod ratio_format;
mod unity;
mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, Result};
use crate::operator::ComparisonOperator;

pub use unity::{comparison_unity_check, reciprocal, TOLERANCE};

/// Raw, unvalidated check-result fields.
///
/// Every field is optional; `operator` is kept as the raw token so that
/// unknown operators are reported by [`build`](Self::build) rather than
/// at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResultInput {
    /// Actual design value (demand)
    #[serde(default, with = "ratio_format", skip_serializing_if = "Option::is_none")]
    pub provided: Option<f64>,

    /// Allowable or capacity value
    #[serde(default, with = "ratio_format", skip_serializing_if = "Option::is_none")]
    pub required: Option<f64>,

    /// Comparison token relating provided to required (default `"<="`)
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Demand/capacity ratio, `<= 1.0` passes
    #[serde(default, with = "ratio_format", skip_serializing_if = "Option::is_none")]
    pub unity_check: Option<f64>,

    /// Capacity/demand ratio, `>= 1.0` passes
    #[serde(default, with = "ratio_format", skip_serializing_if = "Option::is_none")]
    pub factor_of_safety: Option<f64>,

    /// Pass/fail verdict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ok: Option<bool>,
}

fn default_operator() -> String {
    ComparisonOperator::default().as_str().to_string()
}

impl Default for CheckResultInput {
    fn default() -> Self {
        CheckResultInput {
            provided: None,
            required: None,
            operator: default_operator(),
            unity_check: None,
            factor_of_safety: None,
            is_ok: None,
        }
    }
}

impl CheckResultInput {
    /// Set the provided/required pair
    pub fn with_comparison(mut self, provided: f64, required: f64) -> Self {
        self.provided = Some(provided);
        self.required = Some(required);
        self
    }

    /// Set the operator token
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    pub fn with_unity_check(mut self, unity_check: f64) -> Self {
        self.unity_check = Some(unity_check);
        self
    }

    pub fn with_factor_of_safety(mut self, factor_of_safety: f64) -> Self {
        self.factor_of_safety = Some(factor_of_safety);
        self
    }

    pub fn with_is_ok(mut self, is_ok: bool) -> Self {
        self.is_ok = Some(is_ok);
        self
    }

    /// Normalize, validate and derive, producing a frozen [`CheckResult`].
    pub fn build(self) -> Result<CheckResult> {
        CheckResult::try_from(self)
    }
}

/// Reconciled, immutable verdict of a single check.
///
/// Once constructed, `unity_check` and `factor_of_safety` are reciprocals
/// (with `0 ↔ ∞`) and `is_ok` agrees with them. Fields that could not be
/// derived from the input stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CheckResultInput")]
pub struct CheckResult {
    #[serde(serialize_with = "ratio_format::serialize", skip_serializing_if = "Option::is_none")]
    provided: Option<f64>,
    #[serde(serialize_with = "ratio_format::serialize", skip_serializing_if = "Option::is_none")]
    required: Option<f64>,
    operator: ComparisonOperator,
    #[serde(serialize_with = "ratio_format::serialize", skip_serializing_if = "Option::is_none")]
    unity_check: Option<f64>,
    #[serde(serialize_with = "ratio_format::serialize", skip_serializing_if = "Option::is_none")]
    factor_of_safety: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_ok: Option<bool>,
}

impl CheckResult {
    /// Verdict from comparing a provided value against a required one.
    ///
    /// ```rust
    /// use check_core::{CheckResult, ComparisonOperator};
    ///
    /// let result = CheckResult::from_comparison(120.0, 100.0, ComparisonOperator::Eq).unwrap();
    /// assert!(result.unity_check().unwrap().is_infinite());
    /// assert_eq!(result.factor_of_safety(), Some(0.0));
    /// assert_eq!(result.is_ok(), Some(false));
    /// ```
    pub fn from_comparison(provided: f64, required: f64, operator: ComparisonOperator) -> Result<Self> {
        CheckResultInput::default()
            .with_comparison(provided, required)
            .with_operator(operator.as_str())
            .build()
    }

    /// Verdict from a unity check
    pub fn from_unity_check(unity_check: f64) -> Result<Self> {
        CheckResultInput::default().with_unity_check(unity_check).build()
    }

    /// Verdict from a factor of safety
    pub fn from_factor_of_safety(factor_of_safety: f64) -> Result<Self> {
        CheckResultInput::default().with_factor_of_safety(factor_of_safety).build()
    }

    /// Verdict from a plain pass/fail flag. Nothing to cross-check, so this
    /// cannot fail.
    pub fn from_bool(is_ok: bool) -> Self {
        CheckResult {
            provided: None,
            required: None,
            operator: ComparisonOperator::default(),
            unity_check: None,
            factor_of_safety: None,
            is_ok: Some(is_ok),
        }
    }

    pub fn provided(&self) -> Option<f64> {
        self.provided
    }

    pub fn required(&self) -> Option<f64> {
        self.required
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn unity_check(&self) -> Option<f64> {
        self.unity_check
    }

    pub fn factor_of_safety(&self) -> Option<f64> {
        self.factor_of_safety
    }

    pub fn is_ok(&self) -> Option<bool> {
        self.is_ok
    }

    /// True only for a definite passing verdict
    pub fn passes(&self) -> bool {
        self.is_ok == Some(true)
    }

    /// The raw fields of this record, suitable for reconstructing it
    pub fn to_input(&self) -> CheckResultInput {
        CheckResultInput {
            provided: self.provided,
            required: self.required,
            operator: self.operator.as_str().to_string(),
            unity_check: self.unity_check,
            factor_of_safety: self.factor_of_safety,
            is_ok: self.is_ok,
        }
    }
}

impl TryFrom<CheckResultInput> for CheckResult {
    type Error = CheckError;

    fn try_from(input: CheckResultInput) -> Result<Self> {
        let outcome = normalize::normalize(&input).and_then(|normalized| {
            validate::validate(&normalized)?;
            Ok(derive::derive(&normalized))
        });

        match &outcome {
            Ok(result) => tracing::debug!(
                derived_unity_check = input.unity_check.is_none() && result.unity_check.is_some(),
                derived_factor_of_safety = input.factor_of_safety.is_none() && result.factor_of_safety.is_some(),
                derived_is_ok = input.is_ok.is_none() && result.is_ok.is_some(),
                "reconciled check result"
            ),
            Err(err) => tracing::debug!(code = err.error_code(), error = %err, ?input, "rejected check result"),
        }

        outcome
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.is_ok {
            Some(true) => "OK",
            Some(false) => "NOT OK",
            None => "UNDETERMINED",
        };
        write!(f, "{verdict}")?;
        if let Some(uc) = self.unity_check {
            write!(f, " (UC = {uc:.3}")?;
            if let Some(fos) = self.factor_of_safety {
                write!(f, ", FoS = {fos:.3}")?;
            }
            write!(f, ")")?;
        }
        if let (Some(provided), Some(required)) = (self.provided, self.required) {
            write!(f, " [{provided} {} {required}]", self.operator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be derived");
        if expected.is_infinite() {
            assert!(actual.is_infinite(), "expected ∞, got {actual}");
        } else {
            assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
        }
    }

    #[test]
    fn test_comparison_passing() {
        let result = CheckResult::from_comparison(80.0, 100.0, ComparisonOperator::Le).unwrap();
        assert_close(result.unity_check(), 0.8);
        assert_close(result.factor_of_safety(), 1.25);
        assert_eq!(result.is_ok(), Some(true));
        assert_eq!(result.provided(), Some(80.0));
        assert_eq!(result.required(), Some(100.0));
    }

    #[test]
    fn test_comparison_equality_failing() {
        let result = CheckResult::from_comparison(120.0, 100.0, ComparisonOperator::Eq).unwrap();
        assert_close(result.unity_check(), f64::INFINITY);
        assert_eq!(result.factor_of_safety(), Some(0.0));
        assert_eq!(result.is_ok(), Some(false));
    }

    #[test]
    fn test_comparison_equality_passing() {
        let result = CheckResult::from_comparison(100.0, 100.0, ComparisonOperator::Eq).unwrap();
        assert_eq!(result.unity_check(), Some(0.0));
        assert_eq!(result.is_ok(), Some(true));
    }

    #[test]
    fn test_zero_provided() {
        let result = CheckResult::from_comparison(0.0, 10.0, ComparisonOperator::Le).unwrap();
        assert_eq!(result.unity_check(), Some(0.0));
        assert_close(result.factor_of_safety(), f64::INFINITY);
        assert_eq!(result.is_ok(), Some(true));
    }

    #[test]
    fn test_both_zero() {
        let result = CheckResult::from_comparison(0.0, 0.0, ComparisonOperator::Le).unwrap();
        assert_eq!(result.unity_check(), Some(0.0));
        assert_close(result.factor_of_safety(), f64::INFINITY);
        assert_eq!(result.is_ok(), Some(true));
    }

    #[test]
    fn test_from_unity_check() {
        let result = CheckResult::from_unity_check(0.8).unwrap();
        assert_close(result.factor_of_safety(), 1.25);
        assert_eq!(result.is_ok(), Some(true));
        assert_eq!(result.provided(), None);
        assert_eq!(result.required(), None);
    }

    #[test]
    fn test_from_factor_of_safety() {
        let result = CheckResult::from_factor_of_safety(1.25).unwrap();
        assert_close(result.unity_check(), 0.8);
        assert_eq!(result.is_ok(), Some(true));

        let zero = CheckResult::from_factor_of_safety(0.0).unwrap();
        assert_close(zero.unity_check(), f64::INFINITY);
        assert_eq!(zero.is_ok(), Some(false));
    }

    #[test]
    fn test_from_bool() {
        let result = CheckResult::from_bool(false);
        assert_eq!(result.is_ok(), Some(false));
        assert_eq!(result.unity_check(), None);
        assert_eq!(result, CheckResultInput::default().with_is_ok(false).build().unwrap());
    }

    #[test]
    fn test_direct_construction_is_ok_with_unity_check() {
        assert!(CheckResultInput::default()
            .with_is_ok(true)
            .with_unity_check(0.8)
            .build()
            .is_ok());

        let err = CheckResultInput::default()
            .with_is_ok(false)
            .with_unity_check(0.8)
            .build()
            .unwrap_err();
        assert!(err.is_inconsistency());
    }

    #[test]
    fn test_direct_construction_matches_named_constructor() {
        let named = CheckResult::from_unity_check(0.8).unwrap();
        let direct = CheckResultInput::default().with_unity_check(0.8).build().unwrap();
        assert_eq!(named, direct);
    }

    #[test]
    fn test_reconstruct_from_own_fields() {
        for result in [
            CheckResult::from_comparison(80.0, 100.0, ComparisonOperator::Le).unwrap(),
            CheckResult::from_comparison(100.0, 100.0, ComparisonOperator::Lt).unwrap(),
            CheckResult::from_comparison(0.0, 0.0, ComparisonOperator::Ne).unwrap(),
            CheckResult::from_factor_of_safety(0.0).unwrap(),
        ] {
            let rebuilt = result.to_input().build().unwrap();
            assert_eq!(rebuilt, result);
        }
    }

    #[test]
    fn test_reconstruct_with_supplied_ratio_near_limit() {
        // 1.0000005 is within tolerance of 100/100 but on the failing side of 1.0
        let result = CheckResultInput::default()
            .with_comparison(100.0, 100.0)
            .with_unity_check(1.0000005)
            .build()
            .unwrap();
        assert_eq!(result.unity_check(), Some(1.0000005));
        assert_eq!(result.factor_of_safety(), Some(1.0));
        assert_eq!(result.is_ok(), Some(true));

        let rebuilt = result.to_input().build().unwrap();
        assert_eq!(rebuilt, result);

        // without the pair the same fields still reconcile
        let bare = CheckResultInput {
            provided: None,
            required: None,
            ..result.to_input()
        };
        assert!(bare.build().is_ok());
    }

    #[test]
    fn test_empty_record() {
        let result = CheckResultInput::default().build().unwrap();
        assert_eq!(result.operator(), ComparisonOperator::Le);
        assert_eq!(result.is_ok(), None);
        assert!(!result.passes());
    }

    #[test]
    fn test_inconsistent_ratios_rejected() {
        let err = CheckResultInput::default()
            .with_unity_check(0.8)
            .with_factor_of_safety(2.0)
            .build()
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Inconsistent CheckResult: unity_check and factor_of_safety"));
    }

    #[test]
    fn test_serialization_roundtrip_with_infinity() {
        let result = CheckResult::from_comparison(0.0, 10.0, ComparisonOperator::Le).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"factor_of_safety\": \"inf\""));
        assert!(json.contains("\"operator\": \"<=\""));

        let roundtrip: CheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{ "unity_check": 0.8, "is_ok": false }"#;
        assert!(serde_json::from_str::<CheckResult>(json).is_err());

        let json = r#"{ "provided": 80, "required": 100 }"#;
        let result: CheckResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.is_ok(), Some(true));

        let json = r#"{ "provided": 80, "required": 100, "operator": "=<" }"#;
        let err = serde_json::from_str::<CheckResult>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown comparison operator"));
    }

    #[test]
    fn test_display() {
        let result = CheckResult::from_comparison(80.0, 100.0, ComparisonOperator::Le).unwrap();
        assert_eq!(result.to_string(), "OK (UC = 0.800, FoS = 1.250) [80 <= 100]");
        assert_eq!(CheckResult::from_bool(false).to_string(), "NOT OK");
    }
}
