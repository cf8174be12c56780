//! # Checks
//!
//! A check is anything that can produce a [`CheckResult`]: a bending
//! resistance check comparing `M_Ed` against `M_Rd`, a minimum
//! reinforcement check, a ready-made utilization ratio, and so on.
//! Formula code outside this crate implements [`Check`]; this module
//! also provides the generic checks used when a verdict is assembled
//! from plain numbers (e.g. from a JSON document).
//!
//! ## JSON Example
//!
//! ```json
//! [
//!   { "type": "Comparison", "name": "Bending 6.1", "provided": 80.0, "required": 100.0 },
//!   { "type": "Ratio", "name": "Shear 6.2", "unity_check": 0.45 },
//!   { "type": "Record", "name": "Torsion 6.3", "factor_of_safety": 1.8, "is_ok": true }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::check_result::{CheckResult, CheckResultInput};
use crate::errors::{CheckError, Result};
use crate::operator::ComparisonOperator;

/// Something that produces a single pass/fail verdict.
pub trait Check {
    /// Short human-readable name (e.g. "Bending resistance")
    fn name(&self) -> &str;

    /// Code clause or document the check comes from (e.g. "EN 1992-1-1 6.1")
    fn source_document(&self) -> Option<&str> {
        None
    }

    /// Evaluate the check
    fn result(&self) -> Result<CheckResult>;
}

/// Compare a provided (design) value against a required (resistance or
/// limit) value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCheck {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,

    /// Design value, e.g. M_Ed in kNm
    pub provided: f64,

    /// Resistance or limit, e.g. M_Rd in kNm
    pub required: f64,

    #[serde(default)]
    pub operator: ComparisonOperator,
}

impl ComparisonCheck {
    /// `provided <= required` check
    pub fn new(name: impl Into<String>, provided: f64, required: f64) -> Self {
        ComparisonCheck {
            name: name.into(),
            source_document: None,
            provided,
            required,
            operator: ComparisonOperator::default(),
        }
    }

    pub fn with_operator(mut self, operator: ComparisonOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_source_document(mut self, source_document: impl Into<String>) -> Self {
        self.source_document = Some(source_document.into());
        self
    }
}

impl Check for ComparisonCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_document(&self) -> Option<&str> {
        self.source_document.as_deref()
    }

    fn result(&self) -> Result<CheckResult> {
        CheckResult::from_comparison(self.provided, self.required, self.operator)
    }
}

/// A check whose formula already yields a unity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioCheck {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,

    pub unity_check: f64,
}

impl Check for RatioCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_document(&self) -> Option<&str> {
        self.source_document.as_deref()
    }

    fn result(&self) -> Result<CheckResult> {
        CheckResult::from_unity_check(self.unity_check)
    }
}

/// A check given as raw check-result fields, any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCheck {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,

    #[serde(flatten)]
    pub record: CheckResultInput,
}

impl Check for RecordCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_document(&self) -> Option<&str> {
        self.source_document.as_deref()
    }

    fn result(&self) -> Result<CheckResult> {
        self.record.clone().build()
    }
}

/// Enum wrapper over the generic checks, so mixed lists serialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CheckItem {
    Comparison(ComparisonCheck),
    Ratio(RatioCheck),
    Record(RecordCheck),
}

impl CheckItem {
    fn inner(&self) -> &dyn Check {
        match self {
            CheckItem::Comparison(c) => c,
            CheckItem::Ratio(c) => c,
            CheckItem::Record(c) => c,
        }
    }

    /// Get the check type as a string
    pub fn check_type(&self) -> &'static str {
        match self {
            CheckItem::Comparison(_) => "Comparison",
            CheckItem::Ratio(_) => "Ratio",
            CheckItem::Record(_) => "Record",
        }
    }
}

impl Check for CheckItem {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn source_document(&self) -> Option<&str> {
        self.inner().source_document()
    }

    fn result(&self) -> Result<CheckResult> {
        self.inner().result()
    }
}

/// Parse a JSON array of [`CheckItem`]s.
pub fn parse_check_items(json: &str) -> Result<Vec<CheckItem>> {
    serde_json::from_str(json).map_err(CheckError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_check() {
        let check = ComparisonCheck::new("Bending", 80.0, 100.0).with_source_document("EN 1992-1-1 6.1");
        let result = check.result().unwrap();
        assert_eq!(result.is_ok(), Some(true));
        assert_eq!(check.source_document(), Some("EN 1992-1-1 6.1"));
    }

    #[test]
    fn test_minimum_requirement_check() {
        // Anchorage length must be at least the required length
        let check = ComparisonCheck::new("Anchorage", 350.0, 400.0).with_operator(ComparisonOperator::Ge);
        let result = check.result().unwrap();
        assert_eq!(result.is_ok(), Some(false));
        assert!((result.unity_check().unwrap() - 400.0 / 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_check_rejects_negative() {
        let check = RatioCheck {
            name: "Shear".to_string(),
            source_document: None,
            unity_check: -1.0,
        };
        assert!(check.result().is_err());
    }

    #[test]
    fn test_parse_mixed_items() {
        let json = r#"[
            { "type": "Comparison", "name": "Bending", "provided": 80.0, "required": 100.0 },
            { "type": "Ratio", "name": "Shear", "unity_check": 0.45 },
            { "type": "Record", "name": "Torsion", "factor_of_safety": "inf", "is_ok": true }
        ]"#;
        let items = parse_check_items(json).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].check_type(), "Comparison");
        assert_eq!(items[2].name(), "Torsion");

        let torsion = items[2].result().unwrap();
        assert_eq!(torsion.unity_check(), Some(0.0));
    }

    #[test]
    fn test_record_check_reports_inconsistency() {
        let json = r#"[{ "type": "Record", "name": "Bad", "unity_check": 1.5, "is_ok": true }]"#;
        let items = parse_check_items(json).unwrap();
        assert!(items[0].result().unwrap_err().is_inconsistency());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_check_items("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
