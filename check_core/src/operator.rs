//! # Comparison Operators
//!
//! The relation between a `provided` (demand) value and a `required`
//! (capacity or limit) value. Serialized as the plain token, e.g. `"<="`.
//!
//! ```rust
//! use check_core::ComparisonOperator;
//!
//! let op: ComparisonOperator = ">=".parse().unwrap();
//! assert_eq!(op, ComparisonOperator::Ge);
//! assert!(!op.is_strict());
//! assert!(op.passes(1.0));
//! assert!(!ComparisonOperator::Gt.passes(1.0));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CheckError;

/// How `provided` must relate to `required` for a check to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// provided < required
    #[serde(rename = "<")]
    Lt,
    /// provided <= required (the usual demand/capacity check)
    #[default]
    #[serde(rename = "<=")]
    Le,
    /// provided == required (within relative tolerance)
    #[serde(rename = "==")]
    Eq,
    /// provided >= required (e.g. minimum reinforcement, anchorage length)
    #[serde(rename = ">=")]
    Ge,
    /// provided > required
    #[serde(rename = ">")]
    Gt,
    /// provided != required (outside relative tolerance)
    #[serde(rename = "!=")]
    Ne,
}

impl ComparisonOperator {
    /// All operators, in token order
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Lt,
        ComparisonOperator::Le,
        ComparisonOperator::Eq,
        ComparisonOperator::Ge,
        ComparisonOperator::Gt,
        ComparisonOperator::Ne,
    ];

    /// The operator token, e.g. `"<="`
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Ne => "!=",
        }
    }

    /// Strict operators do not accept a unity check of exactly 1.0
    pub fn is_strict(&self) -> bool {
        matches!(self, ComparisonOperator::Lt | ComparisonOperator::Gt)
    }

    /// Pass/fail rule for a unity check under this operator.
    ///
    /// Strict operators require `unity_check < 1`, all others `unity_check <= 1`.
    pub fn passes(&self, unity_check: f64) -> bool {
        if self.is_strict() {
            unity_check < 1.0
        } else {
            unity_check <= 1.0
        }
    }

    /// Pass/fail rule expressed on a factor of safety (`> 1` or `>= 1`).
    pub fn passes_factor_of_safety(&self, factor_of_safety: f64) -> bool {
        if self.is_strict() {
            factor_of_safety > 1.0
        } else {
            factor_of_safety >= 1.0
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(ComparisonOperator::Lt),
            "<=" => Ok(ComparisonOperator::Le),
            "==" => Ok(ComparisonOperator::Eq),
            ">=" => Ok(ComparisonOperator::Ge),
            ">" => Ok(ComparisonOperator::Gt),
            "!=" => Ok(ComparisonOperator::Ne),
            other => Err(CheckError::unknown_operator(other)),
        }
    }
}
