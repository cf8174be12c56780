//! # check_core - Check-Result Reconciliation Engine
//!
//! `check_core` turns the outcome of a Eurocode check into one consistent
//! verdict. A check may report its outcome as a provided/required pair, a
//! unity check, a factor of safety, or a plain pass/fail flag; the engine
//! derives the missing forms and rejects contradictory ones. All types are
//! JSON-serializable.
//!
//! ## Quick Start
//!
//! ```rust
//! use check_core::{CheckResult, ComparisonOperator};
//!
//! // M_Ed = 80 kNm against M_Rd = 100 kNm
//! let bending = CheckResult::from_comparison(80.0, 100.0, ComparisonOperator::Le).unwrap();
//! assert_eq!(bending.is_ok(), Some(true));
//!
//! // Equivalent verdict from a ready-made ratio
//! let same = CheckResult::from_unity_check(0.8).unwrap();
//! assert_eq!(bending.is_ok(), same.is_ok());
//! ```
//!
//! ## Modules
//!
//! - [`check_result`] - The reconciled verdict record and its constructors
//! - [`operator`] - Comparison operators relating provided to required
//! - [`checks`] - The `Check` trait and generic checks
//! - [`report`] - Named collections of verdicts
//! - [`errors`] - Structured error types

pub mod check_result;
pub mod checks;
pub mod errors;
pub mod operator;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use check_result::{comparison_unity_check, reciprocal, CheckResult, CheckResultInput, TOLERANCE};
pub use checks::{Check, CheckItem, ComparisonCheck, RatioCheck, RecordCheck};
pub use errors::{CheckError, Result};
pub use operator::ComparisonOperator;
pub use report::{CheckEntry, CheckReport};
