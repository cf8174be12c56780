//! # Check Reports
//!
//! A [`CheckReport`] collects the named verdicts of one element (a beam, a
//! connection, ...) and answers the two questions a report needs: does
//! everything pass, and which check governs.
//!
//! ## Example
//!
//! ```rust
//! use check_core::{CheckReport, CheckResult, ComparisonCheck};
//!
//! let mut report = CheckReport::new("Beam B-1");
//! report.push_check(&ComparisonCheck::new("Bending", 80.0, 100.0)).unwrap();
//! report.push("Shear", CheckResult::from_unity_check(0.95).unwrap());
//!
//! assert!(report.passes());
//! assert_eq!(report.governing().unwrap().name, "Shear");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::check_result::CheckResult;
use crate::checks::Check;
use crate::errors::Result;

/// One named verdict in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,

    pub result: CheckResult,
}

/// Titled, timestamped collection of check verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub title: String,

    /// When the report was assembled
    pub created: DateTime<Utc>,

    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn new(title: impl Into<String>) -> Self {
        CheckReport {
            title: title.into(),
            created: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Add an already-evaluated verdict
    pub fn push(&mut self, name: impl Into<String>, result: CheckResult) {
        self.entries.push(CheckEntry {
            name: name.into(),
            source_document: None,
            result,
        });
    }

    /// Evaluate a check and add its verdict.
    ///
    /// The report is left unchanged if the check fails to produce a result.
    pub fn push_check(&mut self, check: &dyn Check) -> Result<()> {
        let result = check.result()?;
        self.entries.push(CheckEntry {
            name: check.name().to_string(),
            source_document: check.source_document().map(str::to_string),
            result,
        });
        Ok(())
    }

    /// True when every entry has a passing verdict.
    ///
    /// An empty report, or one with an undetermined entry, does not pass.
    pub fn passes(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.result.passes())
    }

    /// Entry with the highest unity check (first one on ties)
    pub fn governing(&self) -> Option<&CheckEntry> {
        let mut governing: Option<(&CheckEntry, f64)> = None;
        for entry in &self.entries {
            let Some(uc) = entry.result.unity_check() else {
                continue;
            };
            match governing {
                Some((_, best)) if best >= uc => {}
                _ => governing = Some((entry, uc)),
            }
        }
        governing.map(|(entry, _)| entry)
    }

    /// Entries with a definite failing verdict
    pub fn failing(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter().filter(|e| e.result.is_ok() == Some(false))
    }

    /// Plain-text summary, one line per entry plus a verdict line
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 3);
        lines.push(self.title.clone());
        lines.push("=".repeat(self.title.chars().count().max(8)));

        for entry in &self.entries {
            let uc = match entry.result.unity_check() {
                Some(uc) => format!("{uc:.3}"),
                None => "-".to_string(),
            };
            let source = entry
                .source_document
                .as_deref()
                .map(|s| format!(" ({s})"))
                .unwrap_or_default();
            lines.push(format!(
                "  {:<28} UC {:>8}  {}{}",
                entry.name,
                uc,
                status_icon(entry.result.is_ok()),
                source
            ));
        }

        let governs = self
            .governing()
            .map(|e| format!(" (governs: {})", e.name))
            .unwrap_or_default();
        lines.push(format!(
            "RESULT: {}{}",
            if self.passes() { "PASS" } else { "FAIL" },
            governs
        ));
        lines
    }
}

fn status_icon(is_ok: Option<bool>) -> &'static str {
    match is_ok {
        Some(true) => "[OK]",
        Some(false) => "[FAIL]",
        None => "[--]",
    }
}
