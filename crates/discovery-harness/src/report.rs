//! Per-case and per-suite verdicts, plus deterministic log rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::TestCase;
use crate::failure::CheckFailure;

/// Schema version for machine-readable suite reports.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseVerdict {
    Passed,
    /// At least one check failed; every check ran.
    Failed,
    /// A fatal failure stopped the case early.
    Aborted,
}

impl CaseVerdict {
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Passed)
    }

    fn from_failures(failures: &[CheckFailure]) -> Self {
        if failures.is_empty() {
            Self::Passed
        } else if failures.iter().any(|failure| failure.fatal) {
            Self::Aborted
        } else {
            Self::Failed
        }
    }
}

impl fmt::Display for CaseVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Aborted => "aborted",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub method: String,
    pub scope: String,
    pub query: String,
    pub verdict: CaseVerdict,
    pub failures: Vec<CheckFailure>,
}

impl CaseReport {
    #[must_use]
    pub fn new(case: &TestCase, failures: Vec<CheckFailure>) -> Self {
        Self {
            name: case.name.clone(),
            method: case.method.to_string(),
            scope: case.scope.clone(),
            query: case.query.clone(),
            verdict: CaseVerdict::from_failures(&failures),
            failures,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub schema_version: u32,
    pub source_name: String,
    pub source_type: String,
    pub total_cases: usize,
    pub passed_cases: usize,
    pub failed_cases: usize,
    pub aborted_cases: usize,
    pub overall_pass: bool,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    #[must_use]
    pub fn new(
        source_name: impl Into<String>,
        source_type: impl Into<String>,
        cases: Vec<CaseReport>,
    ) -> Self {
        let count = |verdict: CaseVerdict| cases.iter().filter(|case| case.verdict == verdict).count();
        let passed_cases = count(CaseVerdict::Passed);
        let failed_cases = count(CaseVerdict::Failed);
        let aborted_cases = count(CaseVerdict::Aborted);
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            source_name: source_name.into(),
            source_type: source_type.into(),
            total_cases: cases.len(),
            passed_cases,
            failed_cases,
            aborted_cases,
            overall_pass: failed_cases == 0 && aborted_cases == 0,
            cases,
        }
    }

    pub fn failing_cases(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| !case.verdict.is_pass())
    }

    /// Human-readable summary of every failing case, one block per case.
    #[must_use]
    pub fn render_failures(&self) -> String {
        let mut out = format!(
            "{} of {} conformance cases failed for source {}",
            self.failed_cases + self.aborted_cases,
            self.total_cases,
            self.source_name
        );
        for case in self.failing_cases() {
            out.push_str(&format!(
                "\n\n{} ({} scope={} query={:?}): {}",
                case.name, case.method, case.scope, case.query, case.verdict
            ));
            for failure in &case.failures {
                out.push_str(&format!("\n  {failure}"));
            }
        }
        out
    }
}

/// Render deterministic structured log lines for a suite report.
#[must_use]
pub fn render_suite_logs(report: &SuiteReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + report.cases.len());
    lines.push(format!(
        "event=source_conformance_suite source={} source_type={} overall_pass={} total_cases={} passed_cases={} failed_cases={} aborted_cases={}",
        report.source_name,
        report.source_type,
        report.overall_pass,
        report.total_cases,
        report.passed_cases,
        report.failed_cases,
        report.aborted_cases,
    ));

    for case in &report.cases {
        lines.push(format!(
            "event=source_conformance_case case={:?} method={} scope={} verdict={} failure_count={}",
            case.name,
            case.method,
            case.scope,
            case.verdict,
            case.failures.len(),
        ));
        for failure in &case.failures {
            lines.push(format!(
                "event=source_conformance_failure case={:?} check={} fatal={} detail={:?}",
                case.name, failure.kind, failure.fatal, failure.detail,
            ));
        }
    }

    lines
}
