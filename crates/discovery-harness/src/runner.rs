//! Drives declarative cases through dispatch and the outcome checks.

use discovery_error::DiscoveryError;
use discovery_sources::Source;
use discovery_types::Cx;
use tracing::{error, info, info_span, warn};

use crate::case::{Expectation, TestCase};
use crate::dispatch::dispatch;
use crate::expect_error::match_expected_error;
use crate::expect_items::validate_item_set;
use crate::failure::{CheckFailure, CheckKind};
use crate::report::{CaseReport, SuiteReport};

/// Run one case against `source` with a fresh query context.
#[must_use]
pub fn run_case(source: &dyn Source, case: &TestCase) -> CaseReport {
    let span = info_span!(
        "conformance_case",
        case = %case.name,
        method = %case.method,
        scope = %case.scope
    );
    let _guard = span.enter();

    let cx = Cx::new();
    let dispatched = match dispatch(&cx, source, &case.method, &case.scope, &case.query) {
        Ok(dispatched) => dispatched,
        Err(fault) => {
            error!(%fault, "case misconfigured");
            return CaseReport::new(case, vec![fault.into()]);
        }
    };

    let mut failures = Vec::new();
    match &case.expect {
        Expectation::Error(expected) => {
            failures.extend(match_expected_error(expected, dispatched.error.as_ref()));
        }
        Expectation::Items(expected) => {
            failures.extend(unexpected_error(dispatched.error.as_ref()));
            failures.extend(validate_item_set(&dispatched.items, expected));
        }
        Expectation::Success => {
            failures.extend(unexpected_error(dispatched.error.as_ref()));
        }
    }

    for failure in &failures {
        warn!(check = %failure.kind, fatal = failure.fatal, detail = %failure.detail, "conformance check failed");
    }
    let report = CaseReport::new(case, failures);
    info!(verdict = %report.verdict, failures = report.failures.len(), "case finished");
    report
}

/// Run every case, in order, regardless of earlier failures.
#[must_use]
pub fn run_source_tests(source: &dyn Source, cases: &[TestCase]) -> SuiteReport {
    let reports = cases.iter().map(|case| run_case(source, case)).collect();
    let report = SuiteReport::new(source.name(), source.source_type(), reports);
    info!(
        source = %report.source_name,
        total_cases = report.total_cases,
        passed_cases = report.passed_cases,
        failed_cases = report.failed_cases,
        aborted_cases = report.aborted_cases,
        "conformance suite finished"
    );
    report
}

/// Run the suite and panic with every failing case if any case failed.
///
/// Intended for use inside `#[test]` functions.
///
/// # Panics
///
/// Panics when at least one case does not pass.
pub fn assert_source_conformance(source: &dyn Source, cases: &[TestCase]) -> SuiteReport {
    let report = run_source_tests(source, cases);
    assert!(report.overall_pass, "{}", report.render_failures());
    report
}

fn unexpected_error(produced: Option<&DiscoveryError>) -> Option<CheckFailure> {
    produced.map(|err| CheckFailure::new(CheckKind::UnexpectedError, format!("unexpected error: {err}")))
}
