//! Checks a returned error against an [`ExpectedError`].

use discovery_error::DiscoveryError;

use crate::case::ExpectedError;
use crate::failure::{CheckFailure, CheckKind};

/// Compare the error a source produced with what the case expects.
///
/// A missing error or an error that is not a structured query error ends
/// the comparison, since there is nothing further to compare. Kind, scope
/// and message are checked independently and each mismatch is reported.
#[must_use]
pub fn match_expected_error(
    expected: &ExpectedError,
    produced: Option<&DiscoveryError>,
) -> Vec<CheckFailure> {
    let Some(produced) = produced else {
        return vec![CheckFailure::new(
            CheckKind::ErrorMissing,
            "expected error but got none",
        )];
    };

    let Some(query_error) = produced.as_query() else {
        return vec![CheckFailure::fatal(
            CheckKind::ErrorShape,
            format!(
                "error returned was of shape {}, expected a query error: {produced}",
                produced.shape()
            ),
        )];
    };

    let mut failures = Vec::new();

    if query_error.error_type != expected.error_type {
        failures.push(CheckFailure::new(
            CheckKind::ErrorType,
            format!(
                "error type was {}, expected {}",
                query_error.error_type, expected.error_type
            ),
        ));
    }

    if let Some(scope) = expected.checked_scope() {
        if query_error.scope != scope {
            failures.push(CheckFailure::new(
                CheckKind::ErrorScope,
                format!("error scope was {}, expected {scope}", query_error.scope),
            ));
        }
    }

    if let Some(pattern) = &expected.message {
        if !pattern.is_match(&query_error.error_string) {
            failures.push(CheckFailure::new(
                CheckKind::ErrorMessage,
                format!(
                    "error string did not match regex {pattern}, raw value: {}",
                    query_error.error_string
                ),
            ));
        }
    }

    failures
}
