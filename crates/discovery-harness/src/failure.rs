//! Check failures and harness faults.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which check produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// An error was expected but the source returned none.
    ErrorMissing,
    /// The returned error is not a structured query error.
    ErrorShape,
    ErrorType,
    ErrorScope,
    ErrorMessage,
    /// No error was expected but the source returned one.
    UnexpectedError,
    ItemCount,
    ItemInvalid,
    AttributeMissing,
    AttributeMismatch,
    /// The case names a method the harness cannot dispatch.
    InvalidMethod,
    /// Search was requested against a source without the capability.
    NotSearchable,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::ErrorMissing => "error_missing",
            Self::ErrorShape => "error_shape",
            Self::ErrorType => "error_type",
            Self::ErrorScope => "error_scope",
            Self::ErrorMessage => "error_message",
            Self::UnexpectedError => "unexpected_error",
            Self::ItemCount => "item_count",
            Self::ItemInvalid => "item_invalid",
            Self::AttributeMissing => "attribute_missing",
            Self::AttributeMismatch => "attribute_mismatch",
            Self::InvalidMethod => "invalid_method",
            Self::NotSearchable => "not_searchable",
        };
        f.write_str(value)
    }
}

/// One failed check within a case.
///
/// A fatal failure means no further checks were attempted for the case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFailure {
    pub kind: CheckKind,
    pub fatal: bool,
    pub detail: String,
}

impl CheckFailure {
    pub fn new(kind: CheckKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            fatal: false,
            detail: detail.into(),
        }
    }

    pub fn fatal(kind: CheckKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            fatal: true,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fatal {
            write!(f, "[{} fatal] {}", self.kind, self.detail)
        } else {
            write!(f, "[{}] {}", self.kind, self.detail)
        }
    }
}

/// Test misconfiguration detected while dispatching a case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessFault {
    #[error("test method invalid: {method}. Should be one of: GET, LIST, SEARCH")]
    InvalidMethod { method: String },

    #[error(
        "source {source_name} does not implement SearchableSource; cannot execute search tests against it"
    )]
    NotSearchable { source_name: String },
}

impl HarnessFault {
    #[must_use]
    pub const fn kind(&self) -> CheckKind {
        match self {
            Self::InvalidMethod { .. } => CheckKind::InvalidMethod,
            Self::NotSearchable { .. } => CheckKind::NotSearchable,
        }
    }
}

impl From<HarnessFault> for CheckFailure {
    fn from(fault: HarnessFault) -> Self {
        Self::fatal(fault.kind(), fault.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faults_become_fatal_failures() {
        let failure = CheckFailure::from(HarnessFault::NotSearchable {
            source_name: "static".to_owned(),
        });
        assert!(failure.fatal);
        assert_eq!(failure.kind, CheckKind::NotSearchable);
        assert!(failure.detail.contains("source static"), "{}", failure.detail);
    }

    #[test]
    fn display_marks_fatal_failures() {
        let plain = CheckFailure::new(CheckKind::ErrorScope, "scope was a, expected b");
        let fatal = CheckFailure::fatal(CheckKind::ItemCount, "expected 1 items, got 0");
        assert_eq!(plain.to_string(), "[error_scope] scope was a, expected b");
        assert_eq!(fatal.to_string(), "[item_count fatal] expected 1 items, got 0");
    }

    #[test]
    fn check_kind_serializes_like_display() {
        for kind in [CheckKind::ErrorMissing, CheckKind::AttributeMismatch, CheckKind::NotSearchable] {
            let encoded = serde_json::to_string(&kind).unwrap();
            assert_eq!(encoded, format!("\"{kind}\""));
        }
    }
}
