//! Error types shared by every discovery crate.
//!
//! Two layers live here:
//! - [`QueryError`]: the structured error a well-behaved source returns for
//!   a failed Get/List/Search (kind, scope, human-readable message).
//! - [`DiscoveryError`]: the workspace error enum. Query failures travel as
//!   [`DiscoveryError::Query`]; every other variant is an error of a
//!   different shape, which a conforming source never produces from a query.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`DiscoveryError`].
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Kind of a [`QueryError`].
///
/// Serialized in the framework's wire spelling (`NOTFOUND`, `NOSCOPE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorType {
    /// Any failure without a more specific kind.
    #[serde(alias = "other")]
    Other,
    /// The queried entity does not exist in the scope.
    #[serde(alias = "not_found")]
    NotFound,
    /// The source does not answer for the requested scope.
    #[serde(alias = "no_scope")]
    NoScope,
    /// The query was cancelled or ran out of time.
    #[serde(alias = "timeout")]
    Timeout,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Other => "OTHER",
            Self::NotFound => "NOTFOUND",
            Self::NoScope => "NOSCOPE",
            Self::Timeout => "TIMEOUT",
        };
        f.write_str(value)
    }
}

/// Structured error returned by a source for a failed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error_type}: {error_string}")]
pub struct QueryError {
    pub error_type: ErrorType,
    /// The scope the error pertains to.
    pub scope: String,
    /// Human-readable message.
    pub error_string: String,
    /// Name of the source that produced the error, empty when unknown.
    #[serde(default)]
    pub source_name: String,
    /// Item type the query was for, empty when unknown.
    #[serde(default)]
    pub item_type: String,
}

impl QueryError {
    pub fn new(
        error_type: ErrorType,
        scope: impl Into<String>,
        error_string: impl Into<String>,
    ) -> Self {
        Self {
            error_type,
            scope: scope.into(),
            error_string: error_string.into(),
            source_name: String::new(),
            item_type: String::new(),
        }
    }

    pub fn not_found(scope: impl Into<String>, error_string: impl Into<String>) -> Self {
        Self::new(ErrorType::NotFound, scope, error_string)
    }

    pub fn no_scope(scope: impl Into<String>, error_string: impl Into<String>) -> Self {
        Self::new(ErrorType::NoScope, scope, error_string)
    }

    pub fn timeout(scope: impl Into<String>, error_string: impl Into<String>) -> Self {
        Self::new(ErrorType::Timeout, scope, error_string)
    }

    /// Attach the originating source name and item type.
    #[must_use]
    pub fn with_origin(mut self, source_name: impl Into<String>, item_type: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self.item_type = item_type.into();
        self
    }
}

/// Workspace error type.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Structured query failure reported by a source.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// An attribute lookup named a key the item does not carry.
    #[error("attribute not found: {key}")]
    AttributeNotFound { key: String },

    /// An item failed structural validation.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// A conformance suite could not be loaded or is malformed.
    #[error("suite error: {0}")]
    Suite(String),

    /// Internal logic error.
    #[error("internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiscoveryError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn suite(message: impl Into<String>) -> Self {
        Self::Suite(message.into())
    }

    /// The structured query error, if this is one.
    #[must_use]
    pub const fn as_query(&self) -> Option<&QueryError> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }

    /// Short, stable name of the variant, used in reports.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::AttributeNotFound { .. } => "attribute_not_found",
            Self::InvalidItem(_) => "invalid_item",
            Self::Suite(_) => "suite",
            Self::Internal(_) => "internal",
            Self::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_display_carries_kind_and_message() {
        let err = QueryError::not_found("global", "colour Nope not recognized");
        assert_eq!(err.to_string(), "NOTFOUND: colour Nope not recognized");
    }

    #[test]
    fn discovery_error_wraps_query_error_transparently() {
        let err: DiscoveryError = QueryError::no_scope("elsewhere", "only global").into();
        assert_eq!(err.to_string(), "NOSCOPE: only global");
        assert_eq!(err.shape(), "query");
        assert_eq!(
            err.as_query().map(|q| q.error_type),
            Some(ErrorType::NoScope)
        );
    }

    #[test]
    fn non_query_variants_have_no_query_view() {
        let err = DiscoveryError::internal("boom");
        assert!(err.as_query().is_none());
        assert_eq!(err.shape(), "internal");
    }

    #[test]
    fn error_type_accepts_wire_and_snake_case_spellings() {
        let wire: ErrorType = serde_json::from_str("\"NOTFOUND\"").unwrap();
        let snake: ErrorType = serde_json::from_str("\"no_scope\"").unwrap();
        assert_eq!(wire, ErrorType::NotFound);
        assert_eq!(snake, ErrorType::NoScope);
        assert_eq!(serde_json::to_string(&ErrorType::NoScope).unwrap(), "\"NOSCOPE\"");
    }

    #[test]
    fn with_origin_sets_source_and_type() {
        let err = QueryError::timeout("global", "cancelled").with_origin("colour-name", "colour");
        assert_eq!(err.source_name, "colour-name");
        assert_eq!(err.item_type, "colour");
        assert_eq!(err.error_type, ErrorType::Timeout);
    }
}
