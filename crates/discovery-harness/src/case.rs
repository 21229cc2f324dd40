//! Declarative test-case schema.

use std::collections::BTreeMap;
use std::fmt;

use discovery_error::{DiscoveryError, ErrorType, Result};
use discovery_types::{AttributeValue, QueryMethod};
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Method a case asks the dispatcher to use.
///
/// Suite files name methods either by string or by protobuf number. Methods
/// the harness does not know are kept verbatim so the dispatcher can reject
/// the case instead of the whole suite failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum CaseMethod {
    Known(QueryMethod),
    Unrecognized(String),
}

impl From<QueryMethod> for CaseMethod {
    fn from(method: QueryMethod) -> Self {
        Self::Known(method)
    }
}

impl From<String> for CaseMethod {
    fn from(raw: String) -> Self {
        raw.parse::<QueryMethod>()
            .map_or(Self::Unrecognized(raw), Self::Known)
    }
}

impl From<i64> for CaseMethod {
    fn from(number: i64) -> Self {
        i32::try_from(number)
            .ok()
            .and_then(|number| QueryMethod::try_from(number).ok())
            .map_or_else(|| Self::Unrecognized(number.to_string()), Self::Known)
    }
}

impl<'de> Deserialize<'de> for CaseMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CaseMethodVisitor)
    }
}

struct CaseMethodVisitor;

impl Visitor<'_> for CaseMethodVisitor {
    type Value = CaseMethod;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a method name or protobuf method number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<CaseMethod, E> {
        Ok(CaseMethod::from(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<CaseMethod, E> {
        Ok(CaseMethod::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<CaseMethod, E> {
        Ok(CaseMethod::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<CaseMethod, E> {
        Ok(i64::try_from(value)
            .map_or_else(|_| CaseMethod::Unrecognized(value.to_string()), CaseMethod::from))
    }
}

impl From<CaseMethod> for String {
    fn from(method: CaseMethod) -> Self {
        method.to_string()
    }
}

impl fmt::Display for CaseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(method) => write!(f, "{method}"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Compiled, unanchored, case-sensitive pattern for error messages.
#[derive(Debug, Clone)]
pub struct MessagePattern(Regex);

impl MessagePattern {
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    #[must_use]
    pub fn is_match(&self, message: &str) -> bool {
        self.0.is_match(message)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for MessagePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for MessagePattern {}

impl fmt::Display for MessagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for MessagePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessagePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(|err| de::Error::custom(format!("invalid message pattern: {err}")))
    }
}

/// What a failing case must report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedError {
    pub error_type: ErrorType,
    /// Required originating scope; `None` or empty skips the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Pattern the error message must match; `None` skips the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MessagePattern>,
}

impl ExpectedError {
    #[must_use]
    pub const fn new(error_type: ErrorType) -> Self {
        Self {
            error_type,
            scope: None,
            message: None,
        }
    }

    #[must_use]
    pub fn in_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Require the message to match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Suite`] when `pattern` is not a valid regex.
    pub fn matching(mut self, pattern: &str) -> Result<Self> {
        let compiled = MessagePattern::new(pattern)
            .map_err(|err| DiscoveryError::suite(format!("invalid message pattern: {err}")))?;
        self.message = Some(compiled);
        Ok(self)
    }

    /// The declared scope, if it should be checked.
    #[must_use]
    pub fn checked_scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|scope| !scope.is_empty())
    }
}

/// What a successful case must return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedItems {
    pub num_items: usize,
    /// Partial attribute maps checked against items by index. May be shorter
    /// than the item list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<BTreeMap<String, AttributeValue>>,
}

impl ExpectedItems {
    #[must_use]
    pub const fn count(num_items: usize) -> Self {
        Self {
            num_items,
            attributes: Vec::new(),
        }
    }

    /// Append the expected attributes for the next item.
    #[must_use]
    pub fn then_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.push(
            attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }
}

/// Outcome a case expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Error(ExpectedError),
    Items(ExpectedItems),
    /// No error; returned items are not inspected.
    #[default]
    Success,
}

/// One declarative conformance case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub scope: String,
    /// Ignored by List.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
    pub method: CaseMethod,
    #[serde(default)]
    pub expect: Expectation,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        method: impl Into<CaseMethod>,
        scope: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
            query: query.into(),
            method: method.into(),
            expect: Expectation::Success,
        }
    }

    pub fn get(name: impl Into<String>, scope: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(name, QueryMethod::Get, scope, query)
    }

    pub fn list(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(name, QueryMethod::List, scope, String::new())
    }

    pub fn search(
        name: impl Into<String>,
        scope: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self::new(name, QueryMethod::Search, scope, query)
    }

    #[must_use]
    pub fn expect_error(mut self, expected: ExpectedError) -> Self {
        self.expect = Expectation::Error(expected);
        self
    }

    #[must_use]
    pub fn expect_items(mut self, expected: ExpectedItems) -> Self {
        self.expect = Expectation::Items(expected);
        self
    }
}
