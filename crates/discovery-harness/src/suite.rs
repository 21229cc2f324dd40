//! Loading conformance suites from JSON or TOML files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use discovery_error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::case::TestCase;

/// Version of the suite file schema.
pub const SUITE_SCHEMA_VERSION: u32 = 1;

const fn default_schema_version() -> u32 {
    SUITE_SCHEMA_VERSION
}

/// A named list of cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub name: String,
    pub cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    Json,
    Toml,
}

impl SuiteFormat {
    /// Pick a format from a file extension (`.json`, `.toml`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse and validate suite text.
///
/// # Errors
///
/// Returns [`DiscoveryError::Suite`] when the text does not parse (including
/// invalid message patterns), the schema version is unsupported, there are
/// no cases, or case names are empty or duplicated.
pub fn parse_suite(text: &str, format: SuiteFormat) -> Result<Suite> {
    let suite: Suite = match format {
        SuiteFormat::Json => serde_json::from_str(text)
            .map_err(|err| DiscoveryError::suite(format!("invalid JSON suite: {err}")))?,
        SuiteFormat::Toml => toml::from_str(text)
            .map_err(|err| DiscoveryError::suite(format!("invalid TOML suite: {err}")))?,
    };
    validate_suite(&suite)?;
    Ok(suite)
}

/// Read, parse and validate a suite file.
///
/// # Errors
///
/// Returns [`DiscoveryError::Io`] when the file cannot be read and
/// [`DiscoveryError::Suite`] for an unknown extension or invalid content.
pub fn load_suite(path: &Path) -> Result<Suite> {
    let format = SuiteFormat::from_path(path).ok_or_else(|| {
        DiscoveryError::suite(format!(
            "cannot infer suite format from {}; expected .json or .toml",
            path.display()
        ))
    })?;
    let text = fs::read_to_string(path)?;
    let suite = parse_suite(&text, format)?;
    info!(
        path = %path.display(),
        suite = %suite.name,
        cases = suite.cases.len(),
        "conformance suite loaded"
    );
    Ok(suite)
}

fn validate_suite(suite: &Suite) -> Result<()> {
    if suite.schema_version != SUITE_SCHEMA_VERSION {
        return Err(DiscoveryError::suite(format!(
            "unsupported suite schema_version {}, expected {SUITE_SCHEMA_VERSION}",
            suite.schema_version
        )));
    }
    if suite.cases.is_empty() {
        return Err(DiscoveryError::suite("suite has no cases"));
    }
    let mut seen = BTreeSet::new();
    for case in &suite.cases {
        if case.name.trim().is_empty() {
            return Err(DiscoveryError::suite("case name must be non-empty"));
        }
        if !seen.insert(case.name.as_str()) {
            return Err(DiscoveryError::suite(format!(
                "duplicate case name: {}",
                case.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use discovery_error::ErrorType;
    use discovery_types::{AttributeValue, QueryMethod};

    use super::*;
    use crate::case::{CaseMethod, Expectation};

    const TOML_SUITE: &str = r#"
name = "colours"

[[cases]]
name = "known colour"
scope = "global"
query = "Red"
method = "get"

[cases.expect.items]
num_items = 1
attributes = [{ name = "Red", rgb = [255, 0, 0] }]

[[cases]]
name = "wrong scope"
scope = "elsewhere"
method = "list"

[cases.expect.error]
error_type = "NOSCOPE"
scope = "elsewhere"
message = "only supported"
"#;

    #[test]
    fn toml_suite_parses() {
        let suite = parse_suite(TOML_SUITE, SuiteFormat::Toml).unwrap();
        assert_eq!(suite.schema_version, SUITE_SCHEMA_VERSION);
        assert_eq!(suite.cases.len(), 2);

        let Expectation::Items(items) = &suite.cases[0].expect else {
            panic!("first case should expect items");
        };
        assert_eq!(items.num_items, 1);
        assert_eq!(
            items.attributes[0].get("rgb"),
            Some(&AttributeValue::from(vec![255_i64, 0, 0]))
        );

        let second = &suite.cases[1];
        assert_eq!(second.method, CaseMethod::Known(QueryMethod::List));
        let Expectation::Error(expected) = &second.expect else {
            panic!("second case should expect an error");
        };
        assert_eq!(expected.error_type, ErrorType::NoScope);
        assert_eq!(expected.checked_scope(), Some("elsewhere"));
    }

    #[test]
    fn bad_regex_fails_the_load() {
        let raw = r#"{"cases": [{"name": "x", "scope": "s", "method": "get",
            "expect": {"error": {"error_type": "NOTFOUND", "message": "(oops"}}}]}"#;
        let err = parse_suite(raw, SuiteFormat::Json).unwrap_err();
        assert!(err.to_string().contains("invalid message pattern"), "{err}");
    }

    #[test]
    fn unknown_method_still_loads() {
        let raw = r#"{"cases": [{"name": "x", "scope": "s", "method": "DELETE"}]}"#;
        let suite = parse_suite(raw, SuiteFormat::Json).unwrap();
        assert_eq!(
            suite.cases[0].method,
            CaseMethod::Unrecognized("DELETE".to_owned())
        );
    }

    #[test]
    fn numeric_methods_follow_protobuf_numbering() {
        let raw = r#"{"cases": [
            {"name": "list", "scope": "global", "method": 1},
            {"name": "bogus", "scope": "global", "method": 9}]}"#;
        let suite = parse_suite(raw, SuiteFormat::Json).unwrap();
        assert_eq!(suite.cases[0].method, CaseMethod::Known(QueryMethod::List));
        assert_eq!(suite.cases[1].method, CaseMethod::Unrecognized("9".to_owned()));

        let toml = "[[cases]]\nname = \"get\"\nscope = \"global\"\nquery = \"Red\"\nmethod = 0\n";
        let suite = parse_suite(toml, SuiteFormat::Toml).unwrap();
        assert_eq!(suite.cases[0].method, CaseMethod::Known(QueryMethod::Get));
    }

    #[test]
    fn structural_problems_are_rejected() {
        let empty = parse_suite(r#"{"cases": []}"#, SuiteFormat::Json).unwrap_err();
        assert!(empty.to_string().contains("no cases"), "{empty}");

        let dup = r#"{"cases": [
            {"name": "x", "scope": "s", "method": "list"},
            {"name": "x", "scope": "s", "method": "list"}]}"#;
        let err = parse_suite(dup, SuiteFormat::Json).unwrap_err();
        assert!(err.to_string().contains("duplicate case name: x"), "{err}");

        let version = r#"{"schema_version": 9, "cases": [{"name": "x", "scope": "s", "method": "list"}]}"#;
        let err = parse_suite(version, SuiteFormat::Json).unwrap_err();
        assert!(err.to_string().contains("schema_version 9"), "{err}");
    }

    #[test]
    fn format_comes_from_extension() {
        assert_eq!(SuiteFormat::from_path(Path::new("a/b.JSON")), Some(SuiteFormat::Json));
        assert_eq!(SuiteFormat::from_path(Path::new("suite.toml")), Some(SuiteFormat::Toml));
        assert_eq!(SuiteFormat::from_path(Path::new("suite.yaml")), None);
        assert_eq!(SuiteFormat::from_path(Path::new("suite")), None);
    }
}
