//! Query methods a source can be asked to serve.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryMethod {
    /// Point lookup by exact query; exactly one item or a not-found error.
    #[serde(alias = "get")]
    Get,
    /// Every item in the scope.
    #[serde(alias = "list")]
    List,
    /// Items matching a query; optional capability.
    #[serde(alias = "search")]
    Search,
}

impl QueryMethod {
    pub const ALL: [Self; 3] = [Self::Get, Self::List, Self::Search];
}

impl fmt::Display for QueryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Get => "GET",
            Self::List => "LIST",
            Self::Search => "SEARCH",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized query method: {0}")]
pub struct ParseQueryMethodError(pub String);

impl FromStr for QueryMethod {
    type Err = ParseQueryMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.to_string().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseQueryMethodError(value.to_owned()))
    }
}

/// Protobuf enum numbering: `GET = 0`, `LIST = 1`, `SEARCH = 2`.
impl TryFrom<i32> for QueryMethod {
    type Error = ParseQueryMethodError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Get),
            1 => Ok(Self::List),
            2 => Ok(Self::Search),
            other => Err(ParseQueryMethodError(other.to_string())),
        }
    }
}
