//! Source capability traits and the sources shipped with this workspace.
//!
//! A [`Source`] answers point lookups and enumerations for one logical
//! dataset. Search is an optional capability: a source that supports it
//! implements [`SearchableSource`] and returns itself from
//! [`Source::as_searchable`]. Callers must query the capability before
//! searching; there is no "search unsupported" error value.

pub mod colour_name;

use discovery_error::Result;
use discovery_types::{Cx, Item};

pub use colour_name::ColourNameSource;

pub trait Source: Send + Sync {
    /// Type of the items this source returns.
    fn source_type(&self) -> &str;

    /// Descriptive name of the source.
    fn name(&self) -> &str;

    /// Scopes this source answers for.
    fn scopes(&self) -> Vec<String>;

    /// Resolve exactly one item by its identifier.
    fn get(&self, cx: &Cx, scope: &str, query: &str) -> Result<Item>;

    /// Every item in `scope`.
    fn list(&self, cx: &Cx, scope: &str) -> Result<Vec<Item>>;

    /// The search capability, when this source has one.
    fn as_searchable(&self) -> Option<&dyn SearchableSource> {
        None
    }

    /// Set-membership test over [`Source::scopes`].
    fn supports_scope(&self, scope: &str) -> bool {
        self.scopes().iter().any(|supported| supported == scope)
    }
}

/// Optional capability: items matching a free-form query.
pub trait SearchableSource: Source {
    fn search(&self, cx: &Cx, scope: &str, query: &str) -> Result<Vec<Item>>;
}
