//! Colour-name source: resolves SVG/CSS colour names to `colour` items.

pub mod palette;

use discovery_error::{QueryError, Result};
use discovery_types::{Attributes, Cx, Item};
use tracing::debug;

use crate::{SearchableSource, Source};

pub use palette::{PALETTE, PaletteEntry};

/// Default and only scope the colour table is published in.
pub const COLOUR_SCOPE: &str = "global";
/// Item type of every returned item.
pub const COLOUR_ITEM_TYPE: &str = "colour";
/// Identifying attribute.
pub const COLOUR_UNIQUE_ATTRIBUTE: &str = "name";

const SOURCE_NAME: &str = "colour-name";

/// Read-only source over [`PALETTE`].
#[derive(Debug, Clone)]
pub struct ColourNameSource {
    scopes: Vec<String>,
}

impl Default for ColourNameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ColourNameSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![COLOUR_SCOPE.to_owned()],
        }
    }

    /// Publish the table in the given scopes instead of the default one.
    #[must_use]
    pub fn with_scopes<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    fn check_scope(&self, cx: &Cx, scope: &str) -> Result<()> {
        if cx.checkpoint().is_err() {
            return Err(self.query_error(QueryError::timeout(scope, "query cancelled")));
        }
        if self.supports_scope(scope) {
            return Ok(());
        }
        Err(self.query_error(QueryError::no_scope(
            scope,
            format!(
                "colours are only supported in scope(s): {}",
                self.scopes.join(", ")
            ),
        )))
    }

    fn query_error(&self, err: QueryError) -> discovery_error::DiscoveryError {
        err.with_origin(self.name(), self.source_type()).into()
    }
}

impl Source for ColourNameSource {
    fn source_type(&self) -> &str {
        COLOUR_ITEM_TYPE
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn scopes(&self) -> Vec<String> {
        self.scopes.clone()
    }

    fn get(&self, cx: &Cx, scope: &str, query: &str) -> Result<Item> {
        self.check_scope(cx, scope)?;
        debug!(scope, query, "colour get");

        palette::lookup(query)
            .map(|entry| colour_item(entry, scope))
            .ok_or_else(|| {
                self.query_error(QueryError::not_found(
                    scope,
                    format!("colour {query} not recognized"),
                ))
            })
    }

    fn list(&self, cx: &Cx, scope: &str) -> Result<Vec<Item>> {
        self.check_scope(cx, scope)?;
        debug!(scope, count = PALETTE.len(), "colour list");

        Ok(PALETTE.iter().map(|entry| colour_item(entry, scope)).collect())
    }

    fn as_searchable(&self) -> Option<&dyn SearchableSource> {
        Some(self)
    }
}

impl SearchableSource for ColourNameSource {
    /// Case-insensitive substring match on the colour name. No match is an
    /// empty result, not an error.
    fn search(&self, cx: &Cx, scope: &str, query: &str) -> Result<Vec<Item>> {
        self.check_scope(cx, scope)?;
        let needle = query.to_lowercase();
        let items: Vec<Item> = PALETTE
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .map(|entry| colour_item(entry, scope))
            .collect();
        debug!(scope, query, matches = items.len(), "colour search");
        Ok(items)
    }
}

fn colour_item(entry: &PaletteEntry, scope: &str) -> Item {
    let [red, green, blue] = entry.rgb;
    let attributes = Attributes::new()
        .with(COLOUR_UNIQUE_ATTRIBUTE, entry.name)
        .with("hex", entry.hex())
        .with("red", red)
        .with("green", green)
        .with("blue", blue)
        .with("rgb", vec![red, green, blue]);
    Item::new(COLOUR_ITEM_TYPE, COLOUR_UNIQUE_ATTRIBUTE, scope, attributes)
}

#[cfg(test)]
mod tests {
    use discovery_error::{DiscoveryError, ErrorType};
    use discovery_types::{AttributeValue, validate_item};

    use super::*;

    fn query_error(err: DiscoveryError) -> QueryError {
        match err {
            DiscoveryError::Query(query) => query,
            other => panic!("expected query error, got {other:?}"),
        }
    }

    #[test]
    fn get_builds_a_complete_item() {
        let item = ColourNameSource::new()
            .get(&Cx::new(), COLOUR_SCOPE, "GreenYellow")
            .unwrap();
        assert!(validate_item(&item).is_ok());
        assert_eq!(item.unique_attribute_value(), Some("GreenYellow"));
        assert_eq!(item.attributes.get("hex").unwrap(), &AttributeValue::from("#adff2f"));
        assert_eq!(item.attributes.get("green").unwrap(), &AttributeValue::Int(255));
        assert_eq!(
            item.attributes.get("rgb").unwrap(),
            &AttributeValue::from(vec![173_i64, 255, 47])
        );
    }

    #[test]
    fn errors_carry_origin() {
        let err = query_error(
            ColourNameSource::new()
                .get(&Cx::new(), COLOUR_SCOPE, "Nope")
                .unwrap_err(),
        );
        assert_eq!(err.error_type, ErrorType::NotFound);
        assert_eq!(err.source_name, SOURCE_NAME);
        assert_eq!(err.item_type, COLOUR_ITEM_TYPE);
    }

    #[test]
    fn cancelled_context_is_a_timeout() {
        let cx = Cx::new();
        cx.cancel();
        let err = query_error(ColourNameSource::new().list(&cx, COLOUR_SCOPE).unwrap_err());
        assert_eq!(err.error_type, ErrorType::Timeout);
        assert_eq!(err.scope, COLOUR_SCOPE);
    }

    #[test]
    fn custom_scopes_replace_the_default() {
        let source = ColourNameSource::with_scopes(["eu", "us"]);
        assert!(source.list(&Cx::new(), "eu").is_ok());
        assert!(source.list(&Cx::new(), "us").is_ok());
        let err = query_error(source.list(&Cx::new(), COLOUR_SCOPE).unwrap_err());
        assert_eq!(err.error_type, ErrorType::NoScope);
        assert!(err.error_string.contains("eu, us"), "{}", err.error_string);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = ColourNameSource::new()
            .search(&Cx::new(), COLOUR_SCOPE, "slategr")
            .unwrap();
        let names: Vec<&str> = items
            .iter()
            .filter_map(Item::unique_attribute_value)
            .collect();
        assert_eq!(
            names,
            vec![
                "DarkSlateGray",
                "DarkSlateGrey",
                "LightSlateGray",
                "LightSlateGrey",
                "SlateGray",
                "SlateGrey",
            ]
        );
    }
}
