//! Items returned by sources, plus the structural validity check the harness
//! runs over every returned item.

use discovery_error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// A resolved entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item type, e.g. `"colour"`.
    pub item_type: String,
    /// Name of the attribute holding the identifier.
    pub unique_attribute: String,
    /// Scope the item was found in.
    pub scope: String,
    pub attributes: Attributes,
}

impl Item {
    pub fn new(
        item_type: impl Into<String>,
        unique_attribute: impl Into<String>,
        scope: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            item_type: item_type.into(),
            unique_attribute: unique_attribute.into(),
            scope: scope.into(),
            attributes,
        }
    }

    /// Value of the identifying attribute when it is a string.
    #[must_use]
    pub fn unique_attribute_value(&self) -> Option<&str> {
        self.attributes
            .get(&self.unique_attribute)
            .ok()
            .and_then(|value| value.as_str())
    }
}

/// Check that an item is structurally sound.
///
/// # Errors
///
/// Returns [`DiscoveryError::InvalidItem`] naming the first problem found.
pub fn validate_item(item: &Item) -> Result<()> {
    if item.item_type.is_empty() {
        return Err(invalid("item type is empty"));
    }
    if item.unique_attribute.is_empty() {
        return Err(invalid(format!(
            "{} item has an empty unique attribute name",
            item.item_type
        )));
    }
    if item.scope.is_empty() {
        return Err(invalid(format!("{} item has an empty scope", item.item_type)));
    }
    if item.attributes.is_empty() {
        return Err(invalid(format!("{} item has no attributes", item.item_type)));
    }
    match item.unique_attribute_value() {
        Some(value) if !value.is_empty() => Ok(()),
        Some(_) => Err(invalid(format!(
            "{} item has an empty value for unique attribute {}",
            item.item_type, item.unique_attribute
        ))),
        None => Err(invalid(format!(
            "{} item is missing string unique attribute {}",
            item.item_type, item.unique_attribute
        ))),
    }
}

/// Validate every item, returning `(index, error)` for each invalid one.
#[must_use]
pub fn validate_items(items: &[Item]) -> Vec<(usize, DiscoveryError)> {
    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| validate_item(item).err().map(|err| (idx, err)))
        .collect()
}

fn invalid(message: impl Into<String>) -> DiscoveryError {
    DiscoveryError::InvalidItem(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colour(name: &str) -> Item {
        Item::new(
            "colour",
            "name",
            "global",
            Attributes::new().with("name", name).with("hex", "#ff0000"),
        )
    }

    #[test]
    fn well_formed_item_validates() {
        let item = colour("Red");
        assert!(validate_item(&item).is_ok());
        assert_eq!(item.unique_attribute_value(), Some("Red"));
    }

    #[test]
    fn empty_type_is_rejected() {
        let mut item = colour("Red");
        item.item_type.clear();
        let err = validate_item(&item).unwrap_err();
        assert!(err.to_string().contains("item type is empty"), "{err}");
    }

    #[test]
    fn missing_unique_attribute_is_rejected() {
        let item = Item::new("colour", "name", "global", Attributes::new().with("hex", "#fff"));
        let err = validate_item(&item).unwrap_err();
        assert!(err.to_string().contains("missing string unique attribute name"), "{err}");
    }

    #[test]
    fn non_string_unique_attribute_is_rejected() {
        let item = Item::new("colour", "name", "global", Attributes::new().with("name", 7_i64));
        assert!(validate_item(&item).is_err());
    }

    #[test]
    fn empty_attributes_and_scope_are_rejected() {
        let item = Item::new("colour", "name", "global", Attributes::new());
        assert!(validate_item(&item).unwrap_err().to_string().contains("no attributes"));

        let mut scoped = colour("Red");
        scoped.scope.clear();
        assert!(validate_item(&scoped).unwrap_err().to_string().contains("empty scope"));
    }

    #[test]
    fn validate_items_reports_indices_of_bad_items() {
        let mut bad = colour("Blue");
        bad.unique_attribute.clear();
        let failures = validate_items(&[colour("Red"), bad, colour("Green")]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 1);
    }
}
