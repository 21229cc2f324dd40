//! Checks a returned item set against an [`ExpectedItems`].

use discovery_types::{Item, validate_items};

use crate::case::ExpectedItems;
use crate::compare::attribute_values_equal;
use crate::failure::{CheckFailure, CheckKind};

/// Validate count, structure and attributes of `items`.
///
/// A count mismatch is fatal: indices would no longer line up, so nothing
/// else is checked. Invalid items, unreadable attributes and mismatching
/// values are reported one failure each while checking carries on.
#[must_use]
pub fn validate_item_set(items: &[Item], expected: &ExpectedItems) -> Vec<CheckFailure> {
    if items.len() != expected.num_items {
        return vec![CheckFailure::fatal(
            CheckKind::ItemCount,
            format!("expected {} items, got {}", expected.num_items, items.len()),
        )];
    }

    let mut failures: Vec<CheckFailure> = validate_items(items)
        .into_iter()
        .map(|(idx, err)| CheckFailure::new(CheckKind::ItemInvalid, format!("item {idx}: {err}")))
        .collect();

    for (idx, (item, expected_attributes)) in items.iter().zip(&expected.attributes).enumerate() {
        for (key, expected_value) in expected_attributes {
            let actual = match item.attributes.get(key) {
                Ok(actual) => actual,
                Err(err) => {
                    failures.push(CheckFailure::new(
                        CheckKind::AttributeMissing,
                        format!("item {idx}: {err}"),
                    ));
                    continue;
                }
            };
            if !attribute_values_equal(expected_value, actual) {
                failures.push(CheckFailure::new(
                    CheckKind::AttributeMismatch,
                    format!(
                        "item {idx}: expected attribute {key} to be {expected_value}, got {actual} ({} vs {})",
                        expected_value.kind(),
                        actual.kind()
                    ),
                ));
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use discovery_types::{AttributeValue, Attributes};

    use super::*;

    fn colour(name: &str, rgb: [i64; 3]) -> Item {
        Item::new(
            "colour",
            "name",
            "global",
            Attributes::new()
                .with("name", name)
                .with("rgb", rgb.to_vec()),
        )
    }

    fn kinds(failures: &[CheckFailure]) -> Vec<CheckKind> {
        failures.iter().map(|failure| failure.kind).collect()
    }

    #[test]
    fn matching_items_pass() {
        let items = [colour("Red", [255, 0, 0]), colour("Lime", [0, 255, 0])];
        let expected = ExpectedItems::count(2)
            .then_attributes([("name", AttributeValue::from("Red"))])
            .then_attributes([("rgb", AttributeValue::from(vec![0_i64, 255, 0]))]);
        assert!(validate_item_set(&items, &expected).is_empty());
    }

    #[test]
    fn count_mismatch_is_fatal_and_final() {
        let items = [colour("Red", [255, 0, 0])];
        let expected = ExpectedItems::count(2).then_attributes([("name", "Blue")]);
        let failures = validate_item_set(&items, &expected);
        assert_eq!(kinds(&failures), vec![CheckKind::ItemCount]);
        assert!(failures[0].fatal);
        assert_eq!(failures[0].detail, "expected 2 items, got 1");
    }

    #[test]
    fn fewer_expectations_than_items_checks_only_the_prefix() {
        let items = [colour("Red", [255, 0, 0]), colour("Anything", [1, 2, 3])];
        let expected = ExpectedItems::count(2).then_attributes([("name", "Red")]);
        assert!(validate_item_set(&items, &expected).is_empty());
    }

    #[test]
    fn missing_and_mismatching_attributes_are_reported_per_key() {
        let items = [colour("Red", [255, 0, 0])];
        let expected = ExpectedItems::count(1).then_attributes([
            ("hex", AttributeValue::from("#ff0000")),
            ("name", AttributeValue::from("Blue")),
            ("rgb", AttributeValue::from(vec![255_i64, 0])),
        ]);
        let failures = validate_item_set(&items, &expected);
        assert_eq!(
            kinds(&failures),
            vec![
                CheckKind::AttributeMissing,
                CheckKind::AttributeMismatch,
                CheckKind::AttributeMismatch
            ]
        );
        assert!(failures.iter().all(|failure| !failure.fatal));
        assert!(
            failures[1]
                .detail
                .contains(r#"expected attribute name to be "Blue", got "Red""#),
            "{}",
            failures[1].detail
        );
    }

    #[test]
    fn structurally_invalid_items_are_reported_and_checking_continues() {
        let mut broken = colour("Red", [255, 0, 0]);
        broken.item_type.clear();
        let expected = ExpectedItems::count(1).then_attributes([("name", "Green")]);
        let failures = validate_item_set(&[broken], &expected);
        assert_eq!(
            kinds(&failures),
            vec![CheckKind::ItemInvalid, CheckKind::AttributeMismatch]
        );
    }
}
