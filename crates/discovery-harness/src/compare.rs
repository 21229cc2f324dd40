//! Expected-vs-actual attribute value comparison.

use discovery_types::AttributeValue;

/// Compare an expected attribute value with the value a source returned.
///
/// A list on the expected side matches only a list of the same length whose
/// elements match pairwise, in order. Everything else is exact equality:
/// same variant, same value. Nothing is coerced, so `"1"`, `1` and `1.0`
/// are three different values.
#[must_use]
pub fn attribute_values_equal(expected: &AttributeValue, actual: &AttributeValue) -> bool {
    match (expected, actual) {
        (AttributeValue::List(expected), AttributeValue::List(actual)) => {
            expected.len() == actual.len()
                && expected
                    .iter()
                    .zip(actual)
                    .all(|(e, a)| attribute_values_equal(e, a))
        }
        (AttributeValue::List(_), _) => false,
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn list(values: &[i64]) -> AttributeValue {
        AttributeValue::from(values.to_vec())
    }

    #[test]
    fn scalars_compare_by_variant_and_value() {
        assert!(attribute_values_equal(
            &AttributeValue::from("GreenYellow"),
            &AttributeValue::from("GreenYellow")
        ));
        assert!(!attribute_values_equal(
            &AttributeValue::from("GreenYellow"),
            &AttributeValue::from("greenyellow")
        ));
    }

    #[test]
    fn no_coercion_between_scalar_types() {
        assert!(!attribute_values_equal(
            &AttributeValue::from("1"),
            &AttributeValue::Int(1)
        ));
        assert!(!attribute_values_equal(
            &AttributeValue::Int(1),
            &AttributeValue::Float(1.0)
        ));
        assert!(!attribute_values_equal(
            &AttributeValue::Bool(false),
            &AttributeValue::Null
        ));
    }

    #[test]
    fn lists_require_same_length_and_order() {
        assert!(attribute_values_equal(&list(&[1, 2, 3]), &list(&[1, 2, 3])));
        assert!(!attribute_values_equal(&list(&[1, 2, 3]), &list(&[1, 2])));
        assert!(!attribute_values_equal(&list(&[1, 2]), &list(&[1, 2, 3])));
        assert!(!attribute_values_equal(&list(&[1, 2, 3]), &list(&[3, 2, 1])));
        assert!(attribute_values_equal(&list(&[]), &list(&[])));
    }

    #[test]
    fn expected_list_never_matches_a_scalar() {
        assert!(!attribute_values_equal(&list(&[1]), &AttributeValue::Int(1)));
        assert!(!attribute_values_equal(&AttributeValue::Int(1), &list(&[1])));
    }

    #[test]
    fn nested_lists_compare_elementwise() {
        let nested = AttributeValue::from(vec![list(&[1, 2]), list(&[3])]);
        let flipped = AttributeValue::from(vec![list(&[3]), list(&[1, 2])]);
        assert!(attribute_values_equal(&nested, &nested.clone()));
        assert!(!attribute_values_equal(&nested, &flipped));
    }

    proptest! {
        #[test]
        fn prop_list_equality_matches_vec_equality(
            a in proptest::collection::vec(-5_i64..5, 0..6),
            b in proptest::collection::vec(-5_i64..5, 0..6),
        ) {
            prop_assert_eq!(attribute_values_equal(&list(&a), &list(&b)), a == b);
        }

        #[test]
        fn prop_changing_one_element_breaks_equality(
            values in proptest::collection::vec(any::<i64>(), 1..8),
            idx in any::<prop::sample::Index>(),
        ) {
            let mut changed = values.clone();
            let at = idx.index(changed.len());
            changed[at] = changed[at].wrapping_add(1);
            prop_assert!(!attribute_values_equal(&list(&values), &list(&changed)));
        }
    }
}
