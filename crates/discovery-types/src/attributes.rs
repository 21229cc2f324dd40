//! Attribute mapping carried by every [`crate::Item`].

use std::collections::BTreeMap;

use discovery_error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};

use crate::value::AttributeValue;

/// Ordered attribute name → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Fetch an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::AttributeNotFound`] when `key` is absent.
    pub fn get(&self, key: &str) -> Result<&AttributeValue> {
        self.values
            .get(key)
            .ok_or_else(|| DiscoveryError::AttributeNotFound {
                key: key.to_owned(),
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
