//! Style picker backing the edge inspector.
//!
//! The picker lists the style keys of one mapped property in declaration
//! order and writes the chosen key back into an entity's property bag.

use serde::Serialize;

use crate::mapping::{enumerate_style_keys, StyleMappingTable};
use crate::model::PropertyBag;
use crate::style::StyleError;

/// One entry in the picker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleChoice<'a> {
    pub key: &'a str,
    pub selected: bool,
}

/// Picker over the style keys of a single property.
#[derive(Debug, Clone, Copy)]
pub struct StylePicker<'a> {
    table: &'a StyleMappingTable,
    property: &'a str,
}

impl<'a> StylePicker<'a> {
    pub fn new(table: &'a StyleMappingTable, property: &'a str) -> Self {
        Self { table, property }
    }

    pub fn property(&self) -> &str {
        self.property
    }

    /// Style keys in declaration order.
    pub fn keys(&self) -> Vec<&'a str> {
        enumerate_style_keys(self.table, self.property)
    }

    /// Style keys with the bag's current value marked as selected.
    pub fn choices(&self, properties: &PropertyBag) -> Vec<StyleChoice<'a>> {
        let current = properties.get_str(self.property);
        self.keys()
            .into_iter()
            .map(|key| StyleChoice {
                key,
                selected: current == Some(key),
            })
            .collect()
    }

    /// Writes `key` into the bag.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyleKey`] if the table does not declare
    /// `key` for this property; the bag is left untouched.
    pub fn select(&self, properties: &mut PropertyBag, key: &str) -> Result<(), StyleError> {
        if self.table.lookup(self.property, key).is_none() {
            return Err(StyleError::UnknownStyleKey {
                property: self.property.to_string(),
                key: key.to_string(),
            });
        }
        properties.set(self.property, key);
        Ok(())
    }
}
