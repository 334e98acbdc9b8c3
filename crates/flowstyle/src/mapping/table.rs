//! Style mapping tables: property name to style key to directive.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::stylesheet::RawPropertyMapping;
use crate::constants::{
    ARROW_LENGTH, ARROW_WIDTH, CLASS_DASHED_EDGE, EDGE_TYPE_BOTH_ARROWS, EDGE_TYPE_DASHED,
    EDGE_TYPE_PLAIN, EDGE_TYPE_SOURCE_ARROW, EDGE_TYPE_TARGET_ARROW, PROPERTY_LINE_STYLE,
};
use crate::style::{ensure_positive, ArrowOverlay, Direction, RenderDirectiveSet, StyleError};

/// Validated arrowhead dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    width: f64,
    length: f64,
}

impl ArrowGeometry {
    /// Creates a geometry, rejecting dimensions that are not positive finite numbers.
    pub fn new(width: f64, length: f64) -> Result<Self, StyleError> {
        ensure_positive("arrow width", width)?;
        ensure_positive("arrow length", length)?;
        Ok(Self { width, length })
    }

    /// Like [`new`](Self::new), but absent dimensions fall back to the defaults.
    pub fn from_options(width: Option<f64>, length: Option<f64>) -> Result<Self, StyleError> {
        Self::new(width.unwrap_or(ARROW_WIDTH), length.unwrap_or(ARROW_LENGTH))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    fn arrow(&self, location: f64, direction: Direction) -> ArrowOverlay {
        ArrowOverlay::new(location, self.width, self.length).pointing(direction)
    }
}

impl Default for ArrowGeometry {
    fn default() -> Self {
        Self {
            width: ARROW_WIDTH,
            length: ARROW_LENGTH,
        }
    }
}

/// The style keys available for one property, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyMapping {
    pub property: String,
    #[serde(default)]
    pub mappings: IndexMap<String, RenderDirectiveSet>,
}

impl PropertyMapping {
    /// Creates a mapping for `property` with no style keys.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            mappings: IndexMap::new(),
        }
    }

    /// Adds a style key, returning the updated mapping for chaining.
    ///
    /// Re-adding an existing key replaces its directive but keeps its position.
    pub fn style(mut self, key: impl Into<String>, directive: RenderDirectiveSet) -> Self {
        self.mappings.insert(key.into(), directive);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RenderDirectiveSet> {
        self.mappings.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.mappings.contains_key(key)
    }

    /// Style keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }
}

/// An immutable, ordered set of property mappings.
///
/// Property names are unique within a table. Tables deserialise from the
/// stylesheet shape (a list of `{ property, mappings }`) and are validated
/// on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RawPropertyMapping>", into = "Vec<PropertyMapping>")]
pub struct StyleMappingTable {
    properties: Vec<PropertyMapping>,
}

impl StyleMappingTable {
    /// Builds a table, validating property uniqueness and every directive.
    pub fn new(properties: Vec<PropertyMapping>) -> Result<Self, StyleError> {
        for (i, mapping) in properties.iter().enumerate() {
            if properties[..i].iter().any(|m| m.property == mapping.property) {
                return Err(StyleError::invalid(format!(
                    "property '{}' is mapped more than once",
                    mapping.property
                )));
            }
            for (key, directive) in &mapping.mappings {
                directive.validate().map_err(|e| {
                    let reason = match e {
                        StyleError::InvalidConfiguration { reason } => reason,
                        other => other.to_string(),
                    };
                    StyleError::invalid(format!("{}.{}: {}", mapping.property, key, reason))
                })?;
            }
        }
        Ok(Self { properties })
    }

    /// The canonical flowchart table: `lineStyle` with five style keys.
    pub fn flowchart(geometry: ArrowGeometry) -> Self {
        let line_style = PropertyMapping::new(PROPERTY_LINE_STYLE)
            .style(
                EDGE_TYPE_SOURCE_ARROW,
                RenderDirectiveSet::new().overlay(geometry.arrow(0.0, Direction::Reverse)),
            )
            .style(
                EDGE_TYPE_TARGET_ARROW,
                RenderDirectiveSet::new().overlay(geometry.arrow(1.0, Direction::Forward)),
            )
            .style(
                EDGE_TYPE_BOTH_ARROWS,
                RenderDirectiveSet::new()
                    .overlay(geometry.arrow(1.0, Direction::Forward))
                    .overlay(geometry.arrow(0.0, Direction::Reverse)),
            )
            .style(EDGE_TYPE_PLAIN, RenderDirectiveSet::new())
            .style(
                EDGE_TYPE_DASHED,
                RenderDirectiveSet::new().class(CLASS_DASHED_EDGE),
            );

        tracing::debug!(
            width = geometry.width(),
            length = geometry.length(),
            "built flowchart style mapping table"
        );

        Self {
            properties: vec![line_style],
        }
    }

    /// Looks up the mapping for a property.
    pub fn mapping(&self, property: &str) -> Option<&PropertyMapping> {
        self.properties.iter().find(|m| m.property == property)
    }

    /// Looks up the directive for one style key of one property.
    pub fn lookup(&self, property: &str, key: &str) -> Option<&RenderDirectiveSet> {
        self.mapping(property).and_then(|m| m.get(key))
    }

    /// Property mappings in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyMapping> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<StyleMappingTable> for Vec<PropertyMapping> {
    fn from(table: StyleMappingTable) -> Self {
        table.properties
    }
}

/// Builds the canonical flowchart table.
///
/// Absent dimensions default to a width of 20 and a length of 15. A present
/// dimension that is zero, negative, or not finite is rejected.
///
/// # Example
///
/// ```rust
/// use flowstyle::build_mapping_table;
///
/// let table = build_mapping_table(Some(12.0), None).unwrap();
/// let arrow = table.lookup("lineStyle", "targetArrow").unwrap().overlays[0]
///     .as_arrow()
///     .unwrap()
///     .clone();
/// assert_eq!((arrow.width, arrow.length), (12.0, 15.0));
///
/// assert!(build_mapping_table(Some(0.0), None).is_err());
/// ```
pub fn build_mapping_table(
    arrow_width: Option<f64>,
    arrow_length: Option<f64>,
) -> Result<StyleMappingTable, StyleError> {
    let geometry = ArrowGeometry::from_options(arrow_width, arrow_length)?;
    Ok(StyleMappingTable::flowchart(geometry))
}

static DEFAULT_TABLE: Lazy<StyleMappingTable> =
    Lazy::new(|| StyleMappingTable::flowchart(ArrowGeometry::default()));

/// The flowchart table with default arrow geometry, built on first use.
pub fn default_mapping_table() -> &'static StyleMappingTable {
    &DEFAULT_TABLE
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn single_arrow_entries_carry_geometry(
            width in 0.001f64..1000.0,
            length in 0.001f64..1000.0,
        ) {
            let table = build_mapping_table(Some(width), Some(length)).unwrap();
            for key in [EDGE_TYPE_SOURCE_ARROW, EDGE_TYPE_TARGET_ARROW] {
                let directive = table.lookup(PROPERTY_LINE_STYLE, key).unwrap();
                prop_assert_eq!(directive.overlays.len(), 1);
                let arrow = directive.overlays[0].as_arrow().unwrap();
                prop_assert_eq!(arrow.width, width);
                prop_assert_eq!(arrow.length, length);
            }
        }

        #[test]
        fn non_positive_width_is_rejected(width in -1000.0f64..=0.0) {
            prop_assert!(build_mapping_table(Some(width), None).is_err());
        }
    }
}
