//! Resolution of a property bag into render directives.
//!
//! Resolution walks the table in declaration order. For every mapped
//! property present in the bag, the bag's value is looked up as a style key
//! and the matching directive is merged into the result. Overlays
//! concatenate; the single style-class slot keeps the last class seen.
//!
//! A value naming a key the table does not declare (or a value that is not a
//! string) is stale data. [`ResolveMode::Lenient`] skips it with a warning so
//! the edge still renders; [`ResolveMode::Strict`] reports it.

use serde_json::Value;

use super::table::StyleMappingTable;
use crate::model::PropertyBag;
use crate::style::{RenderDirectiveSet, StyleError};

/// How resolution treats values that name unknown style keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Skip the property and log a warning.
    #[default]
    Lenient,
    /// Fail with [`StyleError::UnknownStyleKey`].
    Strict,
}

/// Computes the directives for `properties`, skipping unknown style keys.
///
/// Never fails: an empty bag or an empty table yields the empty set.
///
/// # Example
///
/// ```rust
/// use flowstyle::{default_mapping_table, resolve, PropertyBag};
///
/// let bag = PropertyBag::new().with("lineStyle", "dashed");
/// let directives = resolve(default_mapping_table(), &bag);
/// assert!(directives.overlays.is_empty());
/// assert_eq!(directives.css_class.as_deref(), Some("jtk-flowchart-dashed-edge"));
/// ```
pub fn resolve(table: &StyleMappingTable, properties: &PropertyBag) -> RenderDirectiveSet {
    let mut result = RenderDirectiveSet::new();
    for (property, value) in mapped_values(table, properties) {
        match lookup(table, property, value) {
            Some(directive) => result.merge(directive),
            None => tracing::warn!(
                property,
                value = %value,
                "skipping unknown style key"
            ),
        }
    }
    result
}

/// Computes the directives for `properties`, failing on the first unknown style key.
pub fn resolve_strict(
    table: &StyleMappingTable,
    properties: &PropertyBag,
) -> Result<RenderDirectiveSet, StyleError> {
    let mut result = RenderDirectiveSet::new();
    for (property, value) in mapped_values(table, properties) {
        let directive = lookup(table, property, value).ok_or_else(|| StyleError::UnknownStyleKey {
            property: property.to_string(),
            key: style_key_text(value),
        })?;
        result.merge(directive);
    }
    Ok(result)
}

/// Dispatches to [`resolve`] or [`resolve_strict`].
pub fn resolve_with(
    table: &StyleMappingTable,
    properties: &PropertyBag,
    mode: ResolveMode,
) -> Result<RenderDirectiveSet, StyleError> {
    match mode {
        ResolveMode::Lenient => Ok(resolve(table, properties)),
        ResolveMode::Strict => resolve_strict(table, properties),
    }
}

/// Style keys declared for `property`, in declaration order.
///
/// Returns an empty list when the property is not mapped.
pub fn enumerate_style_keys<'a>(table: &'a StyleMappingTable, property: &str) -> Vec<&'a str> {
    table
        .mapping(property)
        .map(|m| m.keys().collect())
        .unwrap_or_default()
}

impl StyleMappingTable {
    /// See [`resolve`].
    pub fn resolve(&self, properties: &PropertyBag) -> RenderDirectiveSet {
        resolve(self, properties)
    }

    /// See [`resolve_strict`].
    pub fn resolve_strict(&self, properties: &PropertyBag) -> Result<RenderDirectiveSet, StyleError> {
        resolve_strict(self, properties)
    }

    /// See [`enumerate_style_keys`].
    pub fn style_keys(&self, property: &str) -> Vec<&str> {
        enumerate_style_keys(self, property)
    }
}

/// Pairs each mapped property, in table order, with its value in the bag.
fn mapped_values<'a>(
    table: &'a StyleMappingTable,
    properties: &'a PropertyBag,
) -> impl Iterator<Item = (&'a str, &'a Value)> {
    table.properties().filter_map(move |mapping| {
        properties
            .get(&mapping.property)
            .map(|value| (mapping.property.as_str(), value))
    })
}

fn lookup<'a>(
    table: &'a StyleMappingTable,
    property: &str,
    value: &Value,
) -> Option<&'a RenderDirectiveSet> {
    value.as_str().and_then(|key| table.lookup(property, key))
}

fn style_key_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::mapping::{build_mapping_table, PropertyMapping};
    use crate::style::{ArrowOverlay, Direction};
    use serde_json::json;

    fn line_style(key: &str) -> PropertyBag {
        PropertyBag::new().with(PROPERTY_LINE_STYLE, key)
    }

    #[test]
    fn test_empty_bag_resolves_empty() {
        let table = build_mapping_table(None, None).unwrap();
        assert!(resolve(&table, &PropertyBag::new()).is_empty());
    }

    #[test]
    fn test_empty_table_resolves_empty() {
        let table = StyleMappingTable::default();
        assert!(resolve(&table, &line_style(EDGE_TYPE_DASHED)).is_empty());
    }

    #[test]
    fn test_plain_resolves_empty() {
        let table = build_mapping_table(None, None).unwrap();
        assert_eq!(resolve(&table, &line_style(EDGE_TYPE_PLAIN)), RenderDirectiveSet::new());
    }

    #[test]
    fn test_dashed_resolves_class_only() {
        let table = build_mapping_table(None, None).unwrap();
        let result = resolve(&table, &line_style(EDGE_TYPE_DASHED));
        assert!(result.overlays.is_empty());
        assert_eq!(result.css_class.as_deref(), Some(CLASS_DASHED_EDGE));
    }

    #[test]
    fn test_both_arrows_resolves_two_opposing_arrows() {
        let table = build_mapping_table(None, None).unwrap();
        let result = resolve(&table, &line_style(EDGE_TYPE_BOTH_ARROWS));
        assert_eq!(result.overlays.len(), 2);

        let forward = result.overlays[0].as_arrow().unwrap();
        assert_eq!(forward.direction, Direction::Forward);
        assert_eq!(forward.location, 1.0);

        let reverse = result.overlays[1].as_arrow().unwrap();
        assert_eq!(reverse.direction, Direction::Reverse);
        assert_eq!(reverse.location, 0.0);
    }

    #[test]
    fn test_unknown_key_is_skipped() {
        let table = build_mapping_table(None, None).unwrap();
        assert!(resolve(&table, &line_style("nonexistentKey")).is_empty());
    }

    #[test]
    fn test_non_string_value_is_skipped() {
        let table = build_mapping_table(None, None).unwrap();
        let bag = PropertyBag::new().with(PROPERTY_LINE_STYLE, 7);
        assert!(resolve(&table, &bag).is_empty());
    }

    #[test]
    fn test_unmapped_properties_are_ignored() {
        let table = build_mapping_table(None, None).unwrap();
        let bag = line_style(EDGE_TYPE_TARGET_ARROW)
            .with(PROPERTY_LABEL, "yes")
            .with(PROPERTY_COLOR, "#FF0000");
        let result = resolve(&table, &bag);
        assert_eq!(result.overlays.len(), 1);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = build_mapping_table(None, None).unwrap();
        let bag = line_style(EDGE_TYPE_BOTH_ARROWS);
        assert_eq!(resolve(&table, &bag), resolve(&table, &bag));
    }

    #[test]
    fn test_strict_reports_unknown_key() {
        let table = build_mapping_table(None, None).unwrap();
        match resolve_strict(&table, &line_style("wavy")) {
            Err(StyleError::UnknownStyleKey { property, key }) => {
                assert_eq!(property, PROPERTY_LINE_STYLE);
                assert_eq!(key, "wavy");
            }
            other => panic!("expected unknown style key, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_reports_non_string_value() {
        let table = build_mapping_table(None, None).unwrap();
        let bag = PropertyBag::new().with(PROPERTY_LINE_STYLE, json!(true));
        match resolve_strict(&table, &bag) {
            Err(StyleError::UnknownStyleKey { key, .. }) => assert_eq!(key, "true"),
            other => panic!("expected unknown style key, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_matches_lenient_on_known_keys() {
        let table = build_mapping_table(None, None).unwrap();
        let bag = line_style(EDGE_TYPE_SOURCE_ARROW);
        assert_eq!(resolve_strict(&table, &bag).unwrap(), resolve(&table, &bag));
    }

    #[test]
    fn test_resolve_with_dispatches_on_mode() {
        let table = build_mapping_table(None, None).unwrap();
        let bag = line_style("wavy");
        assert!(resolve_with(&table, &bag, ResolveMode::Lenient).unwrap().is_empty());
        assert!(resolve_with(&table, &bag, ResolveMode::Strict).is_err());
    }

    #[test]
    fn test_multiple_properties_merge_in_table_order() {
        let table = StyleMappingTable::new(vec![
            PropertyMapping::new("weight").style(
                "heavy",
                RenderDirectiveSet::new()
                    .overlay(ArrowOverlay::new(0.5, 4.0, 4.0))
                    .class("heavy"),
            ),
            PropertyMapping::new(PROPERTY_LINE_STYLE)
                .style(EDGE_TYPE_DASHED, RenderDirectiveSet::new().class(CLASS_DASHED_EDGE))
                .style(
                    EDGE_TYPE_TARGET_ARROW,
                    RenderDirectiveSet::new().overlay(ArrowOverlay::new(1.0, 20.0, 15.0)),
                ),
        ])
        .unwrap();

        // Bag order is the reverse of table order; table order decides.
        let bag = line_style(EDGE_TYPE_DASHED).with("weight", "heavy");
        let result = resolve(&table, &bag);
        assert_eq!(result.overlays.len(), 1);
        assert_eq!(result.overlays[0].location(), 0.5);
        assert_eq!(result.css_class.as_deref(), Some(CLASS_DASHED_EDGE));
    }

    #[test]
    fn test_enumerate_style_keys_declaration_order() {
        let table = build_mapping_table(None, None).unwrap();
        let expected = vec![
            EDGE_TYPE_SOURCE_ARROW,
            EDGE_TYPE_TARGET_ARROW,
            EDGE_TYPE_BOTH_ARROWS,
            EDGE_TYPE_PLAIN,
            EDGE_TYPE_DASHED,
        ];
        assert_eq!(enumerate_style_keys(&table, PROPERTY_LINE_STYLE), expected);
        assert_eq!(table.style_keys(PROPERTY_LINE_STYLE), expected);
    }

    #[test]
    fn test_enumerate_unmapped_property_is_empty() {
        let table = build_mapping_table(None, None).unwrap();
        assert!(enumerate_style_keys(&table, PROPERTY_FILL).is_empty());
    }
}
