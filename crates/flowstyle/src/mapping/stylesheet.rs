//! Loading mapping tables from YAML and JSON stylesheets.
//!
//! A stylesheet is the serialised form of a [`StyleMappingTable`]:
//!
//! ```yaml
//! - property: lineStyle
//!   mappings:
//!     targetArrow:
//!       overlays:
//!         - { type: arrow, location: 1, width: 20, length: 15 }
//!     plain: {}
//!     dashed:
//!       css_class: jtk-flowchart-dashed-edge
//! ```
//!
//! Style keys keep the order they are written in. Tables are validated on
//! load: a non-positive arrow size, an overlay outside `[0, 1]`, a property
//! listed twice, or a style key written twice under one property is reported
//! as [`StyleError::InvalidConfiguration`] before any resolution.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::table::{PropertyMapping, StyleMappingTable};
use crate::style::{RenderDirectiveSet, StyleError};

/// Stylesheet document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetFormat {
    Yaml,
    Json,
}

impl StylesheetFormat {
    /// Picks the format from a file extension (`yaml`, `yml`, or `json`).
    pub fn from_path(path: &Path) -> Result<Self, StyleError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(StylesheetFormat::Yaml),
            Some("json") => Ok(StylesheetFormat::Json),
            _ => Err(StyleError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// One `{ property, mappings }` entry as written, before validation.
#[derive(Debug, Deserialize)]
pub struct RawPropertyMapping {
    property: String,
    #[serde(default)]
    mappings: StyleEntries,
}

/// Style key entries in document order, duplicates included.
#[derive(Debug, Default)]
struct StyleEntries(Vec<(String, RenderDirectiveSet)>);

impl<'de> Deserialize<'de> for StyleEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = StyleEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of style keys to render directives")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleEntries, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(StyleEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl TryFrom<RawPropertyMapping> for PropertyMapping {
    type Error = StyleError;

    fn try_from(raw: RawPropertyMapping) -> Result<Self, Self::Error> {
        let mut mappings = IndexMap::with_capacity(raw.mappings.0.len());
        for (key, directive) in raw.mappings.0 {
            if mappings.contains_key(&key) {
                return Err(StyleError::invalid(format!(
                    "style key '{}' is declared more than once for property '{}'",
                    key, raw.property
                )));
            }
            mappings.insert(key, directive);
        }
        Ok(PropertyMapping {
            property: raw.property,
            mappings,
        })
    }
}

impl TryFrom<Vec<RawPropertyMapping>> for StyleMappingTable {
    type Error = StyleError;

    fn try_from(raw: Vec<RawPropertyMapping>) -> Result<Self, Self::Error> {
        let properties = raw
            .into_iter()
            .map(PropertyMapping::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(properties)
    }
}

impl StyleMappingTable {
    /// Parses and validates a YAML stylesheet.
    ///
    /// Malformed documents fail with [`StyleError::Parse`]; well-formed
    /// documents describing an invalid table fail with
    /// [`StyleError::InvalidConfiguration`].
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        let raw: Vec<RawPropertyMapping> = serde_yaml::from_str(source)?;
        Self::try_from(raw)
    }

    /// Parses and validates a JSON stylesheet. Errors as in [`from_yaml`](Self::from_yaml).
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let raw: Vec<RawPropertyMapping> = serde_json::from_str(source)?;
        Self::try_from(raw)
    }

    pub fn parse(source: &str, format: StylesheetFormat) -> Result<Self, StyleError> {
        match format {
            StylesheetFormat::Yaml => Self::from_yaml(source),
            StylesheetFormat::Json => Self::from_json(source),
        }
    }

    /// Reads a stylesheet file, choosing the parser by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let format = StylesheetFormat::from_path(path)?;
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&source, format)?;
        tracing::debug!(
            path = %path.display(),
            properties = table.len(),
            "loaded stylesheet"
        );
        Ok(table)
    }

    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
