//! The `{ nodes, edges }` document the editor loads.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::bag::PropertyBag;
use crate::constants::{
    DEFAULT_FILL, DEFAULT_OUTLINE, DEFAULT_OUTLINE_WIDTH, DEFAULT_STROKE, DEFAULT_TEXT_COLOR,
    EDGE_TYPE_TARGET_ARROW, PROPERTY_COLOR, PROPERTY_FILL, PROPERTY_LABEL, PROPERTY_LINE_STYLE,
    PROPERTY_OUTLINE, PROPERTY_OUTLINE_WIDTH, PROPERTY_TEXT_COLOR,
};
use crate::style::StyleError;

/// A vertex with arbitrary properties (`text`, `fill`, `outline`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(deserialize_with = "entity_id")]
    pub id: String,
    #[serde(flatten)]
    pub properties: PropertyBag,
}

/// A connection between two nodes with arbitrary properties
/// (`label`, `color`, `lineStyle`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(
        default,
        deserialize_with = "optional_entity_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "entity_id")]
    pub source: String,
    #[serde(deserialize_with = "entity_id")]
    pub target: String,
    #[serde(flatten)]
    pub properties: PropertyBag,
}

/// Ids may be written as strings or numbers; both load as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

fn entity_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_entity_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(deserializer).map(|id| id.map(String::from))
}

impl Edge {
    /// The edge id, or `source->target` when the document gives none.
    pub fn display_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}->{}", self.source, self.target),
        }
    }
}

/// A graph document. Missing `nodes` or `edges` arrays load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Dataset {
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&source)?;
        tracing::debug!(
            path = %path.display(),
            nodes = dataset.nodes.len(),
            edges = dataset.edges.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Checks that every edge endpoint names a node in the dataset.
    pub fn validate_edges(&self) -> Result<(), StyleError> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(StyleError::DanglingEdge {
                        edge: edge.display_id(),
                        endpoint: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Properties given to an edge when the user starts dragging a new connection.
pub fn new_edge_payload() -> PropertyBag {
    PropertyBag::new()
        .with(PROPERTY_LABEL, "")
        .with(PROPERTY_COLOR, DEFAULT_STROKE)
        .with(PROPERTY_LINE_STYLE, EDGE_TYPE_TARGET_ARROW)
}

/// Properties given to a shape dropped from the palette.
pub fn new_node_payload() -> PropertyBag {
    PropertyBag::new()
        .with(PROPERTY_TEXT_COLOR, DEFAULT_TEXT_COLOR)
        .with(PROPERTY_OUTLINE, DEFAULT_OUTLINE)
        .with(PROPERTY_FILL, DEFAULT_FILL)
        .with(PROPERTY_OUTLINE_WIDTH, DEFAULT_OUTLINE_WIDTH)
}

/// The entity's text color, falling back to the default.
pub fn text_color(properties: &PropertyBag) -> &str {
    properties
        .get_str(PROPERTY_TEXT_COLOR)
        .unwrap_or(DEFAULT_TEXT_COLOR)
}
