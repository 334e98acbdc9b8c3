//! Graph data model: property bags, nodes, edges, and the dataset document.
//!
//! The editor loads a JSON document shaped `{ "nodes": [...], "edges": [...] }`.
//! Each entity carries an id (edges carry `source` and `target`) and any
//! number of further key/value properties, which land in a [`PropertyBag`].

mod bag;
mod dataset;

pub use bag::PropertyBag;
pub use dataset::{new_edge_payload, new_node_payload, text_color, Dataset, Edge, Node};
