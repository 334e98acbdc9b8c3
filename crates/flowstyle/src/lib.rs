//! # Flowstyle - edge style mapping for flowchart editors
//!
//! `flowstyle` maps the discrete style a user picks for an edge (a
//! `lineStyle` of `"dashed"`, `"bothArrows"`, ...) to the concrete rendering
//! directives a drawing host needs: arrowhead overlays, label overlays, and
//! a style class.
//!
//! ## Core concepts
//!
//! - [`StyleMappingTable`]: ordered `property -> style key -> directive` tables,
//!   built from arrow geometry or loaded from a YAML/JSON stylesheet
//! - [`resolve`]: a property bag in, a [`RenderDirectiveSet`] out; pure and total
//! - [`EdgeRenderer`]: adds the shared edge view (base class, midpoint label)
//!   and renders label templates against the edge's properties
//! - [`StylePicker`]: lists style keys for an inspector and writes the choice back
//!
//! ## Quick start
//!
//! ```rust
//! use flowstyle::{build_mapping_table, enumerate_style_keys, resolve, PropertyBag};
//!
//! let table = build_mapping_table(None, None).unwrap();
//!
//! let keys = enumerate_style_keys(&table, "lineStyle");
//! assert_eq!(keys, ["sourceArrow", "targetArrow", "bothArrows", "plain", "dashed"]);
//!
//! let bag = PropertyBag::new().with("lineStyle", "bothArrows");
//! let directives = resolve(&table, &bag);
//! assert_eq!(directives.overlays.len(), 2);
//!
//! // Unknown keys are skipped rather than failing the render.
//! let stale = PropertyBag::new().with("lineStyle", "zigzag");
//! assert!(resolve(&table, &stale).is_empty());
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (a warning whenever an unknown style
//! key is skipped) and leaves subscriber setup to the application.

pub mod constants;
pub mod mapping;
pub mod model;
pub mod picker;
pub mod render;
pub mod style;

pub use mapping::{
    build_mapping_table, default_mapping_table, enumerate_style_keys, resolve, resolve_strict,
    resolve_with, ArrowGeometry, PropertyMapping, ResolveMode, StyleMappingTable,
    StylesheetFormat,
};
pub use model::{new_edge_payload, new_node_payload, text_color, Dataset, Edge, Node, PropertyBag};
pub use picker::{StyleChoice, StylePicker};
pub use render::{EdgeAppearance, EdgeRenderer, EdgeView};
pub use style::{ArrowOverlay, Direction, LabelOverlay, Overlay, RenderDirectiveSet, StyleError};
