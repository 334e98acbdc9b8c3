//! Property-to-style mapping tables and their resolver.
//!
//! This module provides:
//!
//! - [`StyleMappingTable`]: ordered `property -> style key -> directive` tables
//! - [`build_mapping_table`]: the canonical flowchart `lineStyle` table
//! - [`resolve`] / [`resolve_strict`]: property bag to [`RenderDirectiveSet`]
//! - [`enumerate_style_keys`]: the choices a picker offers, in order
//! - stylesheet loading from YAML or JSON documents
//!
//! Tables are built once and never mutated; resolution is a pure function
//! of the table and the bag, so results are never cached.
//!
//! [`RenderDirectiveSet`]: crate::style::RenderDirectiveSet

mod resolve;
mod stylesheet;
mod table;

pub use resolve::{enumerate_style_keys, resolve, resolve_strict, resolve_with, ResolveMode};
pub use stylesheet::StylesheetFormat;
pub use table::{
    build_mapping_table, default_mapping_table, ArrowGeometry, PropertyMapping, StyleMappingTable,
};
