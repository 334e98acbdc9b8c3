//! Directive model for edge rendering.
//!
//! This module provides the primitives every other module builds on:
//!
//! - [`Overlay`]: an arrowhead or label placed along the edge path
//! - [`RenderDirectiveSet`]: the overlays and style class for one edge
//! - [`StyleError`]: errors from building, loading, and strict resolution

mod directive;
mod error;
mod overlay;

pub(crate) use overlay::ensure_positive;

pub use directive::RenderDirectiveSet;
pub use error::StyleError;
pub use overlay::{ArrowOverlay, Direction, LabelOverlay, Overlay};
