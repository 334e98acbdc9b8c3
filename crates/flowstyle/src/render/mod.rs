//! Edge appearance rendering.
//!
//! - [`EdgeView`]: the base class and overlays shared by every edge
//! - [`EdgeRenderer`]: combines the view with resolved mapping directives
//!   and renders label templates against the edge's properties
//! - [`EdgeAppearance`]: the result handed to the drawing host

mod renderer;
mod view;

pub use renderer::{EdgeAppearance, EdgeRenderer};
pub use view::EdgeView;
