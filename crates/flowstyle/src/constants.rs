//! Style keys, property names, classes, and defaults shared by the flowchart editor.

/// Single arrow at the source end, pointing back.
pub const EDGE_TYPE_SOURCE_ARROW: &str = "sourceArrow";
/// Single arrow at the target end.
pub const EDGE_TYPE_TARGET_ARROW: &str = "targetArrow";
pub const EDGE_TYPE_BOTH_ARROWS: &str = "bothArrows";
pub const EDGE_TYPE_PLAIN: &str = "plain";
pub const EDGE_TYPE_DASHED: &str = "dashed";

pub const PROPERTY_TEXT: &str = "text";
pub const PROPERTY_LINE_STYLE: &str = "lineStyle";
pub const PROPERTY_FILL: &str = "fill";
pub const PROPERTY_LABEL: &str = "label";
pub const PROPERTY_COLOR: &str = "color";
pub const PROPERTY_TEXT_COLOR: &str = "textColor";
pub const PROPERTY_OUTLINE: &str = "outline";
pub const PROPERTY_OUTLINE_WIDTH: &str = "outlineWidth";

pub const CLASS_EDGE_LABEL: &str = "jtk-flowchart-edge-label";
pub const CLASS_DASHED_EDGE: &str = "jtk-flowchart-dashed-edge";
pub const CLASS_FLOWCHART_EDGE: &str = "jtk-flowchart-edge";

pub const ARROW_WIDTH: f64 = 20.0;
pub const ARROW_LENGTH: f64 = 15.0;

/// Where the edge label sits along the path.
pub const EDGE_LABEL_LOCATION: f64 = 0.5;

pub const DEFAULT_FILL: &str = "#FFFFFF";
pub const DEFAULT_STROKE: &str = "#000000";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_OUTLINE: &str = "#000000";
pub const DEFAULT_OUTLINE_WIDTH: u32 = 2;
