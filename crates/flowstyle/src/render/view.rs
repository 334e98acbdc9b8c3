//! The fixed configuration every edge shares.

use serde::{Deserialize, Serialize};

use crate::constants::{CLASS_EDGE_LABEL, CLASS_FLOWCHART_EDGE, EDGE_LABEL_LOCATION};
use crate::style::{LabelOverlay, Overlay};

/// Base class and overlays applied to every edge before any mapping.
///
/// Label text in a view is a template over the edge's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub css_class: String,
    #[serde(default)]
    pub overlays: Vec<Overlay>,
}

impl EdgeView {
    /// A view with a base class and no overlays.
    pub fn new(css_class: impl Into<String>) -> Self {
        Self {
            css_class: css_class.into(),
            overlays: Vec::new(),
        }
    }

    pub fn overlay(mut self, overlay: impl Into<Overlay>) -> Self {
        self.overlays.push(overlay.into());
        self
    }

    /// The flowchart edge: base class plus the `label` property drawn at the midpoint.
    pub fn flowchart() -> Self {
        Self::new(CLASS_FLOWCHART_EDGE).overlay(
            LabelOverlay::new(EDGE_LABEL_LOCATION, "{{ label }}").with_class(CLASS_EDGE_LABEL),
        )
    }
}

impl Default for EdgeView {
    fn default() -> Self {
        Self::flowchart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flowchart_view() {
        let view = EdgeView::flowchart();
        assert_eq!(view.css_class, CLASS_FLOWCHART_EDGE);
        assert_eq!(view.overlays.len(), 1);

        let label = view.overlays[0].as_label().unwrap();
        assert_eq!(label.location, 0.5);
        assert_eq!(label.css_class.as_deref(), Some(CLASS_EDGE_LABEL));
    }

    #[test]
    fn test_default_is_flowchart() {
        assert_eq!(EdgeView::default(), EdgeView::flowchart());
    }
}
