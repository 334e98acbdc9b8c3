//! The resolved visual contract for one edge.

use serde::{Deserialize, Serialize};

use super::error::StyleError;
use super::overlay::Overlay;

/// Overlays and style class to render for an edge.
///
/// The same shape is stored in mapping table entries, where it acts as a
/// partial directive that [`merge`](Self::merge) folds into the result.
/// The empty set renders as a plain edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderDirectiveSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<Overlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl RenderDirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an overlay, returning the updated set for chaining.
    pub fn overlay(mut self, overlay: impl Into<Overlay>) -> Self {
        self.overlays.push(overlay.into());
        self
    }

    /// Sets the style class, returning the updated set for chaining.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Folds `other` into this set.
    ///
    /// Overlays are appended in order. There is a single class slot: a class
    /// on `other` replaces the current one, an absent class leaves it alone.
    pub fn merge(&mut self, other: &RenderDirectiveSet) {
        self.overlays.extend(other.overlays.iter().cloned());
        if let Some(class) = &other.css_class {
            self.css_class = Some(class.clone());
        }
    }

    /// True when there is nothing to draw beyond a plain edge.
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty() && self.css_class.is_none()
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        self.overlays.iter().try_for_each(Overlay::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ArrowOverlay, Direction, LabelOverlay};

    #[test]
    fn test_default_is_empty() {
        assert!(RenderDirectiveSet::default().is_empty());
        assert!(!RenderDirectiveSet::new().class("dashed").is_empty());
    }

    #[test]
    fn test_merge_appends_overlays_in_order() {
        let mut acc = RenderDirectiveSet::new().overlay(LabelOverlay::new(0.5, "x"));
        let arrows = RenderDirectiveSet::new()
            .overlay(ArrowOverlay::new(1.0, 20.0, 15.0))
            .overlay(ArrowOverlay::new(0.0, 20.0, 15.0).pointing(Direction::Reverse));

        acc.merge(&arrows);

        assert_eq!(acc.overlays.len(), 3);
        assert!(acc.overlays[0].as_label().is_some());
        assert_eq!(acc.overlays[1].location(), 1.0);
        assert_eq!(acc.overlays[2].location(), 0.0);
    }

    #[test]
    fn test_merge_later_class_wins() {
        let mut acc = RenderDirectiveSet::new().class("first");
        acc.merge(&RenderDirectiveSet::new().class("second"));
        assert_eq!(acc.css_class.as_deref(), Some("second"));
    }

    #[test]
    fn test_merge_without_class_keeps_current() {
        let mut acc = RenderDirectiveSet::new().class("kept");
        acc.merge(&RenderDirectiveSet::new());
        assert_eq!(acc.css_class.as_deref(), Some("kept"));
    }

    #[test]
    fn test_empty_set_serializes_to_empty_object() {
        let value = serde_json::to_value(RenderDirectiveSet::new()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
