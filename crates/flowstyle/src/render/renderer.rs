//! Edge appearance: the edge view combined with resolved mapping directives.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use super::view::EdgeView;
use crate::mapping::{resolve_with, ResolveMode, StyleMappingTable};
use crate::model::{Edge, PropertyBag};
use crate::style::{Overlay, StyleError};

/// Everything the rendering host needs to draw one edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeAppearance {
    /// Class every edge carries.
    pub base_class: String,
    /// Class contributed by the mapping table, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    /// View overlays followed by mapping overlays, labels already rendered.
    pub overlays: Vec<Overlay>,
}

impl EdgeAppearance {
    /// The base class followed by the mapping class.
    pub fn classes(&self) -> Vec<&str> {
        std::iter::once(self.base_class.as_str())
            .chain(self.css_class.as_deref())
            .collect()
    }
}

/// A renderer with pre-compiled label templates.
///
/// Every label in the view and in the table is compiled once, when the
/// renderer is created. Labels render against the edge's property bag;
/// properties the bag lacks render as empty text.
///
/// # Example
///
/// ```rust
/// use flowstyle::{build_mapping_table, EdgeRenderer, EdgeView, PropertyBag};
///
/// let table = build_mapping_table(None, None).unwrap();
/// let renderer = EdgeRenderer::new(table, EdgeView::flowchart()).unwrap();
///
/// let bag = PropertyBag::new()
///     .with("label", "yes")
///     .with("lineStyle", "dashed");
/// let appearance = renderer.appearance(&bag).unwrap();
///
/// assert_eq!(appearance.classes(), vec!["jtk-flowchart-edge", "jtk-flowchart-dashed-edge"]);
/// assert_eq!(appearance.overlays[0].as_label().unwrap().label, "yes");
/// ```
pub struct EdgeRenderer {
    table: StyleMappingTable,
    view: EdgeView,
    mode: ResolveMode,
    env: Environment<'static>,
}

impl EdgeRenderer {
    /// Creates a renderer, compiling every label template.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Template`] if a label has invalid template syntax.
    pub fn new(table: StyleMappingTable, view: EdgeView) -> Result<Self, StyleError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let view_labels = view.overlays.iter();
        let table_labels = table
            .properties()
            .flat_map(|m| m.mappings.values())
            .flat_map(|d| d.overlays.iter());
        for overlay in view_labels.chain(table_labels) {
            if let Overlay::Label(label) = overlay {
                if env.get_template(&label.label).is_err() {
                    env.add_template_owned(label.label.clone(), label.label.clone())?;
                }
            }
        }

        Ok(Self {
            table,
            view,
            mode: ResolveMode::default(),
            env,
        })
    }

    /// Selects how unknown style keys are treated.
    pub fn mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn table(&self) -> &StyleMappingTable {
        &self.table
    }

    pub fn view(&self) -> &EdgeView {
        &self.view
    }

    /// Computes the appearance of an edge with the given properties.
    ///
    /// # Errors
    ///
    /// Fails in strict mode on unknown style keys, or if a label fails to render.
    pub fn appearance(&self, properties: &PropertyBag) -> Result<EdgeAppearance, StyleError> {
        let directives = resolve_with(&self.table, properties, self.mode)?;

        let overlays = self
            .view
            .overlays
            .iter()
            .chain(directives.overlays.iter())
            .map(|overlay| self.render_overlay(overlay, properties))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EdgeAppearance {
            base_class: self.view.css_class.clone(),
            css_class: directives.css_class,
            overlays,
        })
    }

    pub fn appearance_of(&self, edge: &Edge) -> Result<EdgeAppearance, StyleError> {
        self.appearance(&edge.properties)
    }

    fn render_overlay(
        &self,
        overlay: &Overlay,
        properties: &PropertyBag,
    ) -> Result<Overlay, StyleError> {
        match overlay {
            Overlay::Label(label) => {
                let mut rendered = label.clone();
                rendered.label = self
                    .env
                    .get_template(&label.label)?
                    .render(properties.as_map())?;
                Ok(Overlay::Label(rendered))
            }
            Overlay::Arrow(_) => Ok(overlay.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::mapping::{build_mapping_table, PropertyMapping};
    use crate::style::{LabelOverlay, RenderDirectiveSet};

    fn flowchart_renderer() -> EdgeRenderer {
        let table = build_mapping_table(None, None).unwrap();
        EdgeRenderer::new(table, EdgeView::flowchart()).unwrap()
    }

    #[test]
    fn test_label_renders_from_bag() {
        let renderer = flowchart_renderer();
        let bag = PropertyBag::new().with(PROPERTY_LABEL, "no");
        let appearance = renderer.appearance(&bag).unwrap();

        let label = appearance.overlays[0].as_label().unwrap();
        assert_eq!(label.label, "no");
        assert_eq!(label.css_class.as_deref(), Some(CLASS_EDGE_LABEL));
    }

    #[test]
    fn test_missing_label_renders_empty() {
        let renderer = flowchart_renderer();
        let appearance = renderer.appearance(&PropertyBag::new()).unwrap();
        assert_eq!(appearance.overlays[0].as_label().unwrap().label, "");
        assert_eq!(appearance.classes(), vec![CLASS_FLOWCHART_EDGE]);
    }

    #[test]
    fn test_view_overlays_come_first() {
        let renderer = flowchart_renderer();
        let bag = PropertyBag::new().with(PROPERTY_LINE_STYLE, EDGE_TYPE_BOTH_ARROWS);
        let appearance = renderer.appearance(&bag).unwrap();

        assert_eq!(appearance.overlays.len(), 3);
        assert!(appearance.overlays[0].as_label().is_some());
        assert!(appearance.overlays[1].as_arrow().is_some());
        assert!(appearance.overlays[2].as_arrow().is_some());
    }

    #[test]
    fn test_label_text_is_not_escaped() {
        let renderer = flowchart_renderer();
        let bag = PropertyBag::new().with(PROPERTY_LABEL, "a < b & c");
        let appearance = renderer.appearance(&bag).unwrap();
        assert_eq!(appearance.overlays[0].as_label().unwrap().label, "a < b & c");
    }

    #[test]
    fn test_strict_mode_propagates_unknown_key() {
        let renderer = flowchart_renderer().mode(ResolveMode::Strict);
        let bag = PropertyBag::new().with(PROPERTY_LINE_STYLE, "wavy");
        assert!(matches!(
            renderer.appearance(&bag),
            Err(StyleError::UnknownStyleKey { .. })
        ));
    }

    #[test]
    fn test_lenient_mode_skips_unknown_key() {
        let renderer = flowchart_renderer();
        let bag = PropertyBag::new().with(PROPERTY_LINE_STYLE, "wavy");
        let appearance = renderer.appearance(&bag).unwrap();
        assert_eq!(appearance.overlays.len(), 1);
        assert!(appearance.css_class.is_none());
    }

    #[test]
    fn test_mapping_labels_are_templates_too() {
        let table = StyleMappingTable::new(vec![PropertyMapping::new("status").style(
            "blocked",
            RenderDirectiveSet::new().overlay(LabelOverlay::new(0.9, "blocked by {{ owner }}")),
        )])
        .unwrap();
        let renderer = EdgeRenderer::new(table, EdgeView::new(CLASS_FLOWCHART_EDGE)).unwrap();

        let bag = PropertyBag::new()
            .with("status", "blocked")
            .with("owner", "ops");
        let appearance = renderer.appearance(&bag).unwrap();
        assert_eq!(
            appearance.overlays[0].as_label().unwrap().label,
            "blocked by ops"
        );
    }

    #[test]
    fn test_invalid_template_fails_construction() {
        let view = EdgeView::new(CLASS_FLOWCHART_EDGE).overlay(LabelOverlay::new(0.5, "{{ label"));
        let result = EdgeRenderer::new(StyleMappingTable::default(), view);
        assert!(matches!(result, Err(StyleError::Template { .. })));
    }

    #[test]
    fn test_appearance_serializes() {
        let renderer = flowchart_renderer();
        let bag = PropertyBag::new()
            .with(PROPERTY_LABEL, "x")
            .with(PROPERTY_LINE_STYLE, EDGE_TYPE_DASHED);
        let value = serde_json::to_value(renderer.appearance(&bag).unwrap()).unwrap();
        assert_eq!(value["base_class"], CLASS_FLOWCHART_EDGE);
        assert_eq!(value["css_class"], CLASS_DASHED_EDGE);
        assert_eq!(value["overlays"][0]["label"], "x");
    }
}
