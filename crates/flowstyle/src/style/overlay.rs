//! Edge overlays: arrowheads and text labels placed along an edge path.

use serde::{Deserialize, Serialize};

use super::error::StyleError;

/// Which way an arrowhead points along the edge path.
///
/// Serialised as its sign (`1` or `-1`), so stylesheets read
/// `direction: -1` for a reversed arrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    /// Points from source towards target.
    #[default]
    Forward,
    /// Points back towards the source.
    Reverse,
}

impl Direction {
    /// Returns `1` for [`Direction::Forward`] and `-1` for [`Direction::Reverse`].
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Reverse),
            other => Err(format!("direction must be 1 or -1, got {}", other)),
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.sign()
    }
}

/// An arrowhead drawn at a fraction of the edge path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowOverlay {
    /// Placement along the path, `0.0` at the source and `1.0` at the target.
    pub location: f64,
    #[serde(default)]
    pub direction: Direction,
    pub width: f64,
    pub length: f64,
}

impl ArrowOverlay {
    /// Creates a forward-pointing arrow at `location`.
    pub fn new(location: f64, width: f64, length: f64) -> Self {
        Self {
            location,
            direction: Direction::Forward,
            width,
            length,
        }
    }

    /// Returns the arrow with its direction replaced.
    pub fn pointing(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// A text label drawn at a fraction of the edge path.
///
/// In an edge view the label may be a template over the edge's properties
/// (for example `"{{ label }}"`); see [`crate::render`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelOverlay {
    pub location: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl LabelOverlay {
    pub fn new(location: f64, label: impl Into<String>) -> Self {
        Self {
            location,
            label: label.into(),
            css_class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }
}

/// A visual decoration attached to an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Overlay {
    Arrow(ArrowOverlay),
    Label(LabelOverlay),
}

impl Overlay {
    /// Placement fraction along the edge path.
    pub fn location(&self) -> f64 {
        match self {
            Overlay::Arrow(arrow) => arrow.location,
            Overlay::Label(label) => label.location,
        }
    }

    pub fn as_arrow(&self) -> Option<&ArrowOverlay> {
        match self {
            Overlay::Arrow(arrow) => Some(arrow),
            Overlay::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&LabelOverlay> {
        match self {
            Overlay::Label(label) => Some(label),
            Overlay::Arrow(_) => None,
        }
    }

    /// Checks the placement range and arrow dimensions.
    pub fn validate(&self) -> Result<(), StyleError> {
        let location = self.location();
        if !(0.0..=1.0).contains(&location) {
            return Err(StyleError::invalid(format!(
                "overlay location must be within [0, 1], got {}",
                location
            )));
        }
        if let Overlay::Arrow(arrow) = self {
            ensure_positive("arrow width", arrow.width)?;
            ensure_positive("arrow length", arrow.length)?;
        }
        Ok(())
    }
}

impl From<ArrowOverlay> for Overlay {
    fn from(arrow: ArrowOverlay) -> Self {
        Overlay::Arrow(arrow)
    }
}

impl From<LabelOverlay> for Overlay {
    fn from(label: LabelOverlay) -> Self {
        Overlay::Label(label)
    }
}

/// Fails unless `value` is a finite number greater than zero.
pub(crate) fn ensure_positive(what: &str, value: f64) -> Result<(), StyleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StyleError::invalid(format!(
            "{} must be a positive number, got {}",
            what, value
        )))
    }
}
