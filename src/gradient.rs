//! Gradient syntax tree produced by the parser.
//!
//! Values keep the literal text of the input (numbers are not converted, keywords keep their
//! casing). The serde shape matches the JSON syntax tree used by web gradient pickers:
//! `{"type": "linear-gradient", "orientation": {...}, "colorStops": [...]}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, GrammarReason};

/// Gradient function.
///
/// Vendor prefixes (`-webkit-`, `-moz-`, ...) are accepted by the parser but not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientKind {
    #[serde(rename = "linear-gradient")]
    Linear,
    #[serde(rename = "repeating-linear-gradient")]
    RepeatingLinear,
    #[serde(rename = "radial-gradient")]
    Radial,
    #[serde(rename = "repeating-radial-gradient")]
    RepeatingRadial,
}

impl GradientKind {
    /// CSS function name.
    pub fn as_str(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::RepeatingLinear => "repeating-linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::RepeatingRadial => "repeating-radial-gradient",
        }
    }

    /// `linear-gradient` or `repeating-linear-gradient`.
    pub fn is_linear(self) -> bool {
        matches!(self, GradientKind::Linear | GradientKind::RepeatingLinear)
    }

    pub fn is_repeating(self) -> bool {
        matches!(
            self,
            GradientKind::RepeatingLinear | GradientKind::RepeatingRadial
        )
    }

    /// Orientation used when the gradient call has none.
    ///
    /// Linear kinds point `to bottom`, radial kinds are a `circle`.
    pub fn default_orientation(self) -> Orientation {
        if self.is_linear() {
            Orientation::Directional {
                value: "bottom".to_string(),
            }
        } else {
            Orientation::Shape {
                value: "circle".to_string(),
                style: None,
                at: None,
            }
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientKind {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear-gradient" => Ok(GradientKind::Linear),
            "repeating-linear-gradient" => Ok(GradientKind::RepeatingLinear),
            "radial-gradient" => Ok(GradientKind::Radial),
            "repeating-radial-gradient" => Ok(GradientKind::RepeatingRadial),
            _ => Err(GrammarError::new(s, GrammarReason::InvalidInput, 0)),
        }
    }
}

/// Unit of a [`Distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "%")]
    Percent,
    /// `left`, `center`, `right`, `top` or `bottom`.
    #[serde(rename = "position-keyword")]
    PositionKeyword,
}

/// A length, percentage or position keyword as written in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Distance {
    #[serde(rename = "type")]
    pub unit: DistanceUnit,
    /// Numeric literal (sign included, unit stripped) or the keyword.
    pub value: String,
}

impl Distance {
    pub fn new(unit: DistanceUnit, value: impl Into<String>) -> Self {
        Distance {
            unit,
            value: value.into(),
        }
    }

    /// Numeric value, `None` for keywords.
    pub fn number(&self) -> Option<f64> {
        match self.unit {
            DistanceUnit::PositionKeyword => None,
            _ => self.value.parse().ok(),
        }
    }
}

/// Point given by up to two distances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Distance>,
}

/// `closest-side`, `farthest-corner`, `contain`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename = "extent-keyword")]
pub struct ExtentKeyword {
    pub value: String,
}

/// Size that follows `circle` or `ellipse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeStyle {
    Size(Distance),
    Extent(ExtentKeyword),
}

/// Layout of a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Orientation {
    /// `to right`, `to bottom left`, value is the text after `to `.
    Directional { value: String },
    /// `45deg`, value is the number before `deg`.
    Angular { value: String },
    /// `circle` or `ellipse`.
    Shape {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ShapeStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none", with = "position_node::option")]
        at: Option<Position>,
    },
    /// Radial size keyword without a shape.
    ExtentKeyword {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none", with = "position_node::option")]
        at: Option<Position>,
    },
    /// Radial gradient given only by its center.
    DefaultRadial {
        #[serde(with = "position_node")]
        at: Position,
    },
}

/// `at` positions are wrapped in a `{"type": "position", "value": {...}}` node.
mod position_node {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Position;

    #[derive(Serialize)]
    #[serde(tag = "type", rename = "position")]
    struct Node<'a> {
        value: &'a Position,
    }

    #[derive(Deserialize)]
    #[serde(tag = "type", rename = "position")]
    struct OwnedNode {
        value: Position,
    }

    pub fn serialize<S: Serializer>(value: &Position, serializer: S) -> Result<S::Ok, S::Error> {
        Node { value }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Position, D::Error> {
        OwnedNode::deserialize(deserializer).map(|n| n.value)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error> {
            value.as_ref().map(|value| Node { value }).serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Position>, D::Error> {
            Option::<OwnedNode>::deserialize(deserializer).map(|n| n.map(|n| n.value))
        }
    }
}

impl Orientation {
    /// Center position, for radial orientations.
    pub fn at(&self) -> Option<&Position> {
        match self {
            Orientation::Shape { at, .. } | Orientation::ExtentKeyword { at, .. } => at.as_ref(),
            Orientation::DefaultRadial { at } => Some(at),
            Orientation::Directional { .. } | Orientation::Angular { .. } => None,
        }
    }

    /// Angle in degrees, clockwise from `top`.
    ///
    /// Directional keywords map to multiples of 45, angular values are read as numbers. Anything
    /// else is `0`.
    pub fn angle(&self) -> f64 {
        match self {
            Orientation::Directional { value } => directional_angle(value),
            Orientation::Angular { value } => value.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

fn directional_angle(value: &str) -> f64 {
    let mut vertical = None;
    let mut horizontal = None;
    for word in value.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "top" => vertical = Some(true),
            "bottom" => vertical = Some(false),
            "right" => horizontal = Some(true),
            "left" => horizontal = Some(false),
            _ => {}
        }
    }
    match (vertical, horizontal) {
        (Some(true), None) => 0.0,
        (Some(true), Some(true)) => 45.0,
        (None, Some(true)) => 90.0,
        (Some(false), Some(true)) => 135.0,
        (Some(false), None) => 180.0,
        (Some(false), Some(false)) => 225.0,
        (None, Some(false)) => 270.0,
        (Some(true), Some(false)) => 315.0,
        (None, None) => 0.0,
    }
}

/// Orientation of a parsed gradient.
///
/// Defaults and linear orientations are [`Single`]. An explicit radial orientation is a [`List`]
/// of one or two entries (shape or extent and position, in input order).
///
/// [`Single`]: GradientOrientation::Single
/// [`List`]: GradientOrientation::List
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientOrientation {
    Single(Orientation),
    List(Vec<Orientation>),
}

impl GradientOrientation {
    /// The orientation that drives layout, the first of a list.
    pub fn first(&self) -> Option<&Orientation> {
        match self {
            GradientOrientation::Single(o) => Some(o),
            GradientOrientation::List(list) => list.first(),
        }
    }

    /// Angle of the first orientation, see [`Orientation::angle`].
    pub fn angle(&self) -> f64 {
        self.first().map(Orientation::angle).unwrap_or(0.0)
    }
}

impl From<Orientation> for GradientOrientation {
    fn from(o: Orientation) -> Self {
        GradientOrientation::Single(o)
    }
}

/// Color of a [`ColorStop`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StopColor {
    /// Hex digits without the `#`.
    Hex(String),
    /// `rgb()` channels.
    Rgb(Vec<f64>),
    /// `rgba()` channels.
    Rgba(Vec<f64>),
    /// Named color, as written.
    Literal(String),
}

/// A color and its optional position along the gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    #[serde(flatten)]
    pub color: StopColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Distance>,
}

/// One parsed gradient definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub orientation: GradientOrientation,
    /// Stops in input order.
    #[serde(rename = "colorStops")]
    pub color_stops: Vec<ColorStop>,
}

impl Gradient {
    /// Direction in degrees for linear kinds, `0` for radial kinds.
    pub fn angle(&self) -> f64 {
        if self.kind.is_linear() {
            self.orientation.angle()
        } else {
            0.0
        }
    }
}
