//! Editable gradient: live colors and numeric stop positions.
//!
//! Edits never mutate a state in place, each one returns the next state.

use std::fmt;

use crate::color::{HexColor, SolidColor};
use crate::constants;
use crate::gradient::{Gradient, GradientKind, GradientOrientation, Orientation};
use crate::serialize::gradient_to_string;

/// A color stop being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop<C = SolidColor> {
    pub color: C,
    /// Position along the gradient, in percent.
    pub length: f64,
}

/// A gradient being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientState<C = SolidColor> {
    pub kind: GradientKind,
    pub orientation: Option<GradientOrientation>,
    pub stops: Vec<Stop<C>>,
}

impl<C: Clone> GradientState<C> {
    /// Pair `colors` with the stops of `gradient`.
    ///
    /// Colors past the last stop are ignored. A stop without a numeric length is spread evenly
    /// over `0..=100` by its index.
    pub fn from_gradient(gradient: &Gradient, colors: &[C]) -> Self {
        let spread = |index: usize| {
            if colors.len() > 1 {
                index as f64 * 100.0 / (colors.len() - 1) as f64
            } else {
                0.0
            }
        };
        let stops = colors
            .iter()
            .zip(&gradient.color_stops)
            .enumerate()
            .map(|(index, (color, stop))| Stop {
                color: color.clone(),
                length: stop
                    .length
                    .as_ref()
                    .and_then(|l| l.number())
                    .unwrap_or_else(|| spread(index)),
            })
            .collect();

        GradientState {
            kind: gradient.kind,
            orientation: Some(gradient.orientation.clone()),
            stops,
        }
    }

    /// Copy with the stop at `index` moved to `length` percent.
    pub fn with_stop_length(&self, index: usize, length: f64) -> Self {
        let mut next = self.clone();
        if let Some(stop) = next.stops.get_mut(index) {
            stop.length = length;
        }
        next
    }

    /// Copy with the stop at `index` recolored.
    pub fn with_stop_color(&self, index: usize, color: C) -> Self {
        let mut next = self.clone();
        if let Some(stop) = next.stops.get_mut(index) {
            stop.color = color;
        }
        next
    }

    /// Copy switched to `kind`.
    ///
    /// The orientation is reset: linear kinds point right, radial kinds become a circle.
    pub fn with_kind(&self, kind: GradientKind) -> Self {
        let orientation = if kind.is_linear() {
            Orientation::Directional {
                value: constants::LINEAR_DIRECTION.to_string(),
            }
        } else {
            Orientation::Shape {
                value: constants::RADIAL_SHAPE.to_string(),
                style: None,
                at: None,
            }
        };
        GradientState {
            kind,
            orientation: Some(orientation.into()),
            stops: self.stops.clone(),
        }
    }
}

impl<C> GradientState<C> {
    /// Direction in degrees for linear kinds, `0` for radial kinds.
    pub fn angle(&self) -> f64 {
        match &self.orientation {
            Some(orientation) if self.kind.is_linear() => orientation.angle(),
            _ => 0.0,
        }
    }
}

impl<C: HexColor> fmt::Display for GradientState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&gradient_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_gradient;

    fn state(input: &str) -> GradientState {
        let gradient = parse_gradient(input).unwrap().remove(0);
        let colors = SolidColor::stop_colors(&gradient);
        GradientState::from_gradient(&gradient, &colors)
    }

    fn lengths(state: &GradientState) -> Vec<f64> {
        state.stops.iter().map(|s| s.length).collect()
    }

    #[test]
    fn lengths_from_stops_or_spread() {
        assert_eq!(lengths(&state("linear-gradient(red, green, blue)")), [0.0, 50.0, 100.0]);
        assert_eq!(lengths(&state("linear-gradient(red 10%, green, blue 80%)")), [10.0, 50.0, 80.0]);
        assert_eq!(lengths(&state("linear-gradient(red center, blue 4px)")), [0.0, 4.0]);
        assert_eq!(lengths(&state("linear-gradient(red)")), [0.0]);
    }

    #[test]
    fn extra_colors_are_ignored() {
        let gradient = parse_gradient("linear-gradient(red, blue)").unwrap().remove(0);
        let colors = [SolidColor::WHITE; 3];
        let state = GradientState::from_gradient(&gradient, &colors);
        assert_eq!(state.stops.len(), 2);
        // spread uses the color count
        assert_eq!(lengths(&state), [0.0, 50.0]);
    }

    #[test]
    fn edits_return_new_states() {
        let original = state("linear-gradient(to left, red, blue)");

        let moved = original.with_stop_length(1, 75.0);
        assert_eq!(lengths(&moved), [0.0, 75.0]);
        assert_eq!(lengths(&original), [0.0, 100.0]);

        let recolored = original.with_stop_color(0, SolidColor::WHITE);
        assert_eq!(recolored.stops[0].color, SolidColor::WHITE);
        assert_eq!(original.stops[0].color, SolidColor::from_rgb(255, 0, 0));

        assert_eq!(original.with_stop_length(9, 1.0), original);
    }

    #[test]
    fn kind_switch_resets_orientation() {
        let linear = state("linear-gradient(to left, red, blue)");
        assert_eq!(linear.angle(), 270.0);

        let radial = linear.with_kind(GradientKind::Radial);
        assert_eq!(radial.angle(), 0.0);
        assert_eq!(
            radial.orientation.as_ref().and_then(|o| o.first()),
            Some(&Orientation::Shape {
                value: "circle".to_string(),
                style: None,
                at: None
            })
        );

        let back = radial.with_kind(GradientKind::Linear);
        assert_eq!(back.angle(), 90.0);
        assert_eq!(back.stops, linear.stops);
    }

    #[test]
    fn display_serializes() {
        let s = state("linear-gradient(45deg, #ff7e5f, #feb47b 80%)");
        assert_eq!(s.to_string(), "linear-gradient(45deg, #FF7E5F 0%, #FEB47B 80%)");
    }
}
