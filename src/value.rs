//! Classify a CSS value as a flat color or a gradient.

use crate::color::{HexColor, SolidColor};
use crate::constants;
use crate::gradient::Gradient;
use crate::parser::parse_gradient;
use crate::state::GradientState;

/// A CSS background value read for editing.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerValue {
    /// A single color.
    Flat(SolidColor),
    /// The first gradient of the value, with its stop colors resolved.
    Gradient {
        gradient: Gradient,
        colors: Vec<SolidColor>,
    },
}

impl PickerValue {
    /// Read `value`, or `default` when `value` is empty.
    ///
    /// Values that mention `gradient` are parsed as gradients. Anything that fails to parse as a
    /// gradient is read as a color, and anything that is not a color becomes white.
    pub fn resolve(value: &str, default: &str) -> Self {
        let value = match (value, default) {
            ("", "") => constants::DEFAULT_VALUE,
            ("", default) => default,
            (value, _) => value,
        };

        if value.contains(constants::GRADIENT_MARKER) {
            match parse_gradient(value) {
                Ok(mut gradients) => {
                    let gradient = gradients.swap_remove(0);
                    let colors = SolidColor::stop_colors(&gradient);
                    return PickerValue::Gradient { gradient, colors };
                }
                Err(e) => {
                    tracing::debug!(target: "gradient", "reading `{value}` as a flat color, {}", e.reason);
                }
            }
        }

        match value.parse() {
            Ok(color) => PickerValue::Flat(color),
            Err(_) => {
                tracing::debug!(target: "gradient", "`{value}` is not a color, using white");
                PickerValue::Flat(SolidColor::WHITE)
            }
        }
    }

    /// Editable state for a gradient value.
    pub fn gradient_state(&self) -> Option<GradientState> {
        match self {
            PickerValue::Flat(_) => None,
            PickerValue::Gradient { gradient, colors } => {
                Some(GradientState::from_gradient(gradient, colors))
            }
        }
    }

    /// Write the value back as CSS.
    pub fn to_css(&self) -> String {
        match self {
            PickerValue::Flat(color) => color.hex(),
            PickerValue::Gradient { .. } => self
                .gradient_state()
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }
}
