//! Gradient string writer.

use crate::color::HexColor;
use crate::constants;
use crate::gradient::Orientation;
use crate::state::GradientState;

/// Write `value` as a CSS gradient function.
///
/// The output is `<kind>(<orientation>, <color> <length>%, ...)`. Only the first orientation of a
/// list is written:
///
/// * angular: `<value>deg`
/// * directional: `to <value>`
/// * shape: `<value>`
/// * anything else, or none: `bottom`
///
/// ```
/// use floem_gradient::{gradient_to_string, GradientKind, GradientState, SolidColor, Stop};
///
/// let state = GradientState {
///     kind: GradientKind::Radial,
///     orientation: None,
///     stops: vec![
///         Stop { color: SolidColor::from_rgb(0, 0, 0), length: 0.0 },
///         Stop { color: SolidColor::from_rgb(255, 255, 255), length: 100.0 },
///     ],
/// };
/// assert_eq!(gradient_to_string(&state), "radial-gradient(bottom, #000000 0%, #FFFFFF 100%)");
/// ```
pub fn gradient_to_string<C: HexColor>(value: &GradientState<C>) -> String {
    let orientation = value.orientation.as_ref().and_then(|o| o.first());
    let mut out = format!("{}({}", value.kind, orientation_phrase(orientation));
    for stop in &value.stops {
        out.push_str(&format!(", {} {}%", stop.color.hex(), stop.length));
    }
    out.push(')');
    out
}

fn orientation_phrase(orientation: Option<&Orientation>) -> String {
    match orientation {
        Some(Orientation::Angular { value }) => format!("{value}deg"),
        Some(Orientation::Directional { value }) => format!("to {value}"),
        Some(Orientation::Shape { value, .. }) => value.clone(),
        _ => constants::FALLBACK_ORIENTATION.to_string(),
    }
}
