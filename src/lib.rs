//! # floem-gradient
//!
//! CSS gradient strings for the [Floem](https://github.com/lapce/floem) color picker.
//!
//! Parses `linear-gradient()`, `radial-gradient()` and their `repeating-` and vendor prefixed
//! variants into a [`Gradient`] syntax tree, and writes an edited [`GradientState`] back into a
//! gradient string.
//!
//! ## Usage
//!
//! ```rust
//! use floem_gradient::{parse_gradient, GradientState, SolidColor};
//!
//! let gradient = parse_gradient("linear-gradient(to right, #ff7e5f, #feb47b)")
//!     .unwrap()
//!     .remove(0);
//! let colors = SolidColor::stop_colors(&gradient);
//! let state = GradientState::from_gradient(&gradient, &colors).with_stop_length(1, 80.0);
//! assert_eq!(
//!     state.to_string(),
//!     "linear-gradient(to right, #FF7E5F 0%, #FEB47B 80%)"
//! );
//! ```
//!
//! ## Features
//!
//! * `brush`: [`to_brush`] lays a gradient out as a `floem::peniko::Gradient`.

mod color;
mod constants;
mod error;
mod gradient;
mod parser;
mod serialize;
mod state;
mod value;

#[cfg(feature = "brush")]
mod brush;

pub use color::{HexColor, SolidColor};
pub use error::{GrammarError, GrammarReason};
pub use gradient::{
    ColorStop, Distance, DistanceUnit, ExtentKeyword, Gradient, GradientKind, GradientOrientation,
    Orientation, Position, ShapeStyle, StopColor,
};
pub use parser::{parse_color, parse_gradient};
pub use serialize::gradient_to_string;
pub use state::{GradientState, Stop};
pub use value::PickerValue;

#[cfg(feature = "brush")]
pub use brush::to_brush;
