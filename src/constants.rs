//! Defaults shared by value resolution and gradient editing.

/// Value resolved when both the value and its default are empty.
pub const DEFAULT_VALUE: &str = "#fff";

/// Substring that marks a value as a gradient candidate.
pub const GRADIENT_MARKER: &str = "gradient";

/// Side a gradient points to after switching to a linear kind.
pub const LINEAR_DIRECTION: &str = "right";

/// Shape of a gradient after switching to a radial kind.
pub const RADIAL_SHAPE: &str = "circle";

/// Orientation phrase written when the orientation is missing or not writable.
///
/// Note this is `bottom`, not `to bottom`.
pub const FALLBACK_ORIENTATION: &str = "bottom";

/// Pixels per `em` when a gradient is laid out.
#[cfg(feature = "brush")]
pub const EM: f64 = 16.0;
