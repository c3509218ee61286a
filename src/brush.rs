//! Convert an edited gradient into a peniko brush for painting.

use floem::kurbo::{Point, Size, Vec2};
use floem::peniko::{Color, ColorStop, Extend, Gradient};

use crate::color::SolidColor;
use crate::constants;
use crate::gradient::{Distance, DistanceUnit, Orientation, Position, ShapeStyle};
use crate::state::GradientState;

/// Lay out `state` in a box of `size` with its origin at `(0, 0)`.
///
/// Linear gradients follow the CSS gradient line for the state's angle. Radial gradients are
/// circular; an ellipse is drawn as the circle of its resolved radius.
pub fn to_brush(state: &GradientState, size: Size) -> Gradient {
    let stops: Vec<ColorStop> = state
        .stops
        .iter()
        .map(|stop| ColorStop {
            offset: (stop.length / 100.0).clamp(0.0, 1.0) as f32,
            color: peniko_color(&stop.color),
        })
        .collect();

    let gradient = if state.kind.is_linear() {
        let (start, end) = gradient_line(state.angle(), size);
        Gradient::new_linear(start, end)
    } else {
        let orientation = state.orientation.as_ref().and_then(|o| o.first());
        let center = orientation
            .and_then(Orientation::at)
            .map(|at| resolve_position(at, size))
            .unwrap_or_else(|| Point::new(size.width / 2.0, size.height / 2.0));
        let radius = radial_radius(orientation, center, size);
        Gradient::new_radial(center, radius as f32)
    };

    let extend = if state.kind.is_repeating() {
        Extend::Repeat
    } else {
        Extend::Pad
    };
    gradient.with_extend(extend).with_stops(stops.as_slice())
}

fn peniko_color(c: &SolidColor) -> Color {
    Color::rgba(c.r(), c.g(), c.b(), c.a())
}

/// Start and end of the line a linear gradient runs along.
fn gradient_line(angle: f64, size: Size) -> (Point, Point) {
    let rad = angle.to_radians();
    let (sin, cos) = rad.sin_cos();
    let half = (size.width * sin.abs() + size.height * cos.abs()) / 2.0;
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let dir = Vec2::new(sin, -cos) * half;
    (center - dir, center + dir)
}

fn resolve_length(d: &Distance, full: f64) -> f64 {
    match d.unit {
        DistanceUnit::PositionKeyword => match d.value.to_ascii_lowercase().as_str() {
            "left" | "top" => 0.0,
            "right" | "bottom" => full,
            _ => full / 2.0,
        },
        DistanceUnit::Percent => full * d.number().unwrap_or(50.0) / 100.0,
        DistanceUnit::Px => d.number().unwrap_or(0.0),
        DistanceUnit::Em => d.number().unwrap_or(0.0) * constants::EM,
    }
}

fn is_keyword(d: &Distance, words: [&str; 2]) -> bool {
    d.unit == DistanceUnit::PositionKeyword && words.iter().any(|w| d.value.eq_ignore_ascii_case(w))
}

fn resolve_position(at: &Position, size: Size) -> Point {
    let (mut x, mut y) = (at.x.as_ref(), at.y.as_ref());
    // `top left` and `bottom` name the vertical axis first
    if x.is_some_and(|d| is_keyword(d, ["top", "bottom"]))
        || y.is_some_and(|d| is_keyword(d, ["left", "right"]))
    {
        std::mem::swap(&mut x, &mut y);
    }
    Point::new(
        x.map_or(size.width / 2.0, |d| resolve_length(d, size.width)),
        y.map_or(size.height / 2.0, |d| resolve_length(d, size.height)),
    )
}

fn radial_radius(orientation: Option<&Orientation>, center: Point, size: Size) -> f64 {
    let extent = match orientation {
        Some(Orientation::Shape {
            style: Some(ShapeStyle::Size(d)),
            ..
        }) => return resolve_length(d, size.width),
        Some(Orientation::Shape {
            style: Some(ShapeStyle::Extent(e)),
            ..
        }) => e.value.as_str(),
        Some(Orientation::ExtentKeyword { value, .. }) => value.as_str(),
        _ => "farthest-corner",
    };

    let sides = [
        center.x,
        size.width - center.x,
        center.y,
        size.height - center.y,
    ];
    let corners = [
        Point::ZERO,
        Point::new(size.width, 0.0),
        Point::new(0.0, size.height),
        Point::new(size.width, size.height),
    ]
    .map(|corner| center.distance(corner));

    let min = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
    let max = |v: &[f64]| v.iter().copied().fold(0.0, f64::max);
    match extent {
        "closest-side" | "contain" => min(&sides),
        "farthest-side" => max(&sides),
        "closest-corner" => min(&corners),
        _ => max(&corners),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PickerValue;

    fn state(input: &str) -> GradientState {
        PickerValue::resolve(input, "").gradient_state().unwrap()
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn horizontal_line() {
        let (start, end) = gradient_line(90.0, Size::new(200.0, 100.0));
        assert!(close(start, Point::new(0.0, 50.0)));
        assert!(close(end, Point::new(200.0, 50.0)));

        let (start, end) = gradient_line(180.0, Size::new(200.0, 100.0));
        assert!(close(start, Point::new(100.0, 0.0)));
        assert!(close(end, Point::new(100.0, 100.0)));
    }

    #[test]
    fn stops_and_extend() {
        let brush = to_brush(
            &state("repeating-linear-gradient(to right, #000 0%, #fff 150%)"),
            Size::new(10.0, 10.0),
        );
        assert_eq!(brush.extend, Extend::Repeat);
        assert_eq!(brush.stops.len(), 2);
        assert_eq!(brush.stops[1].offset, 1.0);
    }

    #[test]
    fn radial_center_and_radius() {
        let size = Size::new(100.0, 100.0);
        let at = Position {
            x: Some(Distance::new(DistanceUnit::PositionKeyword, "top")),
            y: Some(Distance::new(DistanceUnit::PositionKeyword, "left")),
        };
        assert!(close(resolve_position(&at, size), Point::ZERO));

        let s = state("radial-gradient(closest-side at 25% 50%, red, blue)");
        let orientation = s.orientation.as_ref().and_then(|o| o.first());
        let center = resolve_position(orientation.and_then(Orientation::at).unwrap(), size);
        assert!(close(center, Point::new(25.0, 50.0)));
        assert_eq!(radial_radius(orientation, center, size), 25.0);

        let s = state("radial-gradient(circle 2em, red, blue)");
        let orientation = s.orientation.as_ref().and_then(|o| o.first());
        assert_eq!(radial_radius(orientation, center, size), 32.0);
    }
}
