//! Recursive descent parser for CSS gradient functions.
//!
//! Every matcher returns a [`Match`]: `Ok(Some(_))` when it recognized its construct, `Ok(None)`
//! when the input does not start with it (the caller tries the next alternative) and `Err(_)`
//! when the input is malformed and the whole parse must stop.
//!
//! Tokens are anchored at the cursor. Whitespace before a token is always skipped, even when the
//! token then fails to match.

use crate::error::{GrammarError, GrammarReason};
use crate::gradient::*;

type Match<T> = Result<Option<T>, GrammarError>;

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-o-", "-ms-", "-moz-"];

const GRADIENT_FUNCTIONS: [(GradientKind, &str); 4] = [
    (GradientKind::Linear, "linear-gradient"),
    (GradientKind::RepeatingLinear, "repeating-linear-gradient"),
    (GradientKind::Radial, "radial-gradient"),
    (GradientKind::RepeatingRadial, "repeating-radial-gradient"),
];

// Two-word phrases first, so `to left top` is not cut at `left`.
const SIDES_OR_CORNERS: [&str; 12] = [
    "left top",
    "left bottom",
    "right top",
    "right bottom",
    "top left",
    "top right",
    "bottom left",
    "bottom right",
    "left",
    "right",
    "top",
    "bottom",
];

const EXTENT_KEYWORDS: [&str; 6] = [
    "closest-side",
    "closest-corner",
    "farthest-side",
    "farthest-corner",
    "contain",
    "cover",
];

const POSITION_KEYWORDS: [&str; 5] = ["left", "center", "right", "top", "bottom"];

/// Parse a comma separated list of gradient definitions.
///
/// The whole input must be consumed. Callers usually only need the first gradient.
///
/// ```
/// use floem_gradient::{parse_gradient, GradientKind};
///
/// let gradients = parse_gradient("linear-gradient(to right, #ff7e5f, #feb47b)").unwrap();
/// assert_eq!(gradients[0].kind, GradientKind::Linear);
/// assert_eq!(gradients[0].color_stops.len(), 2);
/// ```
pub fn parse_gradient(input: &str) -> Result<Vec<Gradient>, GrammarError> {
    let mut parser = Parser::new(input);
    let gradients = parser.listing(Parser::definition)?;
    if gradients.is_empty() || !parser.at_end() {
        return Err(parser.error(GrammarReason::InvalidInput));
    }
    Ok(gradients)
}

/// Parse a single color as it may appear in a color stop (`#hex`, `rgb()`, `rgba()` or a name).
pub fn parse_color(input: &str) -> Result<StopColor, GrammarError> {
    let mut parser = Parser::new(input);
    let color = parser.color()?;
    match color {
        Some(color) if parser.at_end() => Ok(color),
        _ => Err(parser.error(GrammarReason::InvalidInput)),
    }
}

/// Scan state of one parse call.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(is_blank).len();
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.input.len()
    }

    fn error(&self, reason: GrammarReason) -> GrammarError {
        tracing::debug!(target: "gradient", %reason, position = self.pos, "rejected `{}`", self.input);
        GrammarError::new(self.input, reason, self.pos)
    }

    /// Skip whitespace, then consume the prefix whose length `matcher` reports.
    fn token(&mut self, matcher: impl FnOnce(&'a str) -> Option<usize>) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = self.rest();
        let len = matcher(rest)?;
        self.pos += len;
        Some(&rest[..len])
    }

    fn literal(&mut self, lit: &str) -> bool {
        self.token(|rest| prefix(rest, lit)).is_some()
    }

    fn keyword(&mut self, keywords: &[&str], ignore_case: bool) -> Option<&'a str> {
        self.token(|rest| {
            keywords.iter().find_map(|k| {
                if ignore_case {
                    prefix_ignore_case(rest, k)
                } else {
                    prefix(rest, k)
                }
            })
        })
    }

    /// Signed number immediately followed by `unit`, returns the number text.
    fn dimension(&mut self, unit: &str) -> Option<&'a str> {
        self.token(|rest| {
            let sign = usize::from(rest.starts_with('-'));
            let end = sign + number_len(&rest[sign..])?;
            prefix(&rest[end..], unit).map(|u| end + u)
        })
        .map(|t| &t[..t.len() - unit.len()])
    }

    /// Comma separated list; a comma must be followed by another item.
    fn listing<T>(&mut self, mut matcher: impl FnMut(&mut Self) -> Match<T>) -> Result<Vec<T>, GrammarError> {
        let mut items = vec![];
        if let Some(first) = matcher(self)? {
            items.push(first);
            while self.literal(",") {
                match matcher(self)? {
                    Some(item) => items.push(item),
                    None => return Err(self.error(GrammarReason::ExtraComma)),
                }
            }
        }
        Ok(items)
    }

    /// `(`, `body`, `)`, after the function name was matched.
    fn call<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T, GrammarError>) -> Result<T, GrammarError> {
        if !self.literal("(") {
            return Err(self.error(GrammarReason::MissingOpenParen));
        }
        let r = body(self)?;
        if !self.literal(")") {
            return Err(self.error(GrammarReason::MissingCloseParen));
        }
        Ok(r)
    }

    fn definition(&mut self) -> Match<Gradient> {
        for (kind, name) in GRADIENT_FUNCTIONS {
            if let Some(gradient) = self.gradient(kind, name)? {
                return Ok(Some(gradient));
            }
        }
        Ok(None)
    }

    fn gradient(&mut self, kind: GradientKind, name: &str) -> Match<Gradient> {
        let function_name = self.token(|rest| {
            let vendor = VENDOR_PREFIXES
                .iter()
                .find_map(|p| prefix_ignore_case(rest, p))
                .unwrap_or(0);
            prefix_ignore_case(&rest[vendor..], name).map(|n| vendor + n)
        });
        if function_name.is_none() {
            return Ok(None);
        }

        self.call(|p| {
            let orientation = if kind.is_linear() {
                p.linear_orientation()?.map(GradientOrientation::Single)
            } else {
                p.radial_orientations()?.map(GradientOrientation::List)
            };
            if orientation.is_some() && !p.literal(",") {
                return Err(p.error(GrammarReason::MissingComma));
            }

            let color_stops = p.listing(Self::color_stop)?;
            if color_stops.is_empty() {
                return Err(p.error(GrammarReason::ExpectedColor));
            }

            Ok(Gradient {
                kind,
                orientation: orientation.unwrap_or_else(|| kind.default_orientation().into()),
                color_stops,
            })
        })
        .map(Some)
    }

    fn linear_orientation(&mut self) -> Match<Orientation> {
        if let Some(value) = self.side_or_corner() {
            return Ok(Some(Orientation::Directional {
                value: value.to_string(),
            }));
        }
        Ok(self.dimension("deg").map(|value| Orientation::Angular {
            value: value.to_string(),
        }))
    }

    /// `to <side> [<side>]`, returns the text after `to `.
    fn side_or_corner(&mut self) -> Option<&'a str> {
        self.token(|rest| {
            let to = prefix_ignore_case(rest, "to ")?;
            SIDES_OR_CORNERS
                .iter()
                .find_map(|s| prefix_ignore_case(&rest[to..], s))
                .map(|n| to + n)
        })
        .map(|t| &t[3..])
    }

    /// One radial orientation, optionally followed by a comma and a second one.
    ///
    /// The comma is only consumed when a second orientation follows it, otherwise it belongs to
    /// the color stops.
    fn radial_orientations(&mut self) -> Match<Vec<Orientation>> {
        let Some(first) = self.radial_orientation()? else {
            return Ok(None);
        };
        let mut orientations = vec![first];

        let checkpoint = self.pos;
        if self.literal(",") {
            match self.radial_orientation()? {
                Some(second) => orientations.push(second),
                None => self.pos = checkpoint,
            }
        }
        Ok(Some(orientations))
    }

    fn radial_orientation(&mut self) -> Match<Orientation> {
        let shape = match self.circle() {
            Some(shape) => Some(shape),
            None => self.ellipse(),
        };
        if let Some((value, style)) = shape {
            let at = self.at_position()?;
            return Ok(Some(Orientation::Shape { value, style, at }));
        }

        if let Some(value) = self.extent_keyword() {
            let at = self.at_position()?;
            return Ok(Some(Orientation::ExtentKeyword {
                value: value.to_string(),
                at,
            }));
        }

        Ok(self.positioning().map(|at| Orientation::DefaultRadial { at }))
    }

    fn circle(&mut self) -> Option<(String, Option<ShapeStyle>)> {
        let value = self.keyword(&["circle"], true)?.to_string();
        let style = match self.length() {
            Some(size) => Some(ShapeStyle::Size(size)),
            None => self.extent_style(),
        };
        Some((value, style))
    }

    fn ellipse(&mut self) -> Option<(String, Option<ShapeStyle>)> {
        let value = self.keyword(&["ellipse"], true)?.to_string();
        let style = match self.distance() {
            Some(size) => Some(ShapeStyle::Size(size)),
            None => self.extent_style(),
        };
        Some((value, style))
    }

    fn extent_style(&mut self) -> Option<ShapeStyle> {
        self.extent_keyword().map(|value| {
            ShapeStyle::Extent(ExtentKeyword {
                value: value.to_string(),
            })
        })
    }

    fn extent_keyword(&mut self) -> Option<&'a str> {
        self.keyword(&EXTENT_KEYWORDS, false)
    }

    fn at_position(&mut self) -> Match<Position> {
        if !self.literal("at") {
            return Ok(None);
        }
        match self.positioning() {
            Some(position) => Ok(Some(position)),
            None => Err(self.error(GrammarReason::MissingPosition)),
        }
    }

    fn positioning(&mut self) -> Option<Position> {
        let x = self.distance();
        let y = self.distance();
        if x.is_none() && y.is_none() {
            return None;
        }
        Some(Position { x, y })
    }

    fn distance(&mut self) -> Option<Distance> {
        if let Some(value) = self.dimension("%") {
            return Some(Distance::new(DistanceUnit::Percent, value));
        }
        if let Some(value) = self.keyword(&POSITION_KEYWORDS, true) {
            return Some(Distance::new(DistanceUnit::PositionKeyword, value));
        }
        self.length()
    }

    fn length(&mut self) -> Option<Distance> {
        if let Some(value) = self.dimension("px") {
            return Some(Distance::new(DistanceUnit::Px, value));
        }
        self.dimension("em").map(|value| Distance::new(DistanceUnit::Em, value))
    }

    fn color_stop(&mut self) -> Match<ColorStop> {
        let Some(color) = self.color()? else {
            return Ok(None);
        };
        let length = self.distance();
        Ok(Some(ColorStop { color, length }))
    }

    fn color(&mut self) -> Match<StopColor> {
        if let Some(hex) = self.token(hex_color_len) {
            return Ok(Some(StopColor::Hex(hex[1..].to_string())));
        }
        if self.keyword(&["rgba"], true).is_some() {
            let channels = self.call(|p| p.listing(Self::number))?;
            return Ok(Some(StopColor::Rgba(channels)));
        }
        if self.keyword(&["rgb"], true).is_some() {
            let channels = self.call(|p| p.listing(Self::number))?;
            return Ok(Some(StopColor::Rgb(channels)));
        }
        let literal = self.token(|rest| {
            let n = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
            (n > 0).then_some(n)
        });
        Ok(literal.map(|name| StopColor::Literal(name.to_string())))
    }

    fn number(&mut self) -> Match<f64> {
        match self.token(number_len).and_then(|n| n.parse().ok()) {
            Some(n) => Ok(Some(n)),
            None => Err(self.error(GrammarReason::ExpectedNumber)),
        }
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn prefix(s: &str, lit: &str) -> Option<usize> {
    s.starts_with(lit).then_some(lit.len())
}

fn prefix_ignore_case(s: &str, lit: &str) -> Option<usize> {
    s.get(..lit.len())
        .filter(|head| head.eq_ignore_ascii_case(lit))
        .map(|_| lit.len())
}

/// Length of an unsigned `digits.digits`, `.digits`, `digits.` or `digits` prefix.
fn number_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let int = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if bytes.get(int) == Some(&b'.') {
        let frac = bytes[int + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac > 0 {
            return Some(int + 1 + frac);
        }
        return (int > 0).then_some(int + 1);
    }
    (int > 0).then_some(int)
}

fn hex_color_len(s: &str) -> Option<usize> {
    let digits = s.strip_prefix('#')?.bytes().take_while(u8::is_ascii_hexdigit).count();
    (digits > 0).then_some(1 + digits)
}
