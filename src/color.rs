//! SolidColor type, the color held by gradient stops while they are edited.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Parses the colors a color stop can carry (hex,
//! `rgb()`/`rgba()` channels, CSS names) and formats back to hex. Color names and other CSS color
//! strings are read with `csscolorparser`.

use std::str::FromStr;

use crate::error::{GrammarError, GrammarReason};
use crate::gradient::{Gradient, StopColor};

/// A color that can be written into a gradient string.
///
/// This is the only thing the serializer asks of a stop color.
pub trait HexColor {
    /// Canonical `#`-prefixed hex form.
    fn hex(&self) -> String;
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    /// Opaque white, used when a color cannot be resolved.
    pub const WHITE: SolidColor = SolidColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(&stripped[i..i + len], 16).ok();
        match stripped.len() {
            3 => {
                let r = channel(0, 1)?;
                let g = channel(1, 1)?;
                let b = channel(2, 1)?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => {
                let a = channel(6, 2)?;
                Some(Self {
                    a: a as f64 / 255.0,
                    ..Self::from_rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)
                })
            }
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when alpha is 1.0, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        if (self.a - 1.0).abs() < 0.001 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            let a = (self.a * 255.0).round() as u8;
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Any CSS color string, including color keywords (case-insensitive) and `transparent`.
    pub fn from_css(css: &str) -> Option<Self> {
        let c = csscolorparser::parse(css).ok()?;
        Some(Self::from_rgba(c.r as f64, c.g as f64, c.b as f64, c.a as f64))
    }

    /// `rgb()`/`rgba()` channels: three 0–255 values and an optional 0.0–1.0 alpha.
    ///
    /// Out of range values are clamped. Fewer than three channels is not a color.
    pub fn from_channels(channels: &[f64]) -> Option<Self> {
        let [r, g, b, rest @ ..] = channels else {
            return None;
        };
        let unit = |c: f64| (c / 255.0).clamp(0.0, 1.0);
        let a = rest.first().copied().unwrap_or(1.0).clamp(0.0, 1.0);
        Some(Self::from_rgba(unit(*r), unit(*g), unit(*b), a))
    }

    /// Resolve a parsed stop color.
    pub fn from_stop_color(color: &StopColor) -> Option<Self> {
        match color {
            StopColor::Hex(hex) => Self::from_hex(hex),
            StopColor::Rgb(channels) | StopColor::Rgba(channels) => Self::from_channels(channels),
            StopColor::Literal(name) => Self::from_css(name),
        }
    }

    /// Resolve every stop of `gradient`, in order. Unresolvable stops become white.
    pub fn stop_colors(gradient: &Gradient) -> Vec<Self> {
        gradient
            .color_stops
            .iter()
            .map(|stop| Self::from_stop_color(&stop.color).unwrap_or(Self::WHITE))
            .collect()
    }
}

impl HexColor for SolidColor {
    fn hex(&self) -> String {
        format!("#{}", self.to_hex())
    }
}

impl FromStr for SolidColor {
    type Err = GrammarError;

    /// Parse `#hex`, `rgb()`, `rgba()`, a color name or any other CSS color.
    ///
    /// Hex without the `#` is also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let css = s.trim();
        Self::from_hex(css)
            .or_else(|| Self::from_css(css))
            .ok_or_else(|| GrammarError::new(s, GrammarReason::ExpectedColor, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lengths() {
        assert_eq!(SolidColor::from_hex("#fff"), Some(SolidColor::WHITE));
        assert_eq!(SolidColor::from_hex("ff7e5f").map(|c| c.to_rgb()), Some((255, 126, 95)));
        let c = SolidColor::from_hex("FF000080").unwrap();
        assert!((c.a() - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(c.to_hex(), "FF000080");
        assert_eq!(SolidColor::from_hex("ff7e5"), None);
        assert_eq!(SolidColor::from_hex("zzzzzz"), None);
        assert_eq!(SolidColor::from_hex("##fff"), None);
    }

    #[test]
    fn hex_keeps_alpha_of_dark_colors() {
        assert_eq!(SolidColor::from_rgba(0.0, 0.0, 0.0, 0.0).to_hex(), "00000000");
        assert_eq!(SolidColor::from_rgba(0.0, 0.0, 0.0, 0.5).to_hex(), "00000080");
        assert_eq!(SolidColor::from_rgb(0, 0, 0).to_hex(), "000000");

        let back = SolidColor::from_hex("00000080").unwrap();
        assert_eq!(back.to_hex(), "00000080");
    }

    #[test]
    fn hex_trait_adds_hash() {
        assert_eq!(SolidColor::from_rgb(255, 126, 95).hex(), "#FF7E5F");
    }

    #[test]
    fn channels() {
        assert_eq!(
            SolidColor::from_channels(&[255.0, 0.0, 0.0]),
            Some(SolidColor::from_rgb(255, 0, 0))
        );
        let c = SolidColor::from_channels(&[300.0, -4.0, 0.0, 0.5]).unwrap();
        assert_eq!(c.to_rgb(), (255, 0, 0));
        assert_eq!(c.a(), 0.5);
        assert_eq!(SolidColor::from_channels(&[1.0, 2.0]), None);
    }

    #[test]
    fn stop_colors_fall_back_to_white() {
        let gradient = crate::parse_gradient("linear-gradient(#000, rgb(0, 0, 255), Red, bogus, #12345)")
            .unwrap()
            .remove(0);
        let colors: Vec<_> = SolidColor::stop_colors(&gradient)
            .iter()
            .map(|c| (c.to_rgb(), c.a()))
            .collect();
        assert_eq!(
            colors,
            [
                ((0, 0, 0), 1.0),
                ((0, 0, 255), 1.0),
                ((255, 0, 0), 1.0),
                ((255, 255, 255), 1.0),
                ((255, 255, 255), 1.0),
            ]
        );
    }

    #[test]
    fn from_str_accepts_css_forms() {
        assert_eq!("#000".parse::<SolidColor>(), Ok(SolidColor::from_rgb(0, 0, 0)));
        assert_eq!("abc".parse::<SolidColor>().map(|c| c.to_hex()), Ok("AABBCC".to_string()));
        assert_eq!("rgba(0, 0, 255, 1)".parse::<SolidColor>(), Ok(SolidColor::from_rgb(0, 0, 255)));
        assert_eq!("teal".parse::<SolidColor>().map(|c| c.to_rgb()), Ok((0, 128, 128)));
        assert_eq!("Transparent".parse::<SolidColor>().map(|c| c.a()), Ok(0.0));
        assert!("chartreuse!".parse::<SolidColor>().is_err());
        assert!("unknownname".parse::<SolidColor>().is_err());
    }
}
