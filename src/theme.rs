//! Colours, the palette and font choices shared by layouts and widgets.
//!
//! Colours travel as hex strings.  The parser accepts them with or without a
//! leading `#` (hand-written palettes mix both) and always writes the `#`
//! form back out.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error from parsing a colour string.
#[derive(Debug, thiserror::Error)]
#[error("invalid colour {0:?}: expected 6 hex digits with optional '#'")]
pub struct ColorError(String);

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError(s.to_string()))
        };
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

/// A widget colour: a single colour or a two-stop vertical gradient.
///
/// Bars written for dual-monitor setups conventionally repeat the same colour
/// twice; [`ColorSpec::pair`] builds that form.  On the wire it is a list of
/// one or two colours, and a bare string is accepted as a one-element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Solid(Color),
    Gradient(Color, Color),
}

impl ColorSpec {
    /// The two-element form with both stops equal.
    pub const fn pair(c: Color) -> Self {
        ColorSpec::Gradient(c, c)
    }

    /// The colour drawn at the top edge.
    pub fn first(&self) -> Color {
        match *self {
            ColorSpec::Solid(c) | ColorSpec::Gradient(c, _) => c,
        }
    }
}

impl Serialize for ColorSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorSpec::Solid(c) => [c].serialize(serializer),
            ColorSpec::Gradient(a, b) => [a, b].serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            One(Color),
            Many(Vec<Color>),
        }

        match Wire::deserialize(deserializer)? {
            Wire::One(c) => Ok(ColorSpec::Solid(c)),
            Wire::Many(v) => match v.as_slice() {
                [c] => Ok(ColorSpec::Solid(*c)),
                [a, b] => Ok(ColorSpec::Gradient(*a, *b)),
                _ => Err(DeError::custom(format!(
                    "colour list must have 1 or 2 entries, got {}",
                    v.len()
                ))),
            },
        }
    }
}

//  Palette

/// Text on dark backgrounds.
pub const FOREGROUND: Color = Color::rgb(0xf1, 0xff, 0xff);
/// Bar base and text on light segments.
pub const BACKGROUND: Color = Color::rgb(0x0f, 0x10, 0x1a);
/// Accent used for focus borders and the layout segment.
pub const ACCENT: Color = Color::rgb(0xf0, 0x71, 0x78);
pub const YELLOW: Color = Color::rgb(0xf3, 0xc9, 0x7a);
pub const ORANGE: Color = Color::rgb(0xee, 0x97, 0x7b);
pub const PURPLE: Color = Color::rgb(0xa1, 0x51, 0xd3);
/// Border of the current group when shown on a non-focused screen.
pub const GREY: Color = Color::rgb(0x5c, 0x5c, 0x5c);
pub const STACK_FOCUS: Color = Color::rgb(0xd7, 0x5f, 0x5f);
pub const STACK_FOCUS_DIM: Color = Color::rgb(0x8f, 0x3d, 0x3d);

//  Fonts

pub const FONT: &str = "UbuntuMono Nerd Font";
pub const FONT_BOLD: &str = "UbuntuMono Nerd Font Bold";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_hash() {
        let a: Color = "#f1ffff".parse().unwrap();
        let b: Color = "f1ffff".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, FOREGROUND);
        assert_eq!("#F07178".parse::<Color>().unwrap(), ACCENT);
    }

    #[test]
    fn reject_malformed() {
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn display_is_lowercase_with_hash() {
        assert_eq!(ACCENT.to_string(), "#f07178");
    }

    #[test]
    fn color_spec_wire_format() {
        let json = serde_json::to_string(&ColorSpec::pair(PURPLE)).unwrap();
        assert_eq!(json, r##"["#a151d3","#a151d3"]"##);

        let solid: ColorSpec = serde_json::from_str(r#""0f101a""#).unwrap();
        assert_eq!(solid, ColorSpec::Solid(BACKGROUND));

        let grad: ColorSpec = serde_json::from_str(r##"["#d75f5f", "8f3d3d"]"##).unwrap();
        assert_eq!(grad, ColorSpec::Gradient(STACK_FOCUS, STACK_FOCUS_DIM));
        assert_eq!(grad.first(), STACK_FOCUS);
    }

    #[test]
    fn color_spec_rejects_three_stops() {
        let r = serde_json::from_str::<ColorSpec>(r##"["#000000","#000000","#000000"]"##);
        assert!(r.is_err());
    }
}
