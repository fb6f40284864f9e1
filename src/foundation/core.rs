use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{CalheatError, CalheatResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Output surface dimensions in user units (pixels for raster output).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Total width including margins.
    pub width: f64,
    /// Total height including margins.
    pub height: f64,
}

/// Space reserved around the plot area for axis labels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Margin {
    /// Top edge, holds the month labels.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge, holds the year titles.
    pub left: f64,
}

impl Margin {
    /// The margin used when none is configured.
    pub const DEFAULT: Self = Self {
        top: 20.0,
        right: 30.0,
        bottom: 20.0,
        left: 20.0,
    };

    /// Sum of left and right edges.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom edges.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Straight (non-premultiplied) opaque RGB8 color.
///
/// Serializes as a `#rrggbb` string; deserializes from `#rrggbb` or the
/// `#rgb` shorthand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> CalheatResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> CalheatResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CalheatError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CalheatError::validation(format!(
                "hex color \"{s}\" has non-hex digits"
            )));
        }

        match s.len() {
            6 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            3 => {
                let r = hex_byte(&s[0..1].repeat(2))?;
                let g = hex_byte(&s[1..2].repeat(2))?;
                let b = hex_byte(&s[2..3].repeat(2))?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(CalheatError::validation(
                "hex color must be #RRGGBB or #RGB (case-insensitive)",
            )),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        let t = t.clamp(0.0, 1.0);
        Self {
            r: channel(self.r, other.r, t),
            g: channel(self.g, other.g, t),
            b: channel(self.b, other.b, t),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = CalheatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
