use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, Margin, Rgb8},
    error::{CalheatError, CalheatResult},
};

/// Immutable heat map configuration.
///
/// Every field has a default, so a partial JSON object is a valid config:
///
/// ```json
/// { "start_year": 2020, "end_year": 2022, "color_range_end": "#1f77b4" }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatmapConfig {
    /// First year drawn.
    pub start_year: i32,
    /// Exclusive end of the year range; this year is never drawn.
    pub end_year: i32,
    /// Total width including margins.
    pub width: f64,
    /// Total height including margins.
    pub height: f64,
    /// Color of the smallest value.
    pub color_range_start: Rgb8,
    /// Color of the largest value.
    pub color_range_end: Rgb8,
    /// Space reserved for axis labels.
    pub margin: Margin,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            start_year: 2013,
            end_year: 2016,
            width: 950.0,
            height: 475.0,
            color_range_start: Rgb8::new(0xfa, 0xe9, 0xe9),
            color_range_end: Rgb8::new(0xd6, 0x27, 0x28),
            margin: Margin::DEFAULT,
        }
    }
}

impl HeatmapConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> CalheatResult<Self> {
        serde_json::from_str(s).map_err(|e| CalheatError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CalheatResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CalheatError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CalheatResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Total drawing surface.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Width left for the grid after margins.
    pub fn usable_width(&self) -> f64 {
        self.width - self.margin.horizontal()
    }

    /// Height left for the year bands after margins.
    pub fn usable_height(&self) -> f64 {
        self.height - self.margin.vertical()
    }

    /// Years in `[start_year, end_year)`, ascending. Empty when the range is.
    pub fn year_range(&self) -> Vec<i32> {
        (self.start_year..self.end_year).collect()
    }

    /// Strict check for callers that prefer an error over empty output.
    ///
    /// The layout itself never calls this.
    pub fn validate(&self) -> CalheatResult<()> {
        if self.end_year <= self.start_year {
            return Err(CalheatError::config(format!(
                "end_year ({}) must be greater than start_year ({})",
                self.end_year, self.start_year
            )));
        }
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CalheatError::config(format!("{name} must be > 0, got {v}")));
            }
        }
        let m = self.margin;
        if [m.top, m.right, m.bottom, m.left]
            .iter()
            .any(|e| !e.is_finite() || *e < 0.0)
        {
            return Err(CalheatError::config("margins must be finite and >= 0"));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(CalheatError::config(format!(
                "{}x{} leaves no room inside the margins",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
