use crate::foundation::core::Rgb8;

/// Numeric extent mapped onto the color gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorDomain {
    /// Smallest value, maps to the start color.
    pub min: f64,
    /// Largest value, maps to the end color.
    pub max: f64,
}

impl ColorDomain {
    /// Domain used when there is nothing to measure.
    pub const EMPTY: Self = Self { min: 0.0, max: 0.0 };

    /// Extent of the finite values in `values`; [`ColorDomain::EMPTY`] when
    /// there are none.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut extent: Option<(f64, f64)> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            extent = Some(match extent {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        match extent {
            Some((min, max)) => Self { min, max },
            None => Self::EMPTY,
        }
    }

    /// True when every value maps to the same position.
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Relative position of `value` within the domain, clamped to `[0, 1]`.
    ///
    /// A degenerate domain places everything at 0.
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Linear value-to-color mapping between two endpoint colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    domain: ColorDomain,
    start: Rgb8,
    end: Rgb8,
}

impl ColorScale {
    /// Build a scale over `domain` from `start` to `end`.
    pub fn new(domain: ColorDomain, start: Rgb8, end: Rgb8) -> Self {
        Self { domain, start, end }
    }

    /// The domain this scale maps from.
    pub fn domain(&self) -> ColorDomain {
        self.domain
    }

    /// Color for `value`; out-of-domain values clamp to the nearest endpoint
    /// and non-finite values map to the start color.
    pub fn color_for(&self, value: f64) -> Rgb8 {
        self.try_color_for(value).unwrap_or(self.start)
    }

    /// Like [`ColorScale::color_for`] but `None` for NaN or infinite input.
    pub fn try_color_for(&self, value: f64) -> Option<Rgb8> {
        if !value.is_finite() {
            return None;
        }
        Some(self.start.lerp(self.end, self.domain.normalize(value)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/scale.rs"]
mod tests;
