use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};

use crate::{
    calendar::index::{DAYS_PER_WEEK, month_span, position_of},
    foundation::core::{BezPath, Point},
};

/// One command of a month outline, in band-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSeg {
    /// Start a new contour.
    MoveTo(Point),
    /// Horizontal line to the given x.
    HorizontalTo(f64),
    /// Vertical line to the given y.
    VerticalTo(f64),
    /// Close back to the last `MoveTo`.
    Close,
}

/// Closed contour around the cells of one calendar month.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonthOutline {
    /// Month number, January = 1.
    pub month: u32,
    /// Path commands, always starting with `MoveTo` and ending with `Close`.
    pub segments: Vec<PathSeg>,
}

impl MonthOutline {
    /// SVG path data in the compact `M x,y H x V y … Z` form.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for seg in &self.segments {
            // Writing into a String cannot fail.
            let _ = match *seg {
                PathSeg::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
                PathSeg::HorizontalTo(x) => write!(d, "H{x}"),
                PathSeg::VerticalTo(y) => write!(d, "V{y}"),
                PathSeg::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// The same contour as a `kurbo` path (straight lines only).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut cursor = Point::ZERO;
        for seg in &self.segments {
            match *seg {
                PathSeg::MoveTo(p) => {
                    path.move_to(p);
                    cursor = p;
                }
                PathSeg::HorizontalTo(x) => {
                    cursor = Point::new(x, cursor.y);
                    path.line_to(cursor);
                }
                PathSeg::VerticalTo(y) => {
                    cursor = Point::new(cursor.x, y);
                    path.line_to(cursor);
                }
                PathSeg::Close => path.close_path(),
            }
        }
        path
    }

    /// Polygon corners visited by the contour, starting point included once.
    pub fn vertices(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.segments.len());
        let mut cursor = Point::ZERO;
        for seg in &self.segments {
            cursor = match *seg {
                PathSeg::MoveTo(p) => p,
                PathSeg::HorizontalTo(x) => Point::new(x, cursor.y),
                PathSeg::VerticalTo(y) => Point::new(cursor.x, y),
                PathSeg::Close => continue,
            };
            out.push(cursor);
        }
        out
    }
}

/// Outline of the cells from `t0` through `t1` (both in the same year).
///
/// The contour starts at the top-right corner of `t0`'s cell, runs down the
/// left side of `t0`'s column to the grid bottom, across to `t1`'s column,
/// up to just below `t1`, right by one column, up to the grid top, and back
/// left to the start. Spans inside a single week column collapse to a plain
/// rectangle.
pub fn outline_span(t0: NaiveDate, t1: NaiveDate, cell_size: f64) -> Vec<PathSeg> {
    let a = position_of(t0);
    let b = position_of(t1);
    let s = cell_size;
    let (w0, d0) = (f64::from(a.week), f64::from(a.day));
    let (w1, d1) = (f64::from(b.week), f64::from(b.day));

    if a.week == b.week {
        return vec![
            PathSeg::MoveTo(Point::new(w0 * s, d0 * s)),
            PathSeg::HorizontalTo((w0 + 1.0) * s),
            PathSeg::VerticalTo((d1 + 1.0) * s),
            PathSeg::HorizontalTo(w0 * s),
            PathSeg::Close,
        ];
    }

    let bottom = f64::from(DAYS_PER_WEEK) * s;
    vec![
        PathSeg::MoveTo(Point::new((w0 + 1.0) * s, d0 * s)),
        PathSeg::HorizontalTo(w0 * s),
        PathSeg::VerticalTo(bottom),
        PathSeg::HorizontalTo(w1 * s),
        PathSeg::VerticalTo((d1 + 1.0) * s),
        PathSeg::HorizontalTo((w1 + 1.0) * s),
        PathSeg::VerticalTo(0.0),
        PathSeg::HorizontalTo((w0 + 1.0) * s),
        PathSeg::Close,
    ]
}

/// Outline of `month` (1-based) in `year`, or `None` for an invalid month.
pub fn outline_for(year: i32, month: u32, cell_size: f64) -> Option<MonthOutline> {
    let (first, last) = month_span(year, month)?;
    debug_assert_eq!(first.year(), last.year());
    Some(MonthOutline {
        month,
        segments: outline_span(first, last, cell_size),
    })
}

/// All twelve month outlines of `year`.
pub fn month_outlines(year: i32, cell_size: f64) -> Vec<MonthOutline> {
    (1..=12)
        .filter_map(|m| outline_for(year, m, cell_size))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/outline.rs"]
mod tests;
