use std::fmt::Write as _;

use crate::{
    data::values::DATE_KEY_FORMAT,
    foundation::core::{Point, Rgb8},
    layout::composer::{DayCell, HeatmapLayout, YearBand},
};

/// Weekday row labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Month column labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Presentation attributes the heat map geometry leaves open.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Fill of cells without a value; `None` leaves them transparent.
    pub empty_fill: Option<Rgb8>,
    /// Grid line color around every cell.
    pub cell_stroke: Rgb8,
    /// Grid line width.
    pub cell_stroke_width: f64,
    /// Month outline color.
    pub month_stroke: Rgb8,
    /// Month outline width.
    pub month_stroke_width: f64,
    /// Label font family.
    pub font_family: String,
    /// Label font size in user units.
    pub font_size: f64,
    /// Background painted under the whole canvas.
    pub background: Option<Rgb8>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            empty_fill: Some(Rgb8::new(0xff, 0xff, 0xff)),
            cell_stroke: Rgb8::new(0xcc, 0xcc, 0xcc),
            cell_stroke_width: 1.0,
            month_stroke: Rgb8::new(0, 0, 0),
            month_stroke_width: 2.0,
            font_family: "sans-serif".to_owned(),
            font_size: 10.0,
            background: None,
        }
    }
}

/// A text label anchored in band-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    /// Text drawn.
    pub text: &'static str,
    /// Anchor point; labels are end-anchored.
    pub at: Point,
}

/// Weekday labels to the left of each band, one per grid row.
pub fn weekday_labels(layout: &HeatmapLayout) -> Vec<Label> {
    WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, &text)| Label {
            text,
            at: Point::new(-5.0, layout.cell_size * (i as f64 + 1.0)),
        })
        .collect()
}

/// Month labels above each band, spread evenly over the usable width.
pub fn month_labels(layout: &HeatmapLayout) -> Vec<Label> {
    let step = layout.grid.usable_width / 12.0;
    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(i, &text)| Label {
            text,
            at: Point::new((i as f64 + 1.0) * step - 30.0, -5.0),
        })
        .collect()
}

/// Anchor of the rotated year title, band-local.
pub fn year_title_anchor(layout: &HeatmapLayout) -> Point {
    Point::new(-38.0, layout.cell_size * 3.5)
}

/// Serialize a layout as a standalone SVG document.
///
/// Shaded cells carry `data-date`/`data-value` attributes and a `<title>`
/// so an interactive host can wire hover handling to them.
#[tracing::instrument(skip_all, fields(bands = layout.years.len()))]
pub fn render_svg(layout: &HeatmapLayout, style: &SvgStyle) -> String {
    let mut out = String::with_capacity(256 + layout.cell_count() * 96);
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, layout, style);
    out
}

fn write_document(out: &mut String, layout: &HeatmapLayout, style: &SvgStyle) -> std::fmt::Result {
    let w = layout.canvas.width;
    let h = layout.canvas.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{}" font-size="{}">"#,
        escape_xml(&style.font_family),
        style.font_size
    )?;
    if let Some(bg) = style.background {
        writeln!(out, r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#)?;
    }

    let plot = layout.plot_origin();
    writeln!(out, r#"<g transform="translate({},{})">"#, plot.x, plot.y)?;
    for band in &layout.years {
        write_band(out, layout, band, style)?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_band(
    out: &mut String,
    layout: &HeatmapLayout,
    band: &YearBand,
    style: &SvgStyle,
) -> std::fmt::Result {
    let offset = band.origin - layout.plot_origin();
    writeln!(
        out,
        r#"<g class="year" transform="translate({},{})">"#,
        offset.x, offset.y
    )?;

    let title = year_title_anchor(layout);
    writeln!(
        out,
        r#"<text class="year-title" transform="translate({},{})rotate(-90)" text-anchor="middle" font-weight="bold">{}</text>"#,
        title.x, title.y, band.year
    )?;

    for cell in &band.cells {
        write_cell(out, layout.cell_size, cell, style)?;
    }

    for outline in &band.month_outlines {
        writeln!(
            out,
            r#"<path class="month" d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            outline.to_svg_d(),
            style.month_stroke,
            style.month_stroke_width
        )?;
    }

    for label in weekday_labels(layout) {
        writeln!(
            out,
            r#"<g class="titles-day" transform="translate({},{})"><text class="{t}" text-anchor="end" dy="-.25em">{t}</text></g>"#,
            label.at.x,
            label.at.y,
            t = label.text
        )?;
    }
    for label in month_labels(layout) {
        writeln!(
            out,
            r#"<g class="titles-month" transform="translate({},{})"><text class="{t}" text-anchor="end">{t}</text></g>"#,
            label.at.x,
            label.at.y,
            t = label.text
        )?;
    }

    writeln!(out, "</g>")
}

fn write_cell(out: &mut String, size: f64, cell: &DayCell, style: &SvgStyle) -> std::fmt::Result {
    let r = cell.rect(size);
    let fill = match (cell.color, style.empty_fill) {
        (Some(c), _) | (None, Some(c)) => c.to_hex(),
        (None, None) => "none".to_owned(),
    };
    write!(
        out,
        r#"<rect class="day" width="{size}" height="{size}" x="{}" y="{}" fill="{fill}" stroke="{}" stroke-width="{}""#,
        r.x0, r.y0, style.cell_stroke, style.cell_stroke_width
    )?;

    match (cell.color, cell.value) {
        (Some(_), Some(v)) => {
            let date = cell.date.format(DATE_KEY_FORMAT);
            writeln!(
                out,
                r#" data-date="{date}" data-value="{v}"><title>{date}: {v}</title></rect>"#
            )
        }
        _ => writeln!(out, "/>"),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
