use chrono::{Datelike, NaiveDate};

use crate::{
    calendar::{
        index::{DAYS_PER_WEEK, GridCoord, MAX_WEEK_COLUMNS, position_of, year_days},
        outline::{MonthOutline, month_outlines},
    },
    color::scale::{ColorDomain, ColorScale},
    data::values::DateValues,
    foundation::core::{Canvas, Margin, Point, Rect, Rgb8, Vec2},
    layout::config::HeatmapConfig,
};

/// Horizontal offset of every year band inside the plot area, leaving room
/// for the rotated year title.
pub const BAND_INSET_X: f64 = 30.0;

/// Rows reserved per band when sizing cells: seven weekdays plus one row of
/// spacing before the next band.
pub const BAND_ROWS: f64 = (DAYS_PER_WEEK + 1) as f64;

/// One day-cell of a year band.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DayCell {
    /// Calendar day.
    pub date: NaiveDate,
    /// Column and row in the band grid.
    pub coord: GridCoord,
    /// Value from the value map, if the day has one.
    pub value: Option<f64>,
    /// Fill color; `None` for days without a (finite) value.
    pub color: Option<Rgb8>,
}

impl DayCell {
    /// Cell square in band-local coordinates.
    pub fn rect(&self, cell_size: f64) -> Rect {
        let x = f64::from(self.coord.week) * cell_size;
        let y = f64::from(self.coord.day) * cell_size;
        Rect::new(x, y, x + cell_size, y + cell_size)
    }
}

/// All cells and month outlines for one year.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct YearBand {
    /// Calendar year shown by this band.
    pub year: i32,
    /// Band index from the top; 0 is the newest year.
    pub index: usize,
    /// Top-left corner of the band grid in canvas coordinates.
    pub origin: Point,
    /// Cells in ascending date order.
    pub cells: Vec<DayCell>,
    /// Twelve month outlines in band-local coordinates.
    pub month_outlines: Vec<MonthOutline>,
}

impl YearBand {
    /// Cell square translated to canvas coordinates.
    pub fn cell_rect_in_canvas(&self, cell: &DayCell, cell_size: f64) -> Rect {
        cell.rect(cell_size) + self.origin.to_vec2()
    }

    /// Cell drawn at a grid position, if that day is part of the band.
    pub fn cell_at(&self, coord: GridCoord) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.coord == coord)
    }
}

/// Sizes derived from the configured canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridDimensions {
    /// Canvas width minus horizontal margins.
    pub usable_width: f64,
    /// Canvas height minus vertical margins.
    pub usable_height: f64,
    /// Vertical distance between consecutive band origins.
    pub band_height: f64,
    /// Week columns reserved per band.
    pub columns: u32,
    /// Weekday rows per band.
    pub rows: u32,
}

/// Render-ready geometry of a whole heat map.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeatmapLayout {
    /// Total drawing surface.
    pub canvas: Canvas,
    /// Margin around the plot area.
    pub margin: Margin,
    /// Side of every square cell.
    pub cell_size: f64,
    /// Derived grid sizes.
    pub grid: GridDimensions,
    /// Extent of the value map used for shading.
    pub domain: ColorDomain,
    /// Bands newest-first, top to bottom.
    pub years: Vec<YearBand>,
}

impl HeatmapLayout {
    /// Top-left corner of the plot area (inside the margin).
    pub fn plot_origin(&self) -> Point {
        Point::new(self.margin.left, self.margin.top)
    }

    /// Total number of day-cells across all bands.
    pub fn cell_count(&self) -> usize {
        self.years.iter().map(|b| b.cells.len()).sum()
    }

    /// Band showing `year`, if drawn.
    pub fn band(&self, year: i32) -> Option<&YearBand> {
        self.years.iter().find(|b| b.year == year)
    }
}

/// Compute the heat map geometry.
///
/// Pure and total: a year range with `end_year <= start_year`, or a canvas
/// with no finite room inside the margins, produces a layout without bands. `today`
/// decides where the in-progress year stops.
#[tracing::instrument(skip(config, values), fields(start = config.start_year, end = config.end_year))]
pub fn layout(config: &HeatmapConfig, values: &DateValues, today: NaiveDate) -> HeatmapLayout {
    let usable_width = config.usable_width();
    let usable_height = config.usable_height();
    let domain = ColorDomain::from_values(values.values());
    let scale = ColorScale::new(domain, config.color_range_start, config.color_range_end);

    let mut years = config.year_range();
    years.reverse();

    let empty = |grid: GridDimensions| HeatmapLayout {
        canvas: config.canvas(),
        margin: config.margin,
        cell_size: 0.0,
        grid,
        domain,
        years: Vec::new(),
    };

    let mut grid = GridDimensions {
        usable_width,
        usable_height,
        band_height: 0.0,
        columns: MAX_WEEK_COLUMNS,
        rows: DAYS_PER_WEEK,
    };

    if years.is_empty() {
        tracing::debug!("empty year range, nothing to lay out");
        return empty(grid);
    }
    let has_room = |v: f64| v.is_finite() && v > 0.0;
    if !(has_room(usable_width) && has_room(usable_height)) {
        tracing::debug!(usable_width, usable_height, "no room inside margins");
        return empty(grid);
    }

    grid.band_height = usable_height / years.len() as f64 + 1.0;
    let cell_size = (grid.band_height / BAND_ROWS).min(usable_width / f64::from(MAX_WEEK_COLUMNS));

    let plot = Vec2::new(config.margin.left, config.margin.top);
    let bands = years
        .into_iter()
        .enumerate()
        .map(|(index, year)| {
            let origin = Point::new(BAND_INSET_X, index as f64 * grid.band_height) + plot;
            YearBand {
                year,
                index,
                origin,
                cells: year_cells(year, today, values, &scale),
                month_outlines: month_outlines(year, cell_size),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        bands = bands.len(),
        cell_size,
        shaded = bands
            .iter()
            .flat_map(|b| &b.cells)
            .filter(|c| c.color.is_some())
            .count(),
        "layout complete"
    );

    HeatmapLayout {
        canvas: config.canvas(),
        margin: config.margin,
        cell_size,
        grid,
        domain,
        years: bands,
    }
}

/// [`layout`] with `today` taken from the local wall clock.
pub fn layout_now(config: &HeatmapConfig, values: &DateValues) -> HeatmapLayout {
    layout(config, values, chrono::Local::now().date_naive())
}

fn year_cells(year: i32, today: NaiveDate, values: &DateValues, scale: &ColorScale) -> Vec<DayCell> {
    year_days(year, today)
        .into_iter()
        .map(|date| {
            debug_assert_eq!(date.year(), year);
            let value = values.get(date);
            DayCell {
                date,
                coord: position_of(date),
                value,
                color: value.and_then(|v| scale.try_color_for(v)),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/composer.rs"]
mod tests;
