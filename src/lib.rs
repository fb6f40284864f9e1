//! calheat lays out and renders multi-year calendar heat maps.
//!
//! A heat map is a grid of day-cells: one column per `%W` week, one row per
//! weekday (Monday on top), one horizontal band per year with the newest year
//! first. Cells are shaded by a per-day value and every month is outlined.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `HeatmapConfig + DateValues + today -> HeatmapLayout`
//!    (pure geometry: cell coordinates, colors, month outlines)
//! 2. **Render**: `HeatmapLayout -> SVG` via [`render_svg`]
//! 3. **Rasterize** (optional): `SVG -> RGBA8 / PNG` via [`rasterize`]
//! 4. **Interact** (optional): [`HeatmapSession`] hit-tests pointer positions and
//!    fires its own hover hook
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: layout takes "today" as an argument; [`layout_now`] is the only
//!   wall-clock entry point.
//! - **Total layout**: degenerate configuration produces an empty layout, never an error.
//!   Use [`HeatmapConfig::validate`] for strict checking.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod calendar;
mod color;
mod data;
mod foundation;
mod layout;
mod render;
mod session;

pub use calendar::index::{
    DAYS_PER_WEEK, GridCoord, MAX_WEEK_COLUMNS, day_index, month_span, month_starts, position_of,
    week_index, year_days,
};
pub use calendar::outline::{MonthOutline, PathSeg, month_outlines, outline_for, outline_span};
pub use color::scale::{ColorDomain, ColorScale};
pub use data::values::{DATE_KEY_FORMAT, DateValues};
pub use foundation::core::{BezPath, Canvas, Margin, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{CalheatError, CalheatResult};
pub use layout::composer::{
    BAND_INSET_X, BAND_ROWS, DayCell, GridDimensions, HeatmapLayout, YearBand, layout, layout_now,
};
pub use layout::config::HeatmapConfig;
pub use render::raster::{MAX_RASTER_DIM, parse_svg, rasterize, rasterize_svg, write_png};
pub use render::svg::{
    Label, MONTH_LABELS, SvgStyle, WEEKDAY_LABELS, month_labels, render_svg, weekday_labels,
    year_title_anchor,
};
pub use session::hover::{HeatmapSession, HoverEvent, HoverHook, ListenerId};
