use chrono::{Datelike, NaiveDate};

/// Rows in a year grid: Monday through Sunday.
pub const DAYS_PER_WEEK: u32 = 7;

/// Week columns a year can touch under `%W` numbering (weeks `0..=53`).
pub const MAX_WEEK_COLUMNS: u32 = 54;

/// Position of a day-cell inside its year grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridCoord {
    /// Column: `%W` week-of-year (Monday start, week 0 before the first Monday).
    pub week: u32,
    /// Row: weekday with Monday = 0 and Sunday = 6.
    pub day: u32,
}

/// Weekday row of `date`, Monday = 0 … Sunday = 6.
pub fn day_index(date: NaiveDate) -> u32 {
    // Sunday-based weekday shifted so the week starts on Monday.
    (date.weekday().num_days_from_sunday() + 6) % DAYS_PER_WEEK
}

/// `%W` week-of-year of `date`.
///
/// Weeks start on Monday and week 1 begins with the year's first Monday;
/// the days before it form week 0. This is not ISO-8601 numbering: Jan 1
/// is always in week 0 or 1 and Dec 31 may reach week 53.
pub fn week_index(date: NaiveDate) -> u32 {
    (date.ordinal0() + DAYS_PER_WEEK - day_index(date)) / DAYS_PER_WEEK
}

/// Grid coordinate of `date` within its own year.
pub fn position_of(date: NaiveDate) -> GridCoord {
    GridCoord {
        week: week_index(date),
        day: day_index(date),
    }
}

/// Every day drawn for `year`.
///
/// The year containing `today` stops at `today` (inclusive); every other
/// year covers Jan 1 through Dec 31. Years outside chrono's range yield an
/// empty sequence.
pub fn year_days(year: i32, today: NaiveDate) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let last = if year == today.year() {
        today
    } else {
        match NaiveDate::from_ymd_opt(year, 12, 31) {
            Some(d) => d,
            None => return Vec::new(),
        }
    };
    first.iter_days().take_while(|d| *d <= last).collect()
}

/// First and last day of `month` (1-based) in `year`.
pub fn month_span(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = match next {
        Some(n) => n.pred_opt()?,
        None => NaiveDate::from_ymd_opt(year, 12, 31)?,
    };
    Some((first, last))
}

/// The first day of each month of `year`, January first.
pub fn month_starts(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|m| NaiveDate::from_ymd_opt(year, m, 1))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/index.rs"]
mod tests;
