use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn monday_is_row_zero_and_sunday_row_six() {
    // 2024-01-01 was a Monday.
    assert_eq!(day_index(ymd(2024, 1, 1)), 0);
    assert_eq!(day_index(ymd(2024, 1, 3)), 2);
    assert_eq!(day_index(ymd(2024, 1, 7)), 6);

    for d in ymd(2019, 1, 1).iter_days().take(800) {
        assert!(day_index(d) <= 6);
    }
}

#[test]
fn week_index_matches_percent_w_for_every_day() {
    let mut d = ymd(2010, 1, 1);
    let end = ymd(2031, 1, 1);
    while d < end {
        let expected: u32 = d.format("%W").to_string().parse().unwrap();
        assert_eq!(week_index(d), expected, "{d}");
        assert!(week_index(d) < MAX_WEEK_COLUMNS);
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn days_before_first_monday_are_week_zero() {
    // 2020-01-01 was a Wednesday; the first Monday is Jan 6.
    assert_eq!(position_of(ymd(2020, 1, 1)), GridCoord { week: 0, day: 2 });
    assert_eq!(position_of(ymd(2020, 1, 5)), GridCoord { week: 0, day: 6 });
    assert_eq!(position_of(ymd(2020, 1, 6)), GridCoord { week: 1, day: 0 });
}

#[test]
fn leap_year_starting_monday_reaches_week_53() {
    // 2024 is a leap year starting on Monday; Dec 30 is a Monday.
    assert_eq!(position_of(ymd(2024, 12, 30)), GridCoord { week: 53, day: 0 });
    assert_eq!(position_of(ymd(2024, 12, 31)), GridCoord { week: 53, day: 1 });
}

#[test]
fn full_years_have_365_or_366_contiguous_days() {
    let today = ymd(2030, 6, 1);
    for (year, len) in [(2013, 365), (2016, 366), (2019, 365), (2020, 366)] {
        let days = year_days(year, today);
        assert_eq!(days.len(), len);
        assert_eq!(days[0], ymd(year, 1, 1));
        assert_eq!(*days.last().unwrap(), ymd(year, 12, 31));
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }
}

#[test]
fn current_year_stops_at_today_inclusive() {
    let today = ymd(2021, 3, 15);
    let days = year_days(2021, today);
    assert_eq!(days.len(), 31 + 28 + 15);
    assert_eq!(*days.last().unwrap(), today);

    let new_year = year_days(2021, ymd(2021, 1, 1));
    assert_eq!(new_year, vec![ymd(2021, 1, 1)]);
}

#[test]
fn future_years_are_not_truncated() {
    let today = ymd(2021, 3, 15);
    assert_eq!(year_days(2022, today).len(), 365);
}

#[test]
fn out_of_range_year_is_empty() {
    assert!(year_days(i32::MAX, ymd(2021, 1, 1)).is_empty());
}

#[test]
fn month_span_handles_february_and_december() {
    assert_eq!(month_span(2020, 2), Some((ymd(2020, 2, 1), ymd(2020, 2, 29))));
    assert_eq!(month_span(2021, 2), Some((ymd(2021, 2, 1), ymd(2021, 2, 28))));
    assert_eq!(month_span(2021, 12), Some((ymd(2021, 12, 1), ymd(2021, 12, 31))));
    assert_eq!(month_span(2021, 13), None);
}

#[test]
fn month_starts_lists_twelve_firsts() {
    let starts = month_starts(2022);
    assert_eq!(starts.len(), 12);
    assert!(starts.iter().all(|d| d.day() == 1));
    assert_eq!(starts[11], ymd(2022, 12, 1));
}
