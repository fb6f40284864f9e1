use super::*;
use crate::calendar::index::year_days;
use kurbo::Shape as _;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn january_2020_path_matches_reference_string() {
    // Jan 1 is (week 0, Wed), Jan 31 is (week 4, Fri).
    let o = outline_for(2020, 1, 1.0).unwrap();
    assert_eq!(o.month, 1);
    assert_eq!(o.to_svg_d(), "M1,2H0V7H4V5H5V0H1Z");
}

#[test]
fn coordinates_scale_with_cell_size() {
    let o = outline_for(2020, 1, 10.0).unwrap();
    assert_eq!(o.to_svg_d(), "M10,20H0V70H40V50H50V0H10Z");
}

#[test]
fn month_starting_on_monday_starts_at_grid_top() {
    // June 2020 starts on a Monday (week 22) and ends on a Tuesday (week 26).
    let o = outline_for(2020, 6, 1.0).unwrap();
    assert_eq!(o.to_svg_d(), "M23,0H22V7H26V2H27V0H23Z");
}

#[test]
fn december_reaching_week_53_closes() {
    // Dec 2024 starts Sunday of week 48 and ends Tuesday of week 53.
    let o = outline_for(2024, 12, 1.0).unwrap();
    assert_eq!(o.to_svg_d(), "M49,6H48V7H53V2H54V0H49Z");
    assert_eq!(o.segments.first(), Some(&PathSeg::MoveTo(Point::new(49.0, 6.0))));
    assert_eq!(o.segments.last(), Some(&PathSeg::Close));
}

#[test]
fn span_inside_one_week_is_a_rectangle() {
    // Mon..Wed of the same week.
    let segs = outline_span(ymd(2020, 1, 6), ymd(2020, 1, 8), 10.0);
    let o = MonthOutline {
        month: 1,
        segments: segs,
    };
    assert_eq!(o.to_svg_d(), "M10,0H20V30H10Z");

    let bbox = o.to_bez_path().bounding_box();
    assert_eq!(bbox.height(), 3.0 * 10.0);
    assert_eq!(bbox.width(), 10.0);
    assert_eq!(o.vertices().len(), 4);
}

#[test]
fn every_year_has_twelve_outlines() {
    for year in [2013, 2015, 2016, 2024] {
        let outlines = month_outlines(year, 4.0);
        assert_eq!(outlines.len(), 12);
        for (i, o) in outlines.iter().enumerate() {
            assert_eq!(o.month, i as u32 + 1);
            assert!(matches!(o.segments.first(), Some(PathSeg::MoveTo(_))));
            assert_eq!(o.segments.last(), Some(&PathSeg::Close));
        }
    }
    assert!(outline_for(2020, 0, 1.0).is_none());
}

#[test]
fn outlines_separate_cells_by_month() {
    let far_future = ymd(2100, 1, 1);
    let s = 3.0;
    for year in [2016, 2019, 2020, 2023, 2024] {
        let paths: Vec<BezPath> = month_outlines(year, s)
            .iter()
            .map(MonthOutline::to_bez_path)
            .collect();
        for day in year_days(year, far_future) {
            let c = position_of(day);
            let center = Point::new(
                (f64::from(c.week) + 0.5) * s,
                (f64::from(c.day) + 0.5) * s,
            );
            for (i, path) in paths.iter().enumerate() {
                let inside = path.contains(center);
                assert_eq!(inside, i as u32 + 1 == day.month(), "{day} vs month {}", i + 1);
            }
        }
    }
}
