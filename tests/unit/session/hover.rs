use std::{cell::RefCell, rc::Rc};

use chrono::Datelike as _;

use super::*;
use crate::{DateValues, HeatmapConfig, layout};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session_with(values: &[(&str, f64)]) -> HeatmapSession {
    let config = HeatmapConfig {
        start_year: 2019,
        end_year: 2021,
        width: 600.0,
        height: 300.0,
        ..HeatmapConfig::default()
    };
    let values = DateValues::from_keyed(values.iter().copied()).unwrap();
    HeatmapSession::new(layout(&config, &values, ymd(2030, 1, 1)))
}

fn center_of(session: &HeatmapSession, date: NaiveDate) -> Point {
    let l = session.layout();
    let band = l.band(date.year()).unwrap();
    let cell = band.cells.iter().find(|c| c.date == date).unwrap();
    band.cell_rect_in_canvas(cell, l.cell_size).center()
}

#[test]
fn hit_test_finds_cells_in_each_band() {
    let s = session_with(&[]);
    for date in [ymd(2019, 1, 1), ymd(2020, 7, 15), ymd(2020, 12, 31)] {
        let (band, cell) = s.cell_at(center_of(&s, date)).unwrap();
        assert_eq!(band.year, date.year());
        assert_eq!(cell.date, date);
    }
    assert!(s.cell_at(Point::new(0.0, 0.0)).is_none());
    assert!(s.cell_at(Point::new(1e6, 1e6)).is_none());
}

#[test]
fn hover_fires_only_for_shaded_cells() {
    let mut s = session_with(&[("2020-03-04", 2.5), ("2019-05-06", 7.0)]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    s.on_hover(move |e| sink.borrow_mut().push(*e));

    let hit = s.pointer_moved(center_of(&s, ymd(2020, 3, 4))).unwrap();
    assert_eq!(hit.date, ymd(2020, 3, 4));
    assert_eq!(hit.value, 2.5);
    assert_eq!(hit.year, 2020);

    assert!(s.pointer_moved(center_of(&s, ymd(2020, 3, 5))).is_none());
    assert!(s.pointer_moved(Point::new(-10.0, -10.0)).is_none());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], hit);
}

#[test]
fn sessions_do_not_share_listeners() {
    let mut a = session_with(&[("2020-01-01", 1.0)]);
    let mut b = session_with(&[("2020-01-01", 1.0)]);
    let hits_a = Rc::new(RefCell::new(0));
    let hits_b = Rc::new(RefCell::new(0));
    {
        let h = Rc::clone(&hits_a);
        a.on_hover(move |_| *h.borrow_mut() += 1);
        let h = Rc::clone(&hits_b);
        b.on_hover(move |_| *h.borrow_mut() += 1);
    }

    let p = center_of(&a, ymd(2020, 1, 1));
    a.pointer_moved(p);
    a.pointer_moved(p);
    b.pointer_moved(p);

    assert_eq!(*hits_a.borrow(), 2);
    assert_eq!(*hits_b.borrow(), 1);
}

#[test]
fn removed_listener_stops_receiving() {
    let mut s = session_with(&[("2020-01-01", 1.0)]);
    let hits = Rc::new(RefCell::new(0));
    let h = Rc::clone(&hits);
    let id = s.on_hover(move |_| *h.borrow_mut() += 1);
    assert_eq!(s.hover().len(), 1);

    let p = center_of(&s, ymd(2020, 1, 1));
    s.pointer_moved(p);
    assert!(s.hover().remove(id));
    assert!(!s.hover().remove(id));
    assert!(s.hover().is_empty());
    // Event is still reported to the caller, just nobody is notified.
    assert!(s.pointer_moved(p).is_some());
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn month_at_uses_outlines() {
    let s = session_with(&[]);
    for date in [ymd(2019, 2, 14), ymd(2020, 6, 1), ymd(2020, 12, 31)] {
        let p = center_of(&s, date);
        assert_eq!(s.month_at(p), Some((date.year(), date.month())));
    }
    assert_eq!(s.month_at(Point::new(-50.0, -50.0)), None);
}
