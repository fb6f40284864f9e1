use chrono::NaiveDate;
use kurbo::Shape as _;

use crate::{
    calendar::index::{DAYS_PER_WEEK, GridCoord},
    foundation::core::Point,
    layout::composer::{DayCell, HeatmapLayout, YearBand},
};

/// Payload of a hover notification.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HoverEvent {
    /// Year band the cell belongs to.
    pub year: i32,
    /// Hovered day.
    pub date: NaiveDate,
    /// Grid position of the day.
    pub coord: GridCoord,
    /// The day's value.
    pub value: f64,
}

/// Handle returned by [`HoverHook::on_hover`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&HoverEvent)>;

/// The "hover" event of one heat map session.
///
/// Listeners run synchronously, in registration order, on whichever thread
/// drives the session.
#[derive(Default)]
pub struct HoverHook {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl HoverHook {
    /// Hook without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it fires on every subsequent [`HoverHook::emit`].
    pub fn on_hover<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&HoverEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True when nobody listens.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &HoverEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for HoverHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverHook")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A laid-out heat map together with its own hover hook.
///
/// Sessions never share listeners, so several heat maps can be driven side
/// by side.
#[derive(Debug)]
pub struct HeatmapSession {
    layout: HeatmapLayout,
    hover: HoverHook,
}

impl HeatmapSession {
    /// Wrap a finished layout.
    pub fn new(layout: HeatmapLayout) -> Self {
        Self {
            layout,
            hover: HoverHook::new(),
        }
    }

    /// The geometry being interacted with.
    pub fn layout(&self) -> &HeatmapLayout {
        &self.layout
    }

    /// This session's hover hook.
    pub fn hover(&mut self) -> &mut HoverHook {
        &mut self.hover
    }

    /// Shorthand for `self.hover().on_hover(listener)`.
    pub fn on_hover<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&HoverEvent) + 'static,
    {
        self.hover.on_hover(listener)
    }

    /// Band and cell under a canvas-space point.
    pub fn cell_at(&self, point: Point) -> Option<(&YearBand, &DayCell)> {
        let s = self.layout.cell_size;
        if s <= 0.0 {
            return None;
        }
        self.layout.years.iter().find_map(|band| {
            let local = point - band.origin;
            if local.x < 0.0 || local.y < 0.0 {
                return None;
            }
            let week = (local.x / s).floor();
            let day = (local.y / s).floor();
            if day >= f64::from(DAYS_PER_WEEK) {
                return None;
            }
            let coord = GridCoord {
                week: week as u32,
                day: day as u32,
            };
            band.cell_at(coord).map(|cell| (band, cell))
        })
    }

    /// Year and month (1-based) whose outline contains a canvas-space point.
    pub fn month_at(&self, point: Point) -> Option<(i32, u32)> {
        self.layout.years.iter().find_map(|band| {
            let local = (point - band.origin).to_point();
            band.month_outlines
                .iter()
                .find(|o| o.to_bez_path().contains(local))
                .map(|o| (band.year, o.month))
        })
    }

    /// Forward a pointer position from the rendering host.
    ///
    /// Fires the hover hook when the point lies on a shaded cell and returns
    /// the delivered event. Cells without a value do not notify.
    pub fn pointer_moved(&mut self, point: Point) -> Option<HoverEvent> {
        let event = {
            let (band, cell) = self.cell_at(point)?;
            if cell.color.is_none() {
                return None;
            }
            HoverEvent {
                year: band.year,
                date: cell.date,
                coord: cell.coord,
                value: cell.value?,
            }
        };
        tracing::trace!(date = %event.date, value = event.value, "hover");
        self.hover.emit(&event);
        Some(event)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/hover.rs"]
mod tests;
