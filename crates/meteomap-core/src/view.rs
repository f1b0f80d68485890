// crates/meteomap-core/src/view.rs
use crate::model::Point;
use crate::overlay::Bounds;

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;
pub const DEFAULT_ZOOM: u8 = 5;
/// Pyrenees, where the default dataset lives.
pub const DEFAULT_CENTER: Point = Point::new(42.5, 1.5);

/// Emitted by [`MapView::set_zoom`] when the level actually moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomChanged {
    pub from: u8,
    pub to: u8,
}

/// Center and zoom of the map. The single source of truth that both the
/// map surface and any zoom control read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: Point,
    zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapView {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Clamps `zoom` into `MIN_ZOOM..=MAX_ZOOM`.
    pub fn set_zoom(&mut self, zoom: i32) -> Option<ZoomChanged> {
        let to = zoom.clamp(MIN_ZOOM as i32, MAX_ZOOM as i32) as u8;
        if to == self.zoom {
            return None;
        }
        let from = std::mem::replace(&mut self.zoom, to);
        Some(ZoomChanged { from, to })
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn center_on(&mut self, bounds: Bounds) {
        self.center = bounds.center();
    }
}
