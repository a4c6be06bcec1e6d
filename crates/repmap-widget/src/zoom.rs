//! Zoom and pan of the map container.
//!
//! Scale moves in fixed steps between [`ZOOM_MIN`] and [`ZOOM_MAX`]; pan is
//! unbounded and follows the pointer while it is held down.

use serde::Serialize;

use crate::tooltip::Point;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 5.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Keep the scale on the 0.1 grid so repeated steps land on exact bounds.
fn snap(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomPan {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// Pointer position minus pan at press time, while a drag is active.
    #[serde(skip)]
    drag_start: Option<Point>,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            drag_start: None,
        }
    }
}

impl ZoomPan {
    /// Returns `true` if the scale changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(snap(self.zoom + ZOOM_STEP).min(ZOOM_MAX))
    }

    /// Returns `true` if the scale changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(snap(self.zoom - ZOOM_STEP).max(ZOOM_MIN))
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        if (zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = zoom;
        true
    }

    pub fn press(&mut self, pointer: Point) {
        self.drag_start = Some(Point::new(pointer.x - self.pan_x, pointer.y - self.pan_y));
    }

    /// Move the pan with the pointer. Ignored unless a drag is active.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(start) = self.drag_start else {
            return false;
        };
        self.pan_x = pointer.x - start.x;
        self.pan_y = pointer.y - start.y;
        true
    }

    /// Ends a drag. Used for both pointer release and pointer leave.
    pub fn release(&mut self) {
        self.drag_start = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// CSS transform for the map container (origin top-left).
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
