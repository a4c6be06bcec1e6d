//! Tooltip placement relative to the pointer.

use serde::{Deserialize, Serialize};

/// Gap between the pointer and the tooltip box, in pixels.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// A position in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Place a tooltip of `tooltip` size next to `pointer`.
///
/// The box sits below and to the right of the pointer. On each axis where it
/// would overflow `viewport`, it is flipped to the other side of the pointer.
pub fn position_tooltip(pointer: Point, tooltip: Size, viewport: Size) -> Point {
    let mut x = pointer.x + TOOLTIP_OFFSET;
    let mut y = pointer.y + TOOLTIP_OFFSET;
    if x + tooltip.width > viewport.width {
        x = pointer.x - tooltip.width - TOOLTIP_OFFSET;
    }
    if y + tooltip.height > viewport.height {
        y = pointer.y - tooltip.height - TOOLTIP_OFFSET;
    }
    Point { x, y }
}
