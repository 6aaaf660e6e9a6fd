use tracing::trace;

use super::{Point, Size, WorkArea};
use crate::config::WindowConfig;

/// Edge snapping and hard bounds for a dragged widget.
///
/// Both steps work against the work area inset by the margin, so a snapped
/// edge is always inside the hard boundary as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapEngine {
    size: Size,
    snap_px: i32,
    margin_px: i32,
}

impl SnapEngine {
    /// Create an engine for a widget of `size`.
    pub fn new(size: Size, snap_px: i32, margin_px: i32) -> Self {
        Self {
            size,
            snap_px: snap_px.max(0),
            margin_px: margin_px.max(0),
        }
    }

    /// Create an engine from the window section of the config.
    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(
            Size::new(config.width, config.height),
            config.snap_px,
            config.margin_px,
        )
    }

    /// Widget size this engine places.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Correct a desired top-left position.
    ///
    /// 1. Snap `x` to the left edge if within `snap_px`, else to the right edge.
    /// 2. Same for `y` against top and bottom.
    /// 3. Clamp so the widget stays fully inside the inset area. When the
    ///    widget is larger than the area, it is pinned to the top-left.
    pub fn snap_and_clamp(&self, desired: Point, area: WorkArea) -> Point {
        let margin = i64::from(self.margin_px);
        let snap_px = i64::from(self.snap_px);

        let corrected = Point::new(
            place_axis(desired.x, self.size.width, area.left, area.width, margin, snap_px),
            place_axis(desired.y, self.size.height, area.top, area.height, margin, snap_px),
        );

        trace!(?desired, ?corrected, "Snapped position");
        corrected
    }
}

/// Snap then clamp one axis. Works in `i64` so no input can overflow.
fn place_axis(pos: i32, extent: i32, start: i32, length: i32, margin: i64, snap_px: i64) -> i32 {
    let low = i64::from(start) + margin;
    let high = i64::from(start) + i64::from(length) - margin;
    let extent = i64::from(extent);

    let snapped = snap_axis(i64::from(pos), extent, low, high, snap_px);
    let clamped = clamp_axis(snapped, extent, low, high);

    i32::try_from(clamped).unwrap_or(if clamped < 0 { i32::MIN } else { i32::MAX })
}

fn snap_axis(pos: i64, extent: i64, low: i64, high: i64, snap_px: i64) -> i64 {
    if (pos - low).abs() <= snap_px {
        low
    } else if (pos + extent - high).abs() <= snap_px {
        high - extent
    } else {
        pos
    }
}

fn clamp_axis(pos: i64, extent: i64, low: i64, high: i64) -> i64 {
    // max after min: an oversized widget is pinned to the low edge
    pos.min(high - extent).max(low)
}
