use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Widget geometry, snapping and position persistence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Widget width in pixels.
    pub width: i32,

    /// Widget height in pixels.
    pub height: i32,

    /// Distance in pixels within which a dragged edge sticks to the work area edge.
    pub snap_px: i32,

    /// Gap kept between the widget and every work area edge.
    pub margin_px: i32,

    /// Gap to the right edge for the default bottom-right position.
    pub margin_right_px: i32,

    /// Gap above the taskbar for the default bottom-right position.
    pub taskbar_gap_px: i32,

    /// Whether the window position is saved and restored across restarts.
    pub remember_position: bool,

    /// Lock state used when nothing has been persisted yet.
    pub lock_position_default: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 34,
            snap_px: 12,
            margin_px: 2,
            margin_right_px: 8,
            taskbar_gap_px: 1,
            remember_position: true,
            lock_position_default: false,
        }
    }
}
