use tracing::{debug, info};

use super::{Point, PositionStore, SnapEngine, StoredPlacement, WorkArea};
use crate::config::WindowConfig;

/// Current window position and lock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    /// Top-left corner.
    pub position: Point,
    /// Whether dragging is disabled.
    pub locked: bool,
}

/// Drag state machine for the widget.
///
/// Owns the live placement, corrects every drag step through the
/// [`SnapEngine`] and hands the result to the [`PositionStore`] on drag end,
/// relocation and lock changes.
#[derive(Debug)]
pub struct PlacementController {
    engine: SnapEngine,
    store: PositionStore,
    remember: bool,
    margin_right_px: i32,
    taskbar_gap_px: i32,
    placement: WindowPlacement,
    drag_offset: Option<Point>,
}

impl PlacementController {
    /// Restore the placement for the given work area.
    ///
    /// A saved position is re-snapped against the current area, since the
    /// screen layout may have changed since it was written. Without one the
    /// widget starts in the bottom-right corner.
    pub fn restore(config: &WindowConfig, store: PositionStore, area: WorkArea) -> Self {
        let mut controller = Self {
            engine: SnapEngine::from_config(config),
            store,
            remember: config.remember_position,
            margin_right_px: config.margin_right_px,
            taskbar_gap_px: config.taskbar_gap_px,
            placement: WindowPlacement {
                position: Point::default(),
                locked: config.lock_position_default,
            },
            drag_offset: None,
        };

        let stored = if controller.remember {
            controller.store.load()
        } else {
            StoredPlacement::default()
        };

        controller.placement.position = match stored.position() {
            Some(saved) => controller.engine.snap_and_clamp(saved, area),
            None => controller.default_position(area),
        };
        if let Some(locked) = stored.pos_locked {
            controller.placement.locked = locked;
        }

        info!(placement = ?controller.placement, "Placement restored");
        controller
    }

    /// Current placement.
    pub fn placement(&self) -> WindowPlacement {
        self.placement
    }

    /// Whether a drag is in progress.
    ///
    /// UI shells use this to pick the grab cursor and to ignore pointer
    /// motion that arrives outside a drag.
    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Bottom-right corner of the area, off the taskbar.
    pub fn default_position(&self, area: WorkArea) -> Point {
        let size = self.engine.size();
        Point::new(
            area.right()
                .saturating_sub(size.width)
                .saturating_sub(self.margin_right_px),
            area.bottom()
                .saturating_sub(size.height)
                .saturating_sub(self.taskbar_gap_px),
        )
    }

    /// Start a drag at the given cursor position.
    ///
    /// Returns `false` and does nothing when the position is locked.
    pub fn begin_drag(&mut self, cursor: Point) -> bool {
        if self.placement.locked {
            return false;
        }

        let origin = self.placement.position;
        self.drag_offset = Some(Point::new(
            cursor.x.saturating_sub(origin.x),
            cursor.y.saturating_sub(origin.y),
        ));
        true
    }

    /// Follow the cursor; returns the corrected position to move the window to.
    ///
    /// `None` when no drag is active (including when locked).
    pub fn drag_to(&mut self, cursor: Point, area: WorkArea) -> Option<Point> {
        if self.placement.locked {
            return None;
        }
        let offset = self.drag_offset?;

        let desired = Point::new(
            cursor.x.saturating_sub(offset.x),
            cursor.y.saturating_sub(offset.y),
        );
        let corrected = self.engine.snap_and_clamp(desired, area);
        self.placement.position = corrected;
        Some(corrected)
    }

    /// Finish a drag and persist the final position.
    pub fn end_drag(&mut self) {
        if self.drag_offset.take().is_some() {
            debug!(position = ?self.placement.position, "Drag finished");
            self.persist();
        }
    }

    /// Move back to the default bottom-right position and persist it.
    pub fn relocate(&mut self, area: WorkArea) -> Point {
        self.drag_offset = None;
        self.placement.position = self.default_position(area);
        self.persist();
        self.placement.position
    }

    /// Move to an explicit position (snapped and clamped) and persist it.
    ///
    /// Ignores the lock: this is an explicit reposition, not a drag.
    pub fn move_to(&mut self, desired: Point, area: WorkArea) -> Point {
        self.placement.position = self.engine.snap_and_clamp(desired, area);
        self.persist();
        self.placement.position
    }

    /// Lock or unlock dragging and persist the flag.
    pub fn set_locked(&mut self, locked: bool) {
        self.placement.locked = locked;
        if locked {
            self.drag_offset = None;
        }
        self.persist();
    }

    fn persist(&self) {
        if !self.remember {
            return;
        }

        // Merge into what is on disk so unknown keys survive.
        let mut stored = self.store.load();
        stored.window_pos = Some([self.placement.position.x, self.placement.position.y]);
        stored.pos_locked = Some(self.placement.locked);
        self.store.save(&stored);
    }
}
