//! Integration tests for placement persistence and the drag state machine.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use nowplaying_overlay::{
    config::WindowConfig,
    services::placement::{PlacementController, Point, PositionStore, StoredPlacement, WorkArea},
};
use tempfile::TempDir;

const AREA: WorkArea = WorkArea::new(0, 0, 1920, 1040);

fn store_in(dir: &TempDir) -> PositionStore {
    PositionStore::new(dir.path().join("placement.json"))
}

mod store {
    use super::*;

    #[test]
    fn saved_placement_loads_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let placement = StoredPlacement::new(Point::new(100, 200), true);

        assert!(store.save(&placement));
        assert_eq!(store.load(), placement);
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();

        assert_eq!(store_in(&dir).load(), StoredPlacement::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert_eq!(store.load(), StoredPlacement::default());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = PositionStore::new(dir.path().join("nested/deeper/placement.json"));

        assert!(store.save(&StoredPlacement::new(Point::new(1, 2), false)));
        assert_eq!(store.load().position(), Some(Point::new(1, 2)));
    }

    #[test]
    fn unwritable_location_reports_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let store = PositionStore::new(blocker.join("placement.json"));

        assert!(!store.save(&StoredPlacement::new(Point::new(1, 2), false)));
    }

    #[test]
    fn partial_file_keeps_missing_fields_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{ "pos_locked": true }"#).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.position(), None);
        assert_eq!(loaded.pos_locked, Some(true));
    }
}

mod controller {
    use super::*;

    #[test]
    fn first_run_starts_bottom_right() {
        let dir = TempDir::new().unwrap();
        let controller = PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);

        let placement = controller.placement();
        assert_eq!(placement.position, Point::new(1920 - 300 - 8, 1040 - 34 - 1));
        assert!(!placement.locked);
    }

    #[test]
    fn saved_position_is_clamped_to_current_area() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&StoredPlacement::new(Point::new(3000, 1500), true));

        let controller = PlacementController::restore(&WindowConfig::default(), store, AREA);

        let placement = controller.placement();
        assert_eq!(placement.position, Point::new(1918 - 300, 1038 - 34));
        assert!(placement.locked);
    }

    #[test]
    fn drag_follows_cursor_and_persists_on_release() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);
        let origin = controller.placement().position;

        assert!(controller.begin_drag(Point::new(origin.x + 20, origin.y + 10)));
        assert!(controller.is_dragging());
        assert_eq!(
            controller.drag_to(Point::new(820, 510), AREA),
            Some(Point::new(800, 500))
        );
        controller.end_drag();

        assert!(!controller.is_dragging());
        assert_eq!(store_in(&dir).load().position(), Some(Point::new(800, 500)));
    }

    #[test]
    fn drag_near_edge_snaps() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);
        let origin = controller.placement().position;

        controller.begin_drag(origin);

        assert_eq!(controller.drag_to(Point::new(9, 600), AREA), Some(Point::new(2, 600)));
    }

    #[test]
    fn extreme_cursor_positions_stay_on_screen() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);

        assert!(controller.begin_drag(Point::new(i32::MIN, i32::MIN)));

        assert_eq!(
            controller.drag_to(Point::new(i32::MAX, i32::MAX), AREA),
            Some(Point::new(1918 - 300, 1038 - 34))
        );
        assert_eq!(
            controller.drag_to(Point::new(i32::MIN, i32::MIN), AREA),
            Some(Point::new(2, 2))
        );
    }

    #[test]
    fn move_to_clamps_extreme_coordinates() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);

        assert_eq!(controller.move_to(Point::new(i32::MAX, i32::MIN), AREA), Point::new(1618, 2));
    }

    #[test]
    fn locked_widget_ignores_drags() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);
        let before = controller.placement().position;

        controller.set_locked(true);

        assert!(!controller.begin_drag(before));
        assert_eq!(controller.drag_to(Point::new(100, 100), AREA), None);
        assert_eq!(controller.placement().position, before);
        assert_eq!(store_in(&dir).load().pos_locked, Some(true));
    }

    #[test]
    fn relocate_returns_to_default_position() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            PlacementController::restore(&WindowConfig::default(), store_in(&dir), AREA);
        controller.move_to(Point::new(500, 500), AREA);

        let position = controller.relocate(AREA);

        assert_eq!(position, controller.default_position(AREA));
        assert_eq!(store_in(&dir).load().position(), Some(position));
    }

    #[test]
    fn persisting_keeps_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{ "window_pos": [10, 10], "theme": "dark", "opacity": 0.8 }"#,
        )
        .unwrap();

        let mut controller = PlacementController::restore(&WindowConfig::default(), store, AREA);
        controller.move_to(Point::new(400, 300), AREA);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("placement.json")).unwrap())
                .unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw["opacity"], 0.8);
        assert_eq!(raw["window_pos"], serde_json::json!([400, 300]));
    }

    #[test]
    fn forgetful_config_never_touches_disk() {
        let dir = TempDir::new().unwrap();
        let config = WindowConfig {
            remember_position: false,
            ..WindowConfig::default()
        };

        let mut controller = PlacementController::restore(&config, store_in(&dir), AREA);
        controller.move_to(Point::new(400, 300), AREA);
        controller.set_locked(true);

        assert!(!dir.path().join("placement.json").exists());
    }
}
