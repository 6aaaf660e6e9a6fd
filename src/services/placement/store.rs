use std::{
    fs,
    io::Error,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use super::Point;
use crate::config::ConfigPaths;

/// Window coordinates and lock flag as they appear on disk.
///
/// Every field is optional; unknown keys are carried through untouched so
/// a later write does not drop settings written by another version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPlacement {
    /// Top-left corner, `[x, y]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_pos: Option<[i32; 2]>,

    /// Whether dragging is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_locked: Option<bool>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl StoredPlacement {
    /// Stored placement for a concrete position and lock state.
    pub fn new(position: Point, locked: bool) -> Self {
        Self {
            window_pos: Some([position.x, position.y]),
            pos_locked: Some(locked),
            extra: Map::new(),
        }
    }

    /// The saved position, if any.
    pub fn position(&self) -> Option<Point> {
        self.window_pos.map(|[x, y]| Point::new(x, y))
    }
}

/// Durable load/save of the window placement.
///
/// Reads and writes the whole file at once. Neither direction ever fails
/// towards the caller: a missing or corrupt file loads as the empty default
/// and a failed write is logged and dropped.
#[derive(Debug, Clone)]
pub struct PositionStore {
    path: PathBuf,
}

impl PositionStore {
    /// Store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user location.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined
    pub fn at_default_location() -> Result<Self, Error> {
        Ok(Self::new(ConfigPaths::placement_file()?))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted placement, or the empty default.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> StoredPlacement {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No placement loaded: {e}");
                return StoredPlacement::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Invalid placement file, using defaults: {e}");
            StoredPlacement::default()
        })
    }

    /// Write the placement, replacing the file.
    ///
    /// Returns whether the write succeeded; failures are logged only.
    #[instrument(skip(self, placement), fields(path = %self.path.display()))]
    pub fn save(&self, placement: &StoredPlacement) -> bool {
        match self.try_save(placement) {
            Ok(()) => {
                info!(
                    window_pos = ?placement.window_pos,
                    pos_locked = ?placement.pos_locked,
                    "Placement saved"
                );
                true
            }
            Err(e) => {
                warn!("Failed to save placement: {e}");
                false
            }
        }
    }

    fn try_save(&self, placement: &StoredPlacement) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(placement).map_err(Error::other)?;
        fs::write(&self.path, content)
    }
}
