use clap::Subcommand;

use super::{CliError, CommandResult, formatting::format_header};
use crate::{
    config::WindowConfig,
    services::placement::{PlacementController, Point, PositionStore, WorkArea},
};

/// Placement commands.
#[derive(Debug, Subcommand)]
pub enum PositionCommand {
    /// Print the persisted placement.
    Show,

    /// Disable dragging.
    Lock,

    /// Enable dragging.
    Unlock,

    /// Move the widget back to the bottom-right corner of a work area.
    Reset {
        /// Work area as `left,top,width,height`.
        #[arg(long, allow_hyphen_values = true)]
        area: WorkArea,
    },

    /// Move the widget to a position, snapped and clamped to a work area.
    Move {
        /// Desired left edge.
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Desired top edge.
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Work area as `left,top,width,height`.
        #[arg(long, allow_hyphen_values = true)]
        area: WorkArea,
    },
}

impl PositionCommand {
    /// Execute against `store`.
    ///
    /// # Errors
    /// Returns `CliError::IoError` if the store cannot be written.
    pub fn execute(self, window: &WindowConfig, store: PositionStore) -> CommandResult {
        match self {
            Self::Show => show(&store),
            Self::Lock => set_locked(&store, true),
            Self::Unlock => set_locked(&store, false),
            Self::Reset { area } => {
                let mut controller = PlacementController::restore(window, store, area);
                let position = controller.relocate(area);
                Ok(format!("Moved to {},{}", position.x, position.y))
            }
            Self::Move { x, y, area } => {
                let mut controller = PlacementController::restore(window, store, area);
                let position = controller.move_to(Point::new(x, y), area);
                Ok(format!("Moved to {},{}", position.x, position.y))
            }
        }
    }
}

fn show(store: &PositionStore) -> CommandResult {
    let stored = store.load();

    let position = stored
        .position()
        .map_or_else(|| "default".to_string(), |p| format!("{},{}", p.x, p.y));
    let locked = stored.pos_locked.unwrap_or(false);

    Ok(format!(
        "{}\n  file:     {}\n  position: {position}\n  locked:   {locked}",
        format_header("Placement"),
        store.path().display()
    ))
}

fn set_locked(store: &PositionStore, locked: bool) -> CommandResult {
    let mut stored = store.load();
    stored.pos_locked = Some(locked);

    if !store.save(&stored) {
        return Err(CliError::IoError(std::io::Error::other(format!(
            "could not write {}",
            store.path().display()
        ))));
    }

    Ok(if locked { "Position locked" } else { "Position unlocked" }.to_string())
}
