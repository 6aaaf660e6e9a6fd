//! Window placement: edge snapping, drag handling and persistence.

mod controller;
mod geometry;
mod snap;
mod store;

pub use controller::{PlacementController, WindowPlacement};
pub use geometry::{InvalidWorkArea, Point, Size, WorkArea};
pub use snap::SnapEngine;
pub use store::{PositionStore, StoredPlacement};
