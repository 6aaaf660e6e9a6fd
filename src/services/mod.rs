/// Shared reactive building blocks
pub mod common;
/// Window placement, snapping and persistence
pub mod placement;
/// Playback polling, interpolation and controls
pub mod playback;
