//! Named hotkey events delivered by an external global-hotkey source.
//!
//! Registration of the actual key chords is platform plumbing that lives
//! outside this crate; the overlay only sees the resulting events.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A global hotkey event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotkey {
    /// Play if paused, pause if playing.
    Toggle,

    /// Previous track.
    Previous,

    /// Next track.
    Next,

    /// Raise the device volume by one step.
    VolumeUp,

    /// Lower the device volume by one step.
    VolumeDown,
}

impl Hotkey {
    /// Every hotkey, in menu order.
    pub const ALL: [Hotkey; 5] = [
        Hotkey::Toggle,
        Hotkey::Previous,
        Hotkey::Next,
        Hotkey::VolumeUp,
        Hotkey::VolumeDown,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Hotkey::Toggle => "toggle",
            Hotkey::Previous => "previous",
            Hotkey::Next => "next",
            Hotkey::VolumeUp => "volume-up",
            Hotkey::VolumeDown => "volume-down",
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hotkey name that matches no known event.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown hotkey '{0}' (expected one of: toggle, previous, next, volume-up, volume-down)")]
pub struct UnknownHotkey(pub String);

impl FromStr for Hotkey {
    type Err = UnknownHotkey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" | "play-pause" => Ok(Hotkey::Toggle),
            "previous" | "prev" => Ok(Hotkey::Previous),
            "next" => Ok(Hotkey::Next),
            "volume-up" | "vol+" => Ok(Hotkey::VolumeUp),
            "volume-down" | "vol-" => Ok(Hotkey::VolumeDown),
            other => Err(UnknownHotkey(other.to_string())),
        }
    }
}
