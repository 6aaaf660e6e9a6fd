//! Formatting utilities for CLI output.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats muted secondary text
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Renders a permille value as a fixed-width text progress bar.
///
/// ```
/// use nowplaying_overlay::cli::formatting::format_progress_bar;
///
/// assert_eq!(format_progress_bar(500, 10), "[#####-----]");
/// assert_eq!(format_progress_bar(1000, 4), "[####]");
/// ```
pub fn format_progress_bar(permille: u16, width: usize) -> String {
    let filled = usize::from(permille.min(1000)) * width / 1000;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Formats the play state marker shown next to the track text.
pub fn format_play_state(playing: bool) -> String {
    if playing {
        format!("{}{}{}", Colors::GREEN, "▶", Colors::RESET)
    } else {
        format_description("❚❚")
    }
}
