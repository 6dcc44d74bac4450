//! Constants used throughout the telegram bot

/// Emoji constants for consistent UI
pub mod emoji {
    pub const ERROR: &str = "❌";
    pub const WAVE: &str = "👋";
}

/// Usage messages for commands
pub mod usage {
    pub const LEECH: &str = "Usage: /leech <magnet link or .torrent URL>";
}
