use std::path::PathBuf;

use teloxide::macros::BotCommands;
use teloxide::utils::command::ParseError;
use transfer::TransferConfig;

/// Type alias for handler result types
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Available bot commands
#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Show the welcome message")]
    Start,
    #[command(description = "Display help information")]
    Help,
    #[command(
        description = "Download a torrent and upload its files here",
        parse_with = parse_link
    )]
    Leech(String),
}

// Keeps a bare `/leech` routed to the handler so it can answer with a
// usage message instead of falling through as an unrecognized command.
fn parse_link(input: String) -> Result<(String,), ParseError> {
    Ok((input.trim().to_string(),))
}

/// Settings shared by every request, injected through dptree deps.
#[derive(Clone)]
pub struct BotConfig {
    /// Parent directory for per-request workspaces.
    pub download_root: PathBuf,
    pub transfer: TransferConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_trims_whitespace() {
        assert_eq!(parse_link("  magnet:?xt=x  ".to_string()).unwrap().0, "magnet:?xt=x");
    }

    #[test]
    fn test_parse_link_accepts_empty_input() {
        // The handler turns this into the usage message.
        assert_eq!(parse_link(String::new()).unwrap().0, "");
    }
}
