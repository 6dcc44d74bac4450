use std::fmt;

/// Custom error type for telegram bot operations
#[derive(Debug)]
pub enum BotError {
    /// Telegram API error
    Telegram(teloxide::RequestError),
    /// Failed to stage the per-request workspace on disk
    Workspace(std::io::Error),
    /// Generic error with message
    Message(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Telegram(e) => write!(f, "Telegram error: {}", e),
            BotError::Workspace(e) => write!(f, "Workspace error: {}", e),
            BotError::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BotError {}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::Telegram(err)
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::Workspace(err)
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Helper trait to convert errors into user-friendly messages
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for BotError {
    fn user_message(&self) -> String {
        match self {
            BotError::Telegram(e) => format!("❌ Communication error: {}", e),
            BotError::Workspace(e) => format!("❌ Could not prepare the download area: {}", e),
            BotError::Message(msg) => format!("❌ {}", msg),
        }
    }
}
