//! Error taxonomy for the transfer flow.

use std::error::Error;
use std::time::Duration;

use thiserror::Error;

/// Failure while resolving a link into files on disk.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The link is not a magnet URI or a .torrent URL.
    #[error("invalid link: {0}")]
    InvalidLink(String),
    /// The underlying torrent engine failed.
    #[error("download failed: {source}")]
    Engine {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The fetch exceeded its time budget.
    #[error("download timed out after {0:?}")]
    Timeout(Duration),
}

/// Failure while sending a message or file to the chat.
#[derive(Debug, Error)]
pub enum SendError {
    /// The chat platform rejected the call.
    #[error("send rejected: {source}")]
    Rejected {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The upload exceeded its time budget.
    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}

impl SendError {
    pub fn rejected(source: impl Error + Send + Sync + 'static) -> Self {
        SendError::Rejected { source: Box::new(source) }
    }
}
