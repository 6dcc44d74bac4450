//! Collaborator seams consumed by the controller.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{FetchError, SendError};
use crate::types::{FetchedFile, StatusHandle};

/// Resolves a link into files on disk under `dest`.
///
/// A successful return means `dest` is fully populated; the returned
/// list is the enumeration order uploads will follow.
///
/// The budget is handed to the implementation rather than enforced by
/// dropping its future: an engine holds resources (sessions, spawned
/// tasks, open files under `dest`) that must be released before the
/// workspace is cleaned up. On expiry the implementation shuts its
/// engine down and returns [`FetchError::Timeout`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        link: &str,
        dest: &Path,
        budget: Duration,
    ) -> Result<Vec<FetchedFile>, FetchError>;
}

/// Chat-side collaborator: status messages, plain messages and file uploads.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a status message that can later be edited in place.
    async fn send_status(&self, text: &str) -> Result<StatusHandle, SendError>;

    /// Rewrite a previously sent status message.
    async fn edit_status(&self, handle: StatusHandle, text: &str) -> Result<(), SendError>;

    /// Send a plain informational message.
    async fn send_text(&self, text: &str) -> Result<(), SendError>;

    /// Upload one file as a document attachment.
    async fn send_file(&self, path: &Path) -> Result<(), SendError>;
}
