use std::path::PathBuf;

use crate::error::{FetchError, SendError};

/// One leech request, immutable for its whole lifetime.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Magnet URI or .torrent URL as the user supplied it.
    pub link: String,
}

impl TransferRequest {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}

/// A file produced by a completed fetch, with the size the fetcher
/// observed when enumerating the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    pub path: PathBuf,
    pub size: u64,
}

impl FetchedFile {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self { path: path.into(), size }
    }

    /// File name for user-facing messages; falls back to the full path
    /// when the path has no final component.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Opaque handle to an editable status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusHandle(pub i32);

/// A single failed upload inside an otherwise-continuing batch.
#[derive(Debug)]
pub struct SendFailure {
    pub file: FetchedFile,
    pub error: SendError,
}

/// Terminal result of one request, reported to the user then discarded.
#[derive(Debug)]
pub enum TransferOutcome {
    /// Every eligible file was uploaded.
    Succeeded { sent: usize },
    /// At least one upload failed; the rest were still attempted.
    PartialFailure { sent: usize, failures: Vec<SendFailure> },
    /// The fetch itself failed; nothing was uploaded.
    DownloadFailed(FetchError),
    /// The fetch completed but produced no files.
    NoFilesProduced,
    /// Every fetched file exceeded the size limit.
    AllFilesOversized,
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferOutcome::Succeeded { .. })
    }
}
