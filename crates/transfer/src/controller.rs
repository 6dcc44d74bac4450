//! The transfer lifecycle controller.
//!
//! Drives one request through download, classification, upload and
//! cleanup. Phases run strictly in order with no way back; cleanup runs
//! exactly once on every exit path, including transport failures.

use std::time::Duration;

use crate::classify::classify;
use crate::error::SendError;
use crate::traits::{Fetcher, Transport};
use crate::types::{FetchedFile, SendFailure, TransferOutcome, TransferRequest};
use crate::utils::format_size;
use crate::workspace::Workspace;
use crate::MAX_FILE_SIZE;

/// Status texts sent to the chat at each phase.
pub mod messages {
    pub const DOWNLOADING: &str = "Downloading torrent...";
    pub const UPLOADING: &str = "Uploading files...";
    pub const DONE: &str = "✅ Done!";
    pub const NO_FILES: &str = "❌ No files found after download.";
    pub const SKIPPED_HEADER: &str = "⚠️ Skipped files (too large to upload):";
}

/// Tunable budgets for one transfer.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Files strictly larger than this are skipped.
    pub max_file_size: u64,
    /// Budget for the whole fetch.
    pub fetch_timeout: Duration,
    /// Budget for each individual file upload.
    pub send_timeout: Duration,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            fetch_timeout: Duration::from_secs(3600),
            send_timeout: Duration::from_secs(300),
        }
    }
}

/// Runs the download → classify → upload → cleanup sequence for one
/// request. Holds no per-request state, so any number of controllers
/// (or calls into one) may run concurrently.
pub struct TransferController<'a> {
    fetcher: &'a dyn Fetcher,
    transport: &'a dyn Transport,
    config: TransferConfig,
}

impl<'a> TransferController<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, transport: &'a dyn Transport, config: TransferConfig) -> Self {
        Self { fetcher, transport, config }
    }

    /// Run one request to completion.
    ///
    /// The workspace is consumed and cleaned up no matter which phase
    /// fails. An `Err` means the transport itself broke while reporting
    /// progress; the caller is expected to surface a generic
    /// unexpected-error message.
    pub async fn run(
        &self,
        request: &TransferRequest,
        workspace: Workspace,
    ) -> Result<TransferOutcome, SendError> {
        let result = self.run_phases(request, &workspace).await;
        workspace.cleanup();
        result
    }

    async fn run_phases(
        &self,
        request: &TransferRequest,
        workspace: &Workspace,
    ) -> Result<TransferOutcome, SendError> {
        let status = self.transport.send_status(messages::DOWNLOADING).await?;
        tracing::info!("Fetching {}", request.link);

        // The budget goes to the fetcher instead of a timeout wrapper
        // here: dropping the fetch future would leave engine tasks
        // writing into the workspace while cleanup removes it.
        let fetched = match self
            .fetcher
            .fetch(&request.link, workspace.dir(), self.config.fetch_timeout)
            .await
        {
            Ok(files) => files,
            Err(err) => {
                tracing::error!("Download error: {}", err);
                self.transport
                    .edit_status(status, &format!("❌ Failed to download: {}", err))
                    .await?;
                return Ok(TransferOutcome::DownloadFailed(err));
            }
        };

        if fetched.is_empty() {
            self.transport.edit_status(status, messages::NO_FILES).await?;
            return Ok(TransferOutcome::NoFilesProduced);
        }

        let split = classify(fetched, self.config.max_file_size);

        if !split.oversized.is_empty() {
            let listing = split
                .oversized
                .iter()
                .map(|f| format!("{} ({})", f.display_name(), format_size(f.size)))
                .collect::<Vec<_>>()
                .join("\n");
            self.transport
                .send_text(&format!("{}\n{}", messages::SKIPPED_HEADER, listing))
                .await?;
        }

        if split.eligible.is_empty() {
            self.transport
                .edit_status(
                    status,
                    &format!(
                        "❌ All files are too large to upload (max {}).",
                        format_size(self.config.max_file_size)
                    ),
                )
                .await?;
            return Ok(TransferOutcome::AllFilesOversized);
        }

        self.transport.edit_status(status, messages::UPLOADING).await?;

        let mut sent = 0usize;
        let mut failures: Vec<SendFailure> = Vec::new();
        for file in &split.eligible {
            match self.send(file).await {
                Ok(()) => sent += 1,
                Err(err) => {
                    tracing::error!("Upload error for {}: {}", file.path.display(), err);
                    if let Err(report_err) = self
                        .transport
                        .send_text(&format!("❌ Failed to upload {}: {}", file.display_name(), err))
                        .await
                    {
                        tracing::warn!("Could not report upload failure: {}", report_err);
                    }
                    failures.push(SendFailure { file: file.clone(), error: err });
                }
            }
        }

        if failures.is_empty() {
            self.transport.edit_status(status, messages::DONE).await?;
            Ok(TransferOutcome::Succeeded { sent })
        } else {
            self.transport
                .edit_status(
                    status,
                    &format!("⚠️ Done, but {} of {} uploads failed.", failures.len(), sent + failures.len()),
                )
                .await?;
            Ok(TransferOutcome::PartialFailure { sent, failures })
        }
    }

    async fn send(&self, file: &FetchedFile) -> Result<(), SendError> {
        match tokio::time::timeout(self.config.send_timeout, self.transport.send_file(&file.path)).await {
            Ok(result) => result,
            Err(_) => Err(SendError::Timeout(self.config.send_timeout)),
        }
    }
}
