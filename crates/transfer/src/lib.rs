//! Transfer lifecycle core
//!
//! This crate owns the end-to-end flow for one leech request:
//! download via a [`Fetcher`], partition the resulting files by the
//! upload size limit, send each eligible file through a [`Transport`],
//! and remove the per-request workspace on every exit path.
//!
//! It knows nothing about Telegram or any torrent engine; both sides
//! are trait seams so the controller can be driven by mocks in tests.

pub mod classify;
pub mod controller;
pub mod error;
pub mod traits;
pub mod types;
pub mod utils;
pub mod workspace;

pub use classify::FileClassification;
pub use controller::{TransferConfig, TransferController};
pub use error::{FetchError, SendError};
pub use traits::{Fetcher, Transport};
pub use types::{FetchedFile, SendFailure, StatusHandle, TransferOutcome, TransferRequest};
pub use workspace::Workspace;

/// Telegram Bot API upload limit: files strictly larger than this are skipped.
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024;
