//! Torrent fetcher backed by librqbit
//!
//! This crate provides the [`transfer::Fetcher`] implementation: it
//! spins up an in-process librqbit session pointed at the request's
//! workspace directory, waits for the torrent to complete, and
//! enumerates the files it produced.

pub mod torrent;
pub mod utils;

pub use torrent::RqbitFetcher;
pub use utils::{extract_info_hash, is_supported_link};
