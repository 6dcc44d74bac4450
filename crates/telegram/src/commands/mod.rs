//! Command handlers for the Telegram bot
//!
//! - `basic`: start, help and the non-command fallback
//! - `leech`: the download-and-upload flow

mod basic;
mod leech;

pub use basic::*;
pub use leech::*;
