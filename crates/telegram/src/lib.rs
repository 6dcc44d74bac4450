pub mod commands;
pub mod constants;
pub mod error;
pub mod mention;
pub mod telegram;
pub mod transport;
pub mod types;

pub use error::{BotError, BotResult};
pub use telegram::{schema, set_bot_commands};
pub use transport::ChatTransport;
pub use types::{BotConfig, Command, HandlerResult};
