//! [`Transport`] implementation over the Telegram Bot API.

use std::path::Path;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, MessageId};
use transfer::{SendError, StatusHandle, Transport};

/// Sends everything to the chat the request came from.
#[derive(Clone)]
pub struct ChatTransport {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatTransport {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Transport for ChatTransport {
    async fn send_status(&self, text: &str) -> Result<StatusHandle, SendError> {
        let message = self
            .bot
            .send_message(self.chat_id, text)
            .await
            .map_err(SendError::rejected)?;
        Ok(StatusHandle(message.id.0))
    }

    async fn edit_status(&self, handle: StatusHandle, text: &str) -> Result<(), SendError> {
        self.bot
            .edit_message_text(self.chat_id, MessageId(handle.0), text)
            .await
            .map_err(SendError::rejected)?;
        Ok(())
    }

    async fn send_text(&self, text: &str) -> Result<(), SendError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(SendError::rejected)?;
        Ok(())
    }

    async fn send_file(&self, path: &Path) -> Result<(), SendError> {
        self.bot
            .send_document(self.chat_id, InputFile::file(path.to_path_buf()))
            .await
            .map_err(SendError::rejected)?;
        Ok(())
    }
}
