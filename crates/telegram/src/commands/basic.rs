//! Basic bot commands (start, help) and the fallback handler

use crate::constants::emoji;
use crate::mention;
use crate::types::{Command, HandlerResult};
use teloxide::{prelude::*, types::Me, utils::command::BotCommands};

/// Welcome message when user starts the bot
pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    let welcome_text = format!(
        "{} Hello! Send /leech <magnet link or .torrent URL> and I'll \
         download the torrent and upload its files here.\n\n\
         Files over 2 GB are skipped (Telegram upload limit).",
        emoji::WAVE
    );

    bot.send_message(msg.chat.id, welcome_text).await?;
    Ok(())
}

/// Display help message with available commands
pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

/// Handle messages that match no command.
///
/// In groups the bot stays silent unless it is explicitly mentioned,
/// resolved through entity offsets rather than a substring scan.
pub async fn fallback(bot: Bot, msg: Message, me: Me) -> HandlerResult {
    if (msg.chat.is_group() || msg.chat.is_supergroup())
        && !mention::is_bot_mentioned(&msg, me.username())
    {
        return Ok(());
    }

    bot.send_message(
        msg.chat.id,
        "Unable to handle the message. Type /help to see the usage.",
    )
    .await?;
    Ok(())
}
