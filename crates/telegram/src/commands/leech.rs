//! The /leech command: one full transfer lifecycle per invocation.

use crate::constants::{emoji, usage};
use crate::error::{BotError, UserMessage};
use crate::transport::ChatTransport;
use crate::types::{BotConfig, HandlerResult};
use teloxide::prelude::*;
use torrent::RqbitFetcher;
use transfer::{TransferController, TransferRequest, Workspace};

/// Download the torrent behind `link` and upload the resulting files
/// back into the requesting chat.
pub async fn leech(
    bot: Bot,
    msg: Message,
    link: String,
    fetcher: RqbitFetcher,
    config: BotConfig,
) -> HandlerResult {
    if link.is_empty() {
        bot.send_message(msg.chat.id, usage::LEECH).await?;
        return Ok(());
    }

    let workspace = match Workspace::create(&config.download_root) {
        Ok(ws) => ws,
        Err(err) => {
            let err = BotError::from(err);
            tracing::error!("{}", err);
            bot.send_message(msg.chat.id, err.user_message()).await?;
            return Ok(());
        }
    };

    let transport = ChatTransport::new(bot.clone(), msg.chat.id);
    let controller = TransferController::new(&fetcher, &transport, config.transfer.clone());
    let request = TransferRequest::new(link);

    match controller.run(&request, workspace).await {
        Ok(outcome) => {
            tracing::info!("Transfer finished: {:?}", outcome);
        }
        Err(err) => {
            // The transport broke mid-flow; the workspace is already
            // cleaned up. Tell the user something went wrong, best effort.
            tracing::error!("Unexpected error: {}", err);
            if let Err(report_err) = bot
                .send_message(msg.chat.id, format!("{} Unexpected error: {}", emoji::ERROR, err))
                .await
            {
                tracing::warn!("Could not report unexpected error: {}", report_err);
            }
        }
    }

    Ok(())
}
