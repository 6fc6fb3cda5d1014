use anyhow::{Context, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId, ReplyParameters};
use tracing::{info, warn};

use crate::bot;
use crate::morning::MorningDetector;
use crate::platform::{IncomingMessage, Outbox};

/// [`Outbox`] backed by the Telegram Bot API
pub struct TelegramOutbox {
    bot: Bot,
}

impl TelegramOutbox {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Outbox for TelegramOutbox {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .context("Failed to send message")?;
        Ok(())
    }

    async fn send_reply(&self, chat_id: i64, message_id: i32, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(message_id)))
            .await
            .context("Failed to send reply")?;
        Ok(())
    }
}

/// Run the Telegram long-polling loop until shutdown
pub async fn run(bot: Bot, detector: &'static MorningDetector) -> Result<()> {
    info!("Starting Telegram platform...");

    let handler = Update::filter_message()
        .filter_map(|msg: Message| {
            let text = msg.text()?;
            Some(IncomingMessage {
                chat_id: msg.chat.id.0,
                message_id: msg.id.0,
                text: text.to_string(),
            })
        })
        .endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![detector])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("telegram"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(
    bot: Bot,
    incoming: IncomingMessage,
    detector: &'static MorningDetector,
) -> ResponseResult<()> {
    info!(
        "Telegram message in chat {}: {}",
        incoming.chat_id, incoming.text
    );

    let outbox = TelegramOutbox::new(bot);
    bot::handle(detector, &outbox, &incoming).await;

    Ok(())
}
