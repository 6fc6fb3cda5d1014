pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;

/// A text message received from the messaging platform
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Chat the message came from
    pub chat_id: i64,
    /// Platform message id, used to thread replies
    pub message_id: i32,
    /// The message text
    pub text: String,
}

/// Outbound send primitives the dispatcher needs from a platform.
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Send `text` to `chat_id` as a plain message.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Send `text` to `chat_id` as a reply to `message_id`.
    async fn send_reply(&self, chat_id: i64, message_id: i32, text: &str) -> Result<()>;
}
