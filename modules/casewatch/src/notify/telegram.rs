use async_trait::async_trait;
use telegram_client::{ParseMode, SendMessage, TelegramClient};
use tracing::info;

use super::backend::NotifyBackend;
use crate::error::Result;
use crate::message::OutboundMessage;

/// Posts updates to a Telegram channel as MarkdownV2.
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }

    fn request(&self, message: &OutboundMessage) -> SendMessage {
        SendMessage::new(self.chat_id.clone(), message.text.clone())
            .parse_mode(ParseMode::MarkdownV2)
            .silent(message.silent)
    }
}

#[async_trait]
impl NotifyBackend for TelegramNotifier {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let sent = self.client.send_message(&self.request(message)).await?;
        info!(
            chat_id = self.chat_id.as_str(),
            message_id = sent.message_id,
            silent = message.silent,
            "Update posted"
        );
        Ok(())
    }
}
