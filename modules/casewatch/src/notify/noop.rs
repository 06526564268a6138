use async_trait::async_trait;
use tracing::info;

use super::backend::NotifyBackend;
use crate::error::Result;
use crate::message::OutboundMessage;

/// Logs instead of sending. Used for dry runs.
pub struct NoopBackend;

#[async_trait]
impl NotifyBackend for NoopBackend {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        info!(silent = message.silent, text = %message.text, "Dry run, not sending");
        Ok(())
    }
}
