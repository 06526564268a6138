use async_trait::async_trait;

use crate::error::Result;
use crate::message::OutboundMessage;

/// Pluggable delivery channel for update messages.
#[async_trait]
pub trait NotifyBackend: Send + Sync {
    /// Deliver one message. Failures are reported, never retried.
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}
