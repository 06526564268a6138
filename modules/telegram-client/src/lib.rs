pub mod error;
pub mod types;

pub use error::{Result, TelegramError};
pub use types::{ApiResponse, Chat, Message, ParseMode, SendMessage};

use std::fmt;
use std::time::Duration;

use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// `timeout` bounds each API call end to end.
    pub fn new(token: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.to_string(),
        })
    }

    /// Point the client at a different API host (local bot API server, test double).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.token)
    }

    /// Send a text message to a chat or channel.
    pub async fn send_message(&self, request: &SendMessage) -> Result<Message> {
        debug!(
            chat_id = request.chat_id.as_str(),
            silent = request.disable_notification,
            "Telegram sendMessage"
        );

        let resp = self
            .client
            .post(self.method_url("sendMessage"))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        // The API wraps errors in the same envelope, so decode before checking status.
        match serde_json::from_str::<ApiResponse<Message>>(&body) {
            Ok(envelope) => envelope.into_result(status.as_u16()),
            Err(_) if !status.is_success() => Err(TelegramError::Api {
                status: status.as_u16(),
                message: body,
            }),
            Err(e) => Err(TelegramError::InvalidResponse(e.to_string())),
        }
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_url_embeds_token() {
        let client = TelegramClient::new("123:abc", Duration::from_secs(5))
            .unwrap()
            .with_base_url("http://localhost:8081/");
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:8081/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn debug_output_hides_token() {
        let client = TelegramClient::new("123:secret", Duration::from_secs(5)).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("api.telegram.org"));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let client = TelegramClient::new("123:abc", Duration::from_secs(5))
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = client
            .send_message(&SendMessage::new("@news", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, TelegramError::Network(_)));
    }

    #[tokio::test]
    async fn silent_api_host_hits_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client = TelegramClient::new("123:abc", Duration::from_millis(200))
            .unwrap()
            .with_base_url(&format!("http://{addr}"));
        let started = std::time::Instant::now();
        let err = client
            .send_message(&SendMessage::new("@news", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, TelegramError::Network(_)));
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
