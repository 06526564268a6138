use serde::{Deserialize, Serialize};

use crate::error::{Result, TelegramError};

/// Text formatting mode understood by the Bot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    MarkdownV2,
}

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    /// Numeric chat id or `@channelusername`.
    pub chat_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    /// Deliver without sound or a visible alert.
    pub disable_notification: bool,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_notification: false,
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.disable_notification = silent;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// The subset of a sent message we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub date: i64,
    pub chat: Chat,
}

/// Envelope wrapped around every Bot API response, successful or not.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope. `http_status` is used when the API omits `error_code`.
    pub fn into_result(self, http_status: u16) -> Result<T> {
        if !self.ok {
            return Err(TelegramError::Api {
                status: self.error_code.unwrap_or(http_status),
                message: self
                    .description
                    .unwrap_or_else(|| "request rejected".to_string()),
            });
        }

        self.result
            .ok_or_else(|| TelegramError::InvalidResponse("ok response without result".to_string()))
    }
}
