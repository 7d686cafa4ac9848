//! Bot API client: posts one `sendMessage` request.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::alias::{AliasValue, Namespace};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::ResolvedInput;

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Wire form of a resolved message: bot token plus form fields.
pub struct SendRequest {
    token: AliasValue,
    fields: Vec<(&'static str, String)>,
}

impl SendRequest {
    pub fn new(config: &Config, input: &ResolvedInput) -> Result<Self> {
        let token = config
            .bot_token(input.bot().as_str())
            .ok_or_else(|| Error::unknown_alias(Namespace::Bot, input.bot().as_str()))?
            .clone();
        let chat_id = config
            .chat_id(input.chat().as_str())
            .ok_or_else(|| Error::unknown_alias(Namespace::Chat, input.chat().as_str()))?;

        let mut fields = vec![
            ("chat_id", chat_id.as_str().to_string()),
            ("text", input.text().to_string()),
        ];
        if input.silent() {
            fields.push(("disable_notification", "1".to_string()));
        }
        if let Some(mode) = input.format().parse_mode() {
            fields.push(("parse_mode", mode.to_string()));
        }

        Ok(Self { token, fields })
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Read the `ok` flag of a Bot API reply. The key matches case-insensitively,
/// an exact `ok` winning; a missing or non-boolean flag counts as failure.
fn reply_ok(body: &str) -> Result<bool> {
    let reply: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| Error::Dispatch(format!("unexpected response ({}): {}", e, body)))?;

    let flag = reply
        .get("ok")
        .or_else(|| {
            reply
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("ok"))
                .map(|(_, value)| value)
        })
        .and_then(Value::as_bool);

    Ok(flag.unwrap_or(false))
}

/// Telegram Bot API client.
#[derive(Debug, Clone)]
pub struct TelegramSender {
    http: Client,
    base_url: String,
}

impl Default for TelegramSender {
    fn default() -> Self {
        Self::new()
    }
}

impl TelegramSender {
    pub fn new() -> Self {
        Self::with_url(TELEGRAM_API_URL)
    }

    /// Create a sender talking to a different API host.
    pub fn with_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Post the message. Succeeds only when the API answers `ok: true`.
    pub async fn send(&self, request: &SendRequest) -> Result<()> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url,
            request.token.as_str()
        );
        debug!(
            silent = request.field("disable_notification").is_some(),
            parse_mode = request.field("parse_mode").unwrap_or("none"),
            "Posting sendMessage"
        );

        // reqwest errors carry the URL, and the URL carries the token.
        let response = self
            .http
            .post(url)
            .form(&request.fields)
            .send()
            .await
            .map_err(|e| Error::Dispatch(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Dispatch(e.without_url().to_string()))?;
        debug!(%status, "Bot API replied");

        if !reply_ok(&body)? {
            return Err(Error::Dispatch(body));
        }

        Ok(())
    }
}
