use std::time::Duration;
use url::Url;

use super::{chat_url, parse_portfolio, portfolio_url, ApiError, Backend};
use crate::models::chat::{ChatReply, ChatRequest};
use crate::models::portfolio::Portfolio;

/// Blocking HTTP backend for the portfolio site's API.
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base: Url, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError(format!("HTTP client error: {}", e)))?;
        Ok(HttpBackend { client, base })
    }
}

impl Backend for HttpBackend {
    fn fetch_portfolio(&self) -> Result<Portfolio, ApiError> {
        let url = portfolio_url(&self.base, chrono::Utc::now().timestamp_millis())?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError(format!("Portfolio request failed: {}", e)))?;

        // Error bodies that are still JSON objects load as a projectless portfolio.
        if !resp.status().is_success() {
            log::warn!("Portfolio returned {}", resp.status());
        }

        let text = resp
            .text()
            .map_err(|e| ApiError(format!("Portfolio read failed: {}", e)))?;
        parse_portfolio(&text)
    }

    fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
        };

        let resp = self
            .client
            .post(chat_url(&self.base)?)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| ApiError(format!("Chat request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(ApiError(format!("Chat returned {}: {}", status, text)));
        }

        resp.json::<ChatReply>()
            .map_err(|e| ApiError(format!("Chat JSON parse error: {}", e)))
    }
}
