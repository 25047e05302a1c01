pub mod http;

use url::Url;

use crate::models::chat::ChatReply;
use crate::models::portfolio::Portfolio;

// ── Types ─────────────────────────────────────────────

#[derive(Debug)]
pub struct ApiError(pub String);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiError {}

/// The two endpoints the page talks to.
pub trait Backend {
    /// `GET /api/portfolio` with a cache-busting timestamp.
    fn fetch_portfolio(&self) -> Result<Portfolio, ApiError>;

    /// `POST /api/chat` with `{ message }`.
    fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError>;
}

// ── URLs ──────────────────────────────────────────────

pub const PORTFOLIO_PATH: &str = "/api/portfolio";
pub const CHAT_PATH: &str = "/api/chat";

/// `{base}/api/portfolio?t=<unix_ms>`
pub fn portfolio_url(base: &Url, unix_ms: i64) -> Result<Url, ApiError> {
    let mut url = base
        .join(PORTFOLIO_PATH)
        .map_err(|e| ApiError(format!("Bad portfolio URL: {}", e)))?;
    url.query_pairs_mut().append_pair("t", &unix_ms.to_string());
    Ok(url)
}

pub fn chat_url(base: &Url) -> Result<Url, ApiError> {
    base.join(CHAT_PATH)
        .map_err(|e| ApiError(format!("Bad chat URL: {}", e)))
}

/// Parse a portfolio response body, whatever the HTTP status was.
pub fn parse_portfolio(body: &str) -> Result<Portfolio, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError(format!("Portfolio JSON parse error: {}", e)))
}
