use crate::models::portfolio::Portfolio;

pub const ALL_TOKEN: &str = "all";

/// Active category filter for the project grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter button token; `"all"` is the sentinel.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            Filter::All
        } else {
            Filter::Category(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Filter::All => ALL_TOKEN,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

/// Everything the page knows. Owned by `Page`; only it writes.
#[derive(Debug, Default)]
pub struct AppState {
    portfolio: Option<Portfolio>,
    pub current_filter: Filter,
}

impl AppState {
    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    /// Store the loaded portfolio. Later calls are ignored; it is set once per session.
    pub fn set_portfolio(&mut self, portfolio: Portfolio) -> bool {
        if self.portfolio.is_some() {
            log::warn!("Portfolio already loaded, ignoring reload");
            return false;
        }
        self.portfolio = Some(portfolio);
        true
    }
}
