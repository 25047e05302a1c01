use crate::api::Backend;
use crate::models::portfolio::Portfolio;

/// Fetch the portfolio once. Failures are logged and yield `None`; no retry.
pub fn load_portfolio(backend: &dyn Backend) -> Option<Portfolio> {
    match backend.fetch_portfolio() {
        Ok(portfolio) => {
            match portfolio.projects {
                Some(ref projects) => log::info!(
                    "Loaded portfolio for '{}' with {} projects",
                    portfolio.designer.name,
                    projects.len()
                ),
                None => log::error!("Loaded portfolio has no projects array"),
            }
            Some(portfolio)
        }
        Err(e) => {
            log::error!("Error loading portfolio: {}", e);
            None
        }
    }
}
