use log::{info, warn};
use std::path::Path;

use crate::config::Config;
use crate::state::ALL_TOKEN;

/// Load the config and sanity-check it before the page starts.
/// Problems are logged and fall back to defaults; nothing here aborts.
pub fn run(config_path: &Path) -> Config {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;

    // ── 1. Config file ─────────────────────────────────
    if !config_path.exists() {
        warn!("  No {} found, using built-in defaults", config_path.display());
        warnings += 1;
    }
    let mut config = Config::load(config_path);

    // ── 2. API base URL ────────────────────────────────
    if url::Url::parse(&config.api.base_url).is_err() {
        warn!("  api.base_url '{}' is not a valid URL", config.api.base_url);
        warnings += 1;
    }
    if config.api.timeout_secs == 0 {
        warn!("  api.timeout_secs is 0, requests would never complete; using 30");
        config.api.timeout_secs = 30;
        warnings += 1;
    }

    // ── 3. UI settings ─────────────────────────────────
    if !config.ui.scroll_threshold.is_finite() || config.ui.scroll_threshold < 0.0 {
        warn!(
            "  ui.scroll_threshold {} is invalid; using 50",
            config.ui.scroll_threshold
        );
        config.ui.scroll_threshold = 50.0;
        warnings += 1;
    }
    if !config.ui.filters.iter().any(|f| f == ALL_TOKEN) {
        warn!("  ui.filters has no '{}' button; adding one", ALL_TOKEN);
        config.ui.filters.insert(0, ALL_TOKEN.to_string());
        warnings += 1;
    }

    info!(
        "Folio boot check finished: {} warning(s), API at {}",
        warnings,
        config.api.base_url
    );
    config
}
