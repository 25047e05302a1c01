use std::io::{self, BufRead};
use std::path::Path;

use folio::api::http::HttpBackend;
use folio::controller::Page;
use folio::{boot, config, driver, shell};

fn main() {
    env_logger::init();

    // Boot check: load and validate folio.toml
    let config = boot::run(Path::new(config::CONFIG_FILE));

    let base = match config.base_url() {
        Some(u) => u,
        None => {
            log::error!("No usable API base URL");
            std::process::exit(1);
        }
    };
    let backend = match HttpBackend::new(base, config.api.timeout_secs) {
        Ok(b) => b,
        Err(e) => {
            log::error!("Failed to initialize HTTP backend: {}", e);
            std::process::exit(1);
        }
    };

    let doc = shell::host_document(&config.ui.filters);
    let mut page = Page::new(doc, backend, config.ui.clone());
    page.start();

    println!("{}", page.document().to_html());

    // Each stdin line is a chat message or a /command.
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };
        for out in driver::run_line(&mut page, &line) {
            println!("{}", out);
        }
    }
}
