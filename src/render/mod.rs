pub mod grid;
pub mod modal;
pub mod sections;

use crate::dom::Document;
use crate::models::portfolio::Portfolio;
use crate::state::Filter;

/// Initial full render after load: designer sections, then the project grid.
/// A document without a project list renders nothing; returns whether it rendered.
pub fn render_portfolio(doc: &mut Document, portfolio: &Portfolio, filter: &Filter) -> bool {
    let projects = match portfolio.projects {
        Some(ref p) => p,
        None => {
            log::error!("No projects array found, skipping render");
            return false;
        }
    };
    log::info!("Rendering portfolio with {} projects", projects.len());
    sections::render_sections(doc, &portfolio.designer);
    grid::render_projects(doc, projects, filter);
    true
}
