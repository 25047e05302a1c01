//! Project grid: filtered cards, or a placeholder when nothing matches.

use crate::dom::{Document, Element};
use crate::models::portfolio::Project;
use crate::state::Filter;

pub const GRID_ID: &str = "projectsGrid";

/// Shown for an empty project list and for a filter that matches nothing.
pub const EMPTY_MESSAGE: &str = "No projects found.";

/// Projects matching `filter`, original order preserved.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &Filter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(&p.category)).collect()
}

pub(crate) fn tag_list(labels: &[String]) -> Element {
    Element::new("div")
        .class("project-tags")
        .children(labels.iter().map(|l| Element::new("span").class("tag").text(l)))
}

fn build_card(project: &Project) -> Element {
    Element::new("div")
        .class("project-card")
        .attr("data-project-id", &project.id.to_string())
        .child(
            Element::new("img")
                .class("project-image")
                .attr("src", project.cover_image())
                .attr("alt", &project.title)
                .attr("loading", "lazy"),
        )
        .child(
            Element::new("div")
                .class("project-info")
                .child(Element::new("p").class("project-category").text(&project.category))
                .child(Element::new("h3").class("project-title").text(&project.title))
                .child(
                    Element::new("p")
                        .class("project-description")
                        .text(&project.description),
                )
                .child(tag_list(&project.tags)),
        )
}

fn placeholder() -> Element {
    Element::new("p").class("empty-state").text(EMPTY_MESSAGE)
}

/// Grid contents for `projects` under `filter`.
pub fn build_grid(projects: &[Project], filter: &Filter) -> Vec<Element> {
    let filtered = filter_projects(projects, filter);
    if filtered.is_empty() {
        return vec![placeholder()];
    }
    filtered.into_iter().map(build_card).collect()
}

/// Replace the grid's contents. Returns the number of cards rendered.
pub fn render_projects(doc: &mut Document, projects: &[Project], filter: &Filter) -> usize {
    let grid = match doc.get_mut(GRID_ID) {
        Some(g) => g,
        None => {
            log::error!("Projects grid element not found");
            return 0;
        }
    };

    let children = build_grid(projects, filter);
    let cards = children
        .iter()
        .filter(|c| c.has_class("project-card"))
        .count();
    grid.replace_children(children);

    log::debug!(
        "Rendered {} of {} project cards (filter: {})",
        cards,
        projects.len(),
        filter.token()
    );
    cards
}

/// Hide every grid image whose source is `src`.
pub fn hide_broken_image(doc: &mut Document, src: &str) {
    doc.for_each_tag_under_mut(GRID_ID, "img", |img| {
        if img.get_attr("src") == Some(src) {
            img.set_attr("style", "display:none");
        }
    });
}
