//! Project detail overlay.

use super::grid::tag_list;
use crate::dom::{Document, Element};
use crate::models::portfolio::Project;

pub const MODAL_ID: &str = "projectModal";
pub const MODAL_BODY_ID: &str = "modalBody";
const VISIBLE: &str = "active";

/// First project with `id`. Ids are unique, so this is the only match.
pub fn find_project(projects: &[Project], id: i64) -> Option<&Project> {
    projects.iter().find(|p| p.id == id)
}

fn section(heading: &str, body: Element) -> Element {
    Element::new("div")
        .class("modal-section")
        .child(Element::new("h4").text(heading))
        .child(body)
}

fn build_body(project: &Project) -> Vec<Element> {
    vec![
        Element::new("h2").text(&project.title),
        Element::new("p")
            .class("project-category")
            .text(&format!("{} • {}", project.category, project.year)),
        Element::new("p")
            .class("project-description")
            .text(&project.description),
        Element::new("div").class("modal-images").children(
            project
                .images
                .iter()
                .map(|src| Element::new("img").attr("src", src).attr("alt", &project.title)),
        ),
        section("Client:", Element::new("p").text(&project.client)),
        section("Tools Used:", tag_list(&project.tools)),
    ]
}

/// Fill the modal with project `id` and show it.
/// An unknown id leaves the document untouched and returns false.
pub fn open_project(doc: &mut Document, projects: &[Project], id: i64) -> bool {
    let project = match find_project(projects, id) {
        Some(p) => p,
        None => return false,
    };

    if let Some(body) = doc.target_mut(MODAL_BODY_ID) {
        body.replace_children(build_body(project));
    }
    if let Some(modal) = doc.target_mut(MODAL_ID) {
        modal.add_class(VISIBLE);
    }
    true
}

/// Hide the modal. The body keeps its content until the next open.
pub fn close_modal(doc: &mut Document) {
    if let Some(modal) = doc.target_mut(MODAL_ID) {
        modal.remove_class(VISIBLE);
    }
}

pub fn is_open(doc: &Document) -> bool {
    doc.get(MODAL_ID).map(|m| m.has_class(VISIBLE)).unwrap_or(false)
}

/// Hide modal images whose source is `src`.
pub fn hide_broken_image(doc: &mut Document, src: &str) {
    doc.for_each_tag_under_mut(MODAL_BODY_ID, "img", |img| {
        if img.get_attr("src") == Some(src) {
            img.set_attr("style", "display:none");
        }
    });
}
