//! Static designer sections: hero, about, skills, contact.

use crate::dom::{Document, Element};
use crate::models::portfolio::Designer;

/// Marketing copy, not derived from the loaded project count.
pub const PROJECT_COUNT_TEXT: &str = "100+";
pub const CLIENT_COUNT_TEXT: &str = "50+";

fn set_text(doc: &mut Document, id: &str, text: &str) {
    if let Some(el) = doc.target_mut(id) {
        el.set_text(text);
    }
}

pub fn render_sections(doc: &mut Document, designer: &Designer) {
    set_text(doc, "heroTitle", &designer.name);
    set_text(doc, "heroSubtitle", &designer.title);

    set_text(doc, "aboutBio", &designer.bio);
    set_text(doc, "experienceYears", &designer.experience);
    set_text(doc, "projectCount", PROJECT_COUNT_TEXT);
    set_text(doc, "clientCount", CLIENT_COUNT_TEXT);

    if let Some(grid) = doc.target_mut("skillsGrid") {
        grid.replace_children(
            designer
                .skills
                .iter()
                .map(|skill| Element::new("div").class("skill-item").text(skill))
                .collect(),
        );
    }

    if let Some(email) = doc.target_mut("contactEmail") {
        email.set_attr("href", &format!("mailto:{}", designer.email));
        email.set_text(&designer.email);
    }
    if let Some(behance) = doc.target_mut("contactBehance") {
        behance.set_attr("href", &designer.behance);
    }
    set_text(doc, "contactLocation", &designer.location);
    set_text(
        doc,
        "availabilityStatus",
        &format!("✨ {}", designer.availability),
    );
}
