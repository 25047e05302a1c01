//! Minimal host document carrying every id and class the page wires up.

use crate::dom::{Document, Element};
use crate::state::ALL_TOKEN;

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Work"),
    ("contact", "Contact"),
];

fn nav() -> Element {
    Element::new("nav")
        .with_id("navbar")
        .class("navbar")
        .child(Element::new("button").with_id("menuToggle").class("menu-toggle"))
        .child(
            Element::new("ul").with_id("navMenu").class("nav-menu").children(
                NAV_SECTIONS.iter().map(|(id, label)| {
                    Element::new("li").child(
                        Element::new("a")
                            .class("nav-link")
                            .attr("href", &format!("#{}", id))
                            .text(label),
                    )
                }),
            ),
        )
}

fn filter_button(token: &str) -> Element {
    let label = if token == ALL_TOKEN { "All" } else { token };
    let mut btn = Element::new("button")
        .class("filter-btn")
        .attr("data-filter", token)
        .text(label);
    if token == ALL_TOKEN {
        btn.add_class("active");
    }
    btn
}

fn chatbot() -> Element {
    Element::new("div")
        .class("chatbot")
        .child(Element::new("button").with_id("chatbotToggle"))
        .child(
            Element::new("div")
                .with_id("chatbotWindow")
                .class("chatbot-window")
                .child(Element::new("button").with_id("chatbotClose"))
                .child(Element::new("div").with_id("chatbotMessages"))
                .child(Element::new("input").with_id("chatbotInput").attr("value", ""))
                .child(Element::new("button").with_id("chatbotSend")),
        )
}

/// Build the page skeleton with one filter button per token in `filters`.
pub fn host_document(filters: &[String]) -> Document {
    let body = Element::new("body")
        .child(Element::new("div").with_id("loader").class("loader"))
        .child(nav())
        .child(
            Element::new("section")
                .with_id("home")
                .child(Element::new("h1").with_id("heroTitle"))
                .child(Element::new("p").with_id("heroSubtitle")),
        )
        .child(
            Element::new("section")
                .with_id("about")
                .child(Element::new("p").with_id("aboutBio"))
                .child(Element::new("span").with_id("experienceYears"))
                .child(Element::new("span").with_id("projectCount"))
                .child(Element::new("span").with_id("clientCount"))
                .child(Element::new("div").with_id("skillsGrid")),
        )
        .child(
            Element::new("section")
                .with_id("projects")
                .child(
                    Element::new("div")
                        .class("filter-buttons")
                        .children(filters.iter().map(|f| filter_button(f))),
                )
                .child(Element::new("div").with_id("projectsGrid")),
        )
        .child(
            Element::new("section")
                .with_id("contact")
                .child(Element::new("a").with_id("contactEmail"))
                .child(Element::new("a").with_id("contactBehance"))
                .child(Element::new("span").with_id("contactLocation"))
                .child(Element::new("span").with_id("availabilityStatus")),
        )
        .child(
            Element::new("div")
                .with_id("projectModal")
                .class("modal")
                .child(
                    Element::new("div")
                        .class("modal-content")
                        .child(Element::new("span").with_id("modalClose"))
                        .child(Element::new("div").with_id("modalBody")),
                ),
        )
        .child(chatbot());

    Document::new(Element::new("html").child(body))
}
