#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::api::{parse_portfolio, ApiError, Backend};
use crate::chat::{self, FALLBACK_REPLY, TYPING_ID};
use crate::config::UiConfig;
use crate::controller::{Page, UiEvent};
use crate::driver;
use crate::models::chat::{Author, ChatReply};
use crate::models::portfolio::Portfolio;
use crate::render::grid::{EMPTY_MESSAGE, GRID_ID};
use crate::shell::host_document;
use crate::state::Filter;

/// In-process backend: serves a fixed portfolio payload and scripted chat replies.
struct FakeBackend {
    portfolio: Option<String>,
    replies: RefCell<VecDeque<Result<ChatReply, ApiError>>>,
    sent: RefCell<Vec<String>>,
    fetches: Cell<usize>,
}

impl FakeBackend {
    fn serving(json: &str) -> Self {
        FakeBackend {
            portfolio: Some(json.to_string()),
            replies: RefCell::new(VecDeque::new()),
            sent: RefCell::new(Vec::new()),
            fetches: Cell::new(0),
        }
    }

    fn offline() -> Self {
        FakeBackend {
            portfolio: None,
            ..FakeBackend::serving("")
        }
    }

    fn reply(self, text: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ChatReply {
            response: text.to_string(),
        }));
        self
    }

    fn fail(self, why: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(ApiError(why.to_string())));
        self
    }
}

impl Backend for FakeBackend {
    fn fetch_portfolio(&self) -> Result<Portfolio, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        let body = self
            .portfolio
            .as_ref()
            .ok_or_else(|| ApiError("Portfolio request failed: connection refused".into()))?;
        parse_portfolio(body)
    }

    fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.sent.borrow_mut().push(message.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError("Chat JSON parse error: expected value".into())))
    }
}

const JANE: &str = r#"{
    "designer": {
        "name": "Jane Doe",
        "title": "Graphic Designer",
        "bio": "I make brands.",
        "experience": "5+",
        "email": "jane@example.com",
        "behance": "https://behance.net/janedoe",
        "location": "Karachi",
        "availability": "Available for freelance",
        "skills": ["Branding", "Print"]
    },
    "projects": [
        {
            "id": 1,
            "title": "Bakery Identity",
            "category": "branding",
            "description": "Logo and packaging.",
            "year": 2024,
            "client": "Crumbs",
            "images": ["a.jpg"],
            "tags": [],
            "tools": []
        }
    ]
}"#;

const MIXED: &str = r#"{
    "designer": {"name": "Jane Doe"},
    "projects": [
        {"id": 1, "title": "One", "category": "branding", "images": ["1.jpg"]},
        {"id": 2, "title": "Two", "category": "print", "images": ["2.jpg", "2b.jpg"]},
        {"id": 3, "title": "Three", "category": "branding", "images": ["3.jpg"]}
    ]
}"#;

fn filters() -> Vec<String> {
    ["all", "branding", "print", "digital"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn page(backend: FakeBackend) -> Page<FakeBackend> {
    let ui = UiConfig {
        filters: filters(),
        ..UiConfig::default()
    };
    Page::new(host_document(&ui.filters), backend, ui)
}

fn started(backend: FakeBackend) -> Page<FakeBackend> {
    let mut p = page(backend);
    p.start();
    p
}

fn card_count(p: &Page<FakeBackend>) -> usize {
    p.document().by_class("project-card").len()
}

fn card_ids(p: &Page<FakeBackend>) -> Vec<String> {
    p.document()
        .by_class("project-card")
        .iter()
        .filter_map(|c| c.get_attr("data-project-id").map(|s| s.to_string()))
        .collect()
}

fn grid_text(p: &Page<FakeBackend>) -> String {
    p.document().get(GRID_ID).unwrap().text_content()
}

fn has_class(p: &Page<FakeBackend>, id: &str, class: &str) -> bool {
    p.document().get(id).unwrap().has_class(class)
}

// ═══════════════════════════════════════════════════════════
// Load + initial render
// ═══════════════════════════════════════════════════════════

#[test]
fn load_renders_hero_and_single_card() {
    let p = started(FakeBackend::serving(JANE));
    assert_eq!(p.document().get("heroTitle").unwrap().text, "Jane Doe");
    assert_eq!(card_count(&p), 1);
    assert_eq!(p.backend().fetches.get(), 1);
}

#[test]
fn load_hides_loader() {
    let p = started(FakeBackend::serving(JANE));
    assert!(has_class(&p, "loader", "hidden"));
}

#[test]
fn load_failure_leaves_sections_empty() {
    let p = started(FakeBackend::offline());
    assert!(p.state().portfolio().is_none());
    assert_eq!(p.document().get("heroTitle").unwrap().text, "");
    assert!(p.document().get(GRID_ID).unwrap().children.is_empty());
    assert!(has_class(&p, "loader", "hidden"));
}

#[test]
fn load_malformed_json_is_a_load_failure() {
    let p = started(FakeBackend::serving("<html>502 Bad Gateway</html>"));
    assert!(p.state().portfolio().is_none());
    assert_eq!(card_count(&p), 0);
}

#[test]
fn load_without_projects_array_skips_initial_render() {
    let p = started(FakeBackend::serving(r#"{"designer":{"name":"X"}}"#));
    assert!(p.state().portfolio().is_some());
    assert_eq!(p.document().get("heroTitle").unwrap().text, "");
    assert!(p.document().get(GRID_ID).unwrap().children.is_empty());
}

#[test]
fn projectless_document_shows_placeholder_on_filter() {
    let mut p = started(FakeBackend::serving(r#"{"designer":{"name":"X"}}"#));
    p.dispatch(UiEvent::FilterClick(1));
    assert_eq!(grid_text(&p), EMPTY_MESSAGE);
    p.dispatch(UiEvent::FilterClick(0));
    assert_eq!(grid_text(&p), EMPTY_MESSAGE);
}

#[test]
fn server_error_body_behaves_like_projectless_document() {
    let mut p = started(FakeBackend::serving(r#"{"detail":"Internal Server Error"}"#));
    assert!(p.state().portfolio().is_some());
    p.dispatch(UiEvent::FilterClick(2));
    assert_eq!(grid_text(&p), EMPTY_MESSAGE);

    let before = p.document().clone();
    p.dispatch(UiEvent::CardClick(1));
    assert_eq!(p.document(), &before);
}

#[test]
fn placeholder_identical_for_missing_list_and_empty_filter() {
    let mut missing = started(FakeBackend::serving(r#"{"designer":{}}"#));
    let mut filtered = started(FakeBackend::serving(MIXED));
    missing.dispatch(UiEvent::FilterClick(3));
    filtered.dispatch(UiEvent::FilterClick(3));
    assert_eq!(
        missing.document().get(GRID_ID),
        filtered.document().get(GRID_ID)
    );
}

#[test]
fn load_empty_project_list_shows_placeholder() {
    let p = started(FakeBackend::serving(r#"{"designer":{},"projects":[]}"#));
    assert_eq!(grid_text(&p), EMPTY_MESSAGE);
}

// ═══════════════════════════════════════════════════════════
// Filters
// ═══════════════════════════════════════════════════════════

#[test]
fn filter_branding_keeps_card_print_empties_grid() {
    let mut p = started(FakeBackend::serving(JANE));
    p.dispatch(UiEvent::FilterClick(1));
    assert_eq!(p.state().current_filter, Filter::from_token("branding"));
    assert_eq!(card_count(&p), 1);

    p.dispatch(UiEvent::FilterClick(2));
    assert_eq!(card_count(&p), 0);
    assert_eq!(grid_text(&p), EMPTY_MESSAGE);
}

#[test]
fn filter_preserves_load_order() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::FilterClick(1));
    assert_eq!(card_ids(&p), vec!["1", "3"]);
    p.dispatch(UiEvent::FilterClick(0));
    assert_eq!(card_ids(&p), vec!["1", "2", "3"]);
}

#[test]
fn filter_marks_sole_active_button() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::FilterClick(2));
    let active: Vec<bool> = p
        .document()
        .by_class("filter-btn")
        .iter()
        .map(|b| b.has_class("active"))
        .collect();
    assert_eq!(active, vec![false, false, true, false]);
}

#[test]
fn filter_before_load_only_updates_state() {
    let mut p = page(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::FilterClick(2));
    assert_eq!(p.state().current_filter, Filter::from_token("print"));
    assert!(p.document().get(GRID_ID).unwrap().children.is_empty());
}

#[test]
fn filter_out_of_range_is_ignored() {
    let mut p = started(FakeBackend::serving(MIXED));
    let before = p.document().clone();
    p.dispatch(UiEvent::FilterClick(17));
    assert_eq!(p.document(), &before);
    assert_eq!(p.state().current_filter, Filter::All);
}

#[test]
fn same_filter_twice_is_idempotent() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::FilterClick(1));
    let once = p.document().clone();
    p.dispatch(UiEvent::FilterClick(1));
    assert_eq!(p.document(), &once);
}

// ═══════════════════════════════════════════════════════════
// Modal
// ═══════════════════════════════════════════════════════════

#[test]
fn card_click_opens_modal() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::CardClick(2));
    assert!(has_class(&p, "projectModal", "active"));
    let body = p.document().get("modalBody").unwrap();
    assert_eq!(body.children[0].text, "Two");
    assert_eq!(p.document().by_class("modal-images")[0].children.len(), 2);
}

#[test]
fn card_click_unknown_id_is_noop() {
    let mut p = started(FakeBackend::serving(MIXED));
    let before = p.document().clone();
    p.dispatch(UiEvent::CardClick(404));
    assert_eq!(p.document(), &before);
}

#[test]
fn card_click_before_load_is_noop() {
    let mut p = started(FakeBackend::offline());
    p.dispatch(UiEvent::CardClick(1));
    assert!(!has_class(&p, "projectModal", "active"));
}

#[test]
fn modal_dismissal() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::CardClick(1));
    p.dispatch(UiEvent::ModalClick {
        target_id: Some("modalBody".into()),
    });
    assert!(has_class(&p, "projectModal", "active"));

    p.dispatch(UiEvent::ModalClick {
        target_id: Some("projectModal".into()),
    });
    assert!(!has_class(&p, "projectModal", "active"));

    p.dispatch(UiEvent::CardClick(3));
    p.dispatch(UiEvent::ModalClose);
    assert!(!has_class(&p, "projectModal", "active"));
    assert_eq!(p.document().get("modalBody").unwrap().children[0].text, "Three");
}

#[test]
fn broken_image_is_hidden_in_grid() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::ImageFailed("2.jpg".into()));
    let hidden: Vec<_> = p
        .document()
        .by_class("project-image")
        .iter()
        .map(|i| i.get_attr("style").is_some())
        .collect();
    assert_eq!(hidden, vec![false, true, false]);
}

#[test]
fn broken_image_is_hidden_in_modal() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::CardClick(2));
    p.dispatch(UiEvent::ImageFailed("2b.jpg".into()));
    let styles: Vec<Option<&str>> = p.document().by_class("modal-images")[0]
        .children
        .iter()
        .map(|i| i.get_attr("style"))
        .collect();
    assert_eq!(styles, vec![None, Some("display:none")]);
    assert!(p
        .document()
        .by_class("project-image")
        .iter()
        .all(|i| i.get_attr("style").is_none()));
}

#[test]
fn image_loaded_leaves_document_unchanged() {
    let mut p = started(FakeBackend::serving(MIXED));
    p.dispatch(UiEvent::CardClick(2));
    let before = p.document().clone();
    p.dispatch(UiEvent::ImageLoaded("2.jpg".into()));
    assert_eq!(p.document(), &before);
}

// ═══════════════════════════════════════════════════════════
// Navigation
// ═══════════════════════════════════════════════════════════

#[test]
fn menu_toggle_and_link_collapse() {
    let mut p = page(FakeBackend::offline());
    p.dispatch(UiEvent::MenuToggle);
    assert!(has_class(&p, "navMenu", "active"));
    p.dispatch(UiEvent::MenuToggle);
    assert!(!has_class(&p, "navMenu", "active"));
    p.dispatch(UiEvent::MenuToggle);
    p.dispatch(UiEvent::NavLinkClick);
    assert!(!has_class(&p, "navMenu", "active"));
}

#[test]
fn navbar_scrolled_threshold() {
    let mut p = page(FakeBackend::offline());
    p.dispatch(UiEvent::Scroll(50.0));
    assert!(!has_class(&p, "navbar", "scrolled"));
    p.dispatch(UiEvent::Scroll(50.5));
    assert!(has_class(&p, "navbar", "scrolled"));
    p.dispatch(UiEvent::Scroll(10.0));
    assert!(!has_class(&p, "navbar", "scrolled"));
}

#[test]
fn anchor_scrolls_smoothly_to_existing_target() {
    let mut p = page(FakeBackend::offline());
    assert!(p.dispatch(UiEvent::AnchorClick("#contact".into())));
    assert_eq!(
        p.document().smooth_scroll_target.as_deref(),
        Some("contact")
    );
}

#[test]
fn anchor_to_missing_target_does_nothing() {
    let mut p = page(FakeBackend::offline());
    assert!(p.dispatch(UiEvent::AnchorClick("#nowhere".into())));
    assert!(p.document().smooth_scroll_target.is_none());
}

#[test]
fn external_links_are_not_intercepted() {
    let mut p = page(FakeBackend::offline());
    assert!(!p.dispatch(UiEvent::AnchorClick("https://behance.net/x".into())));
    assert!(p.document().smooth_scroll_target.is_none());
}

// ═══════════════════════════════════════════════════════════
// Chat
// ═══════════════════════════════════════════════════════════

#[test]
fn chat_toggle_and_close() {
    let mut p = page(FakeBackend::offline());
    p.dispatch(UiEvent::ChatToggle);
    assert!(chat::is_open(p.document()));
    assert!(has_class(&p, "chatbotWindow", "active"));
    p.dispatch(UiEvent::ChatClose);
    assert!(!chat::is_open(p.document()));
    assert!(!has_class(&p, "chatbotWindow", "active"));
}

#[test]
fn chat_whitespace_is_noop() {
    let mut p = page(FakeBackend::offline().reply("unused"));
    p.dispatch(UiEvent::ChatInput("   \t ".into()));
    p.dispatch(UiEvent::ChatSend);
    assert!(chat::transcript(p.document()).is_empty());
    assert!(p.backend().sent.borrow().is_empty());
}

#[test]
fn chat_hello_gets_reply() {
    let mut p = page(FakeBackend::offline().reply("Hi!"));
    p.dispatch(UiEvent::ChatInput("  Hello ".into()));
    p.dispatch(UiEvent::ChatSend);

    assert_eq!(
        chat::transcript(p.document()),
        vec![
            (Author::User, "Hello".to_string()),
            (Author::Assistant, "Hi!".to_string())
        ]
    );
    assert_eq!(*p.backend().sent.borrow(), vec!["Hello".to_string()]);
    assert!(p.document().get(TYPING_ID).is_none());
    assert_eq!(
        p.document().get("chatbotInput").unwrap().get_attr("value"),
        Some("")
    );
}

#[test]
fn chat_enter_key_submits_other_keys_do_not() {
    let mut p = page(FakeBackend::offline().reply("Hi!"));
    p.dispatch(UiEvent::ChatInput("Hello".into()));
    p.dispatch(UiEvent::ChatKey("a".into()));
    assert!(p.backend().sent.borrow().is_empty());
    p.dispatch(UiEvent::ChatKey("Enter".into()));
    assert_eq!(p.backend().sent.borrow().len(), 1);
}

#[test]
fn chat_failure_shows_fallback_and_stays_usable() {
    let mut p = page(FakeBackend::offline().fail("Chat request failed: timeout").reply("Back!"));
    p.dispatch(UiEvent::ChatInput("first".into()));
    p.dispatch(UiEvent::ChatSend);
    p.dispatch(UiEvent::ChatInput("second".into()));
    p.dispatch(UiEvent::ChatSend);

    let t = chat::transcript(p.document());
    assert_eq!(t.len(), 4);
    assert_eq!(t[1], (Author::Assistant, FALLBACK_REPLY.to_string()));
    assert_eq!(t[3], (Author::Assistant, "Back!".to_string()));
    assert!(p.document().get(TYPING_ID).is_none());
}

#[test]
fn chat_scrolls_to_newest_entry() {
    let mut p = page(FakeBackend::offline().reply("one").reply("two"));
    for msg in ["a", "b"] {
        p.dispatch(UiEvent::ChatInput(msg.into()));
        p.dispatch(UiEvent::ChatSend);
    }
    let messages = p.document().get("chatbotMessages").unwrap();
    assert_eq!(messages.children.len(), 4);
    assert_eq!(messages.scroll_top, 3);
}

#[test]
fn chat_is_independent_of_portfolio_load() {
    let mut p = started(FakeBackend::offline().reply("still here"));
    p.dispatch(UiEvent::ChatInput("anyone?".into()));
    p.dispatch(UiEvent::ChatSend);
    assert_eq!(chat::transcript(p.document()).len(), 2);
}

// ═══════════════════════════════════════════════════════════
// Driver
// ═══════════════════════════════════════════════════════════

#[test]
fn driver_commands_reach_controller() {
    let mut p = started(FakeBackend::serving(MIXED).reply("Hi!"));
    assert!(driver::run_line(&mut p, "/filter print").is_empty());
    assert_eq!(card_ids(&p), vec!["2"]);

    driver::run_line(&mut p, "/open 3");
    driver::run_line(&mut p, "/chat");
    driver::run_line(&mut p, "/goto #about");
    assert_eq!(
        driver::run_line(&mut p, "/status"),
        vec!["loaded=true filter=print modal=open chat=open scroll_target=about".to_string()]
    );

    driver::run_line(&mut p, "/backdrop");
    assert!(!has_class(&p, "projectModal", "active"));
    driver::run_line(&mut p, "/scroll 80");
    assert!(has_class(&p, "navbar", "scrolled"));
}

#[test]
fn driver_plain_text_prints_reply() {
    let mut p = page(FakeBackend::offline().reply("Hi!"));
    assert_eq!(driver::run_line(&mut p, "Hello"), vec!["Hi!".to_string()]);
    assert!(driver::run_line(&mut p, "   ").is_empty());
    assert_eq!(p.backend().sent.borrow().len(), 1);
}

#[test]
fn driver_reports_bad_commands() {
    let mut p = page(FakeBackend::offline());
    let out = driver::run_line(&mut p, "/filter motion");
    assert_eq!(out.len(), 1);
    assert!(out[0].contains("motion"));
}

// ═══════════════════════════════════════════════════════════
// Serialization
// ═══════════════════════════════════════════════════════════

#[test]
fn rendered_html_escapes_payload_text() {
    let json = r#"{"designer":{"name":"<b>Jane</b>"},"projects":[]}"#;
    let p = started(FakeBackend::serving(json));
    let html = p.document().to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("&lt;b&gt;Jane&lt;/b&gt;"));
    assert!(!html.contains("<b>Jane</b>"));
}
