//! Chat widget: transcript, typing placeholder, request/reply against `/api/chat`.
//!
//! `submit` blocks on the request while holding the document mutably, so a
//! second submission cannot start until the first has been answered. There
//! is at most one typing placeholder in the transcript at any time. The
//! widget keeps no state of its own: open/closed is the window's `active` class.

use crate::api::Backend;
use crate::dom::{Document, Element};
use crate::models::chat::Author;

pub const WINDOW_ID: &str = "chatbotWindow";
pub const INPUT_ID: &str = "chatbotInput";
pub const MESSAGES_ID: &str = "chatbotMessages";
pub const TYPING_ID: &str = "typing-indicator";

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

fn message_entry(author: Author, text: &str) -> Element {
    Element::new("div")
        .class("message")
        .class(&format!("{}-message", author.css()))
        .child(Element::new("div").class("message-avatar").text(author.avatar()))
        .child(
            Element::new("div")
                .class("message-content")
                .child(Element::new("p").text(text)),
        )
}

fn typing_entry() -> Element {
    Element::new("div")
        .with_id(TYPING_ID)
        .class("message")
        .class("ai-message")
        .child(
            Element::new("div")
                .class("message-avatar")
                .text(Author::Assistant.avatar()),
        )
        .child(
            Element::new("div")
                .class("typing-indicator")
                .children((0..3).map(|_| Element::new("span"))),
        )
}

pub fn is_open(doc: &Document) -> bool {
    doc.get(WINDOW_ID).map(|w| w.has_class("active")).unwrap_or(false)
}

pub fn toggle(doc: &mut Document) {
    if let Some(window) = doc.target_mut(WINDOW_ID) {
        window.toggle_class("active");
    }
}

pub fn close(doc: &mut Document) {
    if let Some(window) = doc.target_mut(WINDOW_ID) {
        window.remove_class("active");
    }
}

pub fn set_input(doc: &mut Document, text: &str) {
    if let Some(input) = doc.target_mut(INPUT_ID) {
        input.set_attr("value", text);
    }
}

/// Send the input's contents. Whitespace-only input does nothing.
/// Returns whether a request was made.
pub fn submit(doc: &mut Document, backend: &dyn Backend) -> bool {
    let message = match take_input(doc) {
        Some(m) => m,
        None => return false,
    };

    append(doc, message_entry(Author::User, &message));
    append(doc, typing_entry());

    let reply = match backend.send_chat(&message) {
        Ok(reply) => reply.response,
        Err(e) => {
            log::error!("Chat error: {}", e);
            FALLBACK_REPLY.to_string()
        }
    };

    if let Some(messages) = doc.get_mut(MESSAGES_ID) {
        messages.remove_child_by_id(TYPING_ID);
    }
    append(doc, message_entry(Author::Assistant, &reply));
    true
}

/// Trimmed input, clearing the field. `None` for empty or whitespace-only input.
fn take_input(doc: &mut Document) -> Option<String> {
    let input = doc.target_mut(INPUT_ID)?;
    let message = input.get_attr("value").unwrap_or("").trim().to_string();
    if message.is_empty() {
        return None;
    }
    input.set_attr("value", "");
    Some(message)
}

fn append(doc: &mut Document, entry: Element) {
    if let Some(messages) = doc.target_mut(MESSAGES_ID) {
        messages.append(entry);
        messages.scroll_to_end();
    }
}

/// Text of every transcript entry with its author, oldest first. Skips the typing placeholder.
pub fn transcript(doc: &Document) -> Vec<(Author, String)> {
    let messages = match doc.get(MESSAGES_ID) {
        Some(m) => m,
        None => return Vec::new(),
    };
    messages
        .children
        .iter()
        .filter(|e| e.id.as_deref() != Some(TYPING_ID))
        .map(|e| {
            let author = if e.has_class("user-message") {
                Author::User
            } else {
                Author::Assistant
            };
            let text = e
                .children
                .get(1)
                .map(|c| c.text_content())
                .unwrap_or_default();
            (author, text)
        })
        .collect()
}
