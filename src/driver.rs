//! Line-oriented driver for the headless page.
//! Plain text is a chat message; lines starting with `/` are page commands.

use crate::api::Backend;
use crate::chat;
use crate::controller::{Page, UiEvent};
use crate::dom::Document;
use crate::models::chat::Author;
use crate::render::modal;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Events(Vec<UiEvent>),
    Html,
    Status,
    Help,
}

pub const HELP: &str = "\
text                 send a chat message
/menu                toggle the mobile menu
/nav                 click a nav link (collapses the menu)
/scroll <y>          scroll the window to <y>
/filter <token>      click the filter button for <token>
/goto <href>         click an anchor, e.g. /goto #about
/open <id>           click the card for project <id>
/close               close the project modal
/backdrop            click the modal backdrop
/image-ok <src>      report an image as loaded
/image-broken <src>  report an image as failed
/chat                toggle the chat window
/chat-close          close the chat window
/key <key>           press a key in the chat input
/html                print the document
/status              print filter, modal and chat state
/help                this text";

fn arg<'a>(rest: &'a str, cmd: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("/{} needs an argument", cmd))
    } else {
        Ok(rest)
    }
}

/// Index of the filter button carrying `token`, in document order.
fn filter_index(doc: &Document, token: &str) -> Result<usize, String> {
    doc.by_class("filter-btn")
        .iter()
        .position(|b| b.get_attr("data-filter") == Some(token))
        .ok_or_else(|| format!("No filter button for '{}'", token))
}

/// Parse one input line against the current document.
/// Blank lines parse to no events.
pub fn parse_line(line: &str, doc: &Document) -> Result<Command, String> {
    let line = line.trim();
    let body = match line.strip_prefix('/') {
        Some(b) => b,
        None => {
            if line.is_empty() {
                return Ok(Command::Events(Vec::new()));
            }
            return Ok(Command::Events(vec![
                UiEvent::ChatInput(line.to_string()),
                UiEvent::ChatSend,
            ]));
        }
    };

    let (cmd, rest) = match body.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (body, ""),
    };

    let event = match cmd {
        "menu" => UiEvent::MenuToggle,
        "nav" => UiEvent::NavLinkClick,
        "scroll" => {
            let y = arg(rest, cmd)?
                .parse::<f64>()
                .map_err(|e| format!("Bad scroll offset '{}': {}", rest, e))?;
            UiEvent::Scroll(y)
        }
        "filter" => UiEvent::FilterClick(filter_index(doc, arg(rest, cmd)?)?),
        "goto" => UiEvent::AnchorClick(arg(rest, cmd)?.to_string()),
        "open" => {
            let id = arg(rest, cmd)?
                .parse::<i64>()
                .map_err(|e| format!("Bad project id '{}': {}", rest, e))?;
            UiEvent::CardClick(id)
        }
        "close" => UiEvent::ModalClose,
        "backdrop" => UiEvent::ModalClick {
            target_id: Some(modal::MODAL_ID.to_string()),
        },
        "image-ok" => UiEvent::ImageLoaded(arg(rest, cmd)?.to_string()),
        "image-broken" => UiEvent::ImageFailed(arg(rest, cmd)?.to_string()),
        "chat" => UiEvent::ChatToggle,
        "chat-close" => UiEvent::ChatClose,
        "key" => UiEvent::ChatKey(arg(rest, cmd)?.to_string()),
        "html" => return Ok(Command::Html),
        "status" => return Ok(Command::Status),
        "help" => return Ok(Command::Help),
        _ => return Err(format!("Unknown command '/{}' (try /help)", cmd)),
    };
    Ok(Command::Events(vec![event]))
}

/// One-line summary of the interactive state.
pub fn status<B: Backend>(page: &Page<B>) -> String {
    let doc = page.document();
    format!(
        "loaded={} filter={} modal={} chat={} scroll_target={}",
        page.state().portfolio().is_some(),
        page.state().current_filter.token(),
        if modal::is_open(doc) { "open" } else { "closed" },
        if chat::is_open(doc) { "open" } else { "closed" },
        doc.smooth_scroll_target.as_deref().unwrap_or("-"),
    )
}

/// Run one line against the page and return what should be printed.
pub fn run_line<B: Backend>(page: &mut Page<B>, line: &str) -> Vec<String> {
    let command = match parse_line(line, page.document()) {
        Ok(c) => c,
        Err(e) => return vec![e],
    };

    match command {
        Command::Html => vec![page.document().to_html()],
        Command::Status => vec![status(page)],
        Command::Help => vec![HELP.to_string()],
        Command::Events(events) => {
            let before = chat::transcript(page.document()).len();
            for event in events {
                page.dispatch(event);
            }
            chat::transcript(page.document())
                .into_iter()
                .skip(before)
                .filter(|(author, _)| *author == Author::Assistant)
                .map(|(_, text)| text)
                .collect()
        }
    }
}
