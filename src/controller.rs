//! Page controller: owns the document and app state, and routes user
//! events to the renderers and the chat widget.

use crate::api::Backend;
use crate::chat;
use crate::config::UiConfig;
use crate::dom::Document;
use crate::loader;
use crate::render::{self, grid, modal};
use crate::state::{AppState, Filter};

/// Everything a user (or the browser) can do to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MenuToggle,
    NavLinkClick,
    Scroll(f64),
    /// Index of the clicked `.filter-btn` in document order.
    FilterClick(usize),
    AnchorClick(String),
    CardClick(i64),
    ModalClose,
    /// Click inside the modal overlay; `target_id` is the element actually hit.
    ModalClick { target_id: Option<String> },
    ImageLoaded(String),
    ImageFailed(String),
    ChatToggle,
    ChatClose,
    ChatInput(String),
    ChatSend,
    ChatKey(String),
}

pub struct Page<B: Backend> {
    doc: Document,
    state: AppState,
    backend: B,
    ui: UiConfig,
}

impl<B: Backend> Page<B> {
    pub fn new(doc: Document, backend: B, ui: UiConfig) -> Self {
        Page {
            doc,
            state: AppState::default(),
            backend,
            ui,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Page-ready sequence: load once, render what loaded, hide the loader.
    /// A document without a project list is kept but not rendered.
    pub fn start(&mut self) {
        if let Some(portfolio) = loader::load_portfolio(&self.backend) {
            render::render_portfolio(&mut self.doc, &portfolio, &self.state.current_filter);
            self.state.set_portfolio(portfolio);
        }
        if let Some(el) = self.doc.target_mut("loader") {
            el.add_class("hidden");
        }
    }

    /// Handle one event. Returns true when the event's default action is suppressed
    /// (intercepted in-page anchors).
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        log::debug!("Event: {:?}", event);
        match event {
            UiEvent::MenuToggle => {
                if let Some(menu) = self.doc.target_mut("navMenu") {
                    menu.toggle_class("active");
                }
            }
            UiEvent::NavLinkClick => {
                if let Some(menu) = self.doc.target_mut("navMenu") {
                    menu.remove_class("active");
                }
            }
            UiEvent::Scroll(y) => self.on_scroll(y),
            UiEvent::FilterClick(index) => self.on_filter(index),
            UiEvent::AnchorClick(href) => return self.on_anchor(&href),
            UiEvent::CardClick(id) => {
                if let Some(portfolio) = self.state.portfolio() {
                    modal::open_project(&mut self.doc, portfolio.project_list(), id);
                }
            }
            UiEvent::ModalClose => modal::close_modal(&mut self.doc),
            UiEvent::ModalClick { target_id } => {
                if target_id.as_deref() == Some(modal::MODAL_ID) {
                    modal::close_modal(&mut self.doc);
                }
            }
            UiEvent::ImageLoaded(src) => log::debug!("Image loaded: {}", src),
            UiEvent::ImageFailed(src) => {
                log::error!("Image failed: {}", src);
                grid::hide_broken_image(&mut self.doc, &src);
                modal::hide_broken_image(&mut self.doc, &src);
            }
            UiEvent::ChatToggle => chat::toggle(&mut self.doc),
            UiEvent::ChatClose => chat::close(&mut self.doc),
            UiEvent::ChatInput(text) => chat::set_input(&mut self.doc, &text),
            UiEvent::ChatSend => {
                chat::submit(&mut self.doc, &self.backend);
            }
            UiEvent::ChatKey(key) => {
                if key == "Enter" {
                    chat::submit(&mut self.doc, &self.backend);
                }
            }
        }
        false
    }

    fn on_scroll(&mut self, y: f64) {
        let scrolled = y > self.ui.scroll_threshold;
        if let Some(navbar) = self.doc.target_mut("navbar") {
            navbar.set_class("scrolled", scrolled);
        }
    }

    fn on_filter(&mut self, index: usize) {
        let token = match self.doc.by_class("filter-btn").get(index) {
            Some(btn) => btn.get_attr("data-filter").unwrap_or("").to_string(),
            None => {
                log::warn!("No filter button at index {}", index);
                return;
            }
        };

        self.doc
            .for_each_class_mut("filter-btn", |i, btn| btn.set_class("active", i == index));
        self.state.current_filter = Filter::from_token(&token);

        // A loaded document without projects renders the empty-state placeholder.
        if let Some(portfolio) = self.state.portfolio() {
            grid::render_projects(
                &mut self.doc,
                portfolio.project_list(),
                &self.state.current_filter,
            );
        }
    }

    fn on_anchor(&mut self, href: &str) -> bool {
        let target = match href.strip_prefix('#') {
            Some(t) => t,
            None => return false,
        };
        if !target.is_empty() && self.doc.get(target).is_some() {
            self.doc.smooth_scroll_target = Some(target.to_string());
        }
        true
    }
}
